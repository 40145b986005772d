//! # Reporting Module / 报告模块
//!
//! This module handles the display and export of test results: the default
//! console notifier and summaries, and HTML and JSON report files.
//!
//! 此模块处理测试结果的显示和导出：默认的控制台通知器和摘要，以及 HTML 和 JSON 报告文件。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{ConsoleNotifier, print_problem_details, print_verdict};
pub use html::generate_html_report;
pub use json::generate_json_report;
