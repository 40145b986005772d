//! # Tree Runner Library / Tree Runner 库
//!
//! This library provides a minimal test-execution engine. A suite is a
//! labeled tree of test cases; the engine flattens it into uniquely
//! addressable leaves, evaluates them sequentially or in parallel, classifies
//! every outcome as passed, failed or errored, and reduces the outcomes to a
//! summary line and a process exit status.
//!
//! 此库提供一个最小的测试执行引擎。套件是一棵带标签的测试用例树；
//! 引擎将其扁平化为可寻址的叶子，顺序或并行地评估它们，
//! 将每个结果分类为通过、失败或出错，并将结果归约为摘要行和进程退出码。
//!
//! ## Modules / 模块
//!
//! - `core` - Test tree model, flattening, evaluation, aggregation and suite files
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Console notifier, HTML and JSON reports
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 测试树模型、扁平化、评估、汇总和套件文件
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 控制台通知器、HTML 和 JSON 报告
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```
//! use tree_runner::core::check::{ensure_eq, fail};
//! use tree_runner::core::tree::{case, label, list};
//! use tree_runner::core::run_tests;
//! use tree_runner::reporting::ConsoleNotifier;
//!
//! let tree = label("Suite", list([
//!     label("adds", case(|| ensure_eq(4, 2 + 2))),
//!     label("fails", case(|| fail("x != y"))),
//! ]));
//!
//! let mut console = ConsoleNotifier::new(Vec::new());
//! let run = run_tests(&tree, &mut console).unwrap();
//! assert_eq!(run.exit_code(), 1);
//!
//! let output = String::from_utf8(console.into_inner()).unwrap();
//! assert_eq!(
//!     output,
//!     "Suite/adds: Passed\nSuite/fails: Failed: x != y\n2 tests run: 1 passed, 1 failed, 0 errored\n"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::{Counts, Outcome, RunReport, TestTree, run_tests, run_tests_parallel};

/// Exit status used when a run cannot complete: unreadable suite files,
/// invalid arguments or a harness fault.
pub const EXIT_RUN_ERROR: u8 = 4;

/// Detects the language to use for the user interface from the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
