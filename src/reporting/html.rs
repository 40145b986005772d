//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a finished run as a standalone HTML page: summary
//! counters, the exit status and a table with one row per test, with the
//! failure message or fault text shown under each problem row.
//!
//! 此模块将一次完成的运行渲染为独立的 HTML 页面：汇总计数、退出码，
//! 以及每个测试一行的表格，问题行下方显示失败消息或故障文本。

use anyhow::Result;
use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::path::Path;

use crate::core::runner::RunReport;
use crate::infra::{fs::write_file, t};
use crate::reporting::console::status_label;

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 2em; color: #24292f; }
h1 { font-size: 1.6em; }
.meta { color: #57606a; margin-bottom: 1.5em; }
.summary-container { display: flex; gap: 1em; margin-bottom: 2em; }
.summary-item { border: 1px solid #d0d7de; border-radius: 6px; padding: 0.8em 1.4em; text-align: center; }
.summary-item .count { display: block; font-size: 1.8em; font-weight: bold; }
.summary-item .label { color: #57606a; }
.passed-text { color: #1a7f37; }
.failed-text { color: #cf222e; }
.errored-text { color: #8250df; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #d0d7de; padding: 0.5em; text-align: left; }
.duration-cell { text-align: right; white-space: nowrap; }
.status-cell { display: inline-block; padding: 0.1em 0.6em; border-radius: 1em; color: #fff; }
.status-Passed { background: #1a7f37; }
.status-Failed { background: #cf222e; }
.status-Errored { background: #8250df; }
.output-content { background: #f6f8fa; padding: 0.8em; margin: 0; white-space: pre-wrap; }
"#;

/// Renders the HTML report for a run.
///
/// # Arguments / 参数
/// * `run` - The finished run / 已完成的运行
/// * `locale` - The locale to use for labels / 标签使用的语言环境
/// * `generated_at` - Timestamp printed in the header / 页眉中打印的时间戳
pub fn render_html_report(run: &RunReport, locale: &str, generated_at: DateTime<Local>) -> Markup {
    let counts = &run.counts;
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                p.meta {
                    (t!("html_report.generated_at", locale = locale, time = generated_at.format("%Y-%m-%d %H:%M:%S")))
                    " · "
                    (t!("html_report.exit_code", locale = locale, code = run.exit_code()))
                }
                div.summary-container {
                    div.summary-item {
                        span.count { (counts.total()) }
                        span.label { (t!("html_report.summary.total", locale = locale)) }
                    }
                    div.summary-item {
                        span.count.passed-text { (counts.passed) }
                        span.label { (t!("html_report.summary.passed", locale = locale)) }
                    }
                    div.summary-item {
                        span.count.failed-text { (counts.failed) }
                        span.label { (t!("html_report.summary.failed", locale = locale)) }
                    }
                    div.summary-item {
                        span.count.errored-text { (counts.errored) }
                        span.label { (t!("html_report.summary.errored", locale = locale)) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { (t!("html_report.table.header.name", locale = locale)) }
                            th { (t!("html_report.table.header.status", locale = locale)) }
                            th.duration-cell { (t!("html_report.table.header.duration", locale = locale)) }
                        }
                    }
                    tbody {
                        @for report in &run.reports {
                            tr {
                                td { (report.name) }
                                td {
                                    div class=(format!("status-cell {}", report.outcome.status_class())) {
                                        (status_label(&report.outcome, locale))
                                    }
                                }
                                td.duration-cell { (format!("{:.3}s", report.duration.as_secs_f64())) }
                            }
                            @if let Some(detail) = report.outcome.detail() {
                                tr {
                                    td colspan="3" {
                                        pre.output-content { (detail) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Generates the HTML report for a run and writes it to `output_path`.
///
/// # Errors / 错误
/// Fails if the file or its parent directory cannot be written.
pub fn generate_html_report(run: &RunReport, output_path: &Path, locale: &str) -> Result<()> {
    let markup = render_html_report(run, locale, Local::now());
    write_file(output_path, markup.into_string())
}
