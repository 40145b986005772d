//! # Reporting Unit Tests / 报告单元测试
//!
//! Console notification lines, and the JSON and HTML renderings of a run.
//!
//! 控制台通知行，以及运行的 JSON 和 HTML 渲染。

use chrono::{Local, TimeZone, Utc};
use std::time::Duration;
use tree_runner::core::models::{Fault, Outcome, TestReport};
use tree_runner::core::notify::Notifier;
use tree_runner::core::runner::RunReport;
use tree_runner::core::summary::Counts;
use tree_runner::reporting::console::{ConsoleNotifier, status_label};
use tree_runner::reporting::html::render_html_report;
use tree_runner::reporting::json::{generate_json_report, render_json_report};

fn sample_run() -> RunReport {
    RunReport::from_reports(vec![
        TestReport::new("math/add", Outcome::Passed, Duration::from_millis(2)),
        TestReport::new(
            "math/div",
            Outcome::Failed("expected 2 but got 3".into()),
            Duration::from_millis(3),
        ),
        TestReport::new(
            "io/<read>",
            Outcome::Errored(Fault::new("boom")),
            Duration::from_millis(4),
        ),
    ])
}

fn console_text(console: ConsoleNotifier<Vec<u8>>) -> String {
    String::from_utf8(console.into_inner()).unwrap()
}

#[cfg(test)]
mod console_tests {
    use super::*;

    #[test]
    fn test_console_line_formats() {
        let mut console = ConsoleNotifier::new(Vec::new());
        console.before_run("a").unwrap();
        console.on_passed("a");
        console.on_failed("b", "x≠y");
        console.on_exception("c", &Fault::new("boom"));
        console.on_summary(&Counts {
            passed: 1,
            failed: 1,
            errored: 1,
        });

        assert_eq!(
            console_text(console),
            "a: Passed\nb: Failed: x≠y\nc: Exception: boom\n3 tests run: 1 passed, 1 failed, 1 errored\n"
        );
    }

    #[test]
    fn test_console_verbose_announces_tests() {
        let mut console = ConsoleNotifier::new(Vec::new()).with_verbose(true);
        console.before_run("slow").unwrap();
        console.on_passed("slow");
        assert_eq!(console_text(console), "slow: Running\nslow: Passed\n");
    }

    #[test]
    fn test_console_color_wraps_status() {
        colored::control::set_override(true);
        let mut console = ConsoleNotifier::new(Vec::new()).with_color(true);
        console.on_failed("b", "nope");
        let text = console_text(console);
        colored::control::unset_override();

        assert!(text.starts_with("b: "));
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with(": nope\n"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(&Outcome::Passed, "en"), "Passed");
        assert_eq!(status_label(&Outcome::Failed(String::new()), "en"), "Failed");
        assert_eq!(
            status_label(&Outcome::Errored(Fault::new("x")), "en"),
            "Exception"
        );
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_report_content() {
        let generated_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let json = render_json_report(&sample_run(), generated_at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generated_at"], "2025-01-01T00:00:00Z");
        assert_eq!(value["total"], 3);
        assert_eq!(value["exit_code"], 3);
        assert_eq!(value["summary"]["failed"], 1);

        let tests = value["tests"].as_array().unwrap();
        assert_eq!(tests.len(), 3);
        assert_eq!(tests[0]["status"], "passed");
        assert!(tests[0].get("message").is_none());
        assert_eq!(tests[1]["message"], "expected 2 but got 3");
        assert_eq!(tests[2]["status"], "errored");
        assert_eq!(tests[2]["message"], "boom");
    }

    #[test]
    fn test_json_report_written_to_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/run.json");
        generate_json_report(&sample_run(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"math/div\""));
    }
}

#[cfg(test)]
mod html_tests {
    use super::*;

    #[test]
    fn test_html_report_content() {
        let generated_at = Local.with_ymd_and_hms(2025, 1, 1, 12, 30, 0).unwrap();
        let html = render_html_report(&sample_run(), "en", generated_at).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Tree Runner Report</title>"));
        assert!(html.contains("Generated at 2025-01-01 12:30:00"));
        assert!(html.contains("Exit code: 3"));
        assert!(html.contains("status-cell status-Failed"));
        assert!(html.contains("expected 2 but got 3"));
        // Names are escaped.
        assert!(html.contains("io/&lt;read&gt;"));
    }

    #[test]
    fn test_html_report_for_empty_run() {
        let generated_at = Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let html = render_html_report(&RunReport::default(), "en", generated_at).into_string();
        assert!(html.contains("Exit code: 0"));
        assert!(!html.contains("status-cell status-"));
    }
}
