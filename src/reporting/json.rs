//! # JSON Reporting Module / JSON 报告模块
//!
//! Machine-readable report of a finished run, for CI systems and tooling.
//!
//! 已完成运行的机器可读报告，供 CI 系统和工具使用。

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::core::{models::Outcome, runner::RunReport, summary::Counts};
use crate::infra::fs::write_file;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a Counts,
    total: usize,
    exit_code: i32,
    tests: Vec<JsonTest<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonTest<'a> {
    name: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    duration_secs: f64,
}

fn status_key(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "passed",
        Outcome::Failed(_) => "failed",
        Outcome::Errored(_) => "errored",
    }
}

/// Renders the run as pretty-printed JSON.
///
/// ```json
/// {
///   "generated_at": "2025-01-01T00:00:00Z",
///   "summary": { "passed": 1, "failed": 1, "errored": 0 },
///   "total": 2,
///   "exit_code": 1,
///   "tests": [
///     { "name": "math/add", "status": "passed", "duration_secs": 0.0001 },
///     { "name": "math/div", "status": "failed", "message": "expected 2 but got 3", "duration_secs": 0.0002 }
///   ]
/// }
/// ```
pub fn render_json_report(run: &RunReport, generated_at: DateTime<Utc>) -> Result<String> {
    let report = JsonReport {
        generated_at,
        summary: &run.counts,
        total: run.counts.total(),
        exit_code: run.exit_code(),
        tests: run
            .reports
            .iter()
            .map(|report| JsonTest {
                name: &report.name,
                status: status_key(&report.outcome),
                message: report.outcome.detail(),
                duration_secs: report.duration.as_secs_f64(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
}

/// Writes the JSON report for a run to `output_path`.
pub fn generate_json_report(run: &RunReport, output_path: &Path) -> Result<()> {
    let json = render_json_report(run, Utc::now())?;
    write_file(output_path, json)
}
