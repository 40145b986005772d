//! # Console Reporting Module / 控制台报告模块
//!
//! This module provides the default notifier, which writes one line per test
//! event to an injected sink, and the console summaries printed around a run.
//!
//! 此模块提供默认通知器，它为每个测试事件向注入的输出写入一行，
//! 以及在运行前后打印的控制台摘要。

use anyhow::Result;
use colored::*;
use std::io::{self, Write};

use crate::core::{
    flatten::Leaf,
    models::{Fault, Outcome},
    notify::Notifier,
    runner::RunReport,
    summary::Counts,
};
use crate::infra::t;

/// Writes `"<name>: Passed"`, `"<name>: Failed: <message>"` and
/// `"<name>: Exception: <cause>"` lines, and the summary line, to a sink.
///
/// Every line is assembled first and handed to the sink in a single
/// `write_all`, so a notifier shared through `Serialized` never produces a
/// torn line. Write errors are ignored, as with `println!` on a closed pipe.
///
/// 向输出写入 `"<name>: Passed"`、`"<name>: Failed: <message>"` 和
/// `"<name>: Exception: <cause>"` 行以及摘要行。
/// 每一行都先组装好，再通过一次 `write_all` 交给输出，
/// 因此通过 `Serialized` 共享的通知器永远不会产生被撕裂的行。
#[derive(Debug)]
pub struct ConsoleNotifier<W> {
    out: W,
    color: bool,
    verbose: bool,
}

impl ConsoleNotifier<io::Stdout> {
    /// A notifier printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            verbose: false,
        }
    }

    /// Colors the status words.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Also prints `"<name>: Running"` before each test starts.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, mut line: String) {
        line.push('\n');
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn before_run(&mut self, name: &str) -> Result<()> {
        if self.verbose {
            let status = self.paint("Running", |s| s.blue());
            self.write_line(format!("{name}: {status}"));
        }
        Ok(())
    }

    fn on_passed(&mut self, name: &str) {
        let status = self.paint("Passed", |s| s.green());
        self.write_line(format!("{name}: {status}"));
    }

    fn on_failed(&mut self, name: &str, message: &str) {
        let status = self.paint("Failed", |s| s.red());
        self.write_line(format!("{name}: {status}: {message}"));
    }

    fn on_exception(&mut self, name: &str, cause: &Fault) {
        let status = self.paint("Exception", |s| s.red().bold());
        self.write_line(format!("{name}: {status}: {cause}"));
    }

    fn on_summary(&mut self, counts: &Counts) {
        let line = counts.to_string();
        let line = if !self.color {
            line
        } else if counts.all_passed() {
            line.green().bold().to_string()
        } else {
            line.red().bold().to_string()
        };
        self.write_line(line);
    }
}

/// Gets the localized status word for an outcome.
/// 获取结果的本地化状态词。
pub fn status_label(outcome: &Outcome, locale: &str) -> String {
    match outcome {
        Outcome::Passed => t!("report.status_passed", locale = locale).to_string(),
        Outcome::Failed(_) => t!("report.status_failed", locale = locale).to_string(),
        Outcome::Errored(_) => t!("report.status_errored", locale = locale).to_string(),
    }
}

/// Prints the qualified names of planned leaves, one per line.
pub fn print_leaf_list(leaves: &[Leaf], locale: &str) {
    println!(
        "{}",
        t!("list.header", locale = locale, count = leaves.len()).bold()
    );
    for leaf in leaves {
        println!("  - {}", leaf.name);
    }
}

/// Prints detailed information about every test that failed or errored.
/// Does nothing when the run was clean.
///
/// 打印每个失败或出错测试的详细信息。运行没有问题时不执行任何操作。
///
/// # Output Format / 输出格式
/// ```text
/// --- Failed and errored tests ---
/// [1/2] Failed 'math/division'
///     expected 2 but got 3
/// [2/2] Exception 'io/read'
///     called `Option::unwrap()` on a `None` value
/// ```
pub fn print_problem_details(run: &RunReport, locale: &str) {
    let problems: Vec<_> = run.problems().collect();
    if problems.is_empty() {
        return;
    }

    println!("\n{}", t!("problems_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, report) in problems.iter().enumerate() {
        let status = status_label(&report.outcome, locale);
        let status = match report.outcome {
            Outcome::Errored(_) => status.magenta(),
            _ => status.red(),
        };
        println!(
            "[{}/{}] {} '{}' ({:.2?})",
            i + 1,
            problems.len(),
            status,
            report.name.cyan(),
            report.duration
        );
        if let Some(detail) = report.outcome.detail() {
            for line in detail.lines() {
                println!("    {line}");
            }
        }
    }
    println!("{}", "-".repeat(80));
}

/// Prints the closing verdict of a run.
pub fn print_verdict(counts: &Counts, locale: &str) {
    if counts.all_passed() {
        println!("\n{}", t!("all_tests_passed", locale = locale).green().bold());
    } else {
        println!(
            "\n{}",
            t!(
                "run_had_problems",
                locale = locale,
                failed = counts.failed,
                errored = counts.errored,
                code = counts.exit_code()
            )
            .red()
            .bold()
        );
    }
}
