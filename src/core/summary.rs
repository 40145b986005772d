//! # Summary Module / 汇总模块
//!
//! Reduces the outcomes of a run to per-kind counts, renders the one-line
//! summary and maps the counts to a process exit status.
//!
//! 将一次运行的结果归约为按类别统计的数量，渲染单行摘要，并将数量映射为进程退出码。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::models::{Outcome, TestReport};

/// Exit-status bit set when at least one test failed.
pub const EXIT_FAILED: i32 = 0b01;
/// Exit-status bit set when at least one test errored.
pub const EXIT_ERRORED: i32 = 0b10;

/// Per-kind totals over every outcome of one run.
///
/// 一次运行中所有结果按类别的总数。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl Counts {
    /// Counts outcomes in a single pass. Order does not matter.
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        outcomes.into_iter().fold(Counts::default(), |mut counts, outcome| {
            match outcome {
                Outcome::Passed => counts.passed += 1,
                Outcome::Failed(_) => counts.failed += 1,
                Outcome::Errored(_) => counts.errored += 1,
            }
            counts
        })
    }

    /// Counts the outcomes of a set of reports.
    pub fn from_reports(reports: &[TestReport]) -> Self {
        Self::from_outcomes(reports.iter().map(|report| &report.outcome))
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }

    /// `true` when nothing failed and nothing errored, including empty runs.
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Maps the counts to a process exit status.
    ///
    /// Bit 0 is set if any test failed and bit 1 if any test errored, so a
    /// run of zero tests exits with 0.
    ///
    /// 将数量映射为进程退出码。
    /// 如有任何测试失败则设置第 0 位，如有任何测试出错则设置第 1 位，因此零个测试的运行以 0 退出。
    pub fn exit_code(&self) -> i32 {
        let mut code = 0;
        if self.failed > 0 {
            code |= EXIT_FAILED;
        }
        if self.errored > 0 {
            code |= EXIT_ERRORED;
        }
        code
    }
}

/// Renders the summary line, e.g. `3 tests run: 1 passed, 1 failed, 1 errored`.
impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tests run: {} passed, {} failed, {} errored",
            self.total(),
            self.passed,
            self.failed,
            self.errored
        )
    }
}

/// Aggregates a run's reports into counts.
pub fn aggregate(reports: &[TestReport]) -> Counts {
    Counts::from_reports(reports)
}

/// Maps aggregate counts to a process exit status.
pub fn exit_code(counts: &Counts) -> i32 {
    counts.exit_code()
}
