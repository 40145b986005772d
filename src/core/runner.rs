//! # Runner Module / 运行器模块
//!
//! Composes the pipeline: flatten the tree, evaluate the leaves, aggregate
//! the outcomes, report the summary and derive the exit status.
//!
//! 组合整个流水线：扁平化树、评估叶子、汇总结果、报告摘要并得出退出码。

use anyhow::Result;

use crate::core::{
    execution::{self, ExecutionMode},
    flatten::{Leaf, flatten},
    models::TestReport,
    notify::{Notifier, Serialized},
    summary::Counts,
    tree::TestTree,
};

/// Everything a finished run produced.
///
/// 一次完成的运行所产生的全部内容。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Per-leaf reports. Tree order for sequential runs, completion order for parallel ones.
    /// 每个叶子的报告。顺序运行按树顺序，并行运行按完成顺序。
    pub reports: Vec<TestReport>,
    /// Aggregate counts / 汇总数量
    pub counts: Counts,
}

impl RunReport {
    pub fn from_reports(reports: Vec<TestReport>) -> Self {
        let counts = Counts::from_reports(&reports);
        Self { reports, counts }
    }

    pub fn exit_code(&self) -> i32 {
        self.counts.exit_code()
    }

    /// The one-line summary of the run.
    pub fn summary_line(&self) -> String {
        self.counts.to_string()
    }

    /// Reports of tests that failed or errored, in report order.
    pub fn problems(&self) -> impl Iterator<Item = &TestReport> {
        self.reports.iter().filter(|report| !report.outcome.is_passed())
    }
}

/// Runs a tree sequentially and returns the report.
///
/// Notifications fire in tree order on the calling thread. The summary is
/// sent to `on_summary` before returning.
///
/// 顺序运行一棵树并返回报告。通知在调用线程上按树顺序触发。
pub fn run_tests<N>(tree: &TestTree, notifier: &mut N) -> Result<RunReport>
where
    N: Notifier + ?Sized,
{
    run_leaves(&flatten(tree), notifier)
}

/// Runs a tree in parallel on up to `jobs` workers (available parallelism
/// when `None`).
///
/// The notifier is wrapped in a [`Serialized`] guard so callbacks from
/// different workers never interleave. Pass a clone of an existing
/// `Serialized` handle to keep access to the notifier after the run.
///
/// 在最多 `jobs` 个工作线程上并行运行一棵树（为 `None` 时使用可用并行度）。
/// 通知器被包装在 [`Serialized`] 保护中，因此来自不同工作线程的回调永远不会交错。
pub async fn run_tests_parallel<N>(
    tree: &TestTree,
    notifier: N,
    jobs: Option<usize>,
) -> Result<RunReport>
where
    N: Notifier + Send + 'static,
{
    run_leaves_parallel(flatten(tree), notifier, jobs).await
}

/// Sequential evaluation of an already flattened (and possibly planned) leaf list.
pub fn run_leaves<N>(leaves: &[Leaf], notifier: &mut N) -> Result<RunReport>
where
    N: Notifier + ?Sized,
{
    let reports = execution::evaluate_sequential(leaves, notifier)?;
    Ok(finish(reports, notifier))
}

/// Parallel evaluation of an already flattened (and possibly planned) leaf list.
pub async fn run_leaves_parallel<N>(
    leaves: Vec<Leaf>,
    notifier: N,
    jobs: Option<usize>,
) -> Result<RunReport>
where
    N: Notifier + Send + 'static,
{
    let mut notifier = Serialized::new(notifier);
    let jobs = jobs.unwrap_or_else(execution::default_jobs);
    let reports = execution::evaluate_parallel(leaves, notifier.clone(), jobs).await?;
    Ok(finish(reports, &mut notifier))
}

/// Runs leaves in the given mode.
pub async fn run_leaves_with_mode<N>(
    leaves: Vec<Leaf>,
    mut notifier: N,
    mode: ExecutionMode,
) -> Result<RunReport>
where
    N: Notifier + Send + 'static,
{
    match mode {
        ExecutionMode::Sequential => run_leaves(&leaves, &mut notifier),
        ExecutionMode::Parallel { jobs } => run_leaves_parallel(leaves, notifier, Some(jobs)).await,
    }
}

fn finish<N>(reports: Vec<TestReport>, notifier: &mut N) -> RunReport
where
    N: Notifier + ?Sized,
{
    let run = RunReport::from_reports(reports);
    notifier.on_summary(&run.counts);
    run
}
