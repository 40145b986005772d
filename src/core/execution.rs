//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs flattened leaves and classifies what happened. A single
//! leaf is run by [`run_leaf`]; whole sequences are evaluated either one at a
//! time on the calling thread ([`evaluate_sequential`]) or on a bounded pool
//! of blocking workers ([`evaluate_parallel`]).
//!
//! Neither evaluator stops at the first failing or panicking test. Only a
//! harness fault, raised by the `before_run` hook, aborts evaluation.
//!
//! 此模块运行扁平化的叶子并对结果进行分类。单个叶子由 [`run_leaf`] 运行；
//! 整个序列可以在调用线程上逐个评估（[`evaluate_sequential`]），
//! 也可以在有界的阻塞工作线程池上评估（[`evaluate_parallel`]）。
//! 两种评估器都不会在第一个失败或 panic 的测试处停止。
//! 只有由 `before_run` 钩子引发的测试框架故障才会中止评估。

use anyhow::{Context, Result};
use futures::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::core::{
    flatten::Leaf,
    models::{Fault, Outcome, TestReport},
    notify::{Notifier, Serialized},
};

/// How a run evaluates its leaves.
///
/// 运行评估其叶子的方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    /// One leaf at a time, in tree order / 按树顺序逐个执行
    Sequential,
    /// Concurrently, on at most `jobs` workers / 并发执行，最多 `jobs` 个工作线程
    Parallel { jobs: usize },
}

impl ExecutionMode {
    /// Parallel mode sized to the host's available parallelism.
    pub fn parallel() -> Self {
        ExecutionMode::Parallel {
            jobs: default_jobs(),
        }
    }
}

/// The default worker count for parallel runs.
pub fn default_jobs() -> usize {
    num_cpus::get().max(1)
}

/// Runs one leaf and classifies its result.
///
/// `before_run` fires first; its errors and panics are not caught. The body
/// then runs under `catch_unwind`: a returned `Ok` is `Passed`, a returned
/// `Err` is `Failed`, and a panic is `Errored`. Exactly one of the matching
/// callbacks fires before the report is returned.
///
/// 运行一个叶子并对其结果进行分类。
/// 首先触发 `before_run`；其错误和 panic 不会被捕获。然后在 `catch_unwind` 下运行测试体：
/// 返回 `Ok` 为 `Passed`，返回 `Err` 为 `Failed`，panic 为 `Errored`。
/// 在返回报告之前，恰好触发一个对应的回调。
pub fn run_leaf<N>(leaf: &Leaf, notifier: &mut N) -> Result<TestReport>
where
    N: Notifier + ?Sized,
{
    notifier
        .before_run(&leaf.name)
        .with_context(|| format!("before_run hook failed for test '{}'", leaf.name))?;

    let start_time = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| (leaf.code)()));
    let duration = start_time.elapsed();

    let outcome = match result {
        Ok(Ok(())) => {
            notifier.on_passed(&leaf.name);
            Outcome::Passed
        }
        Ok(Err(message)) => {
            notifier.on_failed(&leaf.name, &message);
            Outcome::Failed(message)
        }
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            notifier.on_exception(&leaf.name, &fault);
            Outcome::Errored(fault)
        }
    };

    Ok(TestReport::new(leaf.name.clone(), outcome, duration))
}

/// Evaluates leaves one at a time, in order, on the calling thread.
pub fn evaluate_sequential<N>(leaves: &[Leaf], notifier: &mut N) -> Result<Vec<TestReport>>
where
    N: Notifier + ?Sized,
{
    leaves.iter().map(|leaf| run_leaf(leaf, notifier)).collect()
}

/// Evaluates leaves concurrently on at most `jobs` blocking workers.
///
/// Each leaf becomes one `spawn_blocking` task; the task stream is bounded
/// with `buffer_unordered`, so no more than `jobs` bodies run at once. The
/// returned reports are in completion order, not tree order. Every worker
/// owns a clone of the `Serialized` handle, which keeps notifications whole.
///
/// A harness fault from any worker is returned as soon as it is observed. A
/// panic in `before_run` is resumed on the calling task.
///
/// 在最多 `jobs` 个阻塞工作线程上并发评估叶子。
/// 每个叶子成为一个 `spawn_blocking` 任务；任务流由 `buffer_unordered` 限制，
/// 因此同时运行的测试体不超过 `jobs` 个。返回的报告按完成顺序排列，而不是树顺序。
pub async fn evaluate_parallel<N>(
    leaves: Vec<Leaf>,
    notifier: Serialized<N>,
    jobs: usize,
) -> Result<Vec<TestReport>>
where
    N: Notifier + Send + 'static,
{
    let total = leaves.len();
    let mut tasks = stream::iter(leaves.into_iter().map(|leaf| {
        let mut notifier = notifier.clone();
        tokio::task::spawn_blocking(move || run_leaf(&leaf, &mut notifier))
    }))
    .buffer_unordered(jobs.max(1));

    let mut reports = Vec::with_capacity(total);
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(report) => reports.push(report?),
            Err(e) if e.is_panic() => panic::resume_unwind(e.into_panic()),
            Err(e) => return Err(anyhow::Error::new(e).context("Test worker was cancelled")),
        }
    }

    Ok(reports)
}
