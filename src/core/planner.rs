//! # Test Execution Planner Module / 测试执行计划模块
//!
//! This module selects which flattened leaves a run evaluates: an optional
//! name filter, and round-robin distribution across several CI runners.
//! Selection keeps tree order and never renames or deduplicates leaves.
//!
//! 此模块选择一次运行要评估哪些扁平化叶子：可选的名称过滤，
//! 以及在多个 CI 运行器之间的轮询分配。选择保持树顺序，从不重命名或去重叶子。

use anyhow::{Result, bail};

use crate::core::flatten::Leaf;

/// Represents a complete execution plan for a flattened suite.
/// 表示扁平化套件的完整执行计划。
#[derive(Debug)]
pub struct ExecutionPlan {
    /// The leaves to evaluate, in tree order.
    /// 要评估的叶子，按树顺序排列。
    pub leaves: Vec<Leaf>,
    /// The number of leaves dropped by the name filter.
    /// 被名称过滤器丢弃的叶子数量。
    pub filtered_count: usize,
    /// Whether the leaves are distributed across multiple runners (CI environment).
    /// 叶子是否分布在多个运行器上（CI 环境）。
    pub is_distributed: bool,
}

/// Creates an execution plan for the given leaves.
///
/// # Arguments
/// * `leaves` - All leaves of the suite, in tree order
/// * `filter` - Optional substring a qualified name must contain
/// * `total_runners` - Optional total number of runners for distributed execution
/// * `runner_index` - Optional index of this runner (0-based)
///
/// # Errors
/// Fails if only one of `total_runners`/`runner_index` is given, if
/// `total_runners` is zero, or if the index is out of range.
pub fn plan_execution(
    leaves: Vec<Leaf>,
    filter: Option<&str>,
    total_runners: Option<usize>,
    runner_index: Option<usize>,
) -> Result<ExecutionPlan> {
    let (selected, filtered): (Vec<_>, Vec<_>) = leaves
        .into_iter()
        .partition(|leaf| filter.is_none_or(|pattern| leaf.name.contains(pattern)));

    let (leaves, is_distributed) = match (total_runners, runner_index) {
        (Some(total), Some(index)) => {
            if total == 0 {
                bail!("Total runners must be at least 1.");
            }
            if index >= total {
                bail!("Runner index must be less than total runners.");
            }
            let distributed: Vec<_> = selected
                .into_iter()
                .enumerate()
                .filter(|(i, _)| i % total == index)
                .map(|(_, leaf)| leaf)
                .collect();
            (distributed, true)
        }
        (None, None) => (selected, false),
        _ => bail!("Both --total-runners and --runner-index must be provided."),
    };

    Ok(ExecutionPlan {
        leaves,
        filtered_count: filtered.len(),
        is_distributed,
    })
}
