//! # Test Execution Planner Unit Tests / 测试执行计划单元测试

mod common;

use tree_runner::core::flatten::{Leaf, flatten};
use tree_runner::core::planner::plan_execution;

fn leaves(count: usize) -> Vec<Leaf> {
    flatten(&common::half_failing(count))
}

fn names(leaves: &[Leaf]) -> Vec<&str> {
    leaves.iter().map(|leaf| leaf.name.as_str()).collect()
}

#[test]
fn test_plan_without_options_keeps_everything() {
    let plan = plan_execution(leaves(4), None, None, None).unwrap();
    assert_eq!(names(&plan.leaves), ["t0", "t1", "t2", "t3"]);
    assert_eq!(plan.filtered_count, 0);
    assert!(!plan.is_distributed);
}

#[test]
fn test_plan_filter_by_substring() {
    let plan = plan_execution(leaves(12), Some("t1"), None, None).unwrap();
    assert_eq!(names(&plan.leaves), ["t1", "t10", "t11"]);
    assert_eq!(plan.filtered_count, 9);
}

#[test]
fn test_plan_filter_keeps_duplicates() {
    let tree = tree_runner::core::tree::list([common::scenario_b(), common::scenario_b()]);
    let plan = plan_execution(flatten(&tree), Some("t2"), None, None).unwrap();
    assert_eq!(names(&plan.leaves), ["Suite/t2", "Suite/t2"]);
}

#[test]
fn test_plan_round_robin_distribution() {
    let first = plan_execution(leaves(7), None, Some(3), Some(0)).unwrap();
    let second = plan_execution(leaves(7), None, Some(3), Some(1)).unwrap();
    let third = plan_execution(leaves(7), None, Some(3), Some(2)).unwrap();

    assert!(first.is_distributed);
    assert_eq!(names(&first.leaves), ["t0", "t3", "t6"]);
    assert_eq!(names(&second.leaves), ["t1", "t4"]);
    assert_eq!(names(&third.leaves), ["t2", "t5"]);
}

#[test]
fn test_plan_filter_applies_before_distribution() {
    let plan = plan_execution(leaves(12), Some("t1"), Some(2), Some(1)).unwrap();
    assert_eq!(names(&plan.leaves), ["t10"]);
    assert_eq!(plan.filtered_count, 9);
}

#[test]
fn test_plan_rejects_invalid_distribution() {
    assert!(plan_execution(leaves(2), None, Some(0), Some(0)).is_err());
    assert!(plan_execution(leaves(2), None, Some(2), Some(2)).is_err());

    let err = plan_execution(leaves(2), None, Some(2), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Both --total-runners and --runner-index must be provided."
    );
    assert!(plan_execution(leaves(2), None, None, Some(0)).is_err());
}
