//! # Core Module / 核心模块
//!
//! This module contains the test engine itself: the test tree model, the
//! flattener, the outcome classifier and evaluators, the aggregator and the
//! runner that composes them, plus suite configuration and planning.
//!
//! 此模块包含测试引擎本身：测试树模型、扁平化器、结果分类器和评估器、
//! 汇总器以及组合它们的运行器，另外还有套件配置和执行计划。

pub mod check;
pub mod config;
pub mod execution;
pub mod flatten;
pub mod models;
pub mod notify;
pub mod planner;
pub mod registry;
pub mod runner;
pub mod summary;
pub mod tree;

// Re-exports
pub use execution::ExecutionMode;
pub use flatten::{Leaf, flatten};
pub use models::{CaseResult, Fault, Outcome, TestReport};
pub use notify::{Notifier, Serialized};
pub use runner::{RunReport, run_tests, run_tests_parallel};
pub use summary::Counts;
pub use tree::TestTree;
