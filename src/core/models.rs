//! # Data Models Module / 数据模型模块
//!
//! This module defines the values that flow through a test run: the two-armed
//! result a test body returns, the fault captured when a test body panics,
//! the three-way outcome assigned to every leaf, and the per-leaf report.
//!
//! 此模块定义在测试运行中流转的值：测试体返回的二元结果、
//! 测试体 panic 时捕获的故障、分配给每个叶子的三元结果，以及每个叶子的报告。

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::time::Duration;

/// The result a test body returns: success, or a failure message.
///
/// Test code only ever signals pass or fail. `Errored` outcomes are
/// synthesized by the classifier when a body panics.
///
/// 测试体返回的结果：成功，或失败消息。
/// 测试代码只会表示通过或失败。`Errored` 结果由分类器在测试体 panic 时合成。
pub type CaseResult = Result<(), String>;

/// An unexpected fault raised while executing a test body.
/// Only its string form is preserved.
///
/// 执行测试体时引发的意外故障。仅保留其字符串形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fault {
    /// The rendered panic message / 渲染后的 panic 消息
    pub message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Renders a panic payload as returned by `std::panic::catch_unwind`.
    ///
    /// `panic!` with a literal produces a `&'static str` payload and with
    /// format arguments a `String`. A `Fault` raised with `panic_any` is kept
    /// as is. Anything else has no printable form.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Fault>() {
            Ok(fault) => return *fault,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::new(*message),
            Err(payload) => payload,
        };
        match payload.downcast_ref::<&'static str>() {
            Some(message) => Self::new(*message),
            None => Self::new("Box<dyn Any>"),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Fault {}

/// The classified outcome of a single leaf.
///
/// 单个叶子的分类结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum Outcome {
    /// The body returned success / 测试体返回成功
    Passed,
    /// The body returned a failure message / 测试体返回失败消息
    Failed(String),
    /// The body panicked / 测试体发生 panic
    Errored(Fault),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Outcome::Errored(_))
    }

    /// Gets the CSS class used by the HTML report for this outcome.
    pub fn status_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "status-Passed",
            Outcome::Failed(_) => "status-Failed",
            Outcome::Errored(_) => "status-Errored",
        }
    }

    /// Gets the failure message or fault text, if any.
    /// 获取失败消息或故障文本（如果有）。
    pub fn detail(&self) -> Option<&str> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(message) => Some(message),
            Outcome::Errored(fault) => Some(&fault.message),
        }
    }
}

impl From<CaseResult> for Outcome {
    fn from(result: CaseResult) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(message) => Outcome::Failed(message),
        }
    }
}

/// The report for one evaluated leaf: its qualified name, its outcome and
/// how long the body took to run.
///
/// 单个已评估叶子的报告：其限定名称、结果以及测试体运行所用的时间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub name: String,
    pub outcome: Outcome,
    pub duration: Duration,
}

impl TestReport {
    pub fn new(name: impl Into<String>, outcome: Outcome, duration: Duration) -> Self {
        Self {
            name: name.into(),
            outcome,
            duration,
        }
    }
}
