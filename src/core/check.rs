//! # Assertion Helpers / 断言辅助函数
//!
//! Helpers for writing test bodies that report assertion failures as data
//! (`Err(message)`) instead of panicking. A panic inside a test body is
//! classified as an unexpected fault, not as a failure.
//!
//! 用于编写测试体的辅助函数，将断言失败作为数据（`Err(message)`）报告而不是 panic。
//! 测试体内的 panic 被归类为意外故障，而不是失败。

use std::fmt::Debug;

use crate::core::models::CaseResult;

/// Fails with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> CaseResult {
    if condition { Ok(()) } else { Err(message.into()) }
}

/// Fails unless `expected == actual`.
///
/// ```
/// use tree_runner::core::check::ensure_eq;
///
/// assert!(ensure_eq(4, 2 + 2).is_ok());
/// assert_eq!(ensure_eq(1, 2).unwrap_err(), "expected 1 but got 2");
/// ```
pub fn ensure_eq<T>(expected: T, actual: T) -> CaseResult
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected {expected:?} but got {actual:?}"))
    }
}

/// Fails if `unexpected == actual`.
pub fn ensure_ne<T>(unexpected: T, actual: T) -> CaseResult
where
    T: PartialEq + Debug,
{
    if unexpected != actual {
        Ok(())
    } else {
        Err(format!("expected a value other than {unexpected:?}"))
    }
}

/// Always fails with `message`.
pub fn fail(message: impl Into<String>) -> CaseResult {
    Err(message.into())
}
