//! # Notification Module / 通知模块
//!
//! Defines the callbacks the evaluator invokes around every test, and the
//! mutual-exclusion wrapper that makes a notifier safe to share between the
//! workers of a parallel run.
//!
//! 定义评估器在每个测试前后调用的回调，以及使通知器可以在并行运行的
//! 工作线程之间安全共享的互斥包装器。

use anyhow::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::models::Fault;
use crate::core::summary::Counts;

/// Callbacks fired while a run progresses.
///
/// For every leaf, `before_run` fires first and then exactly one of
/// `on_passed`, `on_failed` or `on_exception`. `on_summary` fires once after
/// all leaves have been evaluated.
///
/// An `Err` returned from `before_run` is a harness fault: it is not caught
/// and aborts the whole run.
///
/// 运行过程中触发的回调。
/// 对于每个叶子，首先触发 `before_run`，然后恰好触发 `on_passed`、`on_failed`
/// 或 `on_exception` 之一。所有叶子评估完成后触发一次 `on_summary`。
/// `before_run` 返回的 `Err` 是测试框架故障：它不会被捕获，并会中止整个运行。
pub trait Notifier {
    fn before_run(&mut self, name: &str) -> Result<()> {
        let _ = name;
        Ok(())
    }

    fn on_passed(&mut self, name: &str);

    fn on_failed(&mut self, name: &str, message: &str);

    fn on_exception(&mut self, name: &str, cause: &Fault);

    fn on_summary(&mut self, counts: &Counts) {
        let _ = counts;
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn before_run(&mut self, name: &str) -> Result<()> {
        (**self).before_run(name)
    }

    fn on_passed(&mut self, name: &str) {
        (**self).on_passed(name)
    }

    fn on_failed(&mut self, name: &str, message: &str) {
        (**self).on_failed(name, message)
    }

    fn on_exception(&mut self, name: &str, cause: &Fault) {
        (**self).on_exception(name, cause)
    }

    fn on_summary(&mut self, counts: &Counts) {
        (**self).on_summary(counts)
    }
}

/// A notifier that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Notifier for Silent {
    fn on_passed(&mut self, _name: &str) {}

    fn on_failed(&mut self, _name: &str, _message: &str) {}

    fn on_exception(&mut self, _name: &str, _cause: &Fault) {}
}

/// A cloneable handle to a notifier guarded by a mutex.
///
/// Every callback takes the lock for the duration of that single callback
/// only, so each notification reaches the underlying sink whole. Handles are
/// cheap to clone; each worker of a parallel run owns one.
///
/// 由互斥锁保护的通知器的可克隆句柄。
/// 每个回调仅在该回调期间持有锁，因此每条通知都完整地到达底层输出。
/// 句柄克隆开销很小；并行运行的每个工作线程各持有一个。
#[derive(Debug)]
pub struct Serialized<N> {
    inner: Arc<Mutex<N>>,
}

impl<N> Clone for Serialized<N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N> Serialized<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            inner: Arc::new(Mutex::new(notifier)),
        }
    }

    /// Locks the wrapped notifier.
    ///
    /// A poisoned lock is recovered: a panicking callback must not silence
    /// every later notification.
    pub fn lock(&self) -> MutexGuard<'_, N> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the wrapped notifier if this is the last handle.
    pub fn try_into_inner(self) -> Result<N, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<N: Notifier> Notifier for Serialized<N> {
    fn before_run(&mut self, name: &str) -> Result<()> {
        self.lock().before_run(name)
    }

    fn on_passed(&mut self, name: &str) {
        self.lock().on_passed(name)
    }

    fn on_failed(&mut self, name: &str, message: &str) {
        self.lock().on_failed(name, message)
    }

    fn on_exception(&mut self, name: &str, cause: &Fault) {
        self.lock().on_exception(name, cause)
    }

    fn on_summary(&mut self, counts: &Counts) {
        self.lock().on_summary(counts)
    }
}
