//! # Registration Module / 注册模块
//!
//! An explicit builder for assembling test trees in code. Each registered
//! test becomes a labeled case and each group a labeled list, so qualified
//! names follow the nesting of the builder calls.
//!
//! 用于在代码中组装测试树的显式构建器。每个注册的测试成为带标签的用例，
//! 每个分组成为带标签的列表，因此限定名称遵循构建器调用的嵌套结构。

use crate::core::models::CaseResult;
use crate::core::tree::{self, TestTree};

/// Collects tests and groups into a `TestTree`.
///
/// ```
/// use tree_runner::core::check::ensure_eq;
/// use tree_runner::core::flatten::flatten;
/// use tree_runner::core::registry::SuiteBuilder;
///
/// let tree = SuiteBuilder::new()
///     .test("addition", || ensure_eq(4, 2 + 2))
///     .group("strings", |g| g.test("concat", || ensure_eq("ab".to_string(), format!("a{}", "b"))))
///     .build_named("math");
///
/// let names: Vec<_> = flatten(&tree).into_iter().map(|leaf| leaf.name).collect();
/// assert_eq!(names, ["math/addition", "math/strings/concat"]);
/// ```
#[derive(Debug, Default)]
pub struct SuiteBuilder {
    children: Vec<TestTree>,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a test under its own name.
    pub fn test<F>(mut self, name: impl Into<String>, code: F) -> Self
    where
        F: Fn() -> CaseResult + Send + Sync + 'static,
    {
        self.children.push(tree::label(name, tree::case(code)));
        self
    }

    /// Registers a labeled group populated by `build`.
    pub fn group<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(SuiteBuilder) -> SuiteBuilder,
    {
        let group = build(SuiteBuilder::new()).build();
        self.children.push(tree::label(name, group));
        self
    }

    /// Appends an arbitrary subtree as is.
    pub fn subtree(mut self, subtree: TestTree) -> Self {
        self.children.push(subtree);
        self
    }

    /// Number of top-level entries registered so far.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Finishes the suite as an unlabeled list.
    pub fn build(self) -> TestTree {
        TestTree::List(self.children)
    }

    /// Finishes the suite under a root label.
    pub fn build_named(self, name: impl Into<String>) -> TestTree {
        tree::label(name, self.build())
    }
}
