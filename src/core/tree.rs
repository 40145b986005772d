//! # Test Tree Module / 测试树模块
//!
//! This module defines the recursive data model describing a test suite:
//! leaf test cases, ordered lists of subtrees, and labels that contribute a
//! segment to the qualified name of every case beneath them.
//!
//! 此模块定义描述测试套件的递归数据模型：
//! 叶子测试用例、有序的子树列表，以及为其下所有用例的限定名称贡献一个片段的标签。

use std::fmt;
use std::sync::Arc;

use crate::core::models::CaseResult;

/// A shareable, zero-argument test operation.
///
/// The operation is reference counted so that the flattened view of a tree can
/// hand the very same code to worker threads without copying or rewrapping it.
///
/// 可共享的零参数测试操作。
/// 使用引用计数，使树的扁平视图可以将同一段代码交给工作线程，而无需复制或重新包装。
pub type TestFn = Arc<dyn Fn() -> CaseResult + Send + Sync + 'static>;

/// A suite of tests, represented as a labeled tree.
///
/// Trees are immutable once constructed and are only ever inspected by
/// pattern matching.
///
/// 以带标签的树表示的测试套件。
/// 树一经构造即不可变，只能通过模式匹配来检查。
#[derive(Clone)]
pub enum TestTree {
    /// A single runnable test case / 单个可运行的测试用例
    Case(TestFn),
    /// An ordered sequence of subtrees / 有序的子树序列
    List(Vec<TestTree>),
    /// A subtree with a name segment / 带名称片段的子树
    Label(String, Box<TestTree>),
}

impl TestTree {
    /// Counts the `Case` leaves in the tree.
    pub fn case_count(&self) -> usize {
        match self {
            TestTree::Case(_) => 1,
            TestTree::List(children) => children.iter().map(TestTree::case_count).sum(),
            TestTree::Label(_, child) => child.case_count(),
        }
    }

    /// Returns `true` if the tree contains no `Case` leaves at all.
    pub fn is_empty(&self) -> bool {
        self.case_count() == 0
    }
}

impl Default for TestTree {
    fn default() -> Self {
        TestTree::List(Vec::new())
    }
}

impl fmt::Debug for TestTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestTree::Case(_) => f.write_str("Case(..)"),
            TestTree::List(children) => f.debug_tuple("List").field(children).finish(),
            TestTree::Label(name, child) => f.debug_tuple("Label").field(name).field(child).finish(),
        }
    }
}

/// Wraps a closure as a `Case` leaf.
///
/// 将闭包包装为 `Case` 叶子。
pub fn case<F>(code: F) -> TestTree
where
    F: Fn() -> CaseResult + Send + Sync + 'static,
{
    TestTree::Case(Arc::new(code))
}

/// Builds a `List` node from any sequence of subtrees.
pub fn list<I>(children: I) -> TestTree
where
    I: IntoIterator<Item = TestTree>,
{
    TestTree::List(children.into_iter().collect())
}

/// Labels a subtree with a name segment.
pub fn label(name: impl Into<String>, child: TestTree) -> TestTree {
    TestTree::Label(name.into(), Box::new(child))
}
