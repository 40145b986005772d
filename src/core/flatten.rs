//! # Flattener Module / 扁平化模块
//!
//! Converts a `TestTree` into an ordered sequence of named leaves with a
//! depth-first, left-to-right traversal. Flattening never executes code and
//! cannot fail.
//!
//! 通过深度优先、从左到右的遍历将 `TestTree` 转换为有序的命名叶子序列。
//! 扁平化从不执行代码，也不会失败。

use std::fmt;

use crate::core::tree::{TestFn, TestTree};

/// Separator placed between label segments of a qualified name.
pub const NAME_SEPARATOR: char = '/';

/// A runnable leaf of a flattened tree.
///
/// `code` is the original leaf's operation, shared rather than copied.
/// Distinct leaves may carry identical names.
///
/// 扁平化树的可运行叶子。
/// `code` 是原始叶子的操作，是共享的而非复制的。不同的叶子可以拥有相同的名称。
#[derive(Clone)]
pub struct Leaf {
    /// The qualified name / 限定名称
    pub name: String,
    /// The test body / 测试体
    pub code: TestFn,
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Flattens a tree into its leaves, in tree order.
///
/// A `Case` that sits under no `Label` gets the empty string as its name.
///
/// # Examples
/// ```
/// use tree_runner::core::flatten::flatten;
/// use tree_runner::core::tree::{case, label, list};
///
/// let tree = label("Suite", list([label("t1", case(|| Ok(()))), label("t2", case(|| Ok(())))]));
/// let names: Vec<_> = flatten(&tree).into_iter().map(|leaf| leaf.name).collect();
/// assert_eq!(names, ["Suite/t1", "Suite/t2"]);
/// ```
pub fn flatten(tree: &TestTree) -> Vec<Leaf> {
    let mut leaves = Vec::with_capacity(tree.case_count());
    flatten_into(tree, "", &mut leaves);
    leaves
}

/// Flattens a tree as if it were nested under `prefix`.
pub fn flatten_with_prefix(tree: &TestTree, prefix: &str) -> Vec<Leaf> {
    let mut leaves = Vec::with_capacity(tree.case_count());
    flatten_into(tree, prefix, &mut leaves);
    leaves
}

fn flatten_into(tree: &TestTree, prefix: &str, out: &mut Vec<Leaf>) {
    match tree {
        TestTree::Case(code) => out.push(Leaf {
            name: prefix.to_string(),
            code: code.clone(),
        }),
        // Siblings share the parent's prefix.
        TestTree::List(children) => {
            for child in children {
                flatten_into(child, prefix, out);
            }
        }
        TestTree::Label(name, child) => {
            let qualified = join_name(prefix, name);
            flatten_into(child, &qualified, out);
        }
    }
}

/// Appends a label segment to a qualified name prefix.
pub fn join_name(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{NAME_SEPARATOR}{segment}")
    }
}
