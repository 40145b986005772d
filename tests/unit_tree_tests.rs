//! # Test Tree and Flattener Unit Tests / 测试树与扁平化单元测试
//!
//! Covers tree construction, qualified-name composition, ordering and the
//! registration builder.
//!
//! 覆盖树的构造、限定名称的组合、顺序以及注册构建器。

mod common;

use std::sync::Arc;
use tree_runner::core::flatten::{Leaf, flatten, flatten_with_prefix, join_name};
use tree_runner::core::registry::SuiteBuilder;
use tree_runner::core::tree::{TestTree, case, label, list};

fn names(leaves: &[Leaf]) -> Vec<&str> {
    leaves.iter().map(|leaf| leaf.name.as_str()).collect()
}

fn ok() -> TestTree {
    case(|| Ok(()))
}

#[cfg(test)]
mod tree_tests {
    use super::*;

    #[test]
    fn test_case_count() {
        let tree = label(
            "root",
            list([ok(), list([ok(), label("x", ok())]), list([]), label("y", list([]))]),
        );
        assert_eq!(tree.case_count(), 3);
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_default_tree_is_empty_list() {
        let tree = TestTree::default();
        assert!(matches!(tree, TestTree::List(ref children) if children.is_empty()));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_debug_does_not_expose_code() {
        let tree = label("a", list([ok()]));
        assert_eq!(format!("{tree:?}"), "Label(\"a\", List([Case(..)]))");
    }
}

#[cfg(test)]
mod flatten_tests {
    use super::*;

    #[test]
    fn test_scenario_b_names() {
        let leaves = flatten(&common::scenario_b());
        assert_eq!(names(&leaves), ["Suite/t1", "Suite/t2"]);
    }

    #[test]
    fn test_unlabeled_case_has_empty_name() {
        let leaves = flatten(&ok());
        assert_eq!(names(&leaves), [""]);

        let leaves = flatten(&common::scenario_a());
        assert_eq!(names(&leaves), ["", ""]);
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        assert!(flatten(&list([])).is_empty());
        assert!(flatten(&label("only-label", list([]))).is_empty());
    }

    #[test]
    fn test_siblings_do_not_nest() {
        let tree = label(
            "a",
            list([label("b", ok()), label("c", ok()), label("d", list([label("e", ok())]))]),
        );
        assert_eq!(names(&flatten(&tree)), ["a/b", "a/c", "a/d/e"]);
    }

    #[test]
    fn test_depth_first_left_to_right_order() {
        let tree = list([
            label("1", list([label("1a", ok()), label("1b", ok())])),
            label("2", ok()),
            list([label("3", list([label("3a", ok())]))]),
        ]);
        assert_eq!(names(&flatten(&tree)), ["1/1a", "1/1b", "2", "3/3a"]);
    }

    #[test]
    fn test_nested_labels_without_lists() {
        let tree = label("a", label("b", label("c", ok())));
        assert_eq!(names(&flatten(&tree)), ["a/b/c"]);
    }

    #[test]
    fn test_duplicate_names_are_preserved() {
        let tree = label("dup", list([ok(), ok(), label("x", ok()), label("x", ok())]));
        assert_eq!(names(&flatten(&tree)), ["dup", "dup", "dup/x", "dup/x"]);
    }

    #[test]
    fn test_leaf_count_matches_case_count() {
        let trees = [
            common::scenario_a(),
            common::scenario_b(),
            common::half_failing(17),
            list([]),
            label("deep", label("deeper", list([ok(), list([ok(), list([ok()])])]))),
        ];
        for tree in &trees {
            assert_eq!(flatten(tree).len(), tree.case_count());
        }
    }

    #[test]
    fn test_leaf_code_is_shared_not_copied() {
        let tree = label("t", ok());
        let TestTree::Label(_, child) = &tree else {
            panic!("Expected Label");
        };
        let TestTree::Case(code) = child.as_ref() else {
            panic!("Expected Case");
        };
        let leaves = flatten(&tree);
        assert!(Arc::ptr_eq(code, &leaves[0].code));
    }

    #[test]
    fn test_flatten_with_prefix() {
        let tree = list([label("a", ok()), ok()]);
        assert_eq!(names(&flatten_with_prefix(&tree, "root")), ["root/a", "root"]);
    }

    #[test]
    fn test_join_name() {
        assert_eq!(join_name("", "a"), "a");
        assert_eq!(join_name("a", "b"), "a/b");
        assert_eq!(join_name("a/b", ""), "a/b/");
    }

    #[test]
    fn test_flattening_does_not_execute() {
        let tree = list([case(|| panic!("must not run during flattening"))]);
        assert_eq!(flatten(&tree).len(), 1);
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use tree_runner::core::check::ensure;

    #[test]
    fn test_builder_names_follow_nesting() {
        let tree = SuiteBuilder::new()
            .test("first", || Ok(()))
            .group("group", |g| {
                g.test("inner", || Ok(()))
                    .group("sub", |g| g.test("leaf", || ensure(true, "unreachable")))
            })
            .test("last", || Ok(()))
            .build_named("suite");

        assert_eq!(
            names(&flatten(&tree)),
            ["suite/first", "suite/group/inner", "suite/group/sub/leaf", "suite/last"]
        );
    }

    #[test]
    fn test_builder_without_root_label() {
        let builder = SuiteBuilder::new().test("a", || Ok(())).subtree(ok());
        assert_eq!(builder.len(), 2);
        assert_eq!(names(&flatten(&builder.build())), ["a", ""]);
    }

    #[test]
    fn test_empty_builder() {
        let builder = SuiteBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }
}
