//! Property-based tests for hierarchy flattening.
//!
//! These tests use proptest to generate random trees and exclusion sets and
//! verify that the flattening invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::HashSet;

    use crate::flatten::flatten;
    use crate::tree::TreeNode;
    use proptest::prelude::*;

    /// Random tree shapes with placeholder ids.
    fn arb_shape() -> impl Strategy<Value = TreeNode> {
        let leaf = "[a-z]{1,6}".prop_map(|name| TreeNode::new(0, name));
        leaf.prop_recursive(4, 40, 4, |inner| {
            ("[a-z]{1,6}", prop::collection::vec(inner, 0..4))
                .prop_map(|(name, children)| TreeNode::new(0, name).with_children(children))
        })
    }

    fn renumber(node: &mut TreeNode, next: &mut i64) {
        node.id = *next;
        *next += 1;
        for child in node.children.iter_mut() {
            renumber(child, next);
        }
    }

    /// Random trees whose ids are 1..=n in pre-order.
    fn arb_tree() -> impl Strategy<Value = TreeNode> {
        arb_shape().prop_map(|mut tree| {
            let mut next = 1;
            renumber(&mut tree, &mut next);
            tree
        })
    }

    fn arb_exclusions() -> impl Strategy<Value = (Option<i64>, HashSet<i64>)> {
        (
            prop::option::of(1i64..48),
            prop::collection::hash_set(1i64..48, 0..6),
        )
    }

    proptest! {
        /// Property: without exclusions the output is the full pre-order
        #[test]
        fn flatten_without_exclusions_is_preorder(tree in arb_tree()) {
            let values: Vec<i64> = flatten(&tree, None, &HashSet::new())
                .iter()
                .map(|o| o.value)
                .collect();
            let expected: Vec<i64> = (1..=tree.node_count() as i64).collect();
            prop_assert_eq!(values, expected);
        }

        /// Property: output is an order-preserving subsequence of the pre-order
        #[test]
        fn flatten_preserves_relative_order(
            tree in arb_tree(),
            (exclude_id, excluded) in arb_exclusions(),
        ) {
            let options = flatten(&tree, exclude_id, &excluded);
            prop_assert!(options.len() <= tree.node_count());
            // Pre-order numbering makes "same relative order" mean "strictly increasing".
            for pair in options.windows(2) {
                prop_assert!(pair[0].value < pair[1].value);
            }
        }

        /// Property: an excluded node and its whole subtree are absent
        #[test]
        fn flatten_prunes_excluded_subtrees(
            tree in arb_tree(),
            (exclude_id, excluded) in arb_exclusions(),
        ) {
            let emitted: HashSet<i64> = flatten(&tree, exclude_id, &excluded)
                .iter()
                .map(|o| o.value)
                .collect();
            for id in excluded.iter().filter(|id| Some(**id) != exclude_id) {
                if let Some(node) = tree.find(*id) {
                    prop_assert!(!emitted.contains(&node.id));
                    for descendant in node.descendant_ids() {
                        prop_assert!(
                            !emitted.contains(&descendant),
                            "descendant {} of excluded {} was emitted",
                            descendant,
                            id
                        );
                    }
                }
            }
        }

        /// Property: every emitted option has all of its ancestors emitted
        #[test]
        fn flatten_never_emits_orphans(
            tree in arb_tree(),
            (exclude_id, excluded) in arb_exclusions(),
        ) {
            let options = flatten(&tree, exclude_id, &excluded);
            let emitted: HashSet<i64> = options.iter().map(|o| o.value).collect();
            for option in &options {
                let path = tree.path_to(option.value).unwrap();
                for ancestor in path {
                    prop_assert!(emitted.contains(&ancestor.id));
                }
            }
        }

        /// Property: the edited node is shown whenever none of its ancestors is pruned
        #[test]
        fn flatten_keeps_edited_node_under_visible_ancestors(
            tree in arb_tree(),
            edited in 1i64..48,
            mut excluded in prop::collection::hash_set(1i64..48, 0..6),
        ) {
            excluded.insert(edited);
            if let Some(path) = tree.path_to(edited) {
                let ancestors_visible = path[..path.len() - 1]
                    .iter()
                    .all(|n| !excluded.contains(&n.id));
                let shown = flatten(&tree, Some(edited), &excluded)
                    .iter()
                    .any(|o| o.value == edited);
                prop_assert_eq!(shown, ancestors_visible);
            }
        }

        /// Property: flatten is deterministic and does not mutate its input
        #[test]
        fn flatten_is_idempotent(
            tree in arb_tree(),
            (exclude_id, excluded) in arb_exclusions(),
        ) {
            let before = tree.clone();
            let first = flatten(&tree, exclude_id, &excluded);
            let second = flatten(&tree, exclude_id, &excluded);
            prop_assert_eq!(first, second);
            prop_assert_eq!(tree, before);
        }
    }
}
