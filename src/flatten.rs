//! # Hierarchy Flattening
//!
//! Converts a nested [`TreeNode`] structure into an ordered list of
//! [`FlatOption`] entries suitable for a single- or multi-select picker.
//!
//! ## Algorithm
//!
//! Pre-order depth-first traversal. At each node:
//!
//! 1. If the node id is in `excluded_ids` and is not `exclude_id`, the node is
//!    skipped and its children are not visited. An excluded ancestor therefore
//!    hides its whole subtree, so the picker never offers "a child of an option
//!    that was already taken".
//! 2. Otherwise the node is emitted, then each child is visited in input order.
//!
//! `exclude_id` is a single self exception: the option currently being edited
//! stays visible even though it is part of the caller's chosen set. The
//! exception only applies to that node; if one of its ancestors is excluded
//! the traversal never reaches it.
//!
//! Flattening is pure. Calling it twice with the same arguments yields equal
//! output, and the input tree is only borrowed.

use std::collections::HashSet;

use log::trace;
use serde::Serialize;

use crate::tree::TreeNode;

/// One entry of a flattened hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatOption<'a> {
    /// Copy of the node id.
    pub value: i64,
    /// Copy of the node name.
    pub label: &'a str,
    /// Distance from the root that was passed to the flattener.
    pub depth: usize,
    /// The node this option was produced from.
    #[serde(skip)]
    pub original: &'a TreeNode,
}

/// Flatten the tree rooted at `root`, root included.
pub fn flatten<'a>(
    root: &'a TreeNode,
    exclude_id: Option<i64>,
    excluded_ids: &HashSet<i64>,
) -> Vec<FlatOption<'a>> {
    let mut options = Vec::new();
    collect(root, 0, exclude_id, excluded_ids, &mut options);
    options
}

/// Flatten a list of sibling trees as if they were the children of a virtual
/// root, without emitting the root itself.
pub fn flatten_forest<'a>(
    roots: &'a [TreeNode],
    exclude_id: Option<i64>,
    excluded_ids: &HashSet<i64>,
) -> Vec<FlatOption<'a>> {
    let mut options = Vec::new();
    for root in roots {
        collect(root, 0, exclude_id, excluded_ids, &mut options);
    }
    options
}

fn collect<'a>(
    node: &'a TreeNode,
    depth: usize,
    exclude_id: Option<i64>,
    excluded_ids: &HashSet<i64>,
    options: &mut Vec<FlatOption<'a>>,
) {
    if excluded_ids.contains(&node.id) && exclude_id != Some(node.id) {
        trace!(
            "Pruning node {} and {} descendant(s)",
            node.id,
            node.node_count() - 1
        );
        return;
    }

    options.push(FlatOption {
        value: node.id,
        label: &node.name,
        depth,
        original: node,
    });

    for child in &node.children {
        collect(child, depth + 1, exclude_id, excluded_ids, options);
    }
}
