//! # Hierarchy Tree Model
//!
//! This module defines [`TreeNode`], the in-memory shape of an org-unit or
//! org-unit-type hierarchy, together with the adapters that build it from
//! server payloads and a few read-only traversal helpers.
//!
//! ## Payload Shapes
//!
//! The hierarchy endpoints return nested JSON objects with an `id`, a `name`
//! and a child array. The org-unit tree endpoint names the array `children`,
//! while the org-unit-type hierarchy endpoint names it `sub_unit_types`. Both
//! are accepted. A missing or `null` child array is read as a leaf, and any
//! other field is preserved in [`TreeNode::extra`] so that callers holding a
//! [`crate::flatten::FlatOption`] can still reach it through `original`.
//!
//! Endpoints return either a single root object or a list of sibling roots;
//! [`parse_forest`] accepts both.
//!
//! ## Structure
//!
//! A `TreeNode` owns its children, so the structure is acyclic by
//! construction. Duplicate ids are not prevented by the type and are reported
//! by [`TreeNode::validate`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Id given to the synthetic container built by [`TreeNode::virtual_root`].
pub const VIRTUAL_ROOT_ID: i64 = 0;

/// One node of a type/unit hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node id, unique within the tree.
    pub id: i64,
    /// Display label.
    pub name: String,
    /// Ordered sub-trees; empty for leaves.
    #[serde(
        default,
        alias = "sub_unit_types",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
    /// Payload fields that are not part of the tree shape.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TreeNode>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            children: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Builder-style variant of [`TreeNode::add_child`] for a whole list.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Wrap a list of sibling trees in a synthetic container.
    ///
    /// The container has id [`VIRTUAL_ROOT_ID`] and an empty name. Callers that
    /// do not want the container in flattened output should use
    /// [`crate::flatten::flatten_forest`] instead.
    pub fn virtual_root(children: Vec<TreeNode>) -> Self {
        Self::new(VIRTUAL_ROOT_ID, "").with_children(children)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this tree, root included.
    pub fn node_count(&self) -> usize {
        let below: usize = self.children.iter().map(TreeNode::node_count).sum();
        1 + below
    }

    /// Number of levels in this tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let deepest = self.children.iter().map(TreeNode::depth).max();
        1 + deepest.unwrap_or(0)
    }

    /// Iterate over the tree in pre-order (node before its children,
    /// siblings in input order).
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Find the first node with the given id in pre-order.
    pub fn find(&self, id: i64) -> Option<&TreeNode> {
        self.iter().find(|node| node.id == id)
    }

    /// Chain of nodes from this root down to the node with `id`, both ends
    /// included. `None` when the id is not in the tree.
    pub fn path_to(&self, id: i64) -> Option<Vec<&TreeNode>> {
        if self.id == id {
            return Some(vec![self]);
        }
        self.children.iter().find_map(|child| {
            child.path_to(id).map(|mut path| {
                path.insert(0, self);
                path
            })
        })
    }

    /// Ids of every node strictly below this one, in pre-order.
    pub fn descendant_ids(&self) -> Vec<i64> {
        self.iter().skip(1).map(|node| node.id).collect()
    }

    /// Check that ids are unique and that the tree is no deeper than
    /// `max_depth` levels.
    pub fn validate(&self, max_depth: usize) -> Result<()> {
        let mut seen = HashSet::new();
        self.validate_recursive(1, max_depth, &mut seen)
    }

    fn validate_recursive(
        &self,
        level: usize,
        max_depth: usize,
        seen: &mut HashSet<i64>,
    ) -> Result<()> {
        if level > max_depth {
            return Err(Error::DepthExceeded {
                limit: max_depth,
                id: self.id,
            });
        }
        if !seen.insert(self.id) {
            return Err(Error::DuplicateId { id: self.id });
        }
        for child in &self.children {
            child.validate_recursive(level + 1, max_depth, seen)?;
        }
        Ok(())
    }
}

/// Pre-order iterator over a [`TreeNode`], see [`TreeNode::iter`].
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Validate every tree of a forest against one shared id set.
pub fn validate_forest(roots: &[TreeNode], max_depth: usize) -> Result<()> {
    let mut seen = HashSet::new();
    for root in roots {
        root.validate_recursive(1, max_depth, &mut seen)?;
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForestPayload {
    Many(Vec<TreeNode>),
    One(TreeNode),
}

/// Parse a single tree from a JSON payload.
pub fn parse_tree(json: &str) -> Result<TreeNode> {
    serde_json::from_str(json).map_err(|e| Error::Payload {
        message: format!("invalid tree payload: {}", e),
    })
}

/// Parse a JSON payload holding either one root object or a list of roots.
pub fn parse_forest(json: &str) -> Result<Vec<TreeNode>> {
    let payload: ForestPayload = serde_json::from_str(json).map_err(|e| Error::Payload {
        message: format!(
            "expected a tree object or a list of tree objects with `id`, `name` and \
             `children`/`sub_unit_types`: {}",
            e
        ),
    })?;
    let roots = match payload {
        ForestPayload::Many(roots) => roots,
        ForestPayload::One(root) => vec![root],
    };
    if roots.is_empty() {
        warn!("Tree payload holds no roots");
    }
    debug!("Parsed forest payload with {} root(s)", roots.len());
    Ok(roots)
}

/// Read and parse a forest payload from a file.
pub fn load_forest(path: &Path) -> Result<Vec<TreeNode>> {
    let content = fs::read_to_string(path)?;
    parse_forest(&content)
}
