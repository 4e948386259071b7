//! # Org-Unit Tree Library
//!
//! This library provides the hierarchy and configuration logic behind
//! org-unit pickers and map views: it turns nested org-unit (or org-unit-type)
//! trees into flat, ordered option lists and decides which status
//! configuration applies to the data source a user is looking at. It is used
//! by the `orgunit-tree` command-line tool but has no I/O in its core and can
//! be embedded in any front end.
//!
//! ## Quick Example
//!
//! ```
//! use std::collections::HashSet;
//! use orgunit_tree::flatten::flatten;
//! use orgunit_tree::resolver::{resolve, ConfigScope, Fetch, ResolveInput};
//! use orgunit_tree::tree::parse_tree;
//! use orgunit_tree::version::VersionDescriptor;
//!
//! let tree = parse_tree(r#"{
//!     "id": 1, "name": "Country",
//!     "sub_unit_types": [
//!         {"id": 2, "name": "Region", "sub_unit_types": [{"id": 3, "name": "District"}]},
//!         {"id": 4, "name": "Facility"}
//!     ]
//! }"#).unwrap();
//!
//! // Region and everything under it is already used elsewhere
//! let excluded: HashSet<i64> = [2].into_iter().collect();
//! let options = flatten(&tree, None, &excluded);
//! let ids: Vec<i64> = options.iter().map(|o| o.value).collect();
//! assert_eq!(ids, vec![1, 4]);
//!
//! let input = ResolveInput {
//!     version_id: Some(5),
//!     version: Fetch::ready(
//!         VersionDescriptor::new(5, 2).with_tree_config_status_fields(["NEW", "VALID"]),
//!     ),
//!     ..Default::default()
//! };
//! let resolution = resolve(&input);
//! assert_eq!(resolution.scope, ConfigScope::Version);
//! assert_eq!(resolution.status_fields, vec!["NEW", "VALID"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Trees (`tree`)**: The [`tree::TreeNode`] model, payload adapters for
//!   both hierarchy endpoints, traversal helpers and structural validation.
//! - **Flattening (`flatten`)**: Depth-first option lists with subtree
//!   exclusion and the self-exception for the node being edited.
//! - **Versions (`version`)**: Version and source descriptors and the
//!   version label format.
//! - **Resolution (`resolver`)**: Precedence of version, source and account
//!   default configuration, plus a memoizing wrapper.
//! - **Events and projection (`events`, `projection`)**: An owned pub/sub bus
//!   for hierarchy views and a diffing adapter that keeps a drawing layer in
//!   step with resolved data.
//! - **Settings (`config`, `defaults`)**: The `.orgunit-tree.yaml` settings
//!   file and built-in defaults.

pub mod config;
pub mod defaults;
pub mod error;
pub mod events;
pub mod flatten;
pub mod output;
pub mod projection;
pub mod resolver;
pub mod suggestions;
pub mod tree;
pub mod version;

#[cfg(test)]
mod flatten_proptest;
