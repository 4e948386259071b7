//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `orgunit-tree` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function reads its inputs from disk, calls into the
//! `orgunit_tree` library for the actual work, and prints the result.

pub mod completions;
pub mod flatten;
pub mod label;
pub mod resolve;
pub mod tree;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use orgunit_tree::suggestions;
use orgunit_tree::tree::{load_forest, TreeNode};

/// Read a hierarchy payload, turning a missing file into a hinted error.
pub(crate) fn load_tree_payload(path: &Path) -> Result<Vec<TreeNode>> {
    if !path.exists() {
        return Err(suggestions::tree_file_not_found(path));
    }
    load_forest(path)
        .map_err(|e| anyhow::anyhow!("Failed to load tree from {}: {}", path.display(), e))
}
