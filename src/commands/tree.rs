//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays a hierarchy
//! payload in a hierarchical format.
//!
//! ## Functionality
//!
//! - **Hierarchy Visualization**: Displays every root of the payload with its
//!   descendants, each node as `name (id)`
//! - **Depth Control**: Supports `--depth` flag to limit tree depth; cut
//!   branches show how many nodes they hide
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use orgunit_tree::tree::TreeNode;

use super::load_tree_payload;

/// Display a hierarchy as a tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the JSON hierarchy payload.
    #[arg(short, long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    /// Use 0 to show only the roots, 1 to show one level of children, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs) -> Result<()> {
    println!("🌳 Hierarchy: {}", args.tree.display());

    let roots = load_tree_payload(&args.tree)?;
    let max_depth = args.depth.unwrap_or(usize::MAX);
    for root in &roots {
        let display = build_display_node(root, max_depth, 0);
        print_tree(&display).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;
    }

    Ok(())
}

/// Build a display node from a hierarchy node
fn build_display_node(node: &TreeNode, max_depth: usize, current_depth: usize) -> DisplayNode {
    let label = format!("{} ({})", node.name, node.id);

    if node.children.is_empty() {
        DisplayNode {
            label,
            children: vec![],
        }
    } else if current_depth >= max_depth {
        DisplayNode {
            label: format!("{} [+{} hidden]", label, node.node_count() - 1),
            children: vec![],
        }
    } else {
        let children = node
            .children
            .iter()
            .map(|child| build_display_node(child, max_depth, current_depth + 1))
            .collect();
        DisplayNode { label, children }
    }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct DisplayNode {
    label: String,
    children: Vec<DisplayNode>,
}

impl TreeItem for DisplayNode {
    type Child = DisplayNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}
