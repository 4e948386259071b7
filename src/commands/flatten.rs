//! # Flatten Command Implementation
//!
//! This module implements the `flatten` subcommand, which turns a hierarchy
//! payload into the ordered option list a picker would show.
//!
//! ## Functionality
//!
//! - **Subtree Exclusion**: `--excluded` hides the listed nodes together with
//!   everything below them
//! - **Editing Exception**: `--exclude-id` keeps the node being edited visible
//!   even when it is in the excluded set
//! - **Forests**: `--forest` flattens a list of sibling roots without a
//!   synthetic container entry
//! - **Formats**: indented text or JSON
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::info;

use orgunit_tree::flatten::{flatten, flatten_forest};
use orgunit_tree::output::{render_options, to_json, OutputConfig, OutputFormat};
use orgunit_tree::suggestions;

use super::load_tree_payload;

/// Flatten a hierarchy into an ordered option list
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Path to the JSON hierarchy payload.
    #[arg(short, long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Id of the node being edited; it stays visible even if excluded.
    #[arg(long, value_name = "ID")]
    pub exclude_id: Option<i64>,

    /// Comma-separated ids whose subtrees are hidden.
    #[arg(long, value_name = "IDS")]
    pub excluded: Option<String>,

    /// Treat the payload as a list of sibling roots.
    ///
    /// Without this flag the payload must hold exactly one root.
    #[arg(long)]
    pub forest: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the `flatten` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: FlattenArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let excluded_ids = match &args.excluded {
        Some(list) => parse_id_list(list)?,
        None => HashSet::new(),
    };

    let roots = load_tree_payload(&args.tree)?;
    let options = if args.forest {
        flatten_forest(&roots, args.exclude_id, &excluded_ids)
    } else {
        match roots.as_slice() {
            [root] => flatten(root, args.exclude_id, &excluded_ids),
            _ => anyhow::bail!(
                "Expected a single root in {}, found {}\n\n\
                 hint: Use --forest to flatten a list of sibling roots",
                args.tree.display(),
                roots.len()
            ),
        }
    };
    info!(
        "Flattened {} into {} option(s)",
        args.tree.display(),
        options.len()
    );

    match args.format {
        OutputFormat::Text => print!("{}", render_options(&options, &out)),
        OutputFormat::Json => println!("{}", to_json(&options)?),
    }
    Ok(())
}

/// Parse `12,15,40` into a set. Whitespace around ids and empty items are
/// ignored.
fn parse_id_list(value: &str) -> Result<HashSet<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map_err(|_| suggestions::invalid_id_list(value))
        })
        .collect()
}
