//! # Resolve Command Implementation
//!
//! This module implements the `resolve` subcommand, which reports the status
//! configuration in effect for a version/source selection.
//!
//! ## Input
//!
//! A YAML (or JSON) document with the optional keys `version_id`,
//! `source_id`, `version`, `source`, `account_default` and `label_format`.
//! `version` and `source` are fetch results of the form
//! `{ data: ..., is_fetching: false }`.
//!
//! The settings file fills in what the input leaves out: its
//! `account.default_version` is used when the input has no
//! `account_default`, and its `default_word` when the input has no
//! `label_format`.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use log::debug;

use orgunit_tree::config::{self, Settings};
use orgunit_tree::output::{render_resolution, to_json, OutputConfig, OutputFormat};
use orgunit_tree::resolver::{parse_resolve_input, resolve, ResolveInput};
use orgunit_tree::suggestions;

/// Resolve which status configuration applies to a version or source
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the resolve input document.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to a settings file.
    ///
    /// Defaults to `.orgunit-tree.yaml` in the current directory, then the
    /// user settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    if !args.input.exists() {
        return Err(suggestions::resolve_input_not_found(&args.input));
    }
    let settings = config::load(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load settings: {}", e))?;

    let content = fs::read_to_string(&args.input)?;
    let input = parse_input(&content, &settings).map_err(|e| {
        anyhow::anyhow!(
            "Failed to parse resolve input {}: {}",
            args.input.display(),
            e
        )
    })?;

    let resolution = resolve(&input);
    debug!("Resolved to {} scope", resolution.scope);

    match args.format {
        OutputFormat::Text => print!("{}", render_resolution(&resolution, &out)),
        OutputFormat::Json => println!("{}", to_json(&resolution)?),
    }
    Ok(())
}

fn parse_input(content: &str, settings: &Settings) -> Result<ResolveInput> {
    let (mut input, has_label_format) = parse_resolve_input(content)?;
    if !has_label_format {
        input.label_format = settings.label_format();
    }
    if input.account_default.is_none() {
        input.account_default = settings.account_default().cloned();
    }
    Ok(input)
}
