//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// Org-Unit Tree - Flatten org-unit hierarchies and resolve source configuration
#[derive(Parser, Debug)]
#[command(name = "orgunit-tree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Flatten a hierarchy into an ordered option list
    Flatten(commands::flatten::FlattenArgs),

    /// Resolve which status configuration applies to a version or source
    Resolve(commands::resolve::ResolveArgs),

    /// Display a hierarchy as a tree
    Tree(commands::tree::TreeArgs),

    /// Format a version label
    Label(commands::label::LabelArgs),

    /// Validate a hierarchy payload and the settings file
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        match self.command {
            Commands::Flatten(args) => commands::flatten::execute(args, &self.color),
            Commands::Resolve(args) => commands::resolve::execute(args, &self.color),
            Commands::Tree(args) => commands::tree::execute(args),
            Commands::Label(args) => commands::label::execute(args),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr at the requested level. `RUST_LOG`, when set,
/// refines the filter further.
fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: {}\n\n\
             hint: Use one of error, warn, info, debug, trace",
            level
        )
    })?;

    // A second initialization (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    Ok(())
}
