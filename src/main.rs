//! # Org-Unit Tree CLI
//!
//! This is the binary entry point for the `orgunit-tree` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The hierarchy and resolution logic lives in the `lib.rs` library crate; the
//! binary only reads payloads from disk and prints results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
