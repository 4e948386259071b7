//! # Label Command Implementation
//!
//! This module implements the `label` subcommand, which prints the label a
//! picker shows for a version: `{number}[ - {description}][ ({default word})]`.
//!
//! The default word comes from `--default-word`, else from the settings file,
//! else the built-in `Default`.

use anyhow::Result;
use clap::Args;

use orgunit_tree::config;
use orgunit_tree::version::{LabelFormat, VersionDescriptor};

/// Format a version label
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Version number.
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub number: i64,

    /// Version description.
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Mark the version as its source's default.
    #[arg(long)]
    pub default: bool,

    /// Word shown after a default version, e.g. a translation of "Default".
    #[arg(long, value_name = "WORD")]
    pub default_word: Option<String>,
}

/// Execute the `label` command.
pub fn execute(args: LabelArgs) -> Result<()> {
    println!("{}", build_label(args)?);
    Ok(())
}

fn build_label(args: LabelArgs) -> Result<String> {
    let format = match args.default_word {
        Some(word) => LabelFormat::new(word),
        None => config::load(None)
            .map_err(|e| anyhow::anyhow!("Failed to load settings: {}", e))?
            .label_format(),
    };

    let mut version = VersionDescriptor::new(0, args.number).with_default(args.default);
    version.description = args.description;
    Ok(format.format(&version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(number: i64, description: Option<&str>, default: bool) -> LabelArgs {
        LabelArgs {
            number,
            description: description.map(str::to_string),
            default,
            default_word: Some("Default".to_string()),
        }
    }

    #[test]
    fn test_build_label() {
        let label = build_label(args(3, Some("Q1"), true)).unwrap();
        assert_eq!(label, "3 - Q1 (Default)");
        assert_eq!(build_label(args(3, None, false)).unwrap(), "3");
        assert_eq!(build_label(args(3, Some(""), true)).unwrap(), "3 (Default)");
    }

    #[test]
    fn test_build_label_custom_word() {
        let mut custom = args(2, Some("Census"), true);
        custom.default_word = Some("Par défaut".to_string());
        assert_eq!(build_label(custom).unwrap(), "2 - Census (Par défaut)");
    }
}
