//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a hierarchy
//! payload and the settings file before they are used.
//!
//! ## Functionality
//!
//! - **Settings Validation**: Parses the settings file (explicit, project or
//!   user level) and reports unknown keys with suggestions.
//! - **Payload Validation**: Parses the hierarchy payload.
//! - **Structure Validation**: Checks that node ids are unique across all
//!   roots and that no branch is deeper than `max_depth`.
//! - **Warnings**: An empty payload, or a node using the id reserved for the
//!   synthetic forest root.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use orgunit_tree::config;
use orgunit_tree::output::{emoji, OutputConfig};
use orgunit_tree::tree::{validate_forest, VIRTUAL_ROOT_ID};

use super::load_tree_payload;

/// Validate a hierarchy payload and the settings file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON hierarchy payload to validate.
    #[arg(short, long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Path to a settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating hierarchy: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.tree.display()
    );

    let settings = match config::load(args.config.as_deref()) {
        Ok(settings) => {
            println!("{} Settings parsed successfully", emoji(&out, "✅", "[OK]"));
            settings
        }
        Err(e) => {
            println!(
                "{} Settings parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(anyhow::anyhow!("Settings parsing failed: {}", e));
        }
    };

    let roots = match load_tree_payload(&args.tree) {
        Ok(roots) => {
            println!("{} Payload parsed successfully", emoji(&out, "✅", "[OK]"));
            roots
        }
        Err(e) => {
            println!("{} Payload parsing failed", emoji(&out, "❌", "[ERR]"));
            return Err(e);
        }
    };

    let mut has_warnings = false;
    let mut has_errors = false;

    println!("\n{} Hierarchy Summary:", emoji(&out, "📊", "[INFO]"));
    println!("   Roots: {}", roots.len());
    println!(
        "   Nodes: {}",
        roots.iter().map(|root| root.node_count()).sum::<usize>()
    );
    println!(
        "   Depth: {}",
        roots.iter().map(|root| root.depth()).max().unwrap_or(0)
    );

    println!(
        "\n{} Checking structure (max depth {})...",
        emoji(&out, "🔄", "[CHECK]"),
        settings.max_depth
    );
    match validate_forest(&roots, settings.max_depth) {
        Ok(()) => println!(
            "{} Ids are unique and depth is within limits",
            emoji(&out, "✅", "[OK]")
        ),
        Err(e) => {
            println!("{} {}", emoji(&out, "❌", "[ERR]"), e);
            has_errors = true;
        }
    }

    if roots.is_empty() {
        println!("{} Payload holds no roots", emoji(&out, "⚠️", "[WARN]"));
        has_warnings = true;
    }
    if roots
        .iter()
        .any(|root| root.iter().any(|node| node.id == VIRTUAL_ROOT_ID))
    {
        println!(
            "{} Node id {} is reserved for the synthetic forest root",
            emoji(&out, "⚠️", "[WARN]"),
            VIRTUAL_ROOT_ID
        );
        has_warnings = true;
    }

    println!();
    if has_errors {
        println!("{} Validation failed", emoji(&out, "❌", "[ERR]"));
        anyhow::bail!("Validation failed for {}", args.tree.display());
    }
    if has_warnings && args.strict {
        println!(
            "{} Validation failed (strict mode)",
            emoji(&out, "❌", "[ERR]")
        );
        anyhow::bail!("Validation produced warnings in strict mode");
    }
    if has_warnings {
        println!(
            "{} Validation passed with warnings",
            emoji(&out, "⚠️", "[WARN]")
        );
    } else {
        println!("{} Validation passed", emoji(&out, "✅", "[OK]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(tree: PathBuf, config: PathBuf, strict: bool) -> ValidateArgs {
        ValidateArgs {
            tree,
            config: Some(config),
            strict,
        }
    }

    #[test]
    fn test_valid_tree_passes() {
        let dir = TempDir::new().unwrap();
        let tree = write(
            &dir,
            "tree.json",
            r#"{"id": 1, "name": "A", "children": [{"id": 2, "name": "B"}]}"#,
        );
        let config = write(&dir, "settings.yaml", "");
        assert!(execute(args(tree, config, false), "never").is_ok());
    }

    #[test]
    fn test_duplicate_id_fails() {
        let dir = TempDir::new().unwrap();
        let tree = write(
            &dir,
            "tree.json",
            r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#,
        );
        let config = write(&dir, "settings.yaml", "");
        let err = execute(args(tree, config, false), "never").unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_depth_limit_from_settings() {
        let dir = TempDir::new().unwrap();
        let tree = write(
            &dir,
            "tree.json",
            r#"{"id": 1, "name": "A", "children": [{"id": 2, "name": "B"}]}"#,
        );
        let config = write(&dir, "settings.yaml", "max_depth: 1");
        assert!(execute(args(tree, config, false), "never").is_err());
    }

    #[test]
    fn test_reserved_id_is_warning_unless_strict() {
        let dir = TempDir::new().unwrap();
        let tree = write(&dir, "tree.json", r#"{"id": 0, "name": "Root"}"#);
        let config = write(&dir, "settings.yaml", "");
        assert!(execute(args(tree.clone(), config.clone(), false), "never").is_ok());
        assert!(execute(args(tree, config, true), "never").is_err());
    }

    #[test]
    fn test_bad_settings_fail() {
        let dir = TempDir::new().unwrap();
        let tree = write(&dir, "tree.json", r#"{"id": 1, "name": "A"}"#);
        let config = write(&dir, "settings.yaml", "max_dept: 3");
        let err = execute(args(tree, config, false), "never").unwrap_err();
        assert!(err.to_string().contains("Did you mean `max_depth`?"));
    }
}
