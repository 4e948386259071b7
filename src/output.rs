//! # Output Rendering
//!
//! This module controls how the CLI presents flattened hierarchies and
//! resolved configurations: plain text for terminals, JSON for scripts, and
//! color/emoji decoration that follows the user's terminal preferences.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Write as _;

use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::flatten::FlatOption;
use crate::resolver::Resolution;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, anything else detects support.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Output format of the `flatten` and `resolve` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// One line per option, indented two spaces per level: `{id} {label}`.
pub fn render_options(options: &[FlatOption<'_>], config: &OutputConfig) -> String {
    let mut out = String::new();
    for option in options {
        let indent = "  ".repeat(option.depth);
        if config.use_color {
            let value = style(option.value).dim();
            let _ = writeln!(out, "{}{} {}", indent, value, option.label);
        } else {
            let _ = writeln!(out, "{}{} {}", indent, option.value, option.label);
        }
    }
    out
}

/// Key/value summary of a resolution.
pub fn render_resolution(resolution: &Resolution, config: &OutputConfig) -> String {
    let key = |name: &str| {
        if config.use_color {
            style(name).bold().to_string()
        } else {
            name.to_string()
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", key("scope"), resolution.scope);
    let _ = writeln!(
        out,
        "{}: {}",
        key("status fields"),
        resolution.status_fields.join(", ")
    );
    let _ = writeln!(
        out,
        "{}: {}",
        key("fetching"),
        if resolution.is_fetching { "yes" } else { "no" }
    );
    match &resolution.infos {
        Some(infos) => {
            let source = match (&infos.name, infos.source_id) {
                (Some(name), Some(id)) => format!("{} ({})", name, id),
                (Some(name), None) => name.clone(),
                (None, Some(id)) => id.to_string(),
                (None, None) => "-".to_string(),
            };
            let _ = writeln!(out, "{}: {}", key("source"), source);
            let _ = writeln!(
                out,
                "{}: {} [id {}]",
                key("version"),
                infos.label,
                infos.version_id
            );
        }
        None => {
            let _ = writeln!(out, "{}: -", key("version"));
        }
    }
    out
}

/// Serialize `value` as pretty-printed JSON for `--format json`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
