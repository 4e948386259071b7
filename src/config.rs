//! # Settings File
//!
//! This module defines the `.orgunit-tree.yaml` settings file and the logic
//! for locating and parsing it.
//!
//! ## Format
//!
//! ```yaml
//! # Word appended to the label of a default version: "3 - Q1 (Default)"
//! default_word: Default
//! # Deepest hierarchy accepted by `validate`
//! max_depth: 64
//! # Fallback scope used when neither a version nor a source is selected
//! account:
//!   default_version:
//!     id: 5
//!     number: 2
//!     description: Q1
//!     is_default: true
//!     tree_config_status_fields: [NEW, VALID]
//!     data_source: 9
//!     data_source_name: Pyramid
//! ```
//!
//! Every key is optional. Unknown keys are rejected with a hint naming the
//! closest valid key.
//!
//! ## Lookup Order
//!
//! [`load`] uses the first of:
//!
//! 1. an explicit path (which must exist),
//! 2. `.orgunit-tree.yaml` in the current directory,
//! 3. the user settings file from [`crate::defaults::default_user_settings_path`],
//! 4. built-in defaults.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults::{
    default_user_settings_path, DEFAULT_MAX_DEPTH, DEFAULT_WORD, SETTINGS_FILE_NAME,
};
use crate::error::{Error, Result};
use crate::suggestions;
use crate::version::{LabelFormat, VersionDescriptor};

/// Keys accepted in the settings file, nested ones included.
pub const SETTINGS_KEYS: &[&str] = &["default_word", "max_depth", "account", "default_version"];

/// Account-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSettings {
    /// Version used when no version or source is selected.
    #[serde(default)]
    pub default_version: Option<VersionDescriptor>,
}

/// Parsed settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_word")]
    pub default_word: String,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default)]
    pub account: AccountSettings,
}

fn default_word() -> String {
    DEFAULT_WORD.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_word: default_word(),
            max_depth: default_max_depth(),
            account: AccountSettings::default(),
        }
    }
}

impl Settings {
    pub fn label_format(&self) -> LabelFormat {
        LabelFormat::new(self.default_word.clone())
    }

    pub fn account_default(&self) -> Option<&VersionDescriptor> {
        self.account.default_version.as_ref()
    }
}

/// Parse settings from YAML. An empty document yields the defaults.
pub fn parse(yaml_content: &str) -> Result<Settings> {
    if yaml_content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        Error::ConfigParse {
            hint: unknown_field_hint(&message),
            message,
        }
    })?;

    if settings.max_depth == 0 {
        return Err(Error::ConfigParse {
            message: "max_depth must be at least 1".to_string(),
            hint: Some("Remove max_depth to use the default of 64".to_string()),
        });
    }
    Ok(settings)
}

/// Turn serde's "unknown field `x`" message into a did-you-mean hint.
fn unknown_field_hint(message: &str) -> Option<String> {
    let marker = "unknown field `";
    let rest = &message[message.find(marker)? + marker.len()..];
    let field = &rest[..rest.find('`')?];
    Some(match suggestions::find_similar(field, SETTINGS_KEYS) {
        Some(key) => format!("Did you mean `{}`?", key),
        None => format!("Valid keys are: {}", SETTINGS_KEYS.join(", ")),
    })
}

/// Parse settings from a YAML file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Locate and parse the settings file, see the module docs for the order.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    load_from(
        explicit,
        Path::new(SETTINGS_FILE_NAME),
        &default_user_settings_path(),
    )
}

fn load_from(explicit: Option<&Path>, project: &Path, user: &Path) -> Result<Settings> {
    let candidate: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [project, user]
            .into_iter()
            .find(|path| path.is_file())
            .map(Path::to_path_buf),
    };

    match candidate {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            from_file(&path)
        }
        None => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
