//! Default values for orgunit-tree.
//!
//! This module provides centralized default values used across the library
//! and the CLI, ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Status fields used whenever the active scope has none to offer.
pub const DEFAULT_STATUS_FIELDS: &[&str] = &["VALID"];

/// Word appended in parentheses to the label of a default version.
pub const DEFAULT_WORD: &str = "Default";

/// Name of the project-level settings file.
pub const SETTINGS_FILE_NAME: &str = ".orgunit-tree.yaml";

/// Maximum tree depth accepted by [`crate::tree::TreeNode::validate`] when
/// no settings override it.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Returns the hardcoded fallback status fields as owned strings.
pub fn default_status_fields() -> Vec<String> {
    DEFAULT_STATUS_FIELDS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Returns the default user-level settings path.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/orgunit-tree/settings.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/orgunit-tree/settings.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\orgunit-tree\settings.yaml`
///
/// Falls back to `.orgunit-tree/settings.yaml` in the current directory if
/// the platform configuration directory cannot be determined.
pub fn default_user_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".orgunit-tree"))
        .join("orgunit-tree")
        .join("settings.yaml")
}
