//! # Source and Version Descriptors
//!
//! Descriptors for the two remote objects the configuration resolver reads,
//! plus the fixed version label format shown in pickers and headers.
//!
//! ## Label Format
//!
//! A version label is built from three parts, always in this order:
//!
//! 1. the version number: `3`
//! 2. ` - {description}` when the description is non-empty: `3 - Q1`
//! 3. ` ({default word})` when the version is its source's default:
//!    `3 - Q1 (Default)`
//!
//! The order is not configurable. Only the default word is, so that callers
//! can pass a translated word.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_WORD;

/// A data source version as returned by the version lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionDescriptor {
    pub id: i64,
    pub number: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "isDefault")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_fields: Option<Vec<String>>,
    /// Tree-configuration status fields; take precedence over `status_fields`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_config_status_fields: Option<Vec<String>>,
    /// Id of the source this version belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_name: Option<String>,
}

impl VersionDescriptor {
    pub fn new(id: i64, number: i64) -> Self {
        Self {
            id,
            number,
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_tree_config_status_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tree_config_status_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_data_source(mut self, id: i64, name: impl Into<String>) -> Self {
        self.data_source = Some(id);
        self.data_source_name = Some(name.into());
        self
    }

    /// Status fields carried by this version, empty when it has none.
    ///
    /// `tree_config_status_fields` wins whenever it is present, even if empty.
    pub fn status_fields(&self) -> &[String] {
        self.tree_config_status_fields
            .as_deref()
            .or(self.status_fields.as_deref())
            .unwrap_or(&[])
    }

    /// The description, if it is non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A data source as returned by the source lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub default_version: Option<VersionDescriptor>,
}

/// Version label formatting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFormat {
    /// Word shown in parentheses after the default version's label.
    pub default_word: String,
}

impl LabelFormat {
    pub fn new(default_word: impl Into<String>) -> Self {
        Self {
            default_word: default_word.into(),
        }
    }

    pub fn format(&self, version: &VersionDescriptor) -> String {
        format_version_label(version, &self.default_word)
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::new(DEFAULT_WORD)
    }
}

/// Format a version label as `{number}[ - {description}][ ({default_word})]`.
pub fn format_version_label(version: &VersionDescriptor, default_word: &str) -> String {
    let mut label = version.number.to_string();
    if let Some(description) = version.description() {
        label.push_str(" - ");
        label.push_str(description);
    }
    if version.is_default {
        label.push_str(&format!(" ({})", default_word));
    }
    label
}
