//! # Source Configuration Resolution
//!
//! Decides which configuration scope is authoritative for an org-unit view and
//! derives the status fields and display information from it.
//!
//! ## Precedence
//!
//! Scopes are tried in a fixed order and the first one that applies wins:
//!
//! 1. **Version**: a version id was requested.
//! 2. **Source**: a source id was requested (and no version id); the source's
//!    default version is used.
//! 3. **Account default**: the account has a default version.
//! 4. **Fallback**: nothing is available.
//!
//! A scope applies as soon as its selector is present, whether or not its data
//! has arrived. While the data is pending or absent, and when it carries no
//! status fields, the hardcoded `["VALID"]` is used. The resolver never falls
//! through to a lower scope because of missing data.
//!
//! Each scope is a lazy provider and [`first_available`] folds over them, so the
//! ordering lives in one list instead of a chain of conditionals.
//!
//! ## Purity
//!
//! [`resolve`] performs no I/O and holds no state. The version and source
//! lookups are done by the caller and handed in as [`Fetch`] values together
//! with their pending flag. [`MemoizedResolver`] caches the last result and
//! only recomputes when the input changes.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults::default_status_fields;
use crate::error::Result;
use crate::version::{LabelFormat, SourceDescriptor, VersionDescriptor};

/// Result of an asynchronous lookup done by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fetch<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub is_fetching: bool,
}

impl<T> Fetch<T> {
    /// A completed lookup.
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_fetching: false,
        }
    }

    /// A lookup still in flight.
    pub fn pending() -> Self {
        Self {
            data: None,
            is_fetching: true,
        }
    }

    /// A lookup that was never started or returned nothing.
    pub fn missing() -> Self {
        Self {
            data: None,
            is_fetching: false,
        }
    }

    /// The data, once the lookup has settled.
    fn settled(&self) -> Option<&T> {
        if self.is_fetching {
            None
        } else {
            self.data.as_ref()
        }
    }
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self::missing()
    }
}

/// Everything the resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveInput {
    pub version_id: Option<i64>,
    pub source_id: Option<i64>,
    pub version: Fetch<VersionDescriptor>,
    pub source: Fetch<SourceDescriptor>,
    /// Default version of the current account.
    pub account_default: Option<VersionDescriptor>,
    pub label_format: LabelFormat,
}

/// Parse a YAML (or JSON) resolve input document.
///
/// Also reports whether the document set `label_format` itself, so callers
/// can fill it in from settings otherwise. A blank document is an empty input.
pub fn parse_resolve_input(content: &str) -> Result<(ResolveInput, bool)> {
    let value: serde_yaml::Value = if content.trim().is_empty() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content)?
    };
    let has_label_format = value.get("label_format").is_some();
    Ok((serde_yaml::from_value(value)?, has_label_format))
}

/// The configuration level a resolution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigScope {
    Version,
    Source,
    AccountDefault,
    Fallback,
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConfigScope::Version => "version",
            ConfigScope::Source => "source",
            ConfigScope::AccountDefault => "account default",
            ConfigScope::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Status fields and label of the active scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsBundle {
    /// Ordered set: first occurrence wins, duplicates dropped.
    pub status_fields: Vec<String>,
    pub label: String,
}

impl SettingsBundle {
    /// Build a bundle, falling back to `["VALID"]` when `fields` is empty.
    pub fn new<'a, I>(fields: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut status_fields: Vec<String> = Vec::new();
        for field in fields {
            if !status_fields.contains(field) {
                status_fields.push(field.clone());
            }
        }
        if status_fields.is_empty() {
            status_fields = default_status_fields();
        }
        Self {
            status_fields,
            label: label.into(),
        }
    }
}

/// Display information about the source and version in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfos {
    pub name: Option<String>,
    pub source_id: Option<i64>,
    pub version_number: i64,
    pub version_id: i64,
    pub label: String,
    pub is_default: bool,
}

impl SourceInfos {
    fn from_version(
        version: &VersionDescriptor,
        name: Option<String>,
        source_id: Option<i64>,
        format: &LabelFormat,
    ) -> Self {
        Self {
            name,
            source_id,
            version_number: version.number,
            version_id: version.id,
            label: format.format(version),
            is_default: version.is_default,
        }
    }
}

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub scope: ConfigScope,
    pub status_fields: Vec<String>,
    pub is_fetching: bool,
    pub infos: Option<SourceInfos>,
}

impl Resolution {
    fn fallback() -> Self {
        Self::unresolved(ConfigScope::Fallback, false)
    }

    fn unresolved(scope: ConfigScope, is_fetching: bool) -> Self {
        Self {
            scope,
            status_fields: default_status_fields(),
            is_fetching,
            infos: None,
        }
    }

    fn from_version(
        scope: ConfigScope,
        version: &VersionDescriptor,
        infos: SourceInfos,
        is_fetching: bool,
    ) -> Self {
        let bundle = SettingsBundle::new(version.status_fields(), infos.label.as_str());
        Self {
            scope,
            status_fields: bundle.status_fields,
            is_fetching,
            infos: Some(infos),
        }
    }

    /// The resolution as a settings bundle; the label is empty when no
    /// version information is available.
    pub fn settings(&self) -> SettingsBundle {
        let label = self
            .infos
            .as_ref()
            .map(|infos| infos.label.clone())
            .unwrap_or_default();
        SettingsBundle::new(&self.status_fields, label)
    }
}

/// A lazily evaluated candidate; `None` means "does not apply".
pub type Provider<'a, T> = Box<dyn FnOnce() -> Option<T> + 'a>;

/// Evaluate providers in order and return the first `Some`. Providers after
/// the winning one are never called.
pub fn first_available<'a, T, I>(providers: I) -> Option<T>
where
    I: IntoIterator<Item = Provider<'a, T>>,
{
    providers.into_iter().find_map(|provider| provider())
}

fn version_scope(input: &ResolveInput) -> Option<Resolution> {
    input.version_id?;
    let fetching = input.version.is_fetching;
    Some(match input.version.settled() {
        Some(version) => {
            let infos = SourceInfos::from_version(
                version,
                version.data_source_name.clone(),
                version.data_source,
                &input.label_format,
            );
            Resolution::from_version(ConfigScope::Version, version, infos, fetching)
        }
        None => Resolution::unresolved(ConfigScope::Version, fetching),
    })
}

fn source_scope(input: &ResolveInput) -> Option<Resolution> {
    input.source_id?;
    let fetching = input.source.is_fetching;
    let settled = input
        .source
        .settled()
        .and_then(|source| source.default_version.as_ref().map(|v| (source, v)));
    Some(match settled {
        Some((source, version)) => {
            let infos = SourceInfos::from_version(
                version,
                Some(source.name.clone()),
                Some(source.id),
                &input.label_format,
            );
            Resolution::from_version(ConfigScope::Source, version, infos, fetching)
        }
        None => Resolution::unresolved(ConfigScope::Source, fetching),
    })
}

fn account_scope(input: &ResolveInput) -> Option<Resolution> {
    let version = input.account_default.as_ref()?;
    let infos = SourceInfos::from_version(
        version,
        version.data_source_name.clone(),
        version.data_source,
        &input.label_format,
    );
    Some(Resolution::from_version(
        ConfigScope::AccountDefault,
        version,
        infos,
        false,
    ))
}

/// Resolve the configuration for `input`.
pub fn resolve(input: &ResolveInput) -> Resolution {
    let providers: Vec<Provider<'_, Resolution>> = vec![
        Box::new(|| version_scope(input)),
        Box::new(|| source_scope(input)),
        Box::new(|| account_scope(input)),
    ];
    first_available(providers).unwrap_or_else(Resolution::fallback)
}

/// Caches the last resolution and recomputes only when the input changes.
#[derive(Debug, Default)]
pub struct MemoizedResolver {
    cached: Option<(ResolveInput, Resolution)>,
    computations: usize,
}

impl MemoizedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, input: &ResolveInput) -> &Resolution {
        let stale = matches!(&self.cached, Some((last, _)) if last != input);
        if stale {
            self.cached = None;
        }
        if self.cached.is_none() {
            self.computations += 1;
            debug!(
                "Recomputing source configuration (version_id={:?}, source_id={:?})",
                input.version_id, input.source_id
            );
        }
        let (_, resolution) = self
            .cached
            .get_or_insert_with(|| (input.clone(), resolve(input)));
        resolution
    }

    /// Number of times the underlying resolution actually ran.
    pub fn computations(&self) -> usize {
        self.computations
    }
}
