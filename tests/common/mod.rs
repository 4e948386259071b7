//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures, helper functions, and payloads
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_tree(payloads::COUNTRY);
//!     fixture.command().arg("flatten").arg("--tree").arg(fixture.tree_path());
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::payloads;
    pub use super::TestFixture;
}

/// Hierarchy payloads and resolve inputs used across tests.
#[allow(dead_code)]
pub mod payloads {
    /// Org-unit-type hierarchy as returned by the type endpoint.
    ///
    /// ```text
    /// 1 Country
    /// ├── 2 Region
    /// │   ├── 3 District
    /// │   └── 4 Health Area
    /// └── 5 Facility
    /// ```
    pub const COUNTRY: &str = r#"{
  "id": 1,
  "name": "Country",
  "depth": 0,
  "sub_unit_types": [
    {
      "id": 2,
      "name": "Region",
      "sub_unit_types": [
        {"id": 3, "name": "District", "sub_unit_types": []},
        {"id": 4, "name": "Health Area", "sub_unit_types": null}
      ]
    },
    {"id": 5, "name": "Facility"}
  ]
}"#;

    /// Two sibling roots as returned by the org-unit tree endpoint.
    pub const FOREST: &str = r#"[
  {"id": 10, "name": "North", "children": [{"id": 11, "name": "Clinic A"}]},
  {"id": 20, "name": "South", "children": [{"id": 21, "name": "Clinic B"}]}
]"#;

    /// Same id used twice.
    pub const DUPLICATE_IDS: &str = r#"{
  "id": 1,
  "name": "Root",
  "children": [{"id": 2, "name": "A"}, {"id": 2, "name": "B"}]
}"#;

    /// A version selection whose version is loaded.
    pub const RESOLVE_VERSION: &str = r#"
version_id: 5
source_id: 9
version:
  data:
    id: 5
    number: 3
    description: Q1
    is_default: true
    status_fields: [VALID]
    tree_config_status_fields: [NEW, VALID, REJECTED]
    data_source: 9
    data_source_name: Pyramid
  is_fetching: false
source:
  data:
    id: 9
    name: Pyramid
  is_fetching: false
"#;

    /// A source selection whose source is still loading.
    pub const RESOLVE_PENDING_SOURCE: &str = r#"
source_id: 9
source:
  is_fetching: true
"#;

    /// Settings with an account default version.
    pub const SETTINGS_WITH_ACCOUNT: &str = r#"
default_word: Standard
account:
  default_version:
    id: 7
    number: 1
    description: Baseline
    is_default: true
    data_source: 4
    data_source_name: Registry
"#;
}

/// A test fixture that provides a temporary directory with optional payloads.
///
/// Commands created from the fixture run inside the directory and with the
/// user configuration directory pointed at it, so no settings file outside
/// the fixture is picked up.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_tree(payloads::COUNTRY)
///     .with_settings("default_word: Standard");
///
/// fixture.command()
///     .args(["validate", "--tree"])
///     .arg(fixture.tree_path())
///     .assert()
///     .success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `tree.json` with the given content.
    pub fn with_tree(self, content: &str) -> Self {
        self.with_file("tree.json", content)
    }

    /// Write `input.yaml` with the given content.
    pub fn with_input(self, content: &str) -> Self {
        self.with_file("input.yaml", content)
    }

    /// Write a project-level `.orgunit-tree.yaml` with the given content.
    pub fn with_settings(self, content: &str) -> Self {
        self.with_file(".orgunit-tree.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn tree_path(&self) -> PathBuf {
        self.temp_dir.path().join("tree.json")
    }

    pub fn input_path(&self) -> PathBuf {
        self.temp_dir.path().join("input.yaml")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("orgunit-tree");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_tree() {
        let fixture = TestFixture::new().with_tree(payloads::COUNTRY);
        assert!(fixture.tree_path().exists());
    }

    #[test]
    fn test_payloads_are_valid() {
        for payload in [payloads::COUNTRY, payloads::FOREST, payloads::DUPLICATE_IDS] {
            let parsed = serde_json::from_str::<serde_json::Value>(payload);
            assert!(parsed.is_ok(), "Payload should be valid JSON");
        }
        for input in [
            payloads::RESOLVE_VERSION,
            payloads::RESOLVE_PENDING_SOURCE,
            payloads::SETTINGS_WITH_ACCOUNT,
        ] {
            serde_yaml::from_str::<serde_yaml::Value>(input).expect("Input should be valid YAML");
        }
    }
}
