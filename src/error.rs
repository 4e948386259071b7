//! # Error Handling
//!
//! This module defines the error type for the `orgunit-tree` library. It uses
//! `thiserror` to describe every failure that can happen at the edges of the
//! crate: reading settings files, adapting server payloads into trees, and
//! validating tree structure.
//!
//! The two core algorithms, [`crate::flatten`] and [`crate::resolver`], never
//! return errors. Missing remote data degrades to a documented default value
//! instead of an error, so the variants below only ever surface from the
//! payload and configuration adapters, the event bus, and the CLI.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! functions, making it easy to propagate errors with `?`.

use thiserror::Error;

/// Main error type for orgunit-tree operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.orgunit-tree.yaml` settings file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A tree or descriptor payload did not have the expected shape.
    #[error("Payload error: {message}")]
    Payload { message: String },

    /// The same node id appears more than once in a tree.
    #[error("Duplicate node id in tree: {id}")]
    DuplicateId { id: i64 },

    /// The tree is deeper than the configured validation limit.
    #[error("Tree depth exceeds limit of {limit} at node {id}")]
    DepthExceeded { limit: usize, id: i64 },

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
