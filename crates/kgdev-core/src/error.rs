//! Error types for the kgdev core library.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::FieldPath;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for kgdev.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Frontmatter parsing error.
    #[error("Frontmatter error in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    /// Content collection could not be loaded.
    #[error("Collection error in {path}: {message}")]
    Collection { path: PathBuf, message: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// YAML parsing or conversion error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new frontmatter error.
    pub fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new collection error.
    pub fn collection(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Collection {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A single schema violation found while validating a raw record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required field is absent, or a field has the wrong type.
    #[error("{path}: expected {expected}, found {found}")]
    MissingOrInvalidField {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },

    /// A field's value is outside its enumerated set.
    #[error("{path}: invalid value \"{value}\", expected one of: {}", .allowed.join(", "))]
    InvalidEnumValue {
        path: FieldPath,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A URL-typed field does not hold an absolute URL.
    #[error("{path}: invalid URL \"{value}\": {reason}")]
    InvalidUrl {
        path: FieldPath,
        value: String,
        reason: String,
    },
}

impl SchemaError {
    /// Location of the offending value.
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::MissingOrInvalidField { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::InvalidUrl { path, .. } => path,
        }
    }
}
