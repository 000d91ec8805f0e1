//! Error types for configuration loading and schema validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::AppConfig`].
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be rendered back to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A column is declared under two roles.
    #[error("column '{column}' is declared as both {first} and {second}")]
    OverlappingRoles {
        column: String,
        first: &'static str,
        second: &'static str,
    },

    /// The label column is also declared as a feature role.
    #[error("label column '{column}' must not be declared as {role}")]
    LabelInRole { column: String, role: &'static str },

    /// An ordinal column has no categories or repeats one.
    #[error("invalid categories for ordinal column '{column}': {reason}")]
    InvalidOrdinal { column: String, reason: String },

    /// A scalar setting is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
