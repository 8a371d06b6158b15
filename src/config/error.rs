//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::driver::GuidParseError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid adapter name.
    #[error("Invalid adapter name '{value}': {reason}")]
    InvalidName {
        /// The rejected name
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid tunnel type.
    #[error("Invalid tunnel type '{value}': {reason}")]
    InvalidTunnelType {
        /// The rejected tunnel type
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid requested GUID.
    #[error("{0}")]
    InvalidGuid(#[from] GuidParseError),

    /// Invalid driver module path.
    #[error("Invalid driver library path: {reason}")]
    InvalidLibrary {
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The adapter name field.
    pub const NAME: &str = "name";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
