//! Error types for the driver layer.

use std::path::PathBuf;

use thiserror::Error;

use super::EntryPoint;

/// A string argument could not be marshaled into a wide string.
///
/// Detected before any entry point is called; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// The string was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Which argument was rejected
        field: &'static str,
    },

    /// The string contained a NUL character, which would truncate it.
    #[error("{field} contains a NUL character at position {position}")]
    InteriorNul {
        /// Which argument was rejected
        field: &'static str,
        /// Index of the first NUL in UTF-16 code units
        position: usize,
    },

    /// The string is not valid Unicode.
    #[error("{field} is not valid Unicode")]
    NotUnicode {
        /// Which argument was rejected
        field: &'static str,
    },
}

/// The driver support module or one of its entry points could not be resolved.
///
/// Returned once, when the module is loaded. Nothing is called through a
/// partially resolved module.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The module could not be loaded.
    #[error("Failed to load driver module '{}' (error code {code})", module.display())]
    ModuleNotFound {
        /// Module name or path that was requested
        module: PathBuf,
        /// Platform error code
        code: u32,
    },

    /// The module loaded but does not export a required symbol.
    #[error("Driver module does not export '{symbol}' (error code {code})")]
    SymbolNotFound {
        /// The missing entry point
        symbol: EntryPoint,
        /// Platform error code
        code: u32,
    },

    /// The module path could not be marshaled.
    #[error("Invalid driver module path: {0}")]
    InvalidPath(#[source] EncodingError),

    /// The driver is only available on Windows.
    #[error("Wintun driver is not supported on this platform")]
    Unsupported,
}

/// A GUID string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid GUID '{value}': expected {{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}}")]
pub struct GuidParseError {
    /// The rejected input
    pub value: String,
}
