//! Error types for adapter operations.

use thiserror::Error;

use crate::driver::{EncodingError, EntryPoint};

/// Error type for adapter manager operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// A name collision during create is never reported here: it is resolved
/// by opening the existing adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// An argument could not be encoded; no entry point was called.
    #[error("Invalid argument: {0}")]
    Encoding(#[from] EncodingError),

    /// No adapter with the requested name exists.
    #[error("Adapter '{name}' not found (error code {code})")]
    NotFound {
        /// Name that was looked up
        name: String,
        /// Platform error code
        code: u32,
    },

    /// The driver cannot be removed while adapters are open.
    #[error("Driver is in use by open adapters (error code {code})")]
    InUse {
        /// Platform error code
        code: u32,
    },

    /// An entry point reported any other failure.
    #[error("{entry_point} failed with error code {code}")]
    DriverCallFailed {
        /// The entry point that failed
        entry_point: EntryPoint,
        /// Platform error code
        code: u32,
    },
}

impl AdapterError {
    /// The platform error code behind this error, if one was reported.
    #[must_use]
    pub const fn code(&self) -> Option<u32> {
        match self {
            Self::Encoding(_) => None,
            Self::NotFound { code, .. }
            | Self::InUse { code }
            | Self::DriverCallFailed { code, .. } => Some(*code),
        }
    }
}
