//! Driver layer: the entry points exported by the Wintun support module.
//!
//! This module provides types and traits for:
//! - The entry-point seam implemented by loaders and test doubles ([`EntryPoints`])
//! - Opaque adapter handles ([`AdapterHandle`])
//! - Wide-string marshaling ([`WideString`])
//! - Identifier types crossing the FFI boundary ([`Guid`], [`Luid`], [`DriverVersion`])
//! - Platform-specific module loading ([`platform`])

mod entry;
mod error;
mod handle;
pub mod platform;
mod types;
mod wide;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod types_tests;

pub use entry::{EntryPoint, EntryPointFailure, EntryPoints, codes};
pub use error::{EncodingError, GuidParseError, ResolutionError};
pub use handle::AdapterHandle;
pub use types::{DriverVersion, Guid, Luid};
pub use wide::WideString;
