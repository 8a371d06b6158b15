//! Platform-specific loaders for the driver support module.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`EntryPoints`](super::EntryPoints) trait.
//!
//! # Platform Support
//!
//! - **Windows**: Loads `wintun.dll` via `LoadLibraryExW` and resolves every
//!   entry point with `GetProcAddress` at load time.
//! - **Other platforms**: [`WintunLibrary::load`] always fails with
//!   [`ResolutionError::Unsupported`](super::ResolutionError::Unsupported).

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use self::windows::WintunLibrary;

#[cfg(not(windows))]
pub use unsupported::WintunLibrary;
