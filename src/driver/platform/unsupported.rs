//! Stand-in loader for platforms without the Wintun driver.

use std::num::NonZeroU32;
use std::path::Path;

use crate::driver::{
    AdapterHandle, EntryPointFailure, EntryPoints, Guid, ResolutionError, WideString,
};

/// Loader for the Wintun support module. Never loads on this platform.
///
/// The type exists so callers can be written once for every target; a value
/// of it can never be constructed.
#[derive(Debug)]
pub enum WintunLibrary {}

impl WintunLibrary {
    /// Always fails: the driver only exists on Windows.
    ///
    /// # Errors
    ///
    /// Always returns [`ResolutionError::Unsupported`].
    pub fn load(_library: &Path) -> Result<Self, ResolutionError> {
        Err(ResolutionError::Unsupported)
    }
}

impl EntryPoints for WintunLibrary {
    fn create_adapter(
        &self,
        _name: &WideString,
        _tunnel_type: &WideString,
        _requested_guid: Option<&Guid>,
    ) -> Result<AdapterHandle, EntryPointFailure> {
        match *self {}
    }

    fn open_adapter(&self, _name: &WideString) -> Result<AdapterHandle, EntryPointFailure> {
        match *self {}
    }

    fn close_adapter(&self, _handle: &AdapterHandle) -> Result<(), EntryPointFailure> {
        match *self {}
    }

    fn delete_driver(&self) -> Result<(), EntryPointFailure> {
        match *self {}
    }

    fn adapter_luid(&self, _handle: &AdapterHandle) -> u64 {
        match *self {}
    }

    fn running_driver_version(&self) -> Result<NonZeroU32, EntryPointFailure> {
        match *self {}
    }
}
