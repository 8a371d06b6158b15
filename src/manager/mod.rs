//! Adapter manager: create, open and release Wintun adapters.
//!
//! This module provides:
//! - [`AdapterManager`]: the driver-wide operations (create, open, uninstall, version)
//! - [`Adapter`]: a live handle released exactly once, by [`Adapter::close`] or on drop
//! - [`AdapterError`]: the failures callers can distinguish
//!
//! # Create Semantics
//!
//! Creating an adapter whose name is already taken is not an error: when the
//! driver reports `ERROR_ALREADY_EXISTS`, `create` opens the existing adapter
//! instead. The fallback happens once and never loops.

mod adapter;
mod error;


pub use adapter::Adapter;
pub use error::AdapterError;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::driver::platform::WintunLibrary;
use crate::driver::{
    DriverVersion, EntryPoint, EntryPointFailure, EntryPoints, Guid, ResolutionError, WideString,
    codes,
};

/// Entry point to the Wintun driver.
///
/// Cheap to clone: every clone and every [`Adapter`] it produces shares one
/// resolved entry-point table, which is read-only and needs no locking.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use wintun_adapter::AdapterManager;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = AdapterManager::load(Path::new("wintun.dll"))?;
/// let adapter = manager.create("Demo", "Wintun", None)?;
/// println!("{} has LUID {}", adapter.name(), adapter.luid());
/// adapter.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdapterManager {
    entry_points: Arc<dyn EntryPoints>,
}

impl std::fmt::Debug for AdapterManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterManager").finish_non_exhaustive()
    }
}

impl AdapterManager {
    /// Creates a manager over the given entry points.
    #[must_use]
    pub fn new(entry_points: impl EntryPoints + 'static) -> Self {
        Self {
            entry_points: Arc::new(entry_points),
        }
    }

    /// Creates a manager over an already shared entry-point table.
    #[must_use]
    pub fn from_shared(entry_points: Arc<dyn EntryPoints>) -> Self {
        Self { entry_points }
    }

    /// Loads the driver support module and resolves every entry point.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] if the module or any entry point cannot be
    /// resolved. No partially resolved manager is ever returned.
    pub fn load(library: &Path) -> Result<Self, ResolutionError> {
        WintunLibrary::load(library).map(Self::new)
    }

    /// Creates an adapter, or opens it if an adapter with `name` already exists.
    ///
    /// `requested_guid` fixes the adapter's network GUID so that Windows
    /// reuses the matching network-location profile. With `None`, the system
    /// picks a random GUID and a fresh profile is created.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::Encoding`] if `name` or `tunnel_type` is empty or contains NUL
    /// - [`AdapterError::NotFound`] if the name collided but the adapter vanished before it could be opened
    /// - [`AdapterError::DriverCallFailed`] for any other driver failure
    pub fn create(
        &self,
        name: &str,
        tunnel_type: &str,
        requested_guid: Option<&Guid>,
    ) -> Result<Adapter, AdapterError> {
        let wide_name = WideString::new("name", name)?;
        let wide_tunnel_type = WideString::new("tunnel_type", tunnel_type)?;

        debug!(
            adapter = name,
            tunnel_type,
            guid = ?requested_guid.map(ToString::to_string),
            "Creating adapter"
        );

        match self
            .entry_points
            .create_adapter(&wide_name, &wide_tunnel_type, requested_guid)
        {
            Ok(handle) => {
                info!(adapter = name, "Created adapter");
                Ok(Adapter::new(name, handle, Arc::clone(&self.entry_points)))
            }
            Err(failure) if failure.code() == codes::ALREADY_EXISTS => {
                debug!(adapter = name, "Adapter already exists, opening it instead");
                self.open_encoded(name, &wide_name)
            }
            Err(failure) => Err(driver_call_failed(EntryPoint::CreateAdapter, failure)),
        }
    }

    /// Opens an existing adapter by name.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::Encoding`] if `name` is empty or contains NUL
    /// - [`AdapterError::NotFound`] if no adapter with `name` exists
    /// - [`AdapterError::DriverCallFailed`] for any other driver failure
    pub fn open(&self, name: &str) -> Result<Adapter, AdapterError> {
        let wide_name = WideString::new("name", name)?;
        self.open_encoded(name, &wide_name)
    }

    fn open_encoded(&self, name: &str, wide_name: &WideString) -> Result<Adapter, AdapterError> {
        debug!(adapter = name, "Opening adapter");

        let handle = self
            .entry_points
            .open_adapter(wide_name)
            .map_err(|failure| {
                if codes::is_not_found(failure.code()) {
                    AdapterError::NotFound {
                        name: name.to_string(),
                        code: failure.code(),
                    }
                } else {
                    driver_call_failed(EntryPoint::OpenAdapter, failure)
                }
            })?;

        info!(adapter = name, "Opened adapter");
        Ok(Adapter::new(name, handle, Arc::clone(&self.entry_points)))
    }

    /// Removes the driver from the system.
    ///
    /// The driver refuses while any adapter is open, in this process or another.
    ///
    /// # Errors
    ///
    /// - [`AdapterError::InUse`] if adapters are still open
    /// - [`AdapterError::DriverCallFailed`] for any other driver failure
    pub fn uninstall(&self) -> Result<(), AdapterError> {
        debug!("Deleting driver");

        self.entry_points.delete_driver().map_err(|failure| {
            if failure.code() == codes::SHARING_VIOLATION {
                AdapterError::InUse {
                    code: failure.code(),
                }
            } else {
                driver_call_failed(EntryPoint::DeleteDriver, failure)
            }
        })?;

        info!("Driver deleted");
        Ok(())
    }

    /// Returns the version of the running driver.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::DriverCallFailed`] when no driver is running or
    /// the query is unsupported; `ERROR_FILE_NOT_FOUND` means not running.
    pub fn running_version(&self) -> Result<DriverVersion, AdapterError> {
        self.entry_points
            .running_driver_version()
            .map(DriverVersion::new)
            .map_err(|failure| driver_call_failed(EntryPoint::GetRunningDriverVersion, failure))
    }
}

const fn driver_call_failed(entry_point: EntryPoint, failure: EntryPointFailure) -> AdapterError {
    AdapterError::DriverCallFailed {
        entry_point,
        code: failure.code(),
    }
}
