//! Live adapter values and their release semantics.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::driver::{AdapterHandle, EntryPoint, EntryPoints, Luid};

use super::AdapterError;

/// A live handle to one Wintun adapter.
///
/// # Release
///
/// The handle is released exactly once:
/// - [`Adapter::close`] consumes the value, disarms the drop path, then calls
///   `WintunCloseAdapter`
/// - otherwise `Drop` calls `WintunCloseAdapter` when the value goes out of scope
///
/// Because `close` takes `self`, no method can be called on a released
/// adapter and a second close cannot be written.
pub struct Adapter {
    name: String,
    handle: AdapterHandle,
    entry_points: Arc<dyn EntryPoints>,
    /// Cleared by `close` so `Drop` skips the release.
    armed: bool,
}

impl Adapter {
    pub(crate) fn new(
        name: impl Into<String>,
        handle: AdapterHandle,
        entry_points: Arc<dyn EntryPoints>,
    ) -> Self {
        Self {
            name: name.into(),
            handle,
            entry_points,
            armed: true,
        }
    }

    /// The cosmetic name the adapter was created or opened with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The driver handle, for passing to other Wintun entry points.
    #[must_use]
    pub const fn handle(&self) -> &AdapterHandle {
        &self.handle
    }

    /// Queries the adapter's LUID via `WintunGetAdapterLUID`.
    #[must_use]
    pub fn luid(&self) -> Luid {
        Luid::new(self.entry_points.adapter_luid(&self.handle))
    }

    /// Closes the adapter via `WintunCloseAdapter`.
    ///
    /// The handle is invalid afterwards whether or not the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::DriverCallFailed`] with the platform code if the
    /// driver reports failure.
    pub fn close(mut self) -> Result<(), AdapterError> {
        self.armed = false;

        let result = self
            .entry_points
            .close_adapter(&self.handle)
            .map_err(|failure| AdapterError::DriverCallFailed {
                entry_point: EntryPoint::CloseAdapter,
                code: failure.code(),
            });

        if result.is_ok() {
            info!(adapter = %self.name, "Closed adapter");
        }
        result
    }
}

impl Drop for Adapter {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;

        match self.entry_points.close_adapter(&self.handle) {
            Ok(()) => info!(adapter = %self.name, "Released adapter on drop"),
            Err(failure) => warn!(
                adapter = %self.name,
                code = failure.code(),
                "Failed to release adapter on drop"
            ),
        }
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("name", &self.name)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}
