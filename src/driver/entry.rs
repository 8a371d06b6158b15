//! Entry-point trait and the failure codes it reports.

use std::ffi::CStr;
use std::fmt;
use std::num::NonZeroU32;

use super::{AdapterHandle, Guid, WideString};

/// Win32 error codes the adapter manager interprets.
///
/// Implementations of [`EntryPoints`] must report failures using these
/// values, translating from their native error space if necessary.
pub mod codes {
    /// `ERROR_FILE_NOT_FOUND`
    pub const FILE_NOT_FOUND: u32 = 2;
    /// `ERROR_PATH_NOT_FOUND`
    pub const PATH_NOT_FOUND: u32 = 3;
    /// `ERROR_INVALID_HANDLE`
    pub const INVALID_HANDLE: u32 = 6;
    /// `ERROR_SHARING_VIOLATION`, reported by delete-driver while adapters are open.
    pub const SHARING_VIOLATION: u32 = 32;
    /// `ERROR_ALREADY_EXISTS`, reported by create when the name collides.
    pub const ALREADY_EXISTS: u32 = 183;
    /// `ERROR_NOT_FOUND`
    pub const NOT_FOUND: u32 = 1168;

    /// Returns true if `code` means the requested object does not exist.
    #[must_use]
    pub const fn is_not_found(code: u32) -> bool {
        matches!(code, FILE_NOT_FOUND | PATH_NOT_FOUND | NOT_FOUND)
    }
}

/// One of the functions exported by the driver support module.
///
/// The exported symbol names are part of the compatibility contract:
/// the module must export precisely these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `WintunCreateAdapter`
    CreateAdapter,
    /// `WintunOpenAdapter`
    OpenAdapter,
    /// `WintunCloseAdapter`
    CloseAdapter,
    /// `WintunDeleteDriver`
    DeleteDriver,
    /// `WintunGetAdapterLUID`
    GetAdapterLuid,
    /// `WintunGetRunningDriverVersion`
    GetRunningDriverVersion,
}

impl EntryPoint {
    /// Every entry point, in resolution order.
    pub const ALL: [Self; 6] = [
        Self::CreateAdapter,
        Self::OpenAdapter,
        Self::CloseAdapter,
        Self::DeleteDriver,
        Self::GetAdapterLuid,
        Self::GetRunningDriverVersion,
    ];

    /// Returns the exported symbol name as a null-terminated C string.
    #[must_use]
    pub const fn symbol_cstr(self) -> &'static CStr {
        match self {
            Self::CreateAdapter => c"WintunCreateAdapter",
            Self::OpenAdapter => c"WintunOpenAdapter",
            Self::CloseAdapter => c"WintunCloseAdapter",
            Self::DeleteDriver => c"WintunDeleteDriver",
            Self::GetAdapterLuid => c"WintunGetAdapterLUID",
            Self::GetRunningDriverVersion => c"WintunGetRunningDriverVersion",
        }
    }

    /// Returns the exported symbol name.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        // All symbol literals above are ASCII.
        self.symbol_cstr().to_str().unwrap_or_default()
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A failed entry-point call, carrying the thread's last-error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPointFailure {
    code: u32,
}

impl EntryPointFailure {
    /// Wraps a platform error code.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    /// The platform error code (see [`codes`]).
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }
}

impl fmt::Display for EntryPointFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error code {}", self.code)
    }
}

/// Resolved driver entry points.
///
/// # Design
///
/// - The production implementation is [`platform::WintunLibrary`](super::platform::WintunLibrary),
///   which resolves every symbol once when the module is loaded
/// - Enables dependency injection for testing with fake drivers
/// - Implementations are shared process-wide and must be usable from any
///   thread without additional locking
///
/// Every method maps onto exactly one exported function. Failures carry the
/// last-error code captured immediately after the call.
pub trait EntryPoints: Send + Sync {
    /// Calls `WintunCreateAdapter`.
    ///
    /// `requested_guid` selects the adapter's network GUID; `None` lets the
    /// system pick one at random.
    ///
    /// # Errors
    ///
    /// Returns the last-error code when the call returns a null handle.
    fn create_adapter(
        &self,
        name: &WideString,
        tunnel_type: &WideString,
        requested_guid: Option<&Guid>,
    ) -> Result<AdapterHandle, EntryPointFailure>;

    /// Calls `WintunOpenAdapter`.
    ///
    /// # Errors
    ///
    /// Returns the last-error code when the call returns a null handle.
    fn open_adapter(&self, name: &WideString) -> Result<AdapterHandle, EntryPointFailure>;

    /// Calls `WintunCloseAdapter`. The handle is invalid afterwards whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the last-error code when the call reports failure.
    fn close_adapter(&self, handle: &AdapterHandle) -> Result<(), EntryPointFailure>;

    /// Calls `WintunDeleteDriver`.
    ///
    /// # Errors
    ///
    /// Returns the last-error code when the call reports failure.
    fn delete_driver(&self) -> Result<(), EntryPointFailure>;

    /// Calls `WintunGetAdapterLUID`. This call has no failure path.
    fn adapter_luid(&self, handle: &AdapterHandle) -> u64;

    /// Calls `WintunGetRunningDriverVersion`.
    ///
    /// # Errors
    ///
    /// Returns the last-error code when the call returns zero.
    fn running_driver_version(&self) -> Result<NonZeroU32, EntryPointFailure>;
}
