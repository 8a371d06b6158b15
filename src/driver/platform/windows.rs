//! Windows loader for `wintun.dll` using `LoadLibraryExW` and `GetProcAddress`.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use tracing::debug;
use windows::Win32::Foundation::{FreeLibrary, GetLastError, HMODULE};
use windows::Win32::System::LibraryLoader::{
    GetProcAddress, LOAD_LIBRARY_FLAGS, LOAD_LIBRARY_SEARCH_APPLICATION_DIR,
    LOAD_LIBRARY_SEARCH_SYSTEM32, LOAD_WITH_ALTERED_SEARCH_PATH, LoadLibraryExW,
};
use windows::core::{PCSTR, PCWSTR};

use crate::driver::{
    AdapterHandle, EntryPoint, EntryPointFailure, EntryPoints, Guid, ResolutionError, WideString,
};

type RawProc = unsafe extern "system" fn() -> isize;

type CreateAdapterFn =
    unsafe extern "system" fn(name: *const u16, tunnel_type: *const u16, guid: *const Guid) -> usize;
type OpenAdapterFn = unsafe extern "system" fn(name: *const u16) -> usize;
type CloseAdapterFn = unsafe extern "system" fn(adapter: usize) -> i32;
type DeleteDriverFn = unsafe extern "system" fn() -> i32;
type GetAdapterLuidFn = unsafe extern "system" fn(adapter: usize, luid: *mut u64);
type GetRunningDriverVersionFn = unsafe extern "system" fn() -> u32;

/// The loaded Wintun support module with every entry point resolved.
///
/// All six symbols are resolved in [`WintunLibrary::load`]; if any is
/// missing the module is released and nothing is returned, so a
/// `WintunLibrary` value is always complete. The module stays loaded until
/// the value is dropped.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use wintun_adapter::driver::platform::WintunLibrary;
/// use wintun_adapter::AdapterManager;
///
/// let library = WintunLibrary::load(Path::new("wintun.dll")).expect("wintun.dll not found");
/// let manager = AdapterManager::new(library);
/// let version = manager.running_version();
/// ```
pub struct WintunLibrary {
    path: PathBuf,
    create: CreateAdapterFn,
    open: OpenAdapterFn,
    close: CloseAdapterFn,
    delete_driver: DeleteDriverFn,
    get_luid: GetAdapterLuidFn,
    get_running_version: GetRunningDriverVersionFn,
    // Declared last: function pointers above must not outlive the module.
    module: LoadedModule,
}

impl std::fmt::Debug for WintunLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WintunLibrary")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// RAII wrapper for a module handle returned by `LoadLibraryExW`.
struct LoadedModule(HMODULE);

impl Drop for LoadedModule {
    fn drop(&mut self) {
        // SAFETY: We own this reference to the module and release it once.
        let _ = unsafe { FreeLibrary(self.0) };
    }
}

// SAFETY: A module handle is a process-wide value; FreeLibrary and
// GetProcAddress may be called from any thread.
unsafe impl Send for LoadedModule {}
// SAFETY: See above. The handle is never mutated after loading.
unsafe impl Sync for LoadedModule {}

impl WintunLibrary {
    /// Loads the module at `library` and resolves every entry point.
    ///
    /// A bare file name is searched for only in the application directory
    /// and `System32`, never in the current directory. A path with a
    /// directory component is loaded from that location.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::InvalidPath`] if `library` cannot be encoded
    /// - [`ResolutionError::ModuleNotFound`] if the module cannot be loaded
    /// - [`ResolutionError::SymbolNotFound`] if any entry point is missing
    pub fn load(library: &Path) -> Result<Self, ResolutionError> {
        let wide = WideString::from_os_str("library", library.as_os_str())
            .map_err(ResolutionError::InvalidPath)?;

        let flags = if has_directory(library) {
            LOAD_WITH_ALTERED_SEARCH_PATH
        } else {
            LOAD_LIBRARY_FLAGS(LOAD_LIBRARY_SEARCH_APPLICATION_DIR.0 | LOAD_LIBRARY_SEARCH_SYSTEM32.0)
        };

        // SAFETY: `wide` is a valid null-terminated UTF-16 string for the duration of the call.
        let module = unsafe { LoadLibraryExW(PCWSTR(wide.as_ptr()), None, flags) }
            .map(LoadedModule)
            .map_err(|e| ResolutionError::ModuleNotFound {
                module: library.to_path_buf(),
                code: win32_code(&e),
            })?;

        debug!(library = %library.display(), "Loaded driver module");

        // SAFETY: Each pointer is the export of that name, and the Wintun ABI
        // fixes its signature to the matching function type.
        let resolved = unsafe {
            Self {
                path: library.to_path_buf(),
                create: std::mem::transmute::<RawProc, CreateAdapterFn>(resolve(
                    &module,
                    EntryPoint::CreateAdapter,
                )?),
                open: std::mem::transmute::<RawProc, OpenAdapterFn>(resolve(
                    &module,
                    EntryPoint::OpenAdapter,
                )?),
                close: std::mem::transmute::<RawProc, CloseAdapterFn>(resolve(
                    &module,
                    EntryPoint::CloseAdapter,
                )?),
                delete_driver: std::mem::transmute::<RawProc, DeleteDriverFn>(resolve(
                    &module,
                    EntryPoint::DeleteDriver,
                )?),
                get_luid: std::mem::transmute::<RawProc, GetAdapterLuidFn>(resolve(
                    &module,
                    EntryPoint::GetAdapterLuid,
                )?),
                get_running_version: std::mem::transmute::<RawProc, GetRunningDriverVersionFn>(
                    resolve(&module, EntryPoint::GetRunningDriverVersion)?,
                ),
                module,
            }
        };

        Ok(resolved)
    }

    /// The path the module was requested under.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryPoints for WintunLibrary {
    fn create_adapter(
        &self,
        name: &WideString,
        tunnel_type: &WideString,
        requested_guid: Option<&Guid>,
    ) -> Result<AdapterHandle, EntryPointFailure> {
        let guid = requested_guid.map_or(std::ptr::null(), std::ptr::from_ref);

        // SAFETY: Both strings are null-terminated and outlive the call; `guid`
        // is null or points to a live `#[repr(C)]` GUID.
        let raw = unsafe { (self.create)(name.as_ptr(), tunnel_type.as_ptr(), guid) };

        // SAFETY: A non-null return is a new handle owned by the caller.
        unsafe { AdapterHandle::from_raw(raw) }.ok_or_else(last_failure)
    }

    fn open_adapter(&self, name: &WideString) -> Result<AdapterHandle, EntryPointFailure> {
        // SAFETY: `name` is null-terminated and outlives the call.
        let raw = unsafe { (self.open)(name.as_ptr()) };

        // SAFETY: A non-null return is a new handle owned by the caller.
        unsafe { AdapterHandle::from_raw(raw) }.ok_or_else(last_failure)
    }

    fn close_adapter(&self, handle: &AdapterHandle) -> Result<(), EntryPointFailure> {
        // SAFETY: The handle came from create/open and has not been closed.
        let ok = unsafe { (self.close)(handle.as_raw()) };
        if ok == 0 {
            return Err(last_failure());
        }
        Ok(())
    }

    fn delete_driver(&self) -> Result<(), EntryPointFailure> {
        // SAFETY: Takes no arguments.
        let ok = unsafe { (self.delete_driver)() };
        if ok == 0 {
            return Err(last_failure());
        }
        Ok(())
    }

    fn adapter_luid(&self, handle: &AdapterHandle) -> u64 {
        let mut luid = 0u64;
        // SAFETY: The handle is live and `luid` is a valid 64-bit out buffer.
        unsafe { (self.get_luid)(handle.as_raw(), &raw mut luid) };
        luid
    }

    fn running_driver_version(&self) -> Result<NonZeroU32, EntryPointFailure> {
        // SAFETY: Takes no arguments.
        let version = unsafe { (self.get_running_version)() };
        NonZeroU32::new(version).ok_or_else(last_failure)
    }
}

/// Resolves one export, reporting the missing symbol on failure.
fn resolve(module: &LoadedModule, entry: EntryPoint) -> Result<RawProc, ResolutionError> {
    let symbol = PCSTR(entry.symbol_cstr().as_ptr().cast());

    // SAFETY: The module is loaded and `symbol` is a null-terminated ASCII name.
    let proc = unsafe { GetProcAddress(module.0, symbol) };

    proc.ok_or_else(|| ResolutionError::SymbolNotFound {
        symbol: entry,
        code: last_error(),
    })
}

fn has_directory(path: &Path) -> bool {
    path.parent().is_some_and(|parent| !parent.as_os_str().is_empty())
}

/// Reads the calling thread's last-error code.
#[allow(unused_unsafe)]
fn last_error() -> u32 {
    // SAFETY: Reads thread-local state only.
    unsafe { GetLastError() }.0
}

fn last_failure() -> EntryPointFailure {
    EntryPointFailure::new(last_error())
}

/// Extracts the Win32 error code from an `HRESULT_FROM_WIN32` value.
#[allow(clippy::cast_sign_loss)] // HRESULT bit pattern is reinterpreted, not converted.
fn win32_code(error: &windows::core::Error) -> u32 {
    let hresult = error.code().0 as u32;
    if hresult & 0xffff_0000 == 0x8007_0000 {
        hresult & 0xffff
    } else {
        hresult
    }
}
