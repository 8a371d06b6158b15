//! In-memory driver used by unit tests.
//!
//! Models the behaviors the adapter manager relies on:
//! - Adapters are looked up by name; creating a name that is open fails
//!   with `ERROR_ALREADY_EXISTS`
//! - An adapter disappears when its last handle is closed
//! - The driver counts as running while any adapter exists
//! - Deleting the driver fails with `ERROR_SHARING_VIOLATION` while any
//!   adapter exists

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Mutex;

use super::{AdapterHandle, EntryPointFailure, EntryPoints, Guid, WideString, codes};

/// Version the fake reports while running (0.14).
pub const FAKE_VERSION: u32 = 0x0000_000e;

#[derive(Debug)]
struct FakeAdapter {
    luid: u64,
    guid: Option<Guid>,
    open_handles: usize,
}

#[derive(Debug, Default)]
struct FakeState {
    next_handle: usize,
    next_luid: u64,
    adapters: HashMap<String, FakeAdapter>,
    handles: HashMap<usize, String>,
    close_calls: HashMap<usize, usize>,
    create_calls: usize,
    open_calls: usize,
    fail_next_create: Option<u32>,
    fail_next_close: Option<u32>,
}

/// A thread-safe fake implementing [`EntryPoints`].
#[derive(Debug, Default)]
pub struct FakeDriver {
    state: Mutex<FakeState>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next create call fail with `code` before touching any state.
    pub fn fail_next_create(&self, code: u32) {
        self.lock().fail_next_create = Some(code);
    }

    /// Makes the next close call fail with `code`. The handle is still released.
    pub fn fail_next_close(&self, code: u32) {
        self.lock().fail_next_close = Some(code);
    }

    /// Number of close calls received for a raw handle value.
    pub fn close_calls(&self, raw: usize) -> usize {
        self.lock().close_calls.get(&raw).copied().unwrap_or(0)
    }

    /// Total number of close calls across all handles.
    pub fn total_close_calls(&self) -> usize {
        self.lock().close_calls.values().sum()
    }

    pub fn create_calls(&self) -> usize {
        self.lock().create_calls
    }

    pub fn open_calls(&self) -> usize {
        self.lock().open_calls
    }

    /// Number of handles currently open.
    pub fn open_handle_count(&self) -> usize {
        self.lock().handles.len()
    }

    /// GUID an adapter was created with, if it exists.
    pub fn adapter_guid(&self, name: &str) -> Option<Guid> {
        self.lock().adapters.get(name).and_then(|a| a.guid)
    }

    pub fn adapter_exists(&self, name: &str) -> bool {
        self.lock().adapters.contains_key(name)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

impl FakeState {
    fn issue_handle(&mut self, name: &str) -> AdapterHandle {
        self.next_handle += 1;
        let raw = self.next_handle * 0x10;
        self.handles.insert(raw, name.to_string());
        // SAFETY: `raw` is non-zero and freshly issued by this fake.
        unsafe { AdapterHandle::from_raw(raw) }.unwrap()
    }
}

impl EntryPoints for FakeDriver {
    fn create_adapter(
        &self,
        name: &WideString,
        _tunnel_type: &WideString,
        requested_guid: Option<&Guid>,
    ) -> Result<AdapterHandle, EntryPointFailure> {
        let mut state = self.lock();
        state.create_calls += 1;

        if let Some(code) = state.fail_next_create.take() {
            return Err(EntryPointFailure::new(code));
        }

        let name = name.to_string();
        if state.adapters.contains_key(&name) {
            return Err(EntryPointFailure::new(codes::ALREADY_EXISTS));
        }

        state.next_luid += 1;
        let luid = 0x0006_0000_0000_0000 | state.next_luid;
        state.adapters.insert(
            name.clone(),
            FakeAdapter {
                luid,
                guid: requested_guid.copied(),
                open_handles: 1,
            },
        );
        Ok(state.issue_handle(&name))
    }

    fn open_adapter(&self, name: &WideString) -> Result<AdapterHandle, EntryPointFailure> {
        let mut state = self.lock();
        state.open_calls += 1;

        let name = name.to_string();
        match state.adapters.get_mut(&name) {
            Some(adapter) => adapter.open_handles += 1,
            None => return Err(EntryPointFailure::new(codes::FILE_NOT_FOUND)),
        }
        Ok(state.issue_handle(&name))
    }

    fn close_adapter(&self, handle: &AdapterHandle) -> Result<(), EntryPointFailure> {
        let mut state = self.lock();
        let raw = handle.as_raw();
        *state.close_calls.entry(raw).or_insert(0) += 1;

        let Some(name) = state.handles.remove(&raw) else {
            return Err(EntryPointFailure::new(codes::INVALID_HANDLE));
        };

        let remove = state.adapters.get_mut(&name).is_some_and(|adapter| {
            adapter.open_handles -= 1;
            adapter.open_handles == 0
        });
        if remove {
            state.adapters.remove(&name);
        }

        state
            .fail_next_close
            .take()
            .map_or(Ok(()), |code| Err(EntryPointFailure::new(code)))
    }

    fn delete_driver(&self) -> Result<(), EntryPointFailure> {
        if self.lock().adapters.is_empty() {
            Ok(())
        } else {
            Err(EntryPointFailure::new(codes::SHARING_VIOLATION))
        }
    }

    fn adapter_luid(&self, handle: &AdapterHandle) -> u64 {
        let state = self.lock();
        state
            .handles
            .get(&handle.as_raw())
            .and_then(|name| state.adapters.get(name))
            .map_or(0, |adapter| adapter.luid)
    }

    fn running_driver_version(&self) -> Result<NonZeroU32, EntryPointFailure> {
        if self.lock().adapters.is_empty() {
            return Err(EntryPointFailure::new(codes::FILE_NOT_FOUND));
        }
        NonZeroU32::new(FAKE_VERSION).ok_or(EntryPointFailure::new(codes::FILE_NOT_FOUND))
    }
}
