//! Opaque adapter handle.

use std::fmt;
use std::num::NonZeroUsize;

/// Driver-assigned handle to one open adapter.
///
/// The value is opaque: it supports no arithmetic and is neither `Copy` nor
/// `Clone`, so a handle has exactly one owner. Only the driver gives it
/// meaning.
#[derive(PartialEq, Eq)]
pub struct AdapterHandle(NonZeroUsize);

impl AdapterHandle {
    /// Wraps a raw handle returned by the driver. Returns `None` for the null handle.
    ///
    /// # Safety
    ///
    /// `raw` must be a handle returned by create/open that no other
    /// `AdapterHandle` owns, and it must not have been closed.
    #[must_use]
    pub unsafe fn from_raw(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// Returns the raw handle value for passing across the FFI boundary.
    #[must_use]
    pub const fn as_raw(&self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for AdapterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdapterHandle({:#x})", self.0.get())
    }
}
