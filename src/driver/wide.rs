//! Null-terminated UTF-16 strings for the driver entry points.

use std::fmt;

use super::EncodingError;

/// An owned, null-terminated UTF-16 string.
///
/// Guaranteed non-empty and free of interior NULs, so the pointer handed to
/// the driver always describes exactly the string the caller supplied.
#[derive(Clone, PartialEq, Eq)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    /// Encodes `value`, naming the argument as `field` in any error.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Empty`] for an empty string and
    /// [`EncodingError::InteriorNul`] if `value` contains a NUL character.
    pub fn new(field: &'static str, value: &str) -> Result<Self, EncodingError> {
        Self::from_units(field, value.encode_utf16().collect())
    }

    /// Encodes an OS string without a lossy UTF-8 round trip.
    ///
    /// # Errors
    ///
    /// Same as [`WideString::new`].
    #[cfg(windows)]
    pub fn from_os_str(field: &'static str, value: &std::ffi::OsStr) -> Result<Self, EncodingError> {
        use std::os::windows::ffi::OsStrExt;

        Self::from_units(field, value.encode_wide().collect())
    }

    /// Encodes an OS string, which must be valid Unicode on this platform.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::NotUnicode`] for non-Unicode input, otherwise
    /// the same as [`WideString::new`].
    #[cfg(not(windows))]
    pub fn from_os_str(field: &'static str, value: &std::ffi::OsStr) -> Result<Self, EncodingError> {
        let value = value.to_str().ok_or(EncodingError::NotUnicode { field })?;
        Self::new(field, value)
    }

    fn from_units(field: &'static str, mut units: Vec<u16>) -> Result<Self, EncodingError> {
        if units.is_empty() {
            return Err(EncodingError::Empty { field });
        }

        if let Some(position) = units.iter().position(|&unit| unit == 0) {
            return Err(EncodingError::InteriorNul { field, position });
        }

        units.push(0);
        Ok(Self { units })
    }

    /// Pointer to the first code unit. Valid while `self` is alive.
    #[must_use]
    pub fn as_ptr(&self) -> *const u16 {
        self.units.as_ptr()
    }

    /// The code units without the terminator.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }

    /// The code units including the terminator.
    #[must_use]
    pub fn as_units_with_nul(&self) -> &[u16] {
        &self.units
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf16_lossy(self.as_units()))
    }
}

impl fmt::Debug for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideString({:?})", String::from_utf16_lossy(self.as_units()))
    }
}
