//! Identifier types that cross the driver boundary.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::GuidParseError;

/// A 128-bit globally unique identifier in the Win32 `GUID` layout.
///
/// Passed by pointer to `WintunCreateAdapter`, so the field order and
/// `#[repr(C)]` are part of the ABI.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    /// First 32 bits
    pub data1: u32,
    /// Next 16 bits
    pub data2: u16,
    /// Next 16 bits
    pub data3: u16,
    /// Final 64 bits, in byte order
    pub data4: [u8; 8],
}

impl Guid {
    /// Builds a GUID from its four fields.
    #[must_use]
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Builds a GUID from its 128-bit big-endian textual value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Truncation selects each field.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            data1: (value >> 96) as u32,
            data2: (value >> 80) as u16,
            data3: (value >> 64) as u16,
            data4: (value as u64).to_be_bytes(),
        }
    }

    /// Returns the 128-bit value in textual (big-endian) order.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        ((self.data1 as u128) << 96)
            | ((self.data2 as u128) << 80)
            | ((self.data3 as u128) << 64)
            | (u64::from_be_bytes(self.data4) as u128)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl FromStr for Guid {
    type Err = GuidParseError;

    /// Parses `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`; braces are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GuidParseError {
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let body = match (trimmed.strip_prefix('{'), trimmed.strip_suffix('}')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => return Err(invalid()),
        };

        let groups: Vec<&str> = body.split('-').collect();
        let lengths_match = groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(group, len)| group.len() == len);
        if !lengths_match {
            return Err(invalid());
        }

        let hex: String = groups.concat();
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        u128::from_str_radix(&hex, 16)
            .map(Self::from_u128)
            .map_err(|_| invalid())
    }
}

#[cfg(windows)]
impl From<Guid> for windows::core::GUID {
    fn from(guid: Guid) -> Self {
        Self::from_values(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

/// Locally unique identifier of an adapter, valid for the current boot session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Luid(u64);

impl Luid {
    /// Wraps a raw LUID value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Luid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(windows)]
impl From<Luid> for windows::Win32::NetworkManagement::Ndis::NET_LUID_LH {
    fn from(luid: Luid) -> Self {
        Self { Value: luid.0 }
    }
}

/// Version reported by the running driver.
///
/// The raw value is opaque to the adapter manager. [`major`](Self::major)
/// and [`minor`](Self::minor) decode Wintun's `major << 16 | minor`
/// convention for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverVersion(NonZeroU32);

impl DriverVersion {
    /// Wraps a raw, non-zero version value.
    #[must_use]
    pub const fn new(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    /// The value exactly as the driver reported it.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0.get()
    }

    /// High 16 bits.
    #[must_use]
    pub const fn major(self) -> u32 {
        self.0.get() >> 16
    }

    /// Low 16 bits.
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.0.get() & 0xffff
    }
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}
