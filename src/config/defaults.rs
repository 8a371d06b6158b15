//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default driver support module, searched for in the application directory and `System32`.
pub const LIBRARY: &str = "wintun.dll";

/// Default tunnel type passed to `WintunCreateAdapter`.
pub const TUNNEL_TYPE: &str = "Wintun";

/// Longest adapter name the driver accepts, in UTF-16 code units (excluding the terminator).
pub const MAX_ADAPTER_NAME_UNITS: usize = 127;

/// Default output path for `wintun-ctl init`.
pub const CONFIG_FILE: &str = "wintun-ctl.toml";
