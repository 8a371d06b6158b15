//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Driver module configuration section
    #[serde(default)]
    pub driver: DriverSection,

    /// Adapter configuration section
    #[serde(default)]
    pub adapter: AdapterSection,
}

/// Driver module configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverSection {
    /// Wintun support module file name or path
    pub library: Option<PathBuf>,
}

/// Adapter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSection {
    /// Cosmetic adapter name
    pub name: Option<String>,

    /// Tunnel type passed to the driver
    pub tunnel_type: Option<String>,

    /// Requested adapter GUID
    pub guid: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# wintun-ctl Configuration File

[driver]
# Wintun support module (default: wintun.dll)
# A bare file name is looked up in the application directory and System32 only.
# A path is loaded from exactly that location.
# library = 'C:\Program Files\MyVpn\wintun.dll'
library = "wintun.dll"

[adapter]
# Cosmetic adapter name (required for create/open, max 127 characters)
# name = "MyVpn"

# Tunnel type passed to the driver (default: Wintun)
tunnel_type = "Wintun"

# Requested adapter GUID. Reusing a GUID reuses the Windows network
# profile (e.g. Private/Public classification) of earlier adapters.
# Omit to let the system pick one at random.
# guid = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}"
"#
    .to_string()
}
