//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::driver::Guid;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Driver support module to load
    pub library: PathBuf,

    /// Adapter name, if one was configured
    pub name: Option<String>,

    /// Tunnel type for create
    pub tunnel_type: String,

    /// Requested adapter GUID for create
    pub guid: Option<Guid>,

    /// Render reports as JSON
    pub json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guid_str = self
            .guid
            .as_ref()
            .map_or_else(|| "random".to_string(), ToString::to_string);

        write!(
            f,
            "Config {{ library: {}, name: {}, tunnel_type: {}, guid: {}, json: {} }}",
            self.library.display(),
            self.name.as_deref().unwrap_or("none"),
            self.tunnel_type,
            guid_str,
            self.json,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The library path is empty
    /// - The adapter name is empty or too long
    /// - The tunnel type is empty
    /// - The GUID cannot be parsed
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let library = Self::resolve_library(cli, toml)?;
        let name = Self::resolve_name(cli, toml)?;
        let tunnel_type = Self::resolve_tunnel_type(cli, toml)?;
        let guid = Self::resolve_guid(cli, toml)?;

        Ok(Self {
            library,
            name,
            tunnel_type,
            guid,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the adapter name, required by commands that address an adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if no name was configured.
    pub fn adapter_name(&self) -> Result<&str, ConfigError> {
        self.name.as_deref().ok_or_else(|| {
            ConfigError::missing(field::NAME, "Use --name or set adapter.name in config file")
        })
    }

    fn resolve_library(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let library = cli
            .library
            .clone()
            .or_else(|| toml.and_then(|t| t.driver.library.clone()))
            .unwrap_or_else(|| PathBuf::from(defaults::LIBRARY));

        if library.as_os_str().is_empty() {
            return Err(ConfigError::InvalidLibrary {
                reason: "must not be empty".to_string(),
            });
        }

        Ok(library)
    }

    fn resolve_name(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<String>, ConfigError> {
        let Some(name) = cli
            .name
            .as_deref()
            .or_else(|| toml.and_then(|t| t.adapter.name.as_deref()))
        else {
            return Ok(None);
        };

        validate_name(name)?;
        Ok(Some(name.to_string()))
    }

    fn resolve_tunnel_type(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let tunnel_type = cli
            .tunnel_type
            .as_deref()
            .or_else(|| toml.and_then(|t| t.adapter.tunnel_type.as_deref()))
            .unwrap_or(defaults::TUNNEL_TYPE);

        if tunnel_type.is_empty() {
            return Err(ConfigError::InvalidTunnelType {
                value: String::new(),
                reason: "must not be empty".to_string(),
            });
        }

        if tunnel_type.contains('\0') {
            return Err(ConfigError::InvalidTunnelType {
                value: tunnel_type.to_string(),
                reason: "must not contain NUL characters".to_string(),
            });
        }

        Ok(tunnel_type.to_string())
    }

    fn resolve_guid(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<Guid>, ConfigError> {
        cli.guid
            .as_deref()
            .or_else(|| toml.and_then(|t| t.adapter.guid.as_deref()))
            .map(|s| s.parse::<Guid>().map_err(ConfigError::from))
            .transpose()
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn validate_name(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidName {
        value: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }

    if name.contains('\0') {
        return Err(invalid("must not contain NUL characters"));
    }

    let units = name.encode_utf16().count();
    if units > defaults::MAX_ADAPTER_NAME_UNITS {
        return Err(invalid(&format!(
            "must be at most {} UTF-16 units, got {units}",
            defaults::MAX_ADAPTER_NAME_UNITS
        )));
    }

    Ok(())
}
