//! Command execution logic.
//!
//! This module loads the driver, runs one command against it, and renders
//! the result as text or JSON.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use wintun_adapter::config::{Command, ConfigError, ValidatedConfig, write_default_config};
use wintun_adapter::driver::ResolutionError;
use wintun_adapter::{Adapter, AdapterError, AdapterManager};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The driver support module could not be loaded.
    #[error("Failed to load Wintun: {0}")]
    Resolution(#[from] ResolutionError),

    /// A driver operation failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// The command needs configuration that is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Report printed by `create` and `open`.
#[derive(Debug, Serialize)]
struct AdapterReport {
    name: String,
    luid: String,
    luid_value: u64,
    /// `None` when the version query failed.
    driver_version: Option<String>,
}

impl AdapterReport {
    fn collect(manager: &AdapterManager, adapter: &Adapter) -> Self {
        let luid = adapter.luid();
        let driver_version = match manager.running_version() {
            Ok(version) => Some(version.to_string()),
            Err(e) => {
                tracing::warn!("Failed to query driver version: {e}");
                None
            }
        };

        Self {
            name: adapter.name().to_string(),
            luid: luid.to_string(),
            luid_value: luid.value(),
            driver_version,
        }
    }

    fn render_text(&self) -> String {
        format!(
            "Adapter: {}\nLUID: {}\nDriver version: {}",
            self.name,
            self.luid,
            self.driver_version.as_deref().unwrap_or("unknown"),
        )
    }
}

/// Report printed by `version`.
#[derive(Debug, Serialize)]
struct VersionReport {
    version: String,
    raw: u32,
}

/// Report printed by `uninstall`.
#[derive(Debug, Serialize)]
struct UninstallReport {
    uninstalled: bool,
}

/// Executes one command.
///
/// `init` only writes the configuration template; every other command
/// loads the driver module from `config.library` first.
///
/// # Returns
///
/// The rendered report to print on success.
///
/// # Errors
///
/// Returns [`RunError`] if the driver cannot be loaded or the command fails.
pub fn execute(command: &Command, config: &ValidatedConfig) -> Result<String, RunError> {
    if let Command::Init { output } = command {
        return init(output);
    }

    let manager = AdapterManager::load(&config.library)?;
    run_command(&manager, command, config)
}

/// Writes the configuration template to `output`.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the file cannot be written.
pub fn init(output: &Path) -> Result<String, RunError> {
    write_default_config(output)?;
    Ok(format!(
        "Configuration template written to: {}",
        output.display()
    ))
}

/// Runs a command against an already loaded driver.
///
/// Adapters opened by `create` and `open` are closed before returning.
fn run_command(
    manager: &AdapterManager,
    command: &Command,
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    match command {
        Command::Init { output } => init(output),
        Command::Create => {
            let name = config.adapter_name()?;
            let adapter = manager.create(name, &config.tunnel_type, config.guid.as_ref())?;
            report_adapter(manager, adapter, config.json)
        }
        Command::Open => {
            let name = config.adapter_name()?;
            let adapter = manager.open(name)?;
            report_adapter(manager, adapter, config.json)
        }
        Command::Version => {
            let version = manager.running_version()?;
            if config.json {
                render_json(&VersionReport {
                    version: version.to_string(),
                    raw: version.raw(),
                })
            } else {
                Ok(format!("Wintun driver version {version}"))
            }
        }
        Command::Uninstall => {
            manager.uninstall()?;
            if config.json {
                render_json(&UninstallReport { uninstalled: true })
            } else {
                Ok("Wintun driver removed".to_string())
            }
        }
    }
}

fn report_adapter(
    manager: &AdapterManager,
    adapter: Adapter,
    json: bool,
) -> Result<String, RunError> {
    let report = AdapterReport::collect(manager, &adapter);
    adapter.close()?;

    if json {
        render_json(&report)
    } else {
        Ok(report.render_text())
    }
}

fn render_json<T: Serialize>(report: &T) -> Result<String, RunError> {
    Ok(serde_json::to_string_pretty(report)?)
}
