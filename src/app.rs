//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use wintun_adapter::config::{ConfigError, field};
use wintun_adapter::driver::{EntryPoint, ResolutionError, codes};
use wintun_adapter::AdapterError;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required fields, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - driver not loadable, entry point failure, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } => {
            if *f == field::NAME {
                eprintln!("\nPass --name or run 'wintun-ctl init' to generate a configuration template.");
            }
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'wintun-ctl init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints helpful hints for common command failures.
pub fn print_run_hint(error: &RunError) {
    match error {
        RunError::Config(e) => print_config_hint(e),
        RunError::Resolution(ResolutionError::ModuleNotFound { .. }) => {
            eprintln!("\nPlace wintun.dll next to the executable or pass --library <PATH>.");
        }
        RunError::Adapter(AdapterError::InUse { .. }) => {
            eprintln!("\nClose every adapter that uses the driver, then retry.");
        }
        RunError::Adapter(AdapterError::DriverCallFailed {
            entry_point: EntryPoint::GetRunningDriverVersion,
            code,
        }) if codes::is_not_found(*code) => {
            eprintln!("\nThe driver is not running; it starts once an adapter is created.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
