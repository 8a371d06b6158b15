//! wintun-ctl: Wintun adapter control tool
//!
//! Entry point for the wintun-ctl application.

use std::process::ExitCode;
use wintun_adapter::config::{Cli, Command, ValidatedConfig};

mod app;
mod run;

use app::{exit_code, print_config_hint, print_run_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Init never needs an existing config file
    if let Command::Init { output } = &cli.command {
        return handle_init(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_command(&cli.command, &config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match run::init(output) {
        Ok(message) => {
            println!("{message}");
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one driver command and prints its report.
#[cfg(not(tarpaulin_include))]
fn run_command(command: &Command, config: &ValidatedConfig) -> ExitCode {
    match run::execute(command, config) {
        Ok(report) => {
            println!("{report}");
            exit_code::SUCCESS
        }
        Err(run::RunError::Config(e)) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
        Err(e) => {
            tracing::error!("{e}");
            print_run_hint(&e);
            exit_code::runtime_error()
        }
    }
}
