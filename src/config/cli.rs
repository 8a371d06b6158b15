//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// wintun-ctl: Wintun adapter control
///
/// Creates, opens and inspects Wintun virtual network adapters,
/// and removes the Wintun driver.
#[derive(Debug, Parser)]
#[command(name = "wintun-ctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Wintun support module: a file name or a path
    #[arg(long, global = true, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Cosmetic adapter name (required for create and open)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Tunnel type passed to the driver when creating
    #[arg(long = "tunnel-type", global = true)]
    pub tunnel_type: Option<String>,

    /// Requested adapter GUID, e.g. {6BA7B810-9DAD-11D1-80B4-00C04FD430C8}
    #[arg(long, global = true)]
    pub guid: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for wintun-ctl
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Create an adapter, or open it if the name is taken, and report it
    Create,

    /// Open an existing adapter by name and report it
    Open,

    /// Print the running driver version
    Version,

    /// Remove the driver (fails while adapters are open)
    Uninstall,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
