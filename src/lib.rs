//! wintun-adapter: Wintun virtual adapter lifecycle management
//!
//! A library for creating, opening and releasing adapters of the Wintun
//! kernel driver, querying their LUIDs, and removing the driver.

pub mod config;
pub mod driver;
pub mod manager;

pub use driver::{DriverVersion, Guid, Luid};
pub use manager::{Adapter, AdapterError, AdapterManager};
