//! Zonewise core crate - domain types, configuration, and errors.
//!
//! Defines the data model shared by every Zonewise crate: datasets and
//! zone catalogs, chat messages and sessions, the persisted history
//! store, the TOML configuration lifecycle, and the error taxonomy.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::ZoneCatalog;
pub use clock::DisplayClock;
pub use config::ZonewiseConfig;
pub use error::{Result, ZonewiseError};
pub use types::*;
