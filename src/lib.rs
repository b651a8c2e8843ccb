//! Toy antivirus: a simulated signature scanner.
//!
//! This crate tracks mock files (a name and a byte count, no content)
//! through three partitions: clean, suspect and quarantine. File names are
//! matched against a store of substring signatures; a scan moves matching
//! clean files to the suspect list, from where they can be quarantined and
//! later restored. Everything lives in memory for the length of one session.

pub mod core;
pub mod detection;
pub mod registry;
pub mod scanner;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use crate::core::types::*;
pub use crate::session::Session;
