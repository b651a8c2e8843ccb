//! Signature store and name matching.
//!
//! This module provides:
//! - The `Signature` pattern type
//! - The in-memory `SignatureDatabase`
//! - First-match name lookup via `NameMatcher`

pub mod database;
pub mod matcher;
pub mod signature;

pub use database::SignatureDatabase;
pub use matcher::NameMatcher;
pub use signature::Signature;
