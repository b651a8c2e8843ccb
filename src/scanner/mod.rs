//! Scanning of registry files against the signature store.

pub mod engine;

pub use engine::ScanEngine;
