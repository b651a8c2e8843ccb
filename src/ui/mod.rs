//! User interface components.
//!
//! This module provides:
//! - CLI argument definitions
//! - The line-oriented command shell and its parser
//! - Text and JSON rendering

pub mod cli;
pub mod command;
pub mod report;
pub mod shell;

pub use cli::{Cli, OutputFormat};
pub use command::{ShellCommand, SizeParsing};
pub use report::TextReporter;
pub use shell::{Shell, ShellOptions, ShellStats};
