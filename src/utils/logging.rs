//! Logging infrastructure.
//!
//! Log records go to stderr so they never interleave with shell output on
//! stdout.

use crate::core::config::Config;
use crate::core::error::{Error, Result};
use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level
    pub level: LevelFilter,
    /// Show timestamps
    pub timestamps: bool,
    /// Show module path
    pub module_path: bool,
    /// Color the level tag
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            timestamps: true,
            module_path: false,
            color: true,
        }
    }
}

impl LogConfig {
    /// Create a log config from application config.
    pub fn from_config(config: &Config) -> Self {
        let level = parse_level(&config.logging.log_level);

        Self {
            level,
            timestamps: config.logging.timestamps,
            module_path: level == LevelFilter::Debug || level == LevelFilter::Trace,
            color: true,
        }
    }

    /// Create a verbose log config for CLI.
    pub fn verbose() -> Self {
        Self {
            level: LevelFilter::Debug,
            timestamps: true,
            module_path: true,
            color: true,
        }
    }

    /// Pick the preset for the command-line flags, else the config file.
    pub fn from_flags(verbose: bool, quiet: bool, config: &Config) -> Self {
        if verbose {
            Self::verbose()
        } else if quiet {
            Self::quiet()
        } else {
            Self::from_config(config)
        }
    }

    /// Create a quiet log config (errors only).
    pub fn quiet() -> Self {
        Self {
            level: LevelFilter::Error,
            timestamps: false,
            module_path: false,
            color: false,
        }
    }
}

/// Map a config level name to a filter, defaulting to `Warn`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

fn level_tag(level: log::Level, color: bool) -> &'static str {
    match (level, color) {
        (log::Level::Error, true) => "\x1b[31mERROR\x1b[0m",
        (log::Level::Warn, true) => "\x1b[33mWARN\x1b[0m ",
        (log::Level::Info, true) => "\x1b[32mINFO\x1b[0m ",
        (log::Level::Debug, true) => "\x1b[34mDEBUG\x1b[0m",
        (log::Level::Trace, true) => "\x1b[35mTRACE\x1b[0m",
        (log::Level::Error, false) => "ERROR",
        (log::Level::Warn, false) => "WARN ",
        (log::Level::Info, false) => "INFO ",
        (log::Level::Debug, false) => "DEBUG",
        (log::Level::Trace, false) => "TRACE",
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG`, when set, overrides the configured level.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let mut builder = Builder::new();

    builder.filter_level(config.level);
    builder.parse_default_env();
    builder.target(Target::Stderr);

    let format_config = config.clone();
    builder.format(move |buf, record| {
        let mut output = String::new();

        if format_config.timestamps {
            output.push_str(&format!("{} ", Local::now().format("%Y-%m-%d %H:%M:%S")));
        }

        output.push_str(&format!(
            "[{}] ",
            level_tag(record.level(), format_config.color)
        ));

        if format_config.module_path {
            if let Some(path) = record.module_path() {
                output.push_str(&format!("{}: ", path));
            }
        }

        output.push_str(&format!("{}", record.args()));

        writeln!(buf, "{}", output)
    });

    builder
        .try_init()
        .map_err(|e| Error::Io(format!("Failed to initialize logging: {}", e)))?;

    log::debug!("Logging initialized with level: {:?}", config.level);
    Ok(())
}
