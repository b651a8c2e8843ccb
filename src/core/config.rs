//! Configuration management for the simulator.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted in `logging.log_level`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interactive shell settings
    #[serde(default)]
    pub shell: ShellConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigSave(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| Error::ConfigSave(format!("Failed to write config file: {}", e)))
    }

    /// Load and validate configuration if the file exists.
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let config = Self::load(path)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Load the configuration for one run of the binary.
    ///
    /// A missing file yields the defaults. A file that fails to parse or
    /// validate also yields the defaults, returned together with the error
    /// so it can be reported once logging is up. The file is left alone.
    pub fn load_for_run(path: &Path) -> (Self, Option<Error>) {
        match Self::try_load(path) {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Write the default configuration to `path`.
    ///
    /// An existing file is only replaced when `overwrite` is set. Returns
    /// whether the file was written.
    pub fn reset(path: &Path, overwrite: bool) -> Result<bool> {
        if path.exists() && !overwrite {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get the application configuration directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("toy-antivirus")
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.shell.prompt.trim().is_empty() {
            return Err(Error::config_invalid("shell.prompt", "Must not be empty"));
        }

        let level = self.logging.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::config_invalid(
                "logging.log_level",
                format!("Unknown level '{}'", self.logging.log_level),
            ));
        }

        Ok(())
    }
}

/// Shell behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each interactive command
    pub prompt: String,
    /// Print the title banner when an interactive session starts
    pub banner: bool,
    /// Parse `LOAD` sizes like C `atoi` (garbage becomes 0) instead of rejecting them
    pub lenient_size_parsing: bool,
    /// Purge all state on `EXIT` and at end of input
    pub purge_on_exit: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
            lenient_size_parsing: false,
            purge_on_exit: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Prefix log lines with a local timestamp
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            timestamps: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.shell.lenient_size_parsing);
        assert!(config.shell.purge_on_exit);
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.shell.lenient_size_parsing = true;
        config.shell.prompt = "av> ".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(loaded.shell.lenient_size_parsing);
        assert_eq!(loaded.shell.prompt, "av> ");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"shell": {"banner": false}}"#).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert!(!loaded.shell.banner);
        assert_eq!(loaded.shell.prompt, "> ");
        assert_eq!(loaded.logging.log_level, "warn");
    }

    #[test]
    fn test_load_for_run_on_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let (config, err) = Config::load_for_run(&path);
        assert_eq!(config.shell.prompt, "> ");
        assert!(matches!(err, Some(Error::ConfigLoad(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_load_for_run_on_invalid_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"shell": {"prompt": ""}}"#).unwrap();

        let (config, err) = Config::load_for_run(&path);
        assert_eq!(config.shell.prompt, "> ");
        assert!(matches!(err, Some(Error::ConfigInvalid { ref field, .. }) if field == "shell.prompt"));
    }

    #[test]
    fn test_load_for_run_missing_and_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let (config, err) = Config::load_for_run(&path);
        assert!(err.is_none());
        assert!(config.validate().is_ok());

        std::fs::write(&path, r#"{"shell": {"purge_on_exit": false}}"#).unwrap();
        let (config, err) = Config::load_for_run(&path);
        assert!(err.is_none());
        assert!(!config.shell.purge_on_exit);
    }

    #[test]
    fn test_reset_keeps_existing_file_without_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let custom = r#"{"shell": {"prompt": "av> "}}"#;
        std::fs::write(&path, custom).unwrap();

        assert!(!Config::reset(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), custom);

        assert!(Config::reset(&path, true).unwrap());
        assert_eq!(Config::load(&path).unwrap().shell.prompt, "> ");
    }

    #[test]
    fn test_reset_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toy-antivirus").join("config.json");

        assert!(Config::reset(&path, false).unwrap());
        assert!(Config::load(&path).unwrap().validate().is_ok());
    }

    #[test]
    fn test_try_load_reports_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::try_load(&path).unwrap().is_none());

        std::fs::write(&path, r#"{"logging": {"log_level": "loud"}}"#).unwrap();
        let err = Config::try_load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref field, .. } if field == "logging.log_level"));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = Config::default();
        config.logging.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shell.prompt = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
