//! Error types and result handling for the simulator.

use crate::core::types::Partition;
use thiserror::Error;

/// Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for simulator operations.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Signature Errors =====
    #[error("Signature '{0}' already exists.")]
    DuplicateSignature(String),

    #[error("Signature '{0}' not found.")]
    SignatureNotFound(String),

    #[error("Signature pattern must not be empty")]
    EmptySignature,

    // ===== Registry Errors =====
    #[error("File '{0}' already exists.")]
    DuplicateFile(String),

    #[error("File '{name}' not found{}", partition_suffix(.partition))]
    FileNotFound {
        name: String,
        partition: Option<Partition>,
    },

    // ===== Input Errors =====
    #[error("Invalid size '{0}': expected a non-negative integer")]
    InvalidSize(String),

    // ===== Configuration Errors =====
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Invalid configuration value: {field} - {message}")]
    ConfigInvalid { field: String, message: String },

    // ===== Serialization Errors =====
    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),

    // ===== Generic Errors =====
    #[error("I/O error: {0}")]
    Io(String),
}

fn partition_suffix(partition: &Option<Partition>) -> String {
    match partition {
        Some(Partition::Clean) => " in clean list.".to_string(),
        Some(Partition::Suspect) => " in suspect list.".to_string(),
        Some(Partition::Quarantine) => " in quarantine.".to_string(),
        None => ".".to_string(),
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl Error {
    /// Create a file-not-found error scoped to one partition.
    pub fn file_not_found_in(name: impl Into<String>, partition: Partition) -> Self {
        Self::FileNotFound {
            name: name.into(),
            partition: Some(partition),
        }
    }

    /// Create a file-not-found error for a registry-wide lookup.
    pub fn file_not_found(name: impl Into<String>) -> Self {
        Self::FileNotFound {
            name: name.into(),
            partition: None,
        }
    }

    /// Create a config validation error.
    pub fn config_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error leaves the session usable (the shell keeps going).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::DuplicateSignature(_)
                | Error::SignatureNotFound(_)
                | Error::EmptySignature
                | Error::DuplicateFile(_)
                | Error::FileNotFound { .. }
                | Error::InvalidSize(_)
        )
    }

    /// Get a user-friendly suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::FileNotFound {
                partition: Some(Partition::Suspect),
                ..
            } => Some("Only files flagged by SCAN can be quarantined"),
            Error::FileNotFound {
                partition: Some(Partition::Quarantine),
                ..
            } => Some("Only quarantined files can be restored"),
            Error::InvalidSize(_) => {
                Some("Sizes are byte counts, e.g. LOAD setup.exe 2048")
            }
            Error::ConfigLoad(_) | Error::ConfigInvalid { .. } => {
                Some("Check your configuration file, or run `config reset`")
            }
            _ => None,
        }
    }

    /// Get the error category for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::DuplicateSignature(_) | Error::SignatureNotFound(_) | Error::EmptySignature => {
                ErrorCategory::Signature
            }

            Error::DuplicateFile(_) | Error::FileNotFound { .. } => ErrorCategory::Registry,

            Error::InvalidSize(_) => ErrorCategory::Input,

            Error::ConfigLoad(_) | Error::ConfigSave(_) | Error::ConfigInvalid { .. } => {
                ErrorCategory::Configuration
            }

            Error::JsonSerialize(_) => ErrorCategory::Serialization,

            Error::Io(_) => ErrorCategory::Io,
        }
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Signature,
    Registry,
    Input,
    Configuration,
    Io,
    Serialization,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Signature => write!(f, "Signature"),
            Self::Registry => write!(f, "Registry"),
            Self::Input => write!(f, "Input"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Io => write!(f, "I/O"),
            Self::Serialization => write!(f, "Serialization"),
        }
    }
}
