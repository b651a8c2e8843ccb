//! Name signature type.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A substring pattern that flags a file name as suspicious.
///
/// Identity is the exact pattern string; matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature {
    pattern: String,
}

impl Signature {
    /// Create a signature, rejecting an empty pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::EmptySignature);
        }
        Ok(Self { pattern })
    }

    /// The pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the pattern occurs as a contiguous substring of `name`.
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.pattern.as_str())
    }
}

impl TryFrom<String> for Signature {
    type Error = Error;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(pattern)
    }
}

impl From<Signature> for String {
    fn from(sig: Signature) -> Self {
        sig.pattern
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
