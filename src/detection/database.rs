//! In-memory signature store.

use crate::core::error::{Error, Result};
use crate::detection::signature::Signature;
use std::collections::VecDeque;

/// The set of known malicious-name patterns.
///
/// Patterns are unique. They are kept most recently added first, which is
/// both the listing order and the order the scanner tests them in.
#[derive(Debug, Default, Clone)]
pub struct SignatureDatabase {
    signatures: VecDeque<Signature>,
}

impl SignatureDatabase {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern.
    pub fn add(&mut self, pattern: &str) -> Result<&Signature> {
        if self.contains(pattern) {
            return Err(Error::DuplicateSignature(pattern.to_string()));
        }
        let sig = Signature::new(pattern)?;
        self.signatures.push_front(sig);
        log::debug!("Signature store now holds {} pattern(s)", self.signatures.len());
        Ok(&self.signatures[0])
    }

    /// Remove a pattern, returning it.
    pub fn remove(&mut self, pattern: &str) -> Result<Signature> {
        self.signatures
            .iter()
            .position(|s| s.pattern() == pattern)
            .and_then(|index| self.signatures.remove(index))
            .ok_or_else(|| Error::SignatureNotFound(pattern.to_string()))
    }

    /// Check whether a pattern is present.
    pub fn contains(&self, pattern: &str) -> bool {
        self.signatures.iter().any(|s| s.pattern() == pattern)
    }

    /// Iterate signatures in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.signatures.iter()
    }

    /// All patterns in store order.
    pub fn list(&self) -> Vec<String> {
        self.signatures
            .iter()
            .map(|s| s.pattern().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Remove every signature, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.signatures.len();
        self.signatures.clear();
        removed
    }
}
