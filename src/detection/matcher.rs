//! Name matching against the signature store.

use crate::core::types::SignatureMatch;
use crate::detection::database::SignatureDatabase;
use crate::detection::signature::Signature;

/// Matches file names against every signature in a store.
pub struct NameMatcher<'a> {
    db: &'a SignatureDatabase,
}

impl<'a> NameMatcher<'a> {
    /// Create a matcher over a signature store.
    pub fn new(db: &'a SignatureDatabase) -> Self {
        Self { db }
    }

    /// Return the first signature, in store order, found in `name`.
    ///
    /// Testing stops at the first hit, so a name matching several
    /// signatures is attributed to the most recently added one.
    pub fn first_match(&self, name: &str) -> Option<&'a Signature> {
        self.db.iter().find(|sig| sig.matches(name))
    }

    /// Match a file name, producing a scan match record.
    pub fn match_name(&self, name: &str) -> Option<SignatureMatch> {
        self.first_match(name).map(|sig| SignatureMatch {
            file: name.to_string(),
            pattern: sig.pattern().to_string(),
        })
    }
}
