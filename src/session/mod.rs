//! Command operations over a single simulator session.
//!
//! A [`Session`] owns the signature store and the file registry. Every
//! operation either succeeds or returns an error with all state unchanged.

use crate::core::error::Result;
use crate::core::types::{
    FileRecord, Partition, PartitionReport, PurgeSummary, Report, ScanOutcome,
};
use crate::detection::{Signature, SignatureDatabase};
use crate::registry::FileRegistry;
use crate::scanner::ScanEngine;

/// All state of one simulator run.
#[derive(Debug, Default, Clone)]
pub struct Session {
    signatures: SignatureDatabase,
    registry: FileRegistry,
    engine: ScanEngine,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signature pattern.
    pub fn add_signature(&mut self, pattern: &str) -> Result<&Signature> {
        let sig = self.signatures.add(pattern)?;
        log::info!("Added signature '{}'", sig);
        Ok(sig)
    }

    /// Delete a signature pattern.
    pub fn delete_signature(&mut self, pattern: &str) -> Result<Signature> {
        let sig = self.signatures.remove(pattern)?;
        log::info!("Removed signature '{}'", sig);
        Ok(sig)
    }

    /// Load a mock file into the clean list.
    pub fn load_file(&mut self, name: &str, size: u64) -> Result<&FileRecord> {
        let record = self.registry.load(name, size)?;
        log::info!("Loaded file '{}' ({} bytes)", record.name, record.size);
        Ok(record)
    }

    /// Scan the clean list, moving matching files to the suspect list.
    pub fn scan(&mut self) -> ScanOutcome {
        log::debug!(
            "Scanning {} clean file(s) against {} signature(s)",
            self.registry.count(Partition::Clean),
            self.signatures.len()
        );
        self.engine.scan(&self.signatures, &mut self.registry)
    }

    /// Move a suspect file into quarantine.
    pub fn quarantine(&mut self, name: &str) -> Result<&FileRecord> {
        let record = self
            .registry
            .move_file(name, Partition::Suspect, Partition::Quarantine)?;
        log::info!("Quarantined '{}'", record.name);
        Ok(record)
    }

    /// Return a quarantined file to the clean list and clear its flag.
    pub fn restore(&mut self, name: &str) -> Result<&FileRecord> {
        let record = self.registry.move_with(
            name,
            Partition::Quarantine,
            Partition::Clean,
            |record| record.suspicious = false,
        )?;
        log::info!("Restored '{}'", record.name);
        Ok(record)
    }

    /// Snapshot counts, totals, listings and signatures.
    pub fn report(&self) -> Report {
        Report {
            clean: self.partition_report(Partition::Clean),
            suspect: self.partition_report(Partition::Suspect),
            quarantine: self.partition_report(Partition::Quarantine),
            signatures: self.signatures.list(),
        }
    }

    fn partition_report(&self, partition: Partition) -> PartitionReport {
        PartitionReport {
            partition,
            count: self.registry.count(partition),
            total_bytes: self.registry.total_bytes(partition),
            files: self.registry.files(partition).cloned().collect(),
        }
    }

    /// Drop every file and signature.
    pub fn purge(&mut self) -> PurgeSummary {
        let summary = PurgeSummary {
            files_removed: self.registry.clear_all(),
            signatures_removed: self.signatures.clear(),
        };
        log::info!(
            "Purged {} file(s) and {} signature(s)",
            summary.files_removed,
            summary.signatures_removed
        );
        summary
    }

    /// Read access to the signature store.
    pub fn signatures(&self) -> &SignatureDatabase {
        &self.signatures
    }

    /// Read access to the file registry.
    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }
}
