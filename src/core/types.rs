//! Core type definitions used throughout the simulator.

use serde::{Deserialize, Serialize};

/// One of the three mutually exclusive file collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Files that have not matched any signature
    Clean,
    /// Files flagged by a scan, awaiting a decision
    Suspect,
    /// Files isolated by the user
    Quarantine,
}

impl Partition {
    /// All partitions in report order.
    pub const ALL: [Partition; 3] = [Partition::Clean, Partition::Suspect, Partition::Quarantine];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Clean => "clean",
            Partition::Suspect => "suspect",
            Partition::Quarantine => "quarantine",
        }
    }

    /// Heading used by the text report.
    pub fn heading(&self) -> &'static str {
        match self {
            Partition::Clean => "Clean Files",
            Partition::Suspect => "Suspect Files",
            Partition::Quarantine => "Quarantined Files",
        }
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mock file tracked by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name, unique across all partitions
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Set when a scan flags the file, cleared on restore
    pub suspicious: bool,
}

impl FileRecord {
    /// Create a new, unflagged record.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            suspicious: false,
        }
    }
}

/// A file name matched by a signature during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMatch {
    /// Name of the flagged file
    pub file: String,
    /// The first signature that matched it
    pub pattern: String,
}

/// Summary of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Clean files examined
    pub files_scanned: usize,
    /// Signatures each file was tested against
    pub signatures_used: usize,
    /// Matches in classification order, one per flagged file
    pub matches: Vec<SignatureMatch>,
}

impl ScanSummary {
    /// Number of files moved to the suspect list by this scan.
    pub fn newly_suspicious(&self) -> usize {
        self.matches.len()
    }
}

/// Result of a scan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// The signature store was empty; nothing was examined
    NoSignatures,
    /// The scan ran over the clean list
    Completed(ScanSummary),
}

impl ScanOutcome {
    /// Number of newly suspicious files (0 when no scan ran).
    pub fn newly_suspicious(&self) -> usize {
        match self {
            ScanOutcome::NoSignatures => 0,
            ScanOutcome::Completed(summary) => summary.newly_suspicious(),
        }
    }
}

/// Snapshot of one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    pub partition: Partition,
    pub count: usize,
    pub total_bytes: u64,
    /// Files in display order (most recently inserted first)
    pub files: Vec<FileRecord>,
}

/// Read-only snapshot of the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub clean: PartitionReport,
    pub suspect: PartitionReport,
    pub quarantine: PartitionReport,
    /// Signature patterns, most recently added first
    pub signatures: Vec<String>,
}

impl Report {
    /// Iterate the partition snapshots in report order.
    pub fn partitions(&self) -> [&PartitionReport; 3] {
        [&self.clean, &self.suspect, &self.quarantine]
    }
}

/// What a purge dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeSummary {
    pub files_removed: usize,
    pub signatures_removed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_names() {
        assert_eq!(Partition::Suspect.to_string(), "suspect");
        assert_eq!(Partition::Quarantine.heading(), "Quarantined Files");
        let json = serde_json::to_string(&Partition::Clean).unwrap();
        assert_eq!(json, r#""clean""#);
    }

    #[test]
    fn test_new_record_is_unflagged() {
        let record = FileRecord::new("readme.txt", 50);
        assert_eq!(record.size, 50);
        assert!(!record.suspicious);
    }

    #[test]
    fn test_scan_outcome_counts() {
        assert_eq!(ScanOutcome::NoSignatures.newly_suspicious(), 0);

        let summary = ScanSummary {
            files_scanned: 3,
            signatures_used: 1,
            matches: vec![SignatureMatch {
                file: "virus.exe".into(),
                pattern: "virus".into(),
            }],
        };
        assert_eq!(ScanOutcome::Completed(summary).newly_suspicious(), 1);
    }

    #[test]
    fn test_scan_outcome_json_tag() {
        let json = serde_json::to_string(&ScanOutcome::NoSignatures).unwrap();
        assert_eq!(json, r#"{"status":"no_signatures"}"#);
    }
}
