//! Scan state machine: classify clean files, then migrate matches.

use crate::core::types::{Partition, ScanOutcome, ScanSummary};
use crate::detection::{NameMatcher, SignatureDatabase};
use crate::registry::FileRegistry;

/// Runs signature scans over the clean partition.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanEngine;

impl ScanEngine {
    pub fn new() -> Self {
        Self
    }

    /// Scan every clean file against the signature store.
    ///
    /// Every record in the clean partition when the scan starts is classified
    /// once, in display order, before any of them moves. The flagged ones
    /// then go to the suspect partition. Suspect and quarantined files are
    /// never examined.
    pub fn scan(&self, db: &SignatureDatabase, registry: &mut FileRegistry) -> ScanOutcome {
        if db.is_empty() {
            log::info!("No signatures loaded, skipping scan");
            return ScanOutcome::NoSignatures;
        }

        let matcher = NameMatcher::new(db);
        let files_scanned = registry.count(Partition::Clean);
        let mut matches = Vec::new();

        registry.move_where(
            Partition::Clean,
            Partition::Suspect,
            |record| match matcher.match_name(&record.name) {
                Some(hit) => {
                    log::info!("{} matches pattern '{}'", hit.file, hit.pattern);
                    matches.push(hit);
                    true
                }
                None => false,
            },
            |record| record.suspicious = true,
        );

        let summary = ScanSummary {
            files_scanned,
            signatures_used: db.len(),
            matches,
        };
        log::info!(
            "Scan complete: {} file(s) examined, {} newly suspicious",
            summary.files_scanned,
            summary.newly_suspicious()
        );
        ScanOutcome::Completed(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(patterns: &[&str], files: &[(&str, u64)]) -> (SignatureDatabase, FileRegistry) {
        let mut db = SignatureDatabase::new();
        for p in patterns {
            db.add(p).unwrap();
        }
        let mut reg = FileRegistry::new();
        for (name, size) in files {
            reg.load(name, *size).unwrap();
        }
        (db, reg)
    }

    #[test]
    fn test_no_signatures_is_noop() {
        let (db, mut reg) = setup(&[], &[("virus.exe", 10)]);
        let outcome = ScanEngine::new().scan(&db, &mut reg);

        assert_eq!(outcome, ScanOutcome::NoSignatures);
        assert_eq!(reg.count(Partition::Clean), 1);
        assert!(!reg.find("virus.exe").unwrap().1.suspicious);
    }

    #[test]
    fn test_matches_move_to_suspect() {
        let (db, mut reg) = setup(
            &["trojan"],
            &[("trojan_horse.exe", 1024), ("readme.txt", 50)],
        );
        let outcome = ScanEngine::new().scan(&db, &mut reg);
        assert_eq!(outcome.newly_suspicious(), 1);

        let (partition, record) = reg.find("trojan_horse.exe").unwrap();
        assert_eq!(partition, Partition::Suspect);
        assert!(record.suspicious);

        let (partition, record) = reg.find("readme.txt").unwrap();
        assert_eq!(partition, Partition::Clean);
        assert!(!record.suspicious);
    }

    #[test]
    fn test_every_clean_file_evaluated_once() {
        // Adjacent matches would be skipped by a scan that removed while iterating
        let (db, mut reg) = setup(
            &["bad"],
            &[("bad1", 1), ("bad2", 2), ("ok", 3), ("bad3", 4), ("bad4", 5)],
        );
        let outcome = ScanEngine::new().scan(&db, &mut reg);

        let ScanOutcome::Completed(summary) = outcome else {
            panic!("scan should have run");
        };
        assert_eq!(summary.files_scanned, 5);
        assert_eq!(summary.newly_suspicious(), 4);
        assert_eq!(reg.names(Partition::Clean), vec!["ok"]);
        assert_eq!(reg.count(Partition::Suspect), 4);
        assert_eq!(reg.total_bytes(Partition::Suspect), 1 + 2 + 4 + 5);
    }

    #[test]
    fn test_summary_agrees_with_registry() {
        let (db, mut reg) = setup(
            &["trojan", "worm"],
            &[("worm.bin", 7), ("notes.txt", 1), ("trojan.exe", 3)],
        );
        let ScanOutcome::Completed(summary) = ScanEngine::new().scan(&db, &mut reg) else {
            panic!("scan should have run");
        };

        let reported: Vec<&str> = summary.matches.iter().map(|m| m.file.as_str()).collect();
        assert_eq!(reported, vec!["trojan.exe", "worm.bin"]);
        assert_eq!(summary.newly_suspicious(), reg.count(Partition::Suspect));
        for hit in &summary.matches {
            let (partition, record) = reg.find(&hit.file).unwrap();
            assert_eq!(partition, Partition::Suspect);
            assert!(record.suspicious);
        }
        // last classified is pushed last, so it leads the suspect list
        assert_eq!(reg.names(Partition::Suspect), vec!["worm.bin", "trojan.exe"]);
    }

    #[test]
    fn test_short_circuit_on_first_signature() {
        let (db, mut reg) = setup(&["virus", "exe"], &[("virus.exe", 10)]);
        let ScanOutcome::Completed(summary) = ScanEngine::new().scan(&db, &mut reg) else {
            panic!("scan should have run");
        };

        assert_eq!(summary.matches.len(), 1);
        assert_eq!(summary.matches[0].pattern, "exe");
    }

    #[test]
    fn test_second_scan_does_not_rematch() {
        let (db, mut reg) = setup(&["virus"], &[("virus1.exe", 10)]);
        let engine = ScanEngine::new();

        assert_eq!(engine.scan(&db, &mut reg).newly_suspicious(), 1);
        assert_eq!(engine.scan(&db, &mut reg).newly_suspicious(), 0);
        assert_eq!(reg.count(Partition::Suspect), 1);
    }

    #[test]
    fn test_quarantined_files_untouched() {
        let (db, mut reg) = setup(&["virus"], &[("virus1.exe", 10)]);
        reg.move_with("virus1.exe", Partition::Clean, Partition::Quarantine, |r| {
            r.suspicious = true
        })
        .unwrap();

        assert_eq!(ScanEngine::new().scan(&db, &mut reg).newly_suspicious(), 0);
        assert_eq!(reg.locate("virus1.exe"), Some(Partition::Quarantine));
    }
}
