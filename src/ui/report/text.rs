//! Plain-text rendering of reports, scan results and help.

use crate::core::error::Result;
use crate::core::types::{FileRecord, PartitionReport, Report, ScanOutcome};
use std::io::Write;

const REPORT_HEADER: &str = "========== ANTIVIRUS REPORT ==========";
const REPORT_FOOTER: &str = "======================================";

/// Command summary shown by `HELP`.
const HELP_LINES: [(&str, &str); 10] = [
    ("ADD_SIG <pattern>", "Add signature pattern"),
    ("DEL_SIG <pattern>", "Delete signature pattern"),
    ("LOAD <name> <size>", "Load a file (mock)"),
    ("SCAN", "Scan files for signatures"),
    ("QUAR <name>", "Quarantine a suspect file"),
    ("RESTORE <name>", "Restore from quarantine"),
    ("REPORT", "Display status report"),
    ("PURGE", "Delete all data"),
    ("HELP", "Show this help"),
    ("EXIT", "Exit program"),
];

/// Human-readable renderer.
pub struct TextReporter {
    /// Marker appended to flagged files
    suspicious_marker: String,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextReporter {
    /// Create a new text reporter.
    pub fn new() -> Self {
        Self {
            suspicious_marker: "[SUSPICIOUS]".to_string(),
        }
    }

    /// Write the session title shown when an interactive shell starts.
    pub fn write_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "=== TOY ANTIVIRUS SIMULATOR ===")?;
        writeln!(out, "Type HELP for commands")?;
        Ok(())
    }

    /// Write the command summary.
    pub fn write_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "=== TOY ANTIVIRUS COMMANDS ===")?;
        for (usage, description) in HELP_LINES {
            writeln!(out, "  {:<22} - {}", usage, description)?;
        }
        writeln!(out, "==============================")?;
        writeln!(out)?;
        Ok(())
    }

    /// Write scan progress lines and the closing count.
    pub fn write_scan<W: Write>(&self, out: &mut W, outcome: &ScanOutcome) -> Result<()> {
        match outcome {
            ScanOutcome::NoSignatures => {
                writeln!(out, "No signatures loaded. Nothing to scan.")?;
            }
            ScanOutcome::Completed(summary) => {
                writeln!(out, "Scanning files...")?;
                for hit in &summary.matches {
                    writeln!(out, "  [!] {} matches pattern '{}'", hit.file, hit.pattern)?;
                }
                writeln!(
                    out,
                    "Scan complete. Found {} suspicious file(s).",
                    summary.newly_suspicious()
                )?;
            }
        }
        Ok(())
    }

    /// Write the full status report.
    pub fn write_report<W: Write>(&self, out: &mut W, report: &Report) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", REPORT_HEADER)?;

        for partition in report.partitions() {
            self.write_partition(out, partition)?;
        }

        writeln!(out)?;
        writeln!(out, "Signature Database:")?;
        if report.signatures.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for (i, pattern) in report.signatures.iter().enumerate() {
            writeln!(out, "  {}. \"{}\"", i + 1, pattern)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", REPORT_FOOTER)?;
        Ok(())
    }

    fn write_partition<W: Write>(&self, out: &mut W, partition: &PartitionReport) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} (Total: {} bytes)",
            partition.partition.heading(),
            partition.count,
            partition.total_bytes
        )?;
        writeln!(out)?;
        writeln!(out, "  Contents:")?;
        if partition.files.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for (i, file) in partition.files.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, self.file_line(file))?;
        }
        Ok(())
    }

    fn file_line(&self, file: &FileRecord) -> String {
        if file.suspicious {
            format!("{} ({} bytes) {}", file.name, file.size, self.suspicious_marker)
        } else {
            format!("{} ({} bytes)", file.name, file.size)
        }
    }
}
