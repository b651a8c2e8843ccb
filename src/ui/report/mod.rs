//! Rendering of session data.
//!
//! This module provides output in two formats:
//! - Plain text for the interactive shell
//! - JSON for machine processing

pub mod text;

use crate::core::error::Result;
use crate::ui::cli::OutputFormat;
use serde::Serialize;
use std::io::Write;

pub use text::TextReporter;

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write a status report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &crate::core::types::Report,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextReporter::new().write_report(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

/// Write a scan result in the requested format.
pub fn write_scan<W: Write>(
    out: &mut W,
    outcome: &crate::core::types::ScanOutcome,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextReporter::new().write_scan(out, outcome),
        OutputFormat::Json => write_json(out, outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ScanOutcome;

    #[test]
    fn test_json_scan_output() {
        let mut out = Vec::new();
        write_scan(&mut out, &ScanOutcome::NoSignatures, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "no_signatures");
    }
}
