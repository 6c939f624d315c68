//! YAML report export

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::ReportExport;

/// Export a report as YAML, preceded by a comment header
pub fn export_report_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> TrackerResult<()> {
    let to_export_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Report - {}", export.report.month.label())
        .map_err(to_export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(to_export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(to_export_err)?;
    writeln!(writer).map_err(to_export_err)?;

    serde_yaml::to_writer(writer, export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
