//! CSV report export
//!
//! One row per category, in category name order.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::ReportResult;

pub const REPORT_CSV_HEADER: [&str; 7] = [
    "Month",
    "Category",
    "Spent",
    "Expenses",
    "Budget",
    "Percentage",
    "Over Budget",
];

/// Export a category report to CSV
pub fn export_report_csv<W: Write>(report: &ReportResult, writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_export_err = |e: csv::Error| TrackerError::Export(e.to_string());

    csv_writer
        .write_record(REPORT_CSV_HEADER)
        .map_err(to_export_err)?;

    let month = report.month.to_string();
    for row in report.categories.values() {
        csv_writer
            .write_record([
                month.clone(),
                row.category.clone(),
                format!("{:.2}", row.total_amount.as_decimal()),
                row.expense_count.to_string(),
                format!("{:.2}", row.budget.as_decimal()),
                format!("{:.2}", row.percentage),
                if row.over_budget { "Yes" } else { "No" }.to_string(),
            ])
            .map_err(to_export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
