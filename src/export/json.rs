//! JSON report export
//!
//! Writes the month summary and category report as one versioned document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::{BudgetStatusMessage, MonthSummary, ReportResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub summary: MonthSummary,

    pub report: ReportResult,

    pub status: BudgetStatusMessage,
}

impl ReportExport {
    pub fn new(summary: &MonthSummary, report: &ReportResult, currency_symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            status: BudgetStatusMessage::from_results(summary, report, currency_symbol),
            summary: summary.clone(),
            report: report.clone(),
        }
    }
}

/// Export a report as pretty-printed JSON
pub fn export_report_json<W: Write>(export: &ReportExport, writer: &mut W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::fixtures::{budget, expense};
    use crate::reports::{compute_month_summary, compute_report, StatusKind};

    fn sample_export() -> ReportExport {
        let expenses = vec![
            expense("e1", 4_550, "Food", "2024-06-02"),
            expense("e2", 2_000, "Travel", "2024-06-03"),
        ];
        let budgets = vec![budget("b1", 10_000, "Food", "2024-06")];
        let summary = compute_month_summary(&expenses, &budgets, "2024-06").unwrap();
        let report = compute_report(&expenses, &budgets, "2024-06").unwrap();
        ReportExport::new(&summary, &report, "$")
    }

    #[test]
    fn test_json_document_shape() {
        let mut buffer = Vec::new();
        export_report_json(&sample_export(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["summary"]["month"], "2024-06");
        assert_eq!(value["summary"]["total_expenses"], 65.5);
        assert_eq!(value["summary"]["budget_status"], "under_budget");
        assert_eq!(value["report"]["expenses_by_category"]["Food"]["budget"], 100.0);
        assert_eq!(value["report"]["expenses_by_category"]["Food"]["count"], 1);
        assert!(value["report"]["expenses_by_category"]["Food"]
            .get("expense_count")
            .is_none());
        assert_eq!(value["report"]["top_spending_category"]["category"], "Food");
        assert_eq!(value["report"]["over_budget_categories_count"], 0);
        assert_eq!(value["status"]["kind"], "success");
    }

    #[test]
    fn test_json_reads_back() {
        let export = sample_export();
        let mut buffer = Vec::new();
        export_report_json(&export, &mut buffer).unwrap();

        let parsed: ReportExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.summary.total_expenses, Money::from_cents(6_550));
        assert_eq!(parsed.report.total_categories, 2);
        assert_eq!(parsed.status.kind, StatusKind::Success);
    }
}
