//! Summary and report commands

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use super::{resolve_month, SourceArgs};
use crate::config::{Settings, TrackerPaths};
use crate::display::{format_report, format_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml, ReportExport};
use crate::reports::{MonthSummary, ReportResult};

/// Output format for `report`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
    Yaml,
}

/// Print the month summary
pub fn handle_summary_command(
    paths: &TrackerPaths,
    settings: &Settings,
    source: &SourceArgs,
    month: Option<&str>,
) -> TrackerResult<()> {
    let month = resolve_month(month)?;
    let records = source.load(paths)?;
    let summary = MonthSummary::compute(&records.expenses, &records.budgets, month)?;

    print!(
        "{}",
        format_summary(&summary, settings.usage_thresholds(), &settings.currency_symbol)
    );
    Ok(())
}

/// Print or export the category report
pub fn handle_report_command(
    paths: &TrackerPaths,
    settings: &Settings,
    source: &SourceArgs,
    month: Option<&str>,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let month = resolve_month(month)?;
    let records = source.load(paths)?;
    let summary = MonthSummary::compute(&records.expenses, &records.budgets, month)?;
    let report = ReportResult::compute(&records.expenses, &records.budgets, month)?;

    match output {
        Some(path) => {
            let path = resolve_output(paths, path)?;
            let file = File::create(&path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, settings, &summary, &report, format)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            info!(path = %path.display(), ?format, "report exported");
            println!("Report exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&mut handle, settings, &summary, &report, format)?;
        }
    }

    Ok(())
}

/// Place bare file names in the export directory
fn resolve_output(paths: &TrackerPaths, path: PathBuf) -> TrackerResult<PathBuf> {
    let has_dir = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    if path.is_absolute() || has_dir {
        return Ok(path);
    }
    paths.ensure_directories()?;
    Ok(paths.export_dir().join(path))
}

fn write_report<W: Write>(
    writer: &mut W,
    settings: &Settings,
    summary: &MonthSummary,
    report: &ReportResult,
    format: ReportFormat,
) -> TrackerResult<()> {
    match format {
        ReportFormat::Text => {
            let text = format_report(
                summary,
                report,
                settings.usage_thresholds(),
                &settings.currency_symbol,
            );
            writer
                .write_all(text.as_bytes())
                .map_err(|e| TrackerError::Export(e.to_string()))
        }
        ReportFormat::Csv => export_report_csv(report, writer),
        ReportFormat::Json => export_report_json(
            &ReportExport::new(summary, report, &settings.currency_symbol),
            writer,
        ),
        ReportFormat::Yaml => export_report_yaml(
            &ReportExport::new(summary, report, &settings.currency_symbol),
            writer,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "user_id": "u1",
        "expenses": [
            {"id": "e1", "amount": 80, "category": "Food", "date": "2024-06-03"},
            {"id": "e2", "amount": 20, "category": "Travel", "date": "2024-06-04"}
        ],
        "budgets": [
            {"id": "b1", "amount": 50, "category": "Food", "month": "2024-06"}
        ]
    }"#;

    fn setup() -> (TempDir, TrackerPaths, SourceArgs) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data.json");
        std::fs::write(&data, SNAPSHOT).unwrap();
        let source = SourceArgs {
            data: Some(data),
            user: None,
        };
        (temp_dir, paths, source)
    }

    #[test]
    fn test_report_to_csv_file() {
        let (temp_dir, paths, source) = setup();
        let output = temp_dir.path().join("report.csv");

        handle_report_command(
            &paths,
            &Settings::default(),
            &source,
            Some("2024-06"),
            ReportFormat::Csv,
            Some(output.clone()),
        )
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.contains("2024-06,Food,80.00,1,50.00,160.00,Yes"));
        assert!(text.contains("2024-06,Travel,20.00,1,0.00,0.00,No"));
    }

    #[test]
    fn test_write_report_json() {
        let (_temp_dir, paths, source) = setup();
        let records = source.load(&paths).unwrap();
        let month = resolve_month(Some("2024-06")).unwrap();
        let summary = MonthSummary::compute(&records.expenses, &records.budgets, month).unwrap();
        let report = ReportResult::compute(&records.expenses, &records.budgets, month).unwrap();

        let mut buffer = Vec::new();
        write_report(
            &mut buffer,
            &Settings::default(),
            &summary,
            &report,
            ReportFormat::Json,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["summary"]["remaining_budget"], -50.0);
        assert_eq!(value["status"]["kind"], "warning");
    }

    #[test]
    fn test_bare_output_name_goes_to_export_dir() {
        let (_temp_dir, paths, source) = setup();

        handle_report_command(
            &paths,
            &Settings::default(),
            &source,
            Some("2024-06"),
            ReportFormat::Yaml,
            Some(PathBuf::from("june.yaml")),
        )
        .unwrap();

        let text = std::fs::read_to_string(paths.export_dir().join("june.yaml")).unwrap();
        assert!(text.contains("budget_status: over_budget"));
    }

    #[test]
    fn test_bad_month_fails_before_loading() {
        let (_temp_dir, paths, _) = setup();
        let missing = SourceArgs {
            data: Some(PathBuf::from("/nonexistent/data.json")),
            user: None,
        };
        let err = handle_summary_command(&paths, &Settings::default(), &missing, Some("2024-13"))
            .unwrap_err();
        assert!(err.is_validation());
    }
}
