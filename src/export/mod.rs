//! Report export
//!
//! - CSV: per-category rows for spreadsheets
//! - JSON: summary, report and status as one versioned document
//! - YAML: the same document, commented for reading

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
