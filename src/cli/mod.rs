//! CLI command handlers
//!
//! Bridges clap argument parsing with the report and service layers. Every
//! command that reads records takes a snapshot file through `SourceArgs`.

pub mod budget;
pub mod category;
pub mod report;

pub use budget::{handle_budgets_command, handle_check_command};
pub use category::{handle_categories_command, handle_months_command};
pub use report::{handle_report_command, handle_summary_command, ReportFormat};

use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use crate::config::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::MonthKey;
use crate::reports;
use crate::source::{fetch_user_records, JsonSnapshotSource, UserRecords};

/// Where to read records from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Snapshot file holding the user's expenses and budgets
    #[arg(short, long, env = "EXPENSE_TRACKER_DATA")]
    pub data: Option<PathBuf>,

    /// User to report on (defaults to the snapshot's user)
    #[arg(short, long)]
    pub user: Option<String>,
}

impl SourceArgs {
    /// Open the snapshot and fetch the selected user's records
    pub fn load(&self, paths: &TrackerPaths) -> TrackerResult<UserRecords> {
        let path = self
            .data
            .clone()
            .unwrap_or_else(|| paths.default_snapshot());
        let source = JsonSnapshotSource::open(&path)?;
        let user_id = self
            .user
            .clone()
            .unwrap_or_else(|| source.user_id().to_string());

        debug!(path = %path.display(), user = %user_id, "loading records");
        fetch_user_records(&source, &user_id)
    }
}

/// Resolve a `--month` argument, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> TrackerResult<MonthKey> {
    match month {
        Some(raw) => reports::parse_month(raw),
        None => Ok(MonthKey::current()),
    }
}
