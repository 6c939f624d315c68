//! JSON snapshot source
//!
//! A snapshot is one user's records exported to a single file:
//!
//! ```json
//! { "user_id": "u1", "expenses": [...], "budgets": [...] }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DataSource;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetRecord, ExpenseRecord};

/// On-disk snapshot document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub user_id: String,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub budgets: Vec<BudgetRecord>,
}

/// Record source backed by a snapshot file
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    snapshot: Snapshot,
}

impl JsonSnapshotSource {
    /// Read and parse a snapshot file
    pub fn open(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TrackerError::Storage(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            user = %snapshot.user_id,
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            "loaded snapshot"
        );

        Ok(Self { snapshot })
    }

    /// The user whose records the snapshot holds
    pub fn user_id(&self) -> &str {
        &self.snapshot.user_id
    }

    fn check_user(&self, user_id: &str) -> TrackerResult<()> {
        if user_id == self.snapshot.user_id {
            Ok(())
        } else {
            Err(TrackerError::user_not_found(user_id))
        }
    }
}

impl DataSource for JsonSnapshotSource {
    fn fetch_expenses(&self, user_id: &str) -> TrackerResult<Vec<ExpenseRecord>> {
        self.check_user(user_id)?;
        Ok(self.snapshot.expenses.clone())
    }

    fn fetch_budgets(&self, user_id: &str) -> TrackerResult<Vec<BudgetRecord>> {
        self.check_user(user_id)?;
        Ok(self.snapshot.budgets.clone())
    }
}
