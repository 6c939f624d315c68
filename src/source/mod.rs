//! Record sources
//!
//! The aggregation functions never fetch anything themselves. A caller pulls
//! a user's expenses and budgets from a `DataSource` and hands the slices to
//! `reports`.

pub mod json;
pub mod memory;

pub use json::{JsonSnapshotSource, Snapshot};
pub use memory::MemorySource;

use crate::error::TrackerResult;
use crate::models::{BudgetRecord, ExpenseRecord};

/// Something that can produce a user's records
pub trait DataSource {
    /// All expenses belonging to `user_id`
    fn fetch_expenses(&self, user_id: &str) -> TrackerResult<Vec<ExpenseRecord>>;

    /// All budgets belonging to `user_id`
    fn fetch_budgets(&self, user_id: &str) -> TrackerResult<Vec<BudgetRecord>>;
}

/// One user's records, fetched together
#[derive(Debug, Clone, Default)]
pub struct UserRecords {
    pub user_id: String,
    pub expenses: Vec<ExpenseRecord>,
    pub budgets: Vec<BudgetRecord>,
}

/// Fetch both record lists for a user
pub fn fetch_user_records<S: DataSource + ?Sized>(
    source: &S,
    user_id: &str,
) -> TrackerResult<UserRecords> {
    Ok(UserRecords {
        user_id: user_id.to_string(),
        expenses: source.fetch_expenses(user_id)?,
        budgets: source.fetch_budgets(user_id)?,
    })
}
