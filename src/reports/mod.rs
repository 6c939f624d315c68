//! Month-scoped aggregation of expenses and budgets
//!
//! Everything in this module is a pure function of its inputs: callers pass
//! already-fetched records, and get back plain data that can be displayed or
//! serialized. Nothing is cached between calls, so the functions can be used
//! from any number of threads at once.
//!
//! - [`compute_month_summary`]: totals, usage percentage and overall status
//! - [`compute_report`]: per-category budget performance and the top category
//! - [`group_budgets_by_month`]: budgets grouped by month, newest first

pub mod grouping;
pub mod report;
pub mod status;
pub mod summary;

pub use grouping::{BudgetGroups, MonthBudgets};
pub use report::{CategorySummary, ReportResult, TopCategory};
pub use status::{spending_insights, BudgetStatusMessage, StatusKind, UsageLevel, UsageThresholds};
pub use summary::{BudgetStatus, MonthSummary};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetRecord, ExpenseRecord, MonthKey};

/// Compute the month summary for `month` (`YYYY-MM`)
///
/// Records from other months are ignored, but every record passed in must be
/// well formed.
pub fn compute_month_summary(
    expenses: &[ExpenseRecord],
    budgets: &[BudgetRecord],
    month: &str,
) -> TrackerResult<MonthSummary> {
    MonthSummary::compute(expenses, budgets, parse_month(month)?)
}

/// Compute the per-category report for `month` (`YYYY-MM`)
pub fn compute_report(
    expenses: &[ExpenseRecord],
    budgets: &[BudgetRecord],
    month: &str,
) -> TrackerResult<ReportResult> {
    ReportResult::compute(expenses, budgets, parse_month(month)?)
}

/// Group budgets by month, most recent month first
pub fn group_budgets_by_month(budgets: &[BudgetRecord]) -> BudgetGroups {
    BudgetGroups::from_budgets(budgets)
}

/// Parse a month argument into a key, as a validation error on failure
pub fn parse_month(month: &str) -> TrackerResult<MonthKey> {
    MonthKey::parse(month).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Error for a month total that does not fit in `Money`
pub(crate) fn total_out_of_range(what: &str, month: MonthKey) -> TrackerError {
    TrackerError::Validation(format!(
        "total of {} for {} is too large to represent",
        what, month
    ))
}

/// Reject malformed records before any aggregation happens
pub(crate) fn validate_records(
    expenses: &[ExpenseRecord],
    budgets: &[BudgetRecord],
) -> TrackerResult<()> {
    for expense in expenses {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(format!("expense {}: {}", expense.id, e)))?;
    }
    for budget in budgets {
        budget
            .validate()
            .map_err(|e| TrackerError::Validation(format!("budget {}: {}", budget.id, e)))?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{BudgetId, BudgetRecord, ExpenseId, ExpenseRecord, Money, MonthKey};
    use chrono::NaiveDate;

    pub fn expense(id: &str, cents: i64, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::from(id),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            note: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn budget(id: &str, cents: i64, category: &str, month: &str) -> BudgetRecord {
        BudgetRecord {
            id: BudgetId::from(id),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            month: MonthKey::parse(month).unwrap(),
            created_at: None,
            updated_at: None,
        }
    }
}
