//! Expense entry service
//!
//! Turns raw form input into a validated `ExpenseRecord`.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::category::normalize_category;
use crate::models::{ExpenseRecord, Money};

pub const MISSING_FIELDS: &str = "Please fill in all required fields";
pub const INVALID_AMOUNT: &str = "Please enter a valid amount";

/// Raw expense form input
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub note: Option<String>,
}

/// Service for validating new expenses
pub struct ExpenseService<'a> {
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Validate a draft and build the record to submit
    pub fn validate(&self, draft: &ExpenseDraft) -> TrackerResult<ExpenseRecord> {
        let category = normalize_category(&draft.category);
        let (amount, category, date) =
            match (draft.amount.trim(), category, draft.date.trim()) {
                (amount, Some(category), date) if !amount.is_empty() && !date.is_empty() => {
                    (amount, category, date)
                }
                _ => return Err(TrackerError::validation(MISSING_FIELDS)),
            };

        let amount = parse_positive_amount(amount)?;

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            TrackerError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", date))
        })?;

        if !self.settings.allows_category(&category) {
            return Err(TrackerError::Validation(format!(
                "Unknown category '{}'",
                category
            )));
        }

        let mut record = ExpenseRecord::new(amount, category, date);
        record.note = draft
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        debug!(id = %record.id, category = %record.category, "validated expense draft");
        Ok(record)
    }
}

/// Parse a form amount that must be strictly positive
pub(crate) fn parse_positive_amount(raw: &str) -> TrackerResult<Money> {
    match Money::parse(raw) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        _ => Err(TrackerError::validation(INVALID_AMOUNT)),
    }
}
