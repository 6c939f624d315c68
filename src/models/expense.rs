//! Expense record model
//!
//! An expense is a single amount spent in a category on a given date.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::{self, Money};
use super::month::MonthKey;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive for valid records)
    #[serde(with = "money::decimal")]
    pub amount: Money,

    /// Spending category, matched exactly (case-sensitive)
    pub category: String,

    /// Date the money was spent
    pub date: NaiveDate,

    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh id
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            date,
            note: None,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The month this expense counts towards
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Check that the record can be aggregated
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::MissingCategory => write!(f, "Expense category is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = ExpenseRecord::new(Money::from_units(50), "Food & Dining", june(5))
            .with_note("lunch");
        assert_eq!(expense.amount.cents(), 5000);
        assert_eq!(expense.note.as_deref(), Some("lunch"));
        assert_eq!(expense.month(), MonthKey::parse("2024-06").unwrap());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut expense = ExpenseRecord::new(Money::from_cents(-100), "Food", june(1));
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(Money::from_cents(-100)))
        );

        expense.amount = Money::from_cents(100);
        expense.category = "   ".into();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::MissingCategory)
        );
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "e1",
            "amount": 12.75,
            "category": "Transportation",
            "date": "2024-06-10",
            "created_at": "2024-06-10T08:00:00Z"
        }"#;
        let expense: ExpenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "e1");
        assert_eq!(expense.amount.cents(), 1275);
        assert_eq!(expense.date, june(10));
        assert!(expense.note.is_none());
        assert!(expense.updated_at.is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let json = r#"{"id": "e1", "amount": 1, "category": "Food", "date": "June 10"}"#;
        assert!(serde_json::from_str::<ExpenseRecord>(json).is_err());
    }
}
