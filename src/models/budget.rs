//! Budget record model
//!
//! A budget caps spending for one category in one month. At most one budget
//! may exist per (category, month); `services::BudgetBook` enforces that when
//! budgets are added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::{self, Money};
use super::month::MonthKey;

/// A monthly budget for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// Unique identifier
    pub id: BudgetId,

    /// Amount budgeted for the month
    #[serde(with = "money::decimal")]
    pub amount: Money,

    /// Category this budget applies to, matched exactly
    pub category: String,

    /// The month this budget covers
    pub month: MonthKey,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BudgetRecord {
    /// Create a new budget with a fresh id
    pub fn new(amount: Money, category: impl Into<String>, month: MonthKey) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            amount,
            category: category.into(),
            month,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Check whether this budget covers the given (category, month) pair
    pub fn covers(&self, category: &str, month: MonthKey) -> bool {
        self.month == month && self.category == category
    }

    /// Check that the record can be aggregated
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }
        Ok(())
    }
}

impl fmt::Display for BudgetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// Validation errors for budget records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget(Money),
    MissingCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget(amount) => {
                write!(f, "Budget amount cannot be negative: {}", amount)
            }
            Self::MissingCategory => write!(f, "Budget category is required"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
