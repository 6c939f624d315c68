//! Budget service
//!
//! Validates new budgets and keeps at most one budget per (category, month).
//! The aggregation functions tolerate duplicates by summing them, so this is
//! the place where they have to be stopped.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::category::normalize_category;
use crate::models::{BudgetId, BudgetRecord, MonthKey};
use crate::reports::{self, BudgetGroups};

use super::expense::{parse_positive_amount, MISSING_FIELDS};

/// Raw budget form input
#[derive(Debug, Clone, Default)]
pub struct BudgetDraft {
    pub amount: String,
    pub category: String,
    /// `YYYY-MM`
    pub month: String,
}

/// A user's budgets, unique per (category, month)
#[derive(Debug, Clone, Default)]
pub struct BudgetBook {
    budgets: Vec<BudgetRecord>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from fetched records, failing on the first duplicate pair
    pub fn from_records(records: Vec<BudgetRecord>) -> TrackerResult<Self> {
        let mut book = Self::new();
        for record in records {
            book.insert(record)?;
        }
        Ok(book)
    }

    /// Add a budget unless one already exists for its category and month
    pub fn insert(&mut self, record: BudgetRecord) -> TrackerResult<()> {
        if self.find(&record.category, record.month).is_some() {
            return Err(TrackerError::duplicate_budget(record.category, record.month));
        }
        self.budgets.push(record);
        Ok(())
    }

    /// Remove a budget by id
    pub fn remove(&mut self, id: &BudgetId) -> TrackerResult<BudgetRecord> {
        let index = self
            .budgets
            .iter()
            .position(|b| &b.id == id)
            .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))?;
        Ok(self.budgets.remove(index))
    }

    /// The budget for a (category, month) pair, if any
    pub fn find(&self, category: &str, month: MonthKey) -> Option<&BudgetRecord> {
        self.budgets.iter().find(|b| b.covers(category, month))
    }

    pub fn budgets(&self) -> &[BudgetRecord] {
        &self.budgets
    }

    /// Budgets grouped by month, newest first
    pub fn grouped(&self) -> BudgetGroups {
        reports::group_budgets_by_month(&self.budgets)
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

/// Service for validating and registering budgets
pub struct BudgetService<'a> {
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Validate a draft and build the record to submit
    pub fn validate(&self, draft: &BudgetDraft) -> TrackerResult<BudgetRecord> {
        let category = normalize_category(&draft.category);
        let (amount, category, month) = match (draft.amount.trim(), category, draft.month.trim()) {
            (amount, Some(category), month) if !amount.is_empty() && !month.is_empty() => {
                (amount, category, month)
            }
            _ => return Err(TrackerError::validation(MISSING_FIELDS)),
        };

        let amount = parse_positive_amount(amount)?;
        let month = reports::parse_month(month)?;

        if !self.settings.allows_category(&category) {
            return Err(TrackerError::Validation(format!(
                "Unknown category '{}'",
                category
            )));
        }

        Ok(BudgetRecord::new(amount, category, month))
    }

    /// Validate a draft and add it to the book
    pub fn add(&self, book: &mut BudgetBook, draft: &BudgetDraft) -> TrackerResult<BudgetRecord> {
        let record = self.validate(draft)?;
        book.insert(record.clone())?;
        info!(
            category = %record.category,
            month = %record.month,
            amount = record.amount.cents(),
            "budget added"
        );
        Ok(record)
    }
}

/// A (category, month) pair with more than one budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBudget {
    pub category: String,
    pub month: MonthKey,
    pub ids: Vec<BudgetId>,
}

/// List every (category, month) pair that has more than one budget
///
/// Results are ordered by month, then category.
pub fn find_duplicate_budgets(budgets: &[BudgetRecord]) -> Vec<DuplicateBudget> {
    let mut by_pair: BTreeMap<(MonthKey, &str), Vec<BudgetId>> = BTreeMap::new();
    for budget in budgets {
        by_pair
            .entry((budget.month, budget.category.as_str()))
            .or_default()
            .push(budget.id.clone());
    }

    let duplicates: Vec<DuplicateBudget> = by_pair
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|((month, category), ids)| DuplicateBudget {
            category: category.to_string(),
            month,
            ids,
        })
        .collect();

    debug!(count = duplicates.len(), "scanned budgets for duplicates");
    duplicates
}
