//! In-memory record source

use std::collections::HashMap;

use super::DataSource;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetRecord, ExpenseRecord};

#[derive(Debug, Clone, Default)]
struct UserEntry {
    expenses: Vec<ExpenseRecord>,
    budgets: Vec<BudgetRecord>,
}

/// Records held per user in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    users: HashMap<String, UserEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with no records
    pub fn add_user(&mut self, user_id: impl Into<String>) {
        self.users.entry(user_id.into()).or_default();
    }

    pub fn push_expense(&mut self, user_id: impl Into<String>, expense: ExpenseRecord) {
        self.users
            .entry(user_id.into())
            .or_default()
            .expenses
            .push(expense);
    }

    pub fn push_budget(&mut self, user_id: impl Into<String>, budget: BudgetRecord) {
        self.users
            .entry(user_id.into())
            .or_default()
            .budgets
            .push(budget);
    }

    fn user(&self, user_id: &str) -> TrackerResult<&UserEntry> {
        self.users
            .get(user_id)
            .ok_or_else(|| TrackerError::user_not_found(user_id))
    }
}

impl DataSource for MemorySource {
    fn fetch_expenses(&self, user_id: &str) -> TrackerResult<Vec<ExpenseRecord>> {
        Ok(self.user(user_id)?.expenses.clone())
    }

    fn fetch_budgets(&self, user_id: &str) -> TrackerResult<Vec<BudgetRecord>> {
        Ok(self.user(user_id)?.budgets.clone())
    }
}
