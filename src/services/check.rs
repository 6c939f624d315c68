//! Data checks over a user's fetched records
//!
//! Unlike the aggregation functions, which stop at the first malformed
//! record, a check collects every problem so they can be fixed in one pass.

use tracing::info;

use crate::models::{BudgetRecord, ExpenseRecord};

use super::budget::{find_duplicate_budgets, DuplicateBudget};

/// A record that would be rejected by the aggregation functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordProblem {
    /// "expense" or "budget"
    pub kind: &'static str,
    pub id: String,
    pub message: String,
}

/// Everything wrong with a set of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataCheck {
    pub invalid_records: Vec<RecordProblem>,
    pub duplicate_budgets: Vec<DuplicateBudget>,
}

impl DataCheck {
    /// Check every expense and budget
    pub fn run(expenses: &[ExpenseRecord], budgets: &[BudgetRecord]) -> Self {
        let expense_problems = expenses.iter().filter_map(|e| {
            e.validate().err().map(|err| RecordProblem {
                kind: "expense",
                id: e.id.to_string(),
                message: err.to_string(),
            })
        });
        let budget_problems = budgets.iter().filter_map(|b| {
            b.validate().err().map(|err| RecordProblem {
                kind: "budget",
                id: b.id.to_string(),
                message: err.to_string(),
            })
        });

        let check = Self {
            invalid_records: expense_problems.chain(budget_problems).collect(),
            duplicate_budgets: find_duplicate_budgets(budgets),
        };

        info!(
            expenses = expenses.len(),
            budgets = budgets.len(),
            problems = check.problem_count(),
            "checked records"
        );
        check
    }

    pub fn problem_count(&self) -> usize {
        self.invalid_records.len() + self.duplicate_budgets.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}
