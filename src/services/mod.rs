//! Service layer
//!
//! Validation of new entries, the uniqueness rules for budgets, and data
//! checks over fetched records.

pub mod budget;
pub mod check;
pub mod expense;

pub use budget::{find_duplicate_budgets, BudgetBook, BudgetDraft, BudgetService, DuplicateBudget};
pub use check::{DataCheck, RecordProblem};
pub use expense::{ExpenseDraft, ExpenseService};
