//! Core data models for the expense tracker
//!
//! Raw records as fetched from the remote store (expenses, budgets) and the
//! value types they are built from (money, month keys, ids).

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::{BudgetRecord, BudgetValidationError};
pub use category::{default_categories, DEFAULT_CATEGORIES};
pub use expense::{ExpenseRecord, ExpenseValidationError};
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
