//! Display formatting for terminal output

pub mod budget;
pub mod report;

pub use budget::{format_budget_groups, format_duplicates};
pub use report::{format_report, format_summary};
