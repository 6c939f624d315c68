//! Expense Tracker - monthly spending against per-category budgets
//!
//! This library computes month summaries and per-category budget reports
//! from a user's expense and budget records. The computations are pure
//! functions over already-fetched records; fetching, display and export sit
//! around them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, money amounts, month keys and ids
//! - `reports`: Month summaries, category reports and budget grouping
//! - `services`: Entry validation, budget uniqueness and data checks
//! - `source`: Where records come from (memory or a JSON snapshot)
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML report export
//! - `cli`: Command handlers for the `expense-tracker` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::reports::{compute_month_summary, compute_report};
//!
//! let summary = compute_month_summary(&expenses, &budgets, "2024-06")?;
//! let report = compute_report(&expenses, &budgets, "2024-06")?;
//! println!("{} categories over budget", report.over_budget_count);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod source;

pub use error::{TrackerError, TrackerResult};
pub use reports::{compute_month_summary, compute_report, group_budgets_by_month};
