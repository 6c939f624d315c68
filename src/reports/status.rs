//! Status messages and usage levels derived from summaries and reports

use serde::{Deserialize, Serialize};
use std::fmt;

use super::report::ReportResult;
use super::summary::MonthSummary;

/// Tone of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
}

/// One-line verdict on how the month went
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl BudgetStatusMessage {
    /// Build the message for a month
    ///
    /// Any category over budget makes this a warning that quotes the overall
    /// overspend, the absolute value of the summary's remaining budget.
    pub fn from_results(
        summary: &MonthSummary,
        report: &ReportResult,
        currency_symbol: &str,
    ) -> Self {
        if report.over_budget_count > 0 {
            Self {
                kind: StatusKind::Warning,
                message: format!(
                    "You exceeded budget in {} {} with total overspend of {}",
                    report.over_budget_count,
                    plural(report.over_budget_count, "category", "categories"),
                    summary.remaining_budget.abs().format_with_symbol(currency_symbol)
                ),
            }
        } else {
            Self {
                kind: StatusKind::Success,
                message: "Excellent! You stayed within budget across all categories this month."
                    .to_string(),
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == StatusKind::Warning
    }
}

impl fmt::Display for BudgetStatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Percentages above which budget usage is flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageThresholds {
    pub warning: f64,
    pub danger: f64,
}

impl Default for UsageThresholds {
    fn default() -> Self {
        Self {
            warning: 75.0,
            danger: 90.0,
        }
    }
}

/// How close a budget is to being used up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Healthy,
    Warning,
    Danger,
}

impl UsageLevel {
    /// Classify a usage percentage; thresholds are exclusive
    pub fn classify(percent: f64, thresholds: UsageThresholds) -> Self {
        if percent > thresholds.danger {
            Self::Danger
        } else if percent > thresholds.warning {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

/// Plain-language observations about the month
pub fn spending_insights(
    summary: &MonthSummary,
    report: &ReportResult,
    currency_symbol: &str,
) -> Vec<String> {
    let mut insights = vec![format!(
        "You've spent {} across {} {} with {} {} this month.",
        summary.total_expenses.format_with_symbol(currency_symbol),
        report.total_categories,
        plural(report.total_categories, "category", "categories"),
        summary.expense_count,
        plural(summary.expense_count, "transaction", "transactions"),
    )];

    if let Some(top) = &report.top_category {
        insights.push(format!(
            "Your highest spending category is {} at {}.",
            top.category,
            top.amount.format_with_symbol(currency_symbol)
        ));
    }

    if report.over_budget_count == 0 && summary.remaining_budget.is_positive() {
        insights.push(format!(
            "You have {} remaining this month.",
            summary.remaining_budget.format_with_symbol(currency_symbol)
        ));
    }

    insights
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
