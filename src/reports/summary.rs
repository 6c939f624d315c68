//! Month summary
//!
//! Overall spending against the overall budget for a single month.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::TrackerResult;
use crate::models::{money, BudgetRecord, ExpenseRecord, Money, MonthKey};

/// Overall budget status for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget was set for the month
    NoBudget,
    /// Spending is at or below the total budget
    UnderBudget,
    /// Spending exceeds the total budget
    OverBudget,
}

impl BudgetStatus {
    /// Derive the status from the month totals
    pub fn from_totals(total_expenses: Money, total_budget: Money) -> Self {
        if total_budget.is_zero() {
            Self::NoBudget
        } else if total_expenses > total_budget {
            Self::OverBudget
        } else {
            Self::UnderBudget
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBudget => write!(f, "No budget"),
            Self::UnderBudget => write!(f, "Under budget"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: MonthKey,
    #[serde(with = "money::decimal")]
    pub total_expenses: Money,
    #[serde(with = "money::decimal")]
    pub total_budget: Money,
    /// `total_budget - total_expenses`; negative when overspent
    #[serde(with = "money::decimal")]
    pub remaining_budget: Money,
    /// Spending as a percentage of the budget, 0 when there is no budget
    pub budget_usage_percent: f64,
    pub expense_count: usize,
    pub budget_count: usize,
    #[serde(rename = "budget_status")]
    pub status: BudgetStatus,
}

impl MonthSummary {
    /// Summarize the records that fall in `month`
    pub fn compute(
        expenses: &[ExpenseRecord],
        budgets: &[BudgetRecord],
        month: MonthKey,
    ) -> TrackerResult<Self> {
        super::validate_records(expenses, budgets)?;

        let matching_expenses: Vec<Money> = expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .map(|e| e.amount)
            .collect();
        let matching_budgets: Vec<Money> = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|b| b.amount)
            .collect();

        let expense_count = matching_expenses.len();
        let budget_count = matching_budgets.len();
        let total_expenses = Money::checked_sum(matching_expenses)
            .ok_or_else(|| super::total_out_of_range("expenses", month))?;
        let total_budget = Money::checked_sum(matching_budgets)
            .ok_or_else(|| super::total_out_of_range("budgets", month))?;

        let summary = Self {
            month,
            total_expenses,
            total_budget,
            remaining_budget: total_budget - total_expenses,
            budget_usage_percent: total_expenses.percent_of(total_budget),
            expense_count,
            budget_count,
            status: BudgetStatus::from_totals(total_expenses, total_budget),
        };

        debug!(
            month = %month,
            expenses = expense_count,
            budgets = budget_count,
            total_expenses = total_expenses.cents(),
            total_budget = total_budget.cents(),
            "computed month summary"
        );

        Ok(summary)
    }

    /// Amount spent beyond the budget, zero when within budget
    pub fn overspend(&self) -> Money {
        if self.remaining_budget.is_negative() {
            self.remaining_budget.abs()
        } else {
            Money::zero()
        }
    }
}
