//! Category report
//!
//! Breaks a month down by category: what was spent, what was budgeted, and
//! which categories went over.
//!
//! Categories are kept in a `BTreeMap`, so they are always visited in
//! byte-wise lexicographic order of their names. The top category is the
//! first category in that order with the highest spending; when two
//! categories tie, the one whose name sorts first wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{money, BudgetRecord, ExpenseRecord, Money, MonthKey};

/// Budget performance of one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    /// Sum of the category's expenses for the month
    #[serde(with = "money::decimal")]
    pub total_amount: Money,
    #[serde(rename = "count")]
    pub expense_count: usize,
    /// Budget set for the month, zero when none was set
    #[serde(with = "money::decimal")]
    pub budget: Money,
    pub over_budget: bool,
    /// Spending as a percentage of the budget, 0 when there is no budget
    pub percentage: f64,
}

impl CategorySummary {
    fn new(category: String, total_amount: Money, expense_count: usize, budget: Money) -> Self {
        Self {
            category,
            total_amount,
            expense_count,
            budget,
            over_budget: budget.is_positive() && total_amount > budget,
            percentage: total_amount.percent_of(budget),
        }
    }

    /// Whether a budget was set for this category
    pub fn has_budget(&self) -> bool {
        self.budget.is_positive()
    }

    /// Budget left over; negative by the overspent amount
    pub fn remaining(&self) -> Money {
        self.budget - self.total_amount
    }

    /// Percentage of a progress bar to fill, capped at 100
    pub fn fill_percent(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// The category with the highest spending in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: String,
    #[serde(with = "money::decimal")]
    pub amount: Money,
}

/// Per-category report for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub month: MonthKey,
    /// Every category with an expense or a budget in the month, by name
    #[serde(rename = "expenses_by_category")]
    pub categories: BTreeMap<String, CategorySummary>,
    #[serde(rename = "top_spending_category")]
    pub top_category: Option<TopCategory>,
    #[serde(rename = "over_budget_categories_count")]
    pub over_budget_count: usize,
    #[serde(with = "money::decimal")]
    pub total_expenses: Money,
    pub total_categories: usize,
}

/// Running totals for one category while scanning the records
#[derive(Default)]
struct Tally {
    spent: Money,
    expense_count: usize,
    budget: Money,
    budget_count: usize,
}

impl ReportResult {
    /// Build the report for `month`
    ///
    /// Several budgets for the same category and month are summed. That is
    /// a data-integrity problem upstream, so it is logged as a warning.
    pub fn compute(
        expenses: &[ExpenseRecord],
        budgets: &[BudgetRecord],
        month: MonthKey,
    ) -> TrackerResult<Self> {
        super::validate_records(expenses, budgets)?;

        let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();

        for expense in expenses.iter().filter(|e| month.contains(e.date)) {
            let tally = tallies.entry(expense.category.as_str()).or_default();
            tally.spent = tally
                .spent
                .checked_add(expense.amount)
                .ok_or_else(|| super::total_out_of_range("expenses", month))?;
            tally.expense_count += 1;
        }

        for budget in budgets.iter().filter(|b| b.month == month) {
            let tally = tallies.entry(budget.category.as_str()).or_default();
            tally.budget = tally
                .budget
                .checked_add(budget.amount)
                .ok_or_else(|| super::total_out_of_range("budgets", month))?;
            tally.budget_count += 1;
            if tally.budget_count == 2 {
                warn!(
                    category = %budget.category,
                    month = %month,
                    "multiple budgets for the same category and month; summing them"
                );
            }
        }

        let categories: BTreeMap<String, CategorySummary> = tallies
            .into_iter()
            .map(|(name, tally)| {
                let summary = CategorySummary::new(
                    name.to_string(),
                    tally.spent,
                    tally.expense_count,
                    tally.budget,
                );
                (name.to_string(), summary)
            })
            .collect();

        let top_category = select_top_category(&categories);
        let over_budget_count = categories.values().filter(|c| c.over_budget).count();
        let total_expenses = Money::checked_sum(categories.values().map(|c| c.total_amount))
            .ok_or_else(|| super::total_out_of_range("expenses", month))?;
        let total_categories = categories.len();

        debug!(
            month = %month,
            categories = total_categories,
            over_budget = over_budget_count,
            "computed category report"
        );

        Ok(Self {
            month,
            categories,
            top_category,
            over_budget_count,
            total_expenses,
            total_categories,
        })
    }

    /// Look up one category
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.categories.get(name)
    }

    /// Categories whose spending exceeded their budget, in name order
    pub fn over_budget_categories(&self) -> impl Iterator<Item = &CategorySummary> {
        self.categories.values().filter(|c| c.over_budget)
    }

    /// Categories ordered by spending, highest first; ties keep name order
    pub fn by_spending(&self) -> Vec<&CategorySummary> {
        let mut rows: Vec<_> = self.categories.values().collect();
        rows.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
        rows
    }

    /// True when there is nothing to report for the month
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Highest positive spending wins; the first category in name order wins ties
fn select_top_category(categories: &BTreeMap<String, CategorySummary>) -> Option<TopCategory> {
    let mut best: Option<&CategorySummary> = None;
    for summary in categories.values() {
        if !summary.total_amount.is_positive() {
            continue;
        }
        match best {
            Some(current) if summary.total_amount <= current.total_amount => {}
            _ => best = Some(summary),
        }
    }
    best.map(|summary| TopCategory {
        category: summary.category.clone(),
        amount: summary.total_amount,
    })
}
