//! Budget list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::{BudgetGroups, MonthBudgets};
use crate::services::DuplicateBudget;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format budgets as one table per month, newest month first
pub fn format_budget_groups(groups: &BudgetGroups, currency_symbol: &str) -> String {
    if groups.is_empty() {
        return "No budgets found.".to_string();
    }

    groups
        .iter()
        .map(|group| format_month(group, currency_symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_month(group: &MonthBudgets, currency_symbol: &str) -> String {
    let rows = group.budgets.iter().map(|budget| BudgetRow {
        id: budget.id.short(),
        category: budget.category.clone(),
        amount: budget.amount.format_with_symbol(currency_symbol),
    });

    let table = Table::new(rows).with(Style::rounded()).to_string();

    let total = match group.total() {
        Some(total) => format!("{} total", total.format_with_symbol(currency_symbol)),
        None => "total too large to show".to_string(),
    };

    format!("{} ({})\n{}\n", group.month.label(), total, table)
}

/// Format the duplicate budget findings of a data check
pub fn format_duplicates(duplicates: &[DuplicateBudget]) -> String {
    let mut output = String::new();
    for duplicate in duplicates {
        let ids: Vec<&str> = duplicate.ids.iter().map(|id| id.as_str()).collect();
        output.push_str(&format!(
            "  {} in {}: {} budgets ({})\n",
            duplicate.category,
            duplicate.month,
            ids.len(),
            ids.join(", ")
        ));
    }
    output
}
