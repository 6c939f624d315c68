//! Terminal formatting for month summaries and category reports

use crate::models::Money;
use crate::reports::{
    spending_insights, BudgetStatusMessage, CategorySummary, MonthSummary, ReportResult,
    UsageLevel, UsageThresholds,
};

const REPORT_WIDTH: usize = 72;
const BAR_WIDTH: usize = 12;

/// Format a month summary
pub fn format_summary(
    summary: &MonthSummary,
    thresholds: UsageThresholds,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header(
        &format!("Summary - {}", summary.month.label()),
        REPORT_WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    let money = |m: Money| m.format_with_symbol(currency_symbol);
    let rows = [
        ("Total spent", money(summary.total_expenses)),
        ("Total budget", money(summary.total_budget)),
        ("Remaining", money(summary.remaining_budget)),
        ("Expenses", summary.expense_count.to_string()),
        ("Budgets", summary.budget_count.to_string()),
        ("Status", summary.status.to_string()),
    ];
    for (label, value) in rows {
        output.push_str(&format!("{:<16}{:>20}\n", label, value));
    }

    if summary.total_budget.is_positive() {
        let level = UsageLevel::classify(summary.budget_usage_percent, thresholds);
        output.push_str(&format!(
            "{:<16}{:>20}  {} {}\n",
            "Budget used",
            format_percentage(summary.budget_usage_percent),
            format_bar(summary.budget_usage_percent.min(100.0), 100.0, BAR_WIDTH),
            level_marker(level),
        ));
    }

    output
}

/// Format the category report, led by the status message and insights
pub fn format_report(
    summary: &MonthSummary,
    report: &ReportResult,
    thresholds: UsageThresholds,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format_header(
        &format!("Budget Report - {}", report.month.label()),
        REPORT_WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    if report.is_empty() {
        output.push_str("No expenses or budgets for this month.\n");
        return output;
    }

    let status = BudgetStatusMessage::from_results(summary, report, currency_symbol);
    let marker = if status.is_warning() { "!" } else { "✓" };
    output.push_str(&format!("{} {}\n\n", marker, status));

    let name_width = report
        .categories
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 24);

    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>6}  {:<bar$}  {}\n",
        "Category",
        "Spent",
        "Budget",
        "Used",
        "",
        "Status",
        name_width = name_width,
        bar = BAR_WIDTH,
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for row in report.by_spending() {
        output.push_str(&format_category_row(row, name_width, thresholds, currency_symbol));
        output.push('\n');
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}\n",
        "TOTAL",
        summary.total_expenses.format_with_symbol(currency_symbol),
        summary.total_budget.format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output.push('\n');
    for insight in spending_insights(summary, report, currency_symbol) {
        output.push_str(&format!("• {}\n", insight));
    }

    output
}

fn format_category_row(
    row: &CategorySummary,
    name_width: usize,
    thresholds: UsageThresholds,
    currency_symbol: &str,
) -> String {
    let (used, bar, status) = if row.has_budget() {
        let status = if row.over_budget {
            format!(
                "Over by {}",
                row.remaining().abs().format_with_symbol(currency_symbol)
            )
        } else {
            format!(
                "{} left {}",
                row.remaining().format_with_symbol(currency_symbol),
                level_marker(UsageLevel::classify(row.percentage, thresholds))
            )
        };
        (
            format_percentage(row.percentage),
            format_bar(row.fill_percent(), 100.0, BAR_WIDTH),
            status,
        )
    } else {
        ("-".to_string(), " ".repeat(BAR_WIDTH), "No budget".to_string())
    };

    let budget = if row.has_budget() {
        row.budget.format_with_symbol(currency_symbol)
    } else {
        "-".to_string()
    };

    format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>6}  {}  {}",
        truncate(&row.category, name_width),
        row.total_amount.format_with_symbol(currency_symbol),
        budget,
        used,
        bar,
        status.trim_end(),
        name_width = name_width,
    )
}

fn level_marker(level: UsageLevel) -> &'static str {
    match level {
        UsageLevel::Healthy => "",
        UsageLevel::Warning => "(!)",
        UsageLevel::Danger => "(!!)",
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a field of the given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::{budget, expense};
    use crate::reports::{compute_month_summary, compute_report};

    fn sample() -> (MonthSummary, ReportResult) {
        let expenses = vec![
            expense("e1", 12_000, "Food", "2024-06-02"),
            expense("e2", 3_000, "Travel", "2024-06-09"),
            expense("e3", 1_500, "Books", "2024-06-11"),
        ];
        let budgets = vec![
            budget("b1", 10_000, "Food", "2024-06"),
            budget("b2", 5_000, "Travel", "2024-06"),
        ];
        (
            compute_month_summary(&expenses, &budgets, "2024-06").unwrap(),
            compute_report(&expenses, &budgets, "2024-06").unwrap(),
        )
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café & Bar", 10), "Café & Bar");
    }

    #[test]
    fn test_format_summary() {
        let (summary, _) = sample();
        let text = format_summary(&summary, UsageThresholds::default(), "$");
        assert!(text.contains("Summary - June 2024"));
        assert!(text.contains("$165.00"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("-$15.00"));
        assert!(text.contains("Over budget"));
        assert!(text.contains("110%"));
    }

    #[test]
    fn test_format_report() {
        let (summary, report) = sample();
        let text = format_report(&summary, &report, UsageThresholds::default(), "$");
        assert!(text.contains("Budget Report - June 2024"));
        assert!(text.contains("You exceeded budget in 1 category with total overspend of $15.00"));
        assert!(text.contains("Over by $20.00"));
        assert!(text.contains("No budget"));
        assert!(text.contains("Your highest spending category is Food at $120.00."));

        // Highest spending first
        let food = text.find("Food ").unwrap();
        let books = text.find("Books").unwrap();
        assert!(food < books);
    }

    #[test]
    fn test_format_empty_report() {
        let summary = compute_month_summary(&[], &[], "2024-01").unwrap();
        let report = compute_report(&[], &[], "2024-01").unwrap();
        let text = format_report(&summary, &report, UsageThresholds::default(), "$");
        assert!(text.contains("No expenses or budgets for this month."));
    }
}
