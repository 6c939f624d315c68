//! Budget listing and data check commands

use super::SourceArgs;
use crate::config::{Settings, TrackerPaths};
use crate::display::{format_budget_groups, format_duplicates};
use crate::error::TrackerResult;
use crate::reports::group_budgets_by_month;
use crate::services::DataCheck;

/// List budgets grouped by month, newest first
pub fn handle_budgets_command(
    paths: &TrackerPaths,
    settings: &Settings,
    source: &SourceArgs,
) -> TrackerResult<()> {
    let records = source.load(paths)?;
    let groups = group_budgets_by_month(&records.budgets);
    println!("{}", format_budget_groups(&groups, &settings.currency_symbol));
    Ok(())
}

/// Check every record and report problems
///
/// Returns the check so the caller can decide on the exit status.
pub fn handle_check_command(paths: &TrackerPaths, source: &SourceArgs) -> TrackerResult<DataCheck> {
    let records = source.load(paths)?;
    let check = DataCheck::run(&records.expenses, &records.budgets);

    println!(
        "Checked {} expenses and {} budgets for user {}",
        records.expenses.len(),
        records.budgets.len(),
        records.user_id
    );

    if check.is_clean() {
        println!("No problems found.");
        return Ok(check);
    }

    if !check.invalid_records.is_empty() {
        println!();
        println!("Invalid records:");
        for problem in &check.invalid_records {
            println!("  {} {}: {}", problem.kind, problem.id, problem.message);
        }
    }

    if !check.duplicate_budgets.is_empty() {
        println!();
        println!("Duplicate budgets:");
        print!("{}", format_duplicates(&check.duplicate_budgets));
    }

    Ok(check)
}
