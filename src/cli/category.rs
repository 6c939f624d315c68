//! Category and month picker listings

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthKey;

/// List the configured categories
pub fn handle_categories_command(settings: &Settings) {
    println!("Categories:");
    for category in &settings.categories {
        println!("  {}", category);
    }
    if settings.restrict_categories {
        println!();
        println!("New entries are restricted to these categories.");
    }
}

/// List the months offered when picking a budget month
pub fn handle_months_command(year: Option<i32>) -> TrackerResult<()> {
    let current = MonthKey::current();
    let year = year.unwrap_or_else(|| current.year());

    let months = MonthKey::selector_range(year).map_err(|e| {
        TrackerError::Validation(format!("{}: the range must stay within years 1-9999", e))
    })?;

    for month in months {
        let marker = if month == current { "*" } else { " " };
        println!("{} {}  {}", marker, month, month.label());
    }
    Ok(())
}
