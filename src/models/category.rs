//! Spending categories
//!
//! Categories are plain strings on records. The tracker ships with a preset
//! list offered when entering expenses and budgets; settings may replace it.

/// Preset categories, in the order they are offered
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Other",
];

/// The preset category list as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Normalize a category entered by a user: trims surrounding whitespace
///
/// Returns `None` when nothing is left.
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
