//! User settings for the expense tracker
//!
//! Display preferences, the category list offered for new entries, and the
//! thresholds used to flag budget usage.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::default_categories;
use crate::reports::UsageThresholds;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories offered for new expenses and budgets
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Only accept categories from `categories` for new entries
    #[serde(default)]
    pub restrict_categories: bool,

    /// Usage percentage above which a budget is flagged as a warning
    #[serde(default = "default_usage_warning")]
    pub usage_warning_percent: f64,

    /// Usage percentage above which a budget is flagged as critical
    #[serde(default = "default_usage_danger")]
    pub usage_danger_percent: f64,

    /// Default log filter (e.g. "info", "expense_tracker=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_usage_warning() -> f64 {
    UsageThresholds::default().warning
}

fn default_usage_danger() -> f64 {
    UsageThresholds::default().danger
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            categories: default_categories(),
            restrict_categories: false,
            usage_warning_percent: default_usage_warning(),
            usage_danger_percent: default_usage_danger(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Thresholds for classifying budget usage
    pub fn usage_thresholds(&self) -> UsageThresholds {
        UsageThresholds {
            warning: self.usage_warning_percent,
            danger: self.usage_danger_percent,
        }
    }

    /// Check whether a category may be used for a new entry
    pub fn allows_category(&self, category: &str) -> bool {
        !self.restrict_categories || self.categories.iter().any(|c| c == category)
    }

    /// Check settings for values that would make reports meaningless
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.currency_symbol.is_empty() {
            return Err(TrackerError::Config("currency_symbol must not be empty".into()));
        }
        if self.usage_warning_percent < 0.0 || self.usage_danger_percent < 0.0 {
            return Err(TrackerError::Config("usage thresholds must not be negative".into()));
        }
        if self.usage_warning_percent > self.usage_danger_percent {
            return Err(TrackerError::Config(format!(
                "usage_warning_percent ({}) must not exceed usage_danger_percent ({})",
                self.usage_warning_percent, self.usage_danger_percent
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
