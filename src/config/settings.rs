//! User settings for fintrack
//!
//! Display preferences and an optional starting budget, stored as JSON in
//! the config directory. Ledger records are never written here.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::LedgerError;
use crate::models::Money;

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when listing records (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Monthly budget applied when the tracker starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_budget: Option<Money>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_budget: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the stored values are usable
    pub fn validate(&self) -> Result<(), LedgerError> {
        let invalid_format = || {
            LedgerError::Config(format!("Invalid date format: {}", self.date_format))
        };
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid_format());
        }
        // Records carry a date only; time and offset fields fail to render
        let mut sample = String::new();
        write!(sample, "{}", NaiveDate::MIN.format(&self.date_format))
            .map_err(|_| invalid_format())?;

        if let Some(budget) = self.default_budget {
            if !budget.is_positive() {
                return Err(LedgerError::Config(
                    "default_budget must be positive and non-zero".into(),
                ));
            }
            if !budget.is_within_limit() {
                return Err(LedgerError::Config(format!(
                    "default_budget must not exceed {}",
                    Money::MAX
                )));
            }
        }

        Ok(())
    }
}
