//! Display formatting for terminal output
//!
//! Turns ledger records and summaries into the text shown by the shell.

pub mod record;
pub mod summary;

pub use record::{format_record_added, format_record_line, format_record_list};
pub use summary::format_monthly_summary;

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::{Money, DATE_FORMAT};

/// Currency symbol and date format used when rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    /// Format an amount with two decimals and the currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a record date, falling back to `YYYY-MM-DD` if the configured
    /// format cannot be applied to a plain date (e.g. "%H:%M")
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format(DATE_FORMAT).to_string();
        }
        out
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}
