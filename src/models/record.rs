//! Income and expense records
//!
//! Incomes and expenses share one shape. A record is validated before it is
//! created and never changes afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Format accepted for explicit entry dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which ledger sequence a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Singular label, e.g. "Income"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Plural label, e.g. "Incomes"
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Income => "Incomes",
            Self::Expense => "Expenses",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The date attached to a new record
///
/// `Today` is resolved against the ledger's clock when the record is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryDate {
    #[default]
    Today,
    On(NaiveDate),
}

impl EntryDate {
    /// Parse a `YYYY-MM-DD` date
    pub fn parse(s: &str) -> LedgerResult<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self::On)
            .map_err(|_| LedgerError::validation("invalid date format, use YYYY-MM-DD"))
    }

    /// Interpret optional user input, treating a missing or blank value as today
    pub fn from_input(input: Option<&str>) -> LedgerResult<Self> {
        match input.map(str::trim) {
            None | Some("") => Ok(Self::Today),
            Some(s) => Self::parse(s),
        }
    }

    /// Resolve to a concrete date, using `today` for `EntryDate::Today`
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::On(date) => date,
        }
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        Self::On(date)
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: Money,
    description: String,
    date: NaiveDate,
}

impl Record {
    /// Create a record after checking that the amount is positive
    pub fn new(
        kind: RecordKind,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::validation(format!(
                "{} must be positive and non-zero",
                kind.label().to_lowercase()
            )));
        }
        if !amount.is_within_limit() {
            return Err(LedgerError::validation(format!(
                "{} must not exceed {}",
                kind.label().to_lowercase(),
                Money::MAX
            )));
        }

        Ok(Self {
            amount,
            description: description.into(),
            date,
        })
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
