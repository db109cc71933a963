//! Core data models for fintrack
//!
//! Amounts, records, calendar months and the monthly summary.

pub mod money;
pub mod period;
pub mod record;
pub mod summary;

pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
pub use record::{EntryDate, Record, RecordKind, DATE_FORMAT};
pub use summary::MonthlySummary;
