//! fintrack - Terminal-based personal finance tracker
//!
//! Records incomes and expenses, keeps a monthly budget, and summarizes a
//! calendar month: total income, total expenses and what is left of the
//! budget. Everything lives in memory for the length of one session.
//!
//! # Architecture
//!
//! - `ledger`: the [`Ledger`] holding the budget and records
//! - `models`: money, records, calendar months and summaries
//! - `services`: resolution of the month a summary covers
//! - `display`: text rendering of records and summaries
//! - `cli`: the interactive menu shell
//! - `config`: settings file and path management
//! - `clock`: source of "today"
//! - `logging`: tracing subscriber setup
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use fintrack::models::{EntryDate, Money};
//! use fintrack::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_budget(Money::from_cents(50000))?;
//! ledger.add_expense(Money::from_cents(60000), "rent", EntryDate::parse("2024-01-05")?)?;
//!
//! let summary = ledger.monthly_summary(Some(2024), Some(1))?;
//! assert_eq!(summary.remaining_budget, Money::from_cents(-10000));
//! assert!(summary.over_budget);
//! # Ok::<(), fintrack::LedgerError>(())
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
