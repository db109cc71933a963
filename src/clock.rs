//! Access to the current date
//!
//! The ledger asks a [`Clock`] for "today" so that defaulted dates and
//! months stay deterministic in tests.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
