//! Service layer for fintrack
//!
//! Business logic that sits between user input and the ledger.

pub mod period;

pub use period::PeriodService;
