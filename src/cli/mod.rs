//! Command-line front end
//!
//! The interactive menu shell that drives a [`Ledger`](crate::ledger::Ledger)
//! from a terminal.

pub mod shell;

pub use shell::{MenuChoice, Shell};
