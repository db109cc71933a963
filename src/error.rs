//! Custom error types for fintrack
//!
//! The ledger itself only ever produces validation errors. The remaining
//! variants come from the configuration layer and the interactive shell.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A precondition on user input failed (amount, date, month, ...)
    #[error("{0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type LedgerResult<T> = Result<T, LedgerError>;
