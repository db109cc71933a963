//! Configuration module for fintrack
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
