//! Core error types for paypertick-core.
//!
//! Calculator failures are kept separate from storage failures so hosts can
//! render a "not configured" fallback for the former and surface the latter.

use std::path::PathBuf;

use chrono::NaiveTime;
use thiserror::Error;

/// Core error type for paypertick-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Earnings computation errors
    #[error("Earnings error: {0}")]
    Earnings(#[from] EarningsError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be determined or created
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation failures of a work schedule or salary.
///
/// These are local, deterministic failures: they recur until the
/// configuration is corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EarningsError {
    /// Boundary times are not in `start <= morning_end <= afternoon_start <= end` order.
    #[error("Invalid schedule: {earlier_name} ({earlier}) must not be after {later_name} ({later})")]
    ScheduleInvalid {
        earlier_name: &'static str,
        earlier: NaiveTime,
        later_name: &'static str,
        later: NaiveTime,
    },

    /// Zero work days per month, or a workday with no working minutes.
    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    /// Monthly salary must be strictly positive.
    #[error("Monthly salary must be positive, got {0}")]
    InvalidSalary(rust_decimal::Decimal),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
