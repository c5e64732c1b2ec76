//! Core error types for taqwim-core.
//!
//! The calendar math itself is total over its typed inputs; every error in
//! this module comes from a boundary where raw input (date strings, "HH:MM"
//! strings, configuration files, event drafts) is turned into typed values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taqwim-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No event with the given id in the schedule book
    #[error("Event not found: {id}")]
    EventNotFound { id: String },

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

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors raised where raw input becomes typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a valid proleptic Gregorian date
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date string not in YYYY-MM-DD form
    #[error("Malformed date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),

    /// Time string not in 24-hour HH:MM form
    #[error("Malformed time '{0}': expected 24-hour HH:MM")]
    MalformedTime(String),

    /// Window whose end precedes its start
    #[error("Invalid time window: end ({end}) must not precede start ({start})")]
    InvertedWindow { start: String, end: String },

    /// Weekday outside 0 (Sunday) ..= 6 (Saturday)
    #[error("Invalid weekday {0}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday(u8),

    /// Holiday rule with an impossible month/day
    #[error("Invalid holiday rule '{label}': {message}")]
    InvalidRule { label: String, message: String },

    /// Two events share an id
    #[error("Duplicate event id '{0}'")]
    DuplicateEventId(String),

    /// Required field missing
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
