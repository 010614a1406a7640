//! Crate error type.
//!
//! Covers configuration and time-context failures only. An empty
//! placement result is a normal outcome, not an error, and input
//! integrity problems are reported by [`crate::validation`].

use thiserror::Error;

/// Errors raised while loading configuration or parsing time context.
#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
