//! Error types for the events crate.

use thiserror::Error;

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors that can occur during event decoding and filtering.
#[derive(Debug, Error)]
pub enum EventError {
    /// Filter criteria failed validation
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with the host app's error handling.
/// Range: 11xxx for event errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventErrorCode {
    /// Filter criteria failed validation
    InvalidCriteria = 11001,
    /// JSON parsing error
    JsonParsing = 11002,
}

impl EventError {
    /// Returns the error code for this error.
    pub fn code(&self) -> EventErrorCode {
        match self {
            EventError::InvalidCriteria(_) => EventErrorCode::InvalidCriteria,
            EventError::JsonError(_) => EventErrorCode::JsonParsing,
        }
    }
}
