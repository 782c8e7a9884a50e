//! Custom error types for MY POUPAR+
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for POUPAR+ operations
#[derive(Error, Debug)]
pub enum PouparError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Client storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The backend answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PouparError {
    /// Create an API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the failure came from talking to the backend
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Network(_))
    }
}

impl From<std::io::Error> for PouparError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PouparError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for PouparError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::api(status.as_u16(), err.to_string()),
            None => Self::Network(err.to_string()),
        }
    }
}

/// Result type alias for POUPAR+ operations
pub type PouparResult<T> = Result<T, PouparError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PouparError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_api_error() {
        let err = PouparError::api(503, "service unavailable");
        assert_eq!(err.to_string(), "API error (503): service unavailable");
        assert!(err.is_remote());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PouparError = io_err.into();
        assert!(matches!(err, PouparError::Io(_)));
    }
}
