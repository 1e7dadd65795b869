//! Error handling for the grain grader
//!
//! Wraps core grading failures together with the I/O, parsing and
//! configuration errors of the command line surface.

use shared::GradingError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Grading errors
    #[error("Grading error: {0}")]
    Grading(#[from] GradingError),

    // Input errors
    #[error("Malformed grading request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Invalid threshold table: {0}")]
    InvalidTables(GradingError),
}

impl AppError {
    /// Short machine readable code, printed with the message
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Grading(_) => "INVALID_ARGUMENT",
            AppError::MalformedRequest(_) => "MALFORMED_REQUEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::InvalidTables(_) => "INVALID_TABLES",
        }
    }
}

/// Result type alias for the command line surface
pub type AppResult<T> = Result<T, AppError>;
