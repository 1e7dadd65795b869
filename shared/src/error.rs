//! Error type for the grading core
//!
//! Every precondition violation (non-positive weights, percentages outside
//! 0-100, a defect heavier than its sample, a threshold table for the wrong
//! commodity) is reported as `InvalidArgument` and aborts the operation.

use thiserror::Error;

/// Grading error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradingError {
    #[error("Invalid argument `{field}`: {message}")]
    InvalidArgument { field: String, message: String },
}

impl GradingError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        GradingError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending input
    pub fn field(&self) -> &str {
        match self {
            GradingError::InvalidArgument { field, .. } => field,
        }
    }
}

/// Result type alias for grading operations
pub type GradingResult<T> = Result<T, GradingError>;
