//! Error types for the trend analysis engine

use thiserror::Error;

/// Errors raised by the analysis engine
///
/// The engine never recovers from these internally. Callers decide whether to
/// skip the affected trend, abort the run, or log and continue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The dataset violates a structural precondition
    #[error("Validation error: {0}")]
    Validation(String),

    /// A computation would divide by a zero baseline
    #[error("Division by zero: trend '{trend}' has a first popularity value of 0")]
    Division { trend: String },
}

impl AnalysisError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a division error for the given trend
    pub fn division(trend: impl Into<String>) -> Self {
        Self::Division {
            trend: trend.into(),
        }
    }

    /// Trend named by the error, if any
    #[must_use]
    pub fn trend(&self) -> Option<&str> {
        match self {
            Self::Division { trend } => Some(trend),
            Self::Validation(_) => None,
        }
    }
}

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
