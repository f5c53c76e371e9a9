//! Unified error handling for the clario crate
//!
//! Engine failures stay in [`AnalysisError`]; this module wraps them together
//! with collaborator failures (I/O, JSON, templates, configuration) in a
//! single [`Error`] enum.
//!
//! # Architecture
//!
//! - [`ClarioErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use clario::error::{ClarioErrorTrait, Error};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         eprintln!("Skipping: {}", err.user_message());
//!     } else {
//!         eprintln!("Fatal error: {err}");
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

pub use crate::analytics::AnalysisError;

/// Common trait for all clario error types
pub trait ClarioErrorTrait: std::error::Error {
    /// Check if the caller can continue after skipping the affected item
    fn is_recoverable(&self) -> bool;

    /// Message suitable for showing to a user
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input dataset violates a structural precondition
    Validation,
    /// A computation cannot be carried out (e.g. zero baseline)
    Computation,
    /// Storage and I/O errors
    Storage,
    /// Serialization and template rendering errors
    Rendering,
    /// Configuration errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get a short label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation => "invalid data",
            Self::Computation => "computation error",
            Self::Storage => "storage error",
            Self::Rendering => "rendering error",
            Self::Config => "configuration error",
            Self::Other => "error",
        }
    }
}

impl ClarioErrorTrait for AnalysisError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Division { .. })
    }

    fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => format!("The dataset cannot be analyzed: {msg}"),
            Self::Division { trend } => format!(
                "Growth for trend '{trend}' is undefined because its first popularity value is 0"
            ),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Division { .. } => ErrorCategory::Computation,
        }
    }
}

/// Unified error type for the clario crate
#[derive(Error, Debug)]
pub enum Error {
    /// Analysis engine errors
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template registration errors
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering errors
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ClarioErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Analysis(e) => e.is_recoverable(),
            Self::Io(_) => true, // I/O errors are often transient
            Self::Json(_) | Self::Template(_) | Self::Render(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Analysis(e) => e.user_message(),
            Self::Io(e) => format!("Could not read or write a file: {e}"),
            Self::Json(e) => format!("Malformed JSON: {e}"),
            Self::Template(e) => format!("Invalid report template: {e}"),
            Self::Render(e) => format!("Could not render the report: {e}"),
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Analysis(e) => e.category(),
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) | Self::Template(_) | Self::Render(_) => ErrorCategory::Rendering,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
