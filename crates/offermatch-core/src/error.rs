// Allow unused assignments for diagnostic fields - they're used by the macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for Offermatch operations
#[derive(Error, Debug, Diagnostic)]
pub enum CoreError {
    /// Serialization failed
    #[error("Serialization error: {message}")]
    #[diagnostic(
        code(offermatch::serialization_error),
        help("Check that the payload is valid JSON for the expected type")
    )]
    SerializationError {
        #[allow(unused)]
        message: String,
        #[source]
        #[allow(unused)]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Task profile failed admission validation
    #[error("Invalid task profile: {reason}")]
    #[diagnostic(
        code(offermatch::invalid_profile),
        help("Fix the task's declared requirements before queueing it")
    )]
    InvalidProfile {
        #[allow(unused)]
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create a SerializationError
    pub fn serialization_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidProfile error
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            reason: reason.into(),
        }
    }
}
