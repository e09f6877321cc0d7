//! Error types for the NLQ service.
//!
//! This module defines a unified error enum that covers every failure a
//! request or the startup sequence can hit: configuration, I/O, the LLM
//! provider, prompt rendering, reply translation, and the record store.

use thiserror::Error;

/// Unified error type for the NLQ service.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// The HTTP layer decides the status code from the variant, so variants are
/// split by who is at fault rather than by which crate raised them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The incoming request is unusable (missing or empty `query`)
    #[error("{0}")]
    InvalidRequest(String),

    /// The model reply parsed but carried no usable filter
    #[error("{0}")]
    InvalidQuery(String),

    /// The model reply could not be turned into JSON
    #[error("{0}")]
    Translation(String),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt system errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Record store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Whether the error was caused by the caller rather than by the service
    /// or one of its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidRequest(_) | AppError::InvalidQuery(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(AppError::InvalidRequest("missing".into()).is_client_error());
        assert!(AppError::InvalidQuery("empty".into()).is_client_error());
        assert!(!AppError::Translation("Invalid JSON".into()).is_client_error());
        assert!(!AppError::Store("down".into()).is_client_error());
        assert!(!AppError::Llm("quota".into()).is_client_error());
    }

    #[test]
    fn test_request_messages_are_unprefixed() {
        let err = AppError::InvalidQuery("Empty or invalid query generated.".into());
        assert_eq!(err.to_string(), "Empty or invalid query generated.");

        let err = AppError::Llm("quota exceeded".into());
        assert_eq!(err.to_string(), "LLM error: quota exceeded");
    }
}
