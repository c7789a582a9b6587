//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::services::response_parser::ResponseParseError;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Model output could not be turned into the expected structure
    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Returns true if the error was caused by the caller rather than a collaborator
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Domain(_))
    }
}

impl From<ResponseParseError> for ApplicationError {
    fn from(err: ResponseParseError) -> Self {
        Self::MalformedModelOutput(err.to_string())
    }
}
