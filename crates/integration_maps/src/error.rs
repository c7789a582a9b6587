//! Maps error types

use thiserror::Error;

/// Errors that can occur when calling the Maps web services
#[derive(Debug, Error)]
pub enum MapsError {
    /// Connection to the Maps service failed
    #[error("Maps connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed or returned a non-success status
    #[error("Maps request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the Maps response
    #[error("Maps parse error: {0}")]
    ParseError(String),

    /// API key is missing or was rejected
    #[error("Maps authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Quota or rate limit exceeded
    #[error("Maps rate limit exceeded")]
    RateLimitExceeded,

    /// The service answered with a non-OK status in its body
    #[error("Maps {endpoint} returned {status}: {message}")]
    ApiStatus {
        /// Endpoint that produced the status
        endpoint: &'static str,
        /// Provider status code (e.g. `INVALID_REQUEST`)
        status: String,
        /// Provider error message, if any
        message: String,
    },

    /// Configuration error
    #[error("Maps configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Maps request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl MapsError {
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MapsError::ApiStatus {
            endpoint: "place/details",
            status: "NOT_FOUND".to_string(),
            message: String::new(),
        };
        assert!(err.to_string().contains("place/details"));
        assert!(err.to_string().contains("NOT_FOUND"));

        let err = MapsError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "Maps request timed out after 10 seconds");
    }
}
