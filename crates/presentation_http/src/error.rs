//! API error handling
//!
//! Client errors answer with their message as plain text. Everything else is
//! logged with its cause and answered with a generic 500 body.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Body returned for every server-side failure
pub const GENERIC_ERROR_BODY: &str = "An error occurred";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            },
            Self::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_BODY).into_response()
            },
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if !err.is_client_error() {
            return Self::Internal(err.to_string());
        }
        match err {
            ApplicationError::InvalidInput(msg) => Self::BadRequest(msg),
            other => Self::BadRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use domain::DomainError;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_message() {
        let response = ApiError::BadRequest("Query parameter \"q\" is required".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Query parameter \"q\" is required");
    }

    #[tokio::test]
    async fn internal_hides_cause() {
        let response = ApiError::Internal("maps key rejected at https://maps".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, GENERIC_ERROR_BODY);
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let err = ApiError::from(ApplicationError::InvalidInput("missing".to_string()));
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "missing"));
    }

    #[test]
    fn domain_error_is_bad_request() {
        let err = ApiError::from(ApplicationError::Domain(DomainError::invalid_coordinates(
            91.0, 0.0,
        )));
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("91")));
    }

    #[test]
    fn upstream_failures_are_internal() {
        for app_err in [
            ApplicationError::ExternalService("search down".to_string()),
            ApplicationError::MalformedModelOutput("no object".to_string()),
            ApplicationError::RateLimited,
            ApplicationError::Inference("Status 500".to_string()),
        ] {
            assert!(matches!(ApiError::from(app_err), ApiError::Internal(_)));
        }
    }

    #[test]
    fn status_follows_client_error_classification() {
        for app_err in [
            ApplicationError::InvalidInput("q".to_string()),
            ApplicationError::Domain(DomainError::invalid_coordinates(0.0, 181.0)),
            ApplicationError::Configuration("maps.api_key".to_string()),
            ApplicationError::Internal("join".to_string()),
            ApplicationError::RateLimited,
        ] {
            let client_error = app_err.is_client_error();
            let is_bad_request = matches!(ApiError::from(app_err), ApiError::BadRequest(_));
            assert_eq!(is_bad_request, client_error);
        }
    }
}
