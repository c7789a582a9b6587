//! Inference adapter - Implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, OpenAiInferenceEngine};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for OpenAI-compatible chat completions
#[derive(Debug)]
pub struct OpenAiInferenceAdapter {
    engine: OpenAiInferenceEngine,
}

impl OpenAiInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine = OpenAiInferenceEngine::new(config).map_err(Self::map_error)?;
        Ok(Self { engine })
    }

    /// Convert ai_core error to application error
    fn map_error(e: InferenceError) -> ApplicationError {
        match e {
            InferenceError::RateLimited => ApplicationError::RateLimited,
            InferenceError::ConnectionFailed(msg) => {
                ApplicationError::ExternalService(format!("Inference connection failed: {msg}"))
            },
            InferenceError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Inference timeout after {ms}ms"))
            },
            InferenceError::InvalidResponse(msg) => ApplicationError::MalformedModelOutput(msg),
            other => ApplicationError::Inference(other.to_string()),
        }
    }
}

#[async_trait]
impl InferencePort for OpenAiInferenceAdapter {
    #[instrument(skip(self, system_prompt, message), fields(message_len = message.len()))]
    async fn generate_with_system(
        &self,
        system_prompt: &str,
        message: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = InferenceRequest::with_system(system_prompt, message);
        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::map_error)?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms = latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_maps_to_rate_limited() {
        assert!(matches!(
            OpenAiInferenceAdapter::map_error(InferenceError::RateLimited),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn transport_failures_are_external() {
        let err = OpenAiInferenceAdapter::map_error(InferenceError::ConnectionFailed(
            "refused".to_string(),
        ));
        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("refused")));

        let err = OpenAiInferenceAdapter::map_error(InferenceError::Timeout(60_000));
        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("60000ms")));
    }

    #[test]
    fn invalid_response_is_malformed_output() {
        let err = OpenAiInferenceAdapter::map_error(InferenceError::InvalidResponse(
            "no choices".to_string(),
        ));
        assert!(matches!(err, ApplicationError::MalformedModelOutput(_)));
    }

    #[test]
    fn other_errors_are_inference() {
        let err =
            OpenAiInferenceAdapter::map_error(InferenceError::ServerError("Status 500".to_string()));
        assert!(matches!(err, ApplicationError::Inference(ref m) if m.contains("500")));
    }
}
