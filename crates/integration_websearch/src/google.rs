//! Google Custom Search JSON API client
//!
//! Client for <https://developers.google.com/custom-search/v1/overview>.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::{
    WebSearchResponse,
    config::{MAX_RESULTS_LIMIT, WebSearchConfig},
    error::WebSearchError,
    models::SearchResult,
    provider::SearchProvider,
};

/// Custom Search API response structures
mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchResponse {
        #[serde(default)]
        pub items: Vec<Item>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Item {
        #[serde(default)]
        pub title: String,
        #[serde(default)]
        pub link: String,
        #[serde(default)]
        pub snippet: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorEnvelope {
        pub error: ErrorBody,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        pub message: String,
    }
}

/// Google Custom Search client
pub struct GoogleSearchClient {
    client: Client,
    api_key: SecretString,
    config: WebSearchConfig,
}

impl std::fmt::Debug for GoogleSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSearchClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GoogleSearchClient {
    /// Create a new Custom Search client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: WebSearchConfig) -> Result<Self, WebSearchError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            WebSearchError::ConfigurationError("Custom Search API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WebSearchError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Clamp a requested result count to what the API accepts
    fn page_size(&self, max_results: usize) -> usize {
        max_results
            .min(self.config.max_results)
            .clamp(1, MAX_RESULTS_LIMIT)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn convert_results(response: api::SearchResponse) -> Vec<SearchResult> {
        response
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| SearchResult::new(item.title, item.link, item.snippet, (i + 1) as u32))
            .collect()
    }

    /// Pull the human-readable message out of an API error body
    fn error_message(body: &str) -> String {
        serde_json::from_str::<api::ErrorEnvelope>(body)
            .map_or_else(|_| body.to_string(), |e| e.error.message)
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchClient {
    #[instrument(skip(self), fields(provider = "google"))]
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<WebSearchResponse, WebSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WebSearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let num = self.page_size(max_results).to_string();
        let start = Instant::now();

        debug!(num = %num, "Sending Custom Search request");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("cx", self.config.search_engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
                ("safe", self.config.safe_search.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WebSearchError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        debug!(status = %status, "Received Custom Search response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::error_message(&body);
            warn!(status = %status, message = %message, "Custom Search request failed");

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => WebSearchError::RateLimitExceeded,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    WebSearchError::AuthenticationFailed(message)
                },
                _ => WebSearchError::RequestFailed(format!("HTTP {status}: {message}")),
            });
        }

        let api_response: api::SearchResponse = response
            .json()
            .await
            .map_err(|e| WebSearchError::ParseError(e.to_string()))?;

        let results = Self::convert_results(api_response);
        let elapsed = start.elapsed();

        if results.is_empty() {
            debug!(query = %query, "Custom Search returned no items");
        }

        let response = WebSearchResponse::new(query.to_string(), results, "google");

        debug!(
            results = response.results.len(),
            time_ms = elapsed.as_millis(),
            "Custom Search completed"
        );

        Ok(response)
    }
}
