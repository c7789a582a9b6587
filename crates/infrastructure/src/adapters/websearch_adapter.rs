//! Web search adapter - Implements WebSearchPort using integration_websearch

use application::{error::ApplicationError, ports::WebSearchPort};
use async_trait::async_trait;
use integration_websearch::{GoogleSearchClient, SearchProvider, WebSearchConfig, WebSearchError};
use tracing::{debug, instrument};

/// Adapter for the Google Custom Search API
#[derive(Debug)]
pub struct WebSearchAdapter {
    client: GoogleSearchClient,
    max_results: usize,
}

impl WebSearchAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: WebSearchConfig) -> Result<Self, ApplicationError> {
        let max_results = config.max_results;
        let client = GoogleSearchClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client,
            max_results,
        })
    }

    /// Convert integration error to application error
    fn map_error(e: WebSearchError) -> ApplicationError {
        match e {
            WebSearchError::RateLimitExceeded => ApplicationError::RateLimited,
            WebSearchError::InvalidQuery(msg) => ApplicationError::InvalidInput(msg),
            WebSearchError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl WebSearchPort for WebSearchAdapter {
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    async fn search(&self, query: &str) -> Result<Vec<String>, ApplicationError> {
        let response = self
            .client
            .search(query, self.max_results)
            .await
            .map_err(Self::map_error)?;

        let snippets = response.snippets();
        debug!(
            results = response.results.len(),
            snippets = snippets.len(),
            provider = %response.provider,
            "Web search completed"
        );
        Ok(snippets)
    }
}
