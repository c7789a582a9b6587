//! Web search configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Largest page size the Custom Search API accepts
pub const MAX_RESULTS_LIMIT: usize = 10;

/// Configuration for the Google Custom Search client
#[derive(Clone, Serialize, Deserialize)]
pub struct WebSearchConfig {
    /// Custom Search API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Custom Search API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Programmable search engine identifier (`cx`)
    #[serde(default = "default_search_engine_id")]
    pub search_engine_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of results to request (1-10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Safe search level: "off" or "active"
    #[serde(default = "default_safe_search")]
    pub safe_search: String,
}

impl std::fmt::Debug for WebSearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebSearchConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("search_engine_id", &self.search_engine_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_results", &self.max_results)
            .field("safe_search", &self.safe_search)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://www.googleapis.com/customsearch/v1".to_string()
}

fn default_search_engine_id() -> String {
    "e0b3c25aac1c6497d".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_max_results() -> usize {
    MAX_RESULTS_LIMIT
}

fn default_safe_search() -> String {
    "off".to_string()
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            search_engine_id: default_search_engine_id(),
            timeout_secs: default_timeout_secs(),
            max_results: default_max_results(),
            safe_search: default_safe_search(),
        }
    }
}

impl WebSearchConfig {
    /// Create a configuration for testing against a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(SecretString::from("test-search-key")),
            search_engine_id: "test-cx".to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.search_engine_id.trim().is_empty() {
            return Err("search_engine_id must not be empty".to_string());
        }

        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }

        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(format!("max_results must be {MAX_RESULTS_LIMIT} or less"));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        let valid_safe_search = ["off", "active"];
        if !valid_safe_search.contains(&self.safe_search.as_str()) {
            return Err(format!(
                "safe_search must be one of: {}",
                valid_safe_search.join(", ")
            ));
        }

        Ok(())
    }
}
