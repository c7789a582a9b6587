//! Web search data models

use serde::{Deserialize, Serialize};

/// A single search result from a web search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,

    /// URL of the search result
    pub url: String,

    /// Short snippet/description of the content
    pub snippet: String,

    /// Source domain (e.g., "wikipedia.org")
    pub source: String,

    /// Position in search results (1-indexed)
    pub position: u32,
}

impl SearchResult {
    /// Create a new search result
    #[must_use]
    pub fn new(title: String, url: String, snippet: String, position: u32) -> Self {
        let source = Self::extract_domain(&url);
        Self {
            title,
            url,
            snippet,
            source,
            position,
        }
    }

    fn extract_domain(url: &str) -> String {
        url::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(ToString::to_string))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Response from a web search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchResponse {
    /// The search query
    pub query: String,

    /// List of search results
    pub results: Vec<SearchResult>,

    /// Search provider used
    pub provider: String,
}

impl WebSearchResponse {
    /// Create a new search response
    #[must_use]
    pub fn new(query: String, results: Vec<SearchResult>, provider: &str) -> Self {
        Self {
            query,
            results,
            provider: provider.to_string(),
        }
    }

    /// Snippet text of each result in rank order, skipping blank snippets
    #[must_use]
    pub fn snippets(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| r.snippet.trim())
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
