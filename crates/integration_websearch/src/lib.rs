#![forbid(unsafe_code)]
//! Web search integration for Waypoint
//!
//! Provides web search via the Google Custom Search JSON API. Results carry
//! their source URL and snippet; the snippets feed the entity extraction step
//! of a discovery search.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_websearch::{GoogleSearchClient, SearchProvider, WebSearchConfig};
//!
//! let client = GoogleSearchClient::new(WebSearchConfig::default())?;
//! let response = client.search("concerts in austin this weekend", 10).await?;
//! for snippet in response.snippets() {
//!     println!("{snippet}");
//! }
//! ```

mod config;
mod error;
mod google;
mod models;
mod provider;

pub use config::WebSearchConfig;
pub use error::WebSearchError;
pub use google::GoogleSearchClient;
pub use models::{SearchResult, WebSearchResponse};
pub use provider::SearchProvider;
