//! Web search service port
//!
//! Defines the interface for web search operations. Only the text snippets of
//! the results are needed by the entity extraction step.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for web search operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    /// Search the web and return result snippets in rank order
    ///
    /// A query without results yields an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<String>, ApplicationError>;
}
