//! Places port - Interface for place suggestions

use async_trait::async_trait;
use domain::PlaceSuggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning free text into place suggestions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Suggest places for free-form input in provider rank order
    ///
    /// An input without matches yields an empty list, not an error.
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError>;
}
