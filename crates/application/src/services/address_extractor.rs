//! Address extraction from free-text queries

use std::{fmt, sync::Arc};

use tracing::{debug, instrument};

use super::prompts::ADDRESS_PROMPT;
use crate::{error::ApplicationError, ports::InferencePort};

/// Pulls a physical address out of a query with a single model call
///
/// The model output is returned verbatim; it is only ever used as places
/// autocomplete input.
pub struct AddressExtractor {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for AddressExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressExtractor").finish_non_exhaustive()
    }
}

impl AddressExtractor {
    /// Create a new extractor
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Extract the address mentioned in `query`
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn extract(&self, query: &str) -> Result<String, ApplicationError> {
        let result = self.inference.generate_with_system(ADDRESS_PROMPT, query).await?;
        debug!(address = %result.content, "Address extracted");
        Ok(result.content)
    }
}
