//! Entity extraction - landmarks and events from web search snippets
//!
//! The model turns snippet text into a landmarks/events document. Each event is
//! then located through its address: the first place suggestion wins, and
//! events that cannot be located are dropped.

use std::{fmt, sync::Arc};

use domain::{EntityDocument, GeoLocation};
use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use super::{prompts::ENTITY_PROMPT, response_parser::extract_json_object};
use crate::{
    error::ApplicationError,
    ports::{InferencePort, PlacesPort},
};

/// Converts web search snippets into a located landmarks/events document
pub struct EntityExtractor {
    inference: Arc<dyn InferencePort>,
    places: Arc<dyn PlacesPort>,
}

impl fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityExtractor").finish_non_exhaustive()
    }
}

impl EntityExtractor {
    /// Create a new extractor
    pub fn new(inference: Arc<dyn InferencePort>, places: Arc<dyn PlacesPort>) -> Self {
        Self { inference, places }
    }

    /// Extract entities from `snippets` and attach coordinates to events
    ///
    /// Without snippets the model is not consulted and an empty document is
    /// returned.
    #[instrument(skip(self, snippets), fields(snippets = snippets.len()))]
    pub async fn extract(&self, snippets: &[String]) -> Result<EntityDocument, ApplicationError> {
        if snippets.is_empty() {
            debug!("No snippets to extract entities from");
            return Ok(EntityDocument::empty());
        }

        let text = snippets.join("\n");
        let result = self.inference.generate_with_system(ENTITY_PROMPT, &text).await?;

        let mut document = EntityDocument::from_value(extract_json_object(&result.content)?)
            .map_err(|e| ApplicationError::MalformedModelOutput(e.to_string()))?;

        let addresses = document.event_addresses();
        let locations =
            try_join_all(addresses.iter().map(|address| self.locate(address.as_deref()))).await?;

        document.locate_events(&locations);

        debug!(
            events = addresses.len(),
            located = document.event_count(),
            "Entities extracted"
        );
        Ok(document)
    }

    async fn locate(&self, address: Option<&str>) -> Result<Option<GeoLocation>, ApplicationError> {
        let Some(address) = address else {
            warn!("Dropping event without an address");
            return Ok(None);
        };

        let location = self
            .places
            .suggest(address)
            .await?
            .first()
            .map(domain::PlaceSuggestion::location);

        if location.is_none() {
            warn!(%address, "Dropping event without a place suggestion");
        }
        Ok(location)
    }
}
