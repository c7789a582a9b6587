//! Search orchestration
//!
//! Sequences the model-driven components for a free-text query: intent and
//! address are resolved concurrently, places are always looked up for the
//! extracted address, and discovery queries additionally run the web search
//! and entity extraction pipeline alongside the places lookup.

use std::{fmt, sync::Arc};

use domain::{SearchIntent, SearchResponse};
use futures::future::try_join;
use tracing::{debug, info, instrument};

use super::{
    address_extractor::AddressExtractor, entity_extractor::EntityExtractor,
    intent_classifier::IntentClassifier,
};
use crate::{
    error::ApplicationError,
    ports::{InferencePort, PlacesPort, WebSearchPort},
};

/// A free-text search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// The user's query
    pub query: String,
    /// Optional client latitude, informational only
    pub lat: Option<f64>,
    /// Optional client longitude, informational only
    pub lng: Option<f64>,
}

impl SearchRequest {
    /// Create a request without client coordinates
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            lat: None,
            lng: None,
        }
    }

    /// Attach client coordinates
    #[must_use]
    pub const fn with_position(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }
}

/// Orchestrates a search across the model, places and web search ports
pub struct SearchService {
    intent_classifier: IntentClassifier,
    address_extractor: AddressExtractor,
    entity_extractor: EntityExtractor,
    places: Arc<dyn PlacesPort>,
    web_search: Arc<dyn WebSearchPort>,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService").finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service
    pub fn new(
        inference: Arc<dyn InferencePort>,
        places: Arc<dyn PlacesPort>,
        web_search: Arc<dyn WebSearchPort>,
    ) -> Self {
        Self {
            intent_classifier: IntentClassifier::new(Arc::clone(&inference)),
            address_extractor: AddressExtractor::new(Arc::clone(&inference)),
            entity_extractor: EntityExtractor::new(inference, Arc::clone(&places)),
            places,
            web_search,
        }
    }

    /// Answer a free-text query with place suggestions and, for discovery
    /// queries, the extracted web results
    #[instrument(skip(self, request), fields(query_len = request.query.len(), lat = ?request.lat, lng = ?request.lng))]
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApplicationError> {
        let query = request.query.as_str();
        if query.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Query parameter \"q\" is required".to_string(),
            ));
        }

        let (intent, address) = try_join(
            self.intent_classifier.classify(query),
            self.address_extractor.extract(query),
        )
        .await?;

        info!(%intent, %address, "Search query interpreted");

        let places_input = format!("{address} ");

        let response = match intent {
            SearchIntent::Navigation => {
                let places = self.places.suggest(&places_input).await?;
                SearchResponse::navigation(places)
            },
            SearchIntent::Discovery => {
                let (places, webresults) =
                    try_join(self.places.suggest(&places_input), self.discover(query)).await?;
                SearchResponse::discovery(places, webresults)
            },
        };

        debug!(places = response.places.len(), "Search completed");
        Ok(response)
    }

    /// Web search, entity extraction and encoding of the located document
    async fn discover(&self, query: &str) -> Result<String, ApplicationError> {
        let snippets = self.web_search.search(query).await?;
        debug!(snippets = snippets.len(), "Web search completed");

        let document = self.entity_extractor.extract(&snippets).await?;
        document
            .to_json_string()
            .map_err(|e| ApplicationError::Internal(format!("failed to encode web results: {e}")))
    }
}
