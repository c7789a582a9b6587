//! Google Places client
//!
//! Turns free text into ranked place suggestions: one autocomplete call, then
//! one place-details call per prediction to resolve its coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, PlaceSuggestion};
use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use crate::client::MapsHttpClient;
use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::{AutocompleteResponse, DetailsResponse, Prediction};

const AUTOCOMPLETE_ENDPOINT: &str = "place/autocomplete";
const DETAILS_ENDPOINT: &str = "place/details";

/// Trait for place suggestion clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Suggest places matching free-form input, in provider rank order
    ///
    /// Returns an empty list when the provider has no predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if autocomplete fails or any details lookup fails.
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, MapsError>;
}

/// Places client backed by the Google Places web service
#[derive(Debug)]
pub struct GooglePlacesClient {
    http: MapsHttpClient,
}

impl GooglePlacesClient {
    /// Create a new Places client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        Ok(Self {
            http: MapsHttpClient::new(config)?,
        })
    }

    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, MapsError> {
        let response: AutocompleteResponse = self
            .http
            .get_json(AUTOCOMPLETE_ENDPOINT, &[("input", input)])
            .await?;
        Ok(response.predictions)
    }

    async fn resolve(&self, prediction: Prediction) -> Result<PlaceSuggestion, MapsError> {
        let response: DetailsResponse = self
            .http
            .get_json(
                DETAILS_ENDPOINT,
                &[("place_id", prediction.place_id.as_str()), ("fields", "geometry")],
            )
            .await?;

        let location = response
            .result
            .and_then(|details| details.geometry)
            .map(|geometry| geometry.location)
            .ok_or_else(|| {
                MapsError::ParseError(format!(
                    "place {} has no geometry",
                    prediction.place_id
                ))
            })?;

        let location = GeoLocation::new(location.lat, location.lng)
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        Ok(PlaceSuggestion::new(
            prediction.description,
            prediction.place_id,
            location,
        ))
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, MapsError> {
        let predictions = self.autocomplete(input).await?;

        if predictions.is_empty() {
            warn!(%input, "No place suggestions for input");
            return Ok(Vec::new());
        }

        debug!(predictions = predictions.len(), "Resolving place details");

        let suggestions =
            try_join_all(predictions.into_iter().map(|p| self.resolve(p))).await?;

        debug!(suggestions = suggestions.len(), "Place suggestions resolved");
        Ok(suggestions)
    }
}
