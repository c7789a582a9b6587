//! Maps adapter - Implements PlacesPort and GeocodingPort using integration_maps

use application::{
    error::ApplicationError,
    ports::{GeocodingPort, PlacesPort},
};
use async_trait::async_trait;
use domain::{GeoLocation, PlaceSuggestion};
use integration_maps::{
    GeocodingClient, GoogleGeocodingClient, GooglePlacesClient, MapsConfig, MapsError,
    PlacesClient,
};
use tracing::instrument;

/// Adapter for the Google Places and Geocoding web services
#[derive(Debug)]
pub struct MapsAdapter {
    places: GooglePlacesClient,
    geocoding: GoogleGeocodingClient,
}

impl MapsAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: MapsConfig) -> Result<Self, ApplicationError> {
        Ok(Self {
            places: GooglePlacesClient::new(config.clone()).map_err(Self::map_error)?,
            geocoding: GoogleGeocodingClient::new(config).map_err(Self::map_error)?,
        })
    }

    /// Convert integration error to application error
    fn map_error(e: MapsError) -> ApplicationError {
        match e {
            MapsError::RateLimitExceeded => ApplicationError::RateLimited,
            MapsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl PlacesPort for MapsAdapter {
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    async fn suggest(&self, input: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        self.places.suggest(input).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl GeocodingPort for MapsAdapter {
    async fn forward(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        self.geocoding.forward(address).await.map_err(Self::map_error)
    }

    async fn reverse(&self, location: GeoLocation) -> Result<Option<String>, ApplicationError> {
        self.geocoding.reverse(location).await.map_err(Self::map_error)
    }
}
