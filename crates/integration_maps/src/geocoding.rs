//! Google Geocoding client
//!
//! Converts addresses to coordinates and coordinates to formatted addresses.
//! A lookup without matches yields `None` and a warning rather than an error.

use async_trait::async_trait;
use domain::GeoLocation;
use tracing::{debug, instrument, warn};

use crate::client::MapsHttpClient;
use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::GeocodeResponse;

const GEOCODE_ENDPOINT: &str = "geocode";

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    ///
    /// # Errors
    ///
    /// Returns an error on transport or provider failure.
    async fn forward(&self, address: &str) -> Result<Option<GeoLocation>, MapsError>;

    /// Convert coordinates to the best formatted address
    ///
    /// # Errors
    ///
    /// Returns an error on transport or provider failure.
    async fn reverse(&self, location: GeoLocation) -> Result<Option<String>, MapsError>;
}

/// Geocoding client backed by the Google Geocoding web service
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    http: MapsHttpClient,
}

impl GoogleGeocodingClient {
    /// Create a new Geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        Ok(Self {
            http: MapsHttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn forward(&self, address: &str) -> Result<Option<GeoLocation>, MapsError> {
        let response: GeocodeResponse = self
            .http
            .get_json(GEOCODE_ENDPOINT, &[("address", address)])
            .await?;

        let Some(first) = response.results.into_iter().next() else {
            warn!(%address, "No geocoding results for address");
            return Ok(None);
        };

        let location = first.geometry.location;
        let location = GeoLocation::new(location.lat, location.lng)
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        debug!(%location, "Address geocoded");
        Ok(Some(location))
    }

    #[instrument(skip(self, location), fields(location = %location))]
    async fn reverse(&self, location: GeoLocation) -> Result<Option<String>, MapsError> {
        let latlng = location.to_string();
        let response: GeocodeResponse = self
            .http
            .get_json(GEOCODE_ENDPOINT, &[("latlng", latlng.as_str())])
            .await?;

        let address = response
            .results
            .into_iter()
            .next()
            .map(|result| result.formatted_address)
            .filter(|address| !address.is_empty());

        if address.is_none() {
            warn!("No address found for coordinates");
        }

        Ok(address)
    }
}
