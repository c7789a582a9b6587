//! Geocoding port - Interface for address/coordinate conversion

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward and reverse geocoding
///
/// Lookups without a match return `None`; only transport or provider
/// failures are errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    async fn forward(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError>;

    /// Resolve coordinates to a formatted address
    async fn reverse(&self, location: GeoLocation) -> Result<Option<String>, ApplicationError>;
}
