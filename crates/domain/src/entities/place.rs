//! Place suggestion entity

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A candidate physical location with a human-readable description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuggestion {
    /// Human-readable description from the autocomplete provider
    pub description: String,
    /// Provider-specific place identifier
    pub place_id: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

impl PlaceSuggestion {
    /// Create a suggestion from a description, place id and location
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        place_id: impl Into<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            description: description.into(),
            place_id: place_id.into(),
            lat: location.latitude(),
            lng: location.longitude(),
        }
    }

    /// Location of this suggestion
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        GeoLocation::new_unchecked(self.lat, self.lng)
    }
}
