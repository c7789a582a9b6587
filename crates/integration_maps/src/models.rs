//! Maps web service response structures

use serde::Deserialize;

/// Status values shared by the Maps web services
pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
pub const STATUS_OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";
pub const STATUS_REQUEST_DENIED: &str = "REQUEST_DENIED";

/// Fields every Maps response carries
pub trait StatusEnvelope {
    fn status(&self) -> &str;
    fn error_message(&self) -> Option<&str>;
}

macro_rules! status_envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl StatusEnvelope for $ty {
                fn status(&self) -> &str {
                    &self.status
                }

                fn error_message(&self) -> Option<&str> {
                    self.error_message.as_deref()
                }
            }
        )+
    };
}

status_envelope!(AutocompleteResponse, DetailsResponse, GeocodeResponse);

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetails {
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}
