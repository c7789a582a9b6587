//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod inference_port;
mod places_port;
mod websearch_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use places_port::MockPlacesPort;
pub use places_port::PlacesPort;
#[cfg(test)]
pub use websearch_port::MockWebSearchPort;
pub use websearch_port::WebSearchPort;
