#![forbid(unsafe_code)]
//! Mapping integration for Waypoint
//!
//! Wraps the Google Maps web services used to turn text into coordinates:
//!
//! - [`GooglePlacesClient`]: autocomplete predictions, each resolved to a
//!   location through the place-details endpoint
//! - [`GoogleGeocodingClient`]: forward (address to coordinates) and reverse
//!   (coordinates to formatted address) geocoding
//!
//! Both clients share one [`MapsConfig`] and report failures as [`MapsError`].
//! "No match" outcomes are not errors: places yield an empty list and
//! geocoding yields `None`.

mod client;
mod config;
mod error;
mod geocoding;
mod models;
mod places;

pub use config::MapsConfig;
pub use error::MapsError;
pub use geocoding::{GeocodingClient, GoogleGeocodingClient};
pub use places::{GooglePlacesClient, PlacesClient};
