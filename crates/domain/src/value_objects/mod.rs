//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod route_preference;
mod search_intent;

pub use geo_location::GeoLocation;
pub use route_preference::RoutePreference;
pub use search_intent::SearchIntent;
