//! Domain entities - request-scoped results of the orchestration pipeline

mod entity_document;
mod place;
mod route;
mod search_response;

pub use entity_document::EntityDocument;
pub use place::PlaceSuggestion;
pub use route::{Checkpoint, RouteCheckpoints, RoutePlan};
pub use search_response::{SearchResponse, WebResults};
