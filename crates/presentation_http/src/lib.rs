//! Waypoint HTTP presentation layer
//!
//! Exposes the search and checkpoint planning operations over HTTP.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
