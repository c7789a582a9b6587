//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/search", get(handlers::search::search))
        .route("/checkpoints", get(handlers::checkpoints::checkpoints))
        .with_state(state)
}
