//! Application state shared across handlers

use std::sync::Arc;

use application::{CheckpointPlanner, SearchService};

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Orchestrator behind `/search`
    pub search_service: Arc<SearchService>,
    /// Planner behind `/checkpoints`
    pub checkpoint_planner: Arc<CheckpointPlanner>,
}
