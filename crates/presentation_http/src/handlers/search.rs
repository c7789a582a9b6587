//! Search handler

use application::SearchRequest;
use axum::{
    Json,
    extract::{Query, State},
};
use domain::SearchResponse;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query string of `GET /search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text query
    pub q: Option<String>,
    /// Client latitude; unparseable values are ignored
    pub lat: Option<String>,
    /// Client longitude; unparseable values are ignored
    pub lng: Option<String>,
}

impl SearchParams {
    fn into_request(self) -> Result<SearchRequest, ApiError> {
        let query = self
            .q
            .ok_or_else(|| ApiError::BadRequest("Query parameter \"q\" is required".to_string()))?;
        Ok(SearchRequest::new(query)
            .with_position(parse_coordinate(self.lat), parse_coordinate(self.lng)))
    }
}

fn parse_coordinate(value: Option<String>) -> Option<f64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Answer a free-text query with places and, for discovery queries, web results
#[instrument(skip(state, params))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = params.into_request()?;
    let response = state.search_service.search(&request).await?;
    Ok(Json(response))
}
