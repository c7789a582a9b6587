//! Checkpoint planning handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{GeoLocation, RouteCheckpoints, RoutePreference};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query string of `GET /checkpoints`
#[derive(Debug, Default, Deserialize)]
pub struct CheckpointParams {
    /// Start latitude
    pub lat: Option<String>,
    /// Start longitude
    pub lng: Option<String>,
    /// Route preference; defaults to scenic
    #[serde(rename = "type")]
    pub route_type: Option<String>,
}

impl CheckpointParams {
    fn start(&self) -> Result<GeoLocation, ApiError> {
        let latitude = required_coordinate("lat", self.lat.as_deref())?;
        let longitude = required_coordinate("lng", self.lng.as_deref())?;
        GeoLocation::new(latitude, longitude).map_err(|e| ApiError::BadRequest(e.to_string()))
    }

    fn preference(&self) -> RoutePreference {
        self.route_type
            .as_deref()
            .map(RoutePreference::new)
            .unwrap_or_default()
    }
}

fn required_coordinate(name: &str, value: Option<&str>) -> Result<f64, ApiError> {
    let value =
        value.ok_or_else(|| ApiError::BadRequest(format!("Query parameter \"{name}\" is required")))?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::BadRequest(format!("Query parameter \"{name}\" must be a number")))
}

/// Plan scenic and safety checkpoints from a start coordinate
#[instrument(skip(state, params))]
pub async fn checkpoints(
    State(state): State<AppState>,
    Query(params): Query<CheckpointParams>,
) -> Result<Json<RouteCheckpoints>, ApiError> {
    let start = params.start()?;
    let preference = params.preference();
    let checkpoints = state.checkpoint_planner.plan(start, &preference).await?;
    Ok(Json(checkpoints))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lat: Option<&str>, lng: Option<&str>, route_type: Option<&str>) -> CheckpointParams {
        CheckpointParams {
            lat: lat.map(ToString::to_string),
            lng: lng.map(ToString::to_string),
            route_type: route_type.map(ToString::to_string),
        }
    }

    #[test]
    fn parses_start() {
        let start = params(Some("40.7812"), Some("-73.9665"), None).start().unwrap();
        assert_eq!(start.to_string(), "40.7812,-73.9665");
    }

    #[test]
    fn missing_coordinate_is_rejected() {
        let err = params(Some("40.0"), None, None).start().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("\"lng\"")));
    }

    #[test]
    fn non_numeric_coordinate_is_rejected() {
        let err = params(Some("north"), Some("1.0"), None).start().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("must be a number")));

        let err = params(Some("NaN"), Some("1.0"), None).start().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let err = params(Some("95.0"), Some("10.0"), None).start().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn preference_defaults_to_scenic() {
        assert_eq!(params(None, None, None).preference(), RoutePreference::scenic());
        assert_eq!(
            params(None, None, Some("safety")).preference(),
            RoutePreference::safety()
        );
    }
}
