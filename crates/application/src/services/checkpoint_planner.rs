//! Route checkpoint planning
//!
//! Resolves the start coordinate to an address, asks the route planner model
//! for scenic and safety checkpoint addresses, then geocodes every address.

use std::{fmt, sync::Arc};

use domain::{Checkpoint, GeoLocation, RouteCheckpoints, RoutePlan, RoutePreference};
use futures::future::{try_join, try_join_all};
use tracing::{debug, info, instrument, warn};

use super::{
    prompts::{CHECKPOINT_PROMPT, checkpoint_request},
    response_parser::parse_json_object,
};
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, InferencePort},
};

/// Plans scenic and safety checkpoints starting from a coordinate
pub struct CheckpointPlanner {
    inference: Arc<dyn InferencePort>,
    geocoding: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for CheckpointPlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckpointPlanner").finish_non_exhaustive()
    }
}

impl CheckpointPlanner {
    /// Create a new planner
    pub fn new(inference: Arc<dyn InferencePort>, geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self {
            inference,
            geocoding,
        }
    }

    /// Produce ordered checkpoints for both route flavours
    ///
    /// Checkpoint addresses that cannot be geocoded are skipped.
    #[instrument(skip(self, start, preference), fields(start = %start, preference = %preference))]
    pub async fn plan(
        &self,
        start: GeoLocation,
        preference: &RoutePreference,
    ) -> Result<RouteCheckpoints, ApplicationError> {
        let start_address = match self.geocoding.reverse(start).await? {
            Some(address) => address,
            None => {
                warn!("Start has no address, using raw coordinates");
                start.to_string()
            },
        };

        let message = checkpoint_request(preference.as_str(), &start_address);
        let result = self
            .inference
            .generate_with_system(CHECKPOINT_PROMPT, &message)
            .await?;

        let plan: RoutePlan = parse_json_object(&result.content)?;
        info!(
            start = ?plan.start,
            end = ?plan.end,
            scenic = plan.scenic.len(),
            safety = plan.safety.len(),
            "Route plan received"
        );

        let (scenic, safety) = try_join(
            self.geocode_all(&plan.scenic),
            self.geocode_all(&plan.safety),
        )
        .await?;

        debug!(
            scenic = scenic.len(),
            safety = safety.len(),
            "Checkpoints geocoded"
        );
        Ok(RouteCheckpoints { scenic, safety })
    }

    async fn geocode_all(&self, addresses: &[String]) -> Result<Vec<Checkpoint>, ApplicationError> {
        let locations = try_join_all(
            addresses
                .iter()
                .map(|address| self.geocoding.forward(address)),
        )
        .await?;

        Ok(addresses
            .iter()
            .zip(locations)
            .filter_map(|(address, location)| {
                if location.is_none() {
                    warn!(%address, "Skipping checkpoint that could not be geocoded");
                }
                location.map(Checkpoint::from)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::ports::{InferenceResult, MockGeocodingPort, MockInferencePort};

    const PLAN: &str = r#"```json
{
  "start": "Central Park, New York, NY",
  "scenic": ["Bethesda Terrace, New York, NY", "Bow Bridge, New York, NY"],
  "safety": ["5th Ave & 59th St, New York, NY"],
  "end": "Columbus Circle, New York, NY"
}
```"#;

    fn start() -> GeoLocation {
        GeoLocation::new(40.7812, -73.9665).unwrap()
    }

    fn inference_expecting(message: &'static str, content: &'static str) -> MockInferencePort {
        let mut mock = MockInferencePort::new();
        mock.expect_generate_with_system()
            .withf(move |system, m| system == CHECKPOINT_PROMPT && m == message)
            .times(1)
            .returning(move |_, _| {
                Ok(InferenceResult {
                    content: content.to_string(),
                    model: "test-model".to_string(),
                    tokens_used: None,
                    latency_ms: 30,
                })
            });
        mock
    }

    fn geocoding_with_plan_addresses() -> MockGeocodingPort {
        let mut mock = MockGeocodingPort::new();
        mock.expect_reverse()
            .returning(|_| Ok(Some("Central Park, New York, NY 10024, USA".to_string())));
        mock.expect_forward()
            .with(eq("Bethesda Terrace, New York, NY"))
            .returning(|_| Ok(Some(GeoLocation::new(40.7740, -73.9708).unwrap())));
        mock.expect_forward()
            .with(eq("Bow Bridge, New York, NY"))
            .returning(|_| Ok(Some(GeoLocation::new(40.7756, -73.9717).unwrap())));
        mock.expect_forward()
            .with(eq("5th Ave & 59th St, New York, NY"))
            .returning(|_| Ok(Some(GeoLocation::new(40.7644, -73.9735).unwrap())));
        mock
    }

    #[tokio::test]
    async fn plans_and_geocodes_in_order() {
        let inference = inference_expecting(
            "User wants scenic route. User starts from Central Park, New York, NY 10024, USA",
            PLAN,
        );
        let planner = CheckpointPlanner::new(
            Arc::new(inference),
            Arc::new(geocoding_with_plan_addresses()),
        );

        let checkpoints = planner
            .plan(start(), &RoutePreference::scenic())
            .await
            .unwrap();

        assert_eq!(
            checkpoints.scenic,
            vec![
                Checkpoint::from((40.7740, -73.9708)),
                Checkpoint::from((40.7756, -73.9717)),
            ]
        );
        assert_eq!(checkpoints.safety, vec![Checkpoint::from((40.7644, -73.9735))]);
    }

    #[tokio::test]
    async fn reverse_miss_falls_back_to_coordinates() {
        let inference = inference_expecting(
            "User wants safety route. User starts from 40.7812,-73.9665",
            r#"{"scenic":[],"safety":[]}"#,
        );
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_reverse().times(1).returning(|_| Ok(None));
        geocoding.expect_forward().times(0);

        let planner = CheckpointPlanner::new(Arc::new(inference), Arc::new(geocoding));
        let checkpoints = planner
            .plan(start(), &RoutePreference::safety())
            .await
            .unwrap();

        assert!(checkpoints.scenic.is_empty());
        assert!(checkpoints.safety.is_empty());
    }

    #[tokio::test]
    async fn forward_miss_skips_checkpoint() {
        let inference = inference_expecting(
            "User wants scenic route. User starts from Somewhere",
            r#"{"scenic":["Known Place","Unknown Place"],"safety":["Unknown Place"]}"#,
        );
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_reverse()
            .returning(|_| Ok(Some("Somewhere".to_string())));
        geocoding
            .expect_forward()
            .with(eq("Known Place"))
            .returning(|_| Ok(Some(GeoLocation::new(10.0, 20.0).unwrap())));
        geocoding
            .expect_forward()
            .with(eq("Unknown Place"))
            .returning(|_| Ok(None));

        let planner = CheckpointPlanner::new(Arc::new(inference), Arc::new(geocoding));
        let checkpoints = planner
            .plan(start(), &RoutePreference::scenic())
            .await
            .unwrap();

        assert_eq!(checkpoints.scenic, vec![Checkpoint::from((10.0, 20.0))]);
        assert!(checkpoints.safety.is_empty());
    }

    #[tokio::test]
    async fn non_json_plan_fails() {
        let inference = inference_expecting(
            "User wants scenic route. User starts from Somewhere",
            "I am unable to plan this route.",
        );
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_reverse()
            .returning(|_| Ok(Some("Somewhere".to_string())));

        let planner = CheckpointPlanner::new(Arc::new(inference), Arc::new(geocoding));
        let result = planner.plan(start(), &RoutePreference::scenic()).await;

        assert!(matches!(result, Err(ApplicationError::MalformedModelOutput(_))));
    }

    #[tokio::test]
    async fn geocoding_failure_propagates() {
        let inference = inference_expecting(
            "User wants scenic route. User starts from Somewhere",
            r#"{"scenic":["A"],"safety":[]}"#,
        );
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_reverse()
            .returning(|_| Ok(Some("Somewhere".to_string())));
        geocoding
            .expect_forward()
            .returning(|_| Err(ApplicationError::ExternalService("geocoding down".to_string())));

        let planner = CheckpointPlanner::new(Arc::new(inference), Arc::new(geocoding));
        let result = planner.plan(start(), &RoutePreference::scenic()).await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
