//! Shared HTTP plumbing for the Maps web services

use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::MapsConfig;
use crate::error::MapsError;
use crate::models::{
    STATUS_OK, STATUS_OVER_QUERY_LIMIT, STATUS_REQUEST_DENIED, STATUS_ZERO_RESULTS,
    StatusEnvelope,
};

/// Authenticated JSON client for `{base_url}/{endpoint}/json` requests
pub(crate) struct MapsHttpClient {
    client: Client,
    api_key: SecretString,
    config: MapsConfig,
}

impl std::fmt::Debug for MapsHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsHttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MapsHttpClient {
    pub(crate) fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            MapsError::ConfigurationError("Maps API key is required".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}/json", self.config.base_url.trim_end_matches('/'))
    }

    /// GET an endpoint and return the body when its status is `OK` or `ZERO_RESULTS`
    pub(crate) async fn get_json<T>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError>
    where
        T: DeserializeOwned + StatusEnvelope,
    {
        let mut query: Vec<(&str, &str)> = params.to_vec();
        if let Some(language) = self.config.language.as_deref() {
            query.push(("language", language));
        }
        query.push(("key", self.api_key.expose_secret()));

        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(&query)
            .send()
            .await
            .map_err(|e| MapsError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        debug!(endpoint, status = %status, "Received Maps response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, status = %status, body = %body, "Maps request failed");
            return Err(MapsError::RequestFailed(format!(
                "{endpoint} returned HTTP {status}"
            )));
        }

        let body: T = response
            .json()
            .await
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        check_status(endpoint, &body)?;
        Ok(body)
    }
}

fn check_status(endpoint: &'static str, body: &impl StatusEnvelope) -> Result<(), MapsError> {
    let message = body.error_message().unwrap_or_default().to_string();
    match body.status() {
        STATUS_OK | STATUS_ZERO_RESULTS => Ok(()),
        STATUS_OVER_QUERY_LIMIT => Err(MapsError::RateLimitExceeded),
        STATUS_REQUEST_DENIED => Err(MapsError::AuthenticationFailed(message)),
        other => Err(MapsError::ApiStatus {
            endpoint,
            status: other.to_string(),
            message,
        }),
    }
}
