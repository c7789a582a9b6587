//! Maps configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Google Maps web service clients
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Base URL of the Maps web services (without the trailing service path)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maps platform API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional result language (e.g. "en")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: None,
        }
    }
}

impl MapsConfig {
    /// Create a configuration for testing against a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(SecretString::from("test-maps-key")),
            timeout_secs: 5,
            language: None,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self
            .language
            .as_ref()
            .is_some_and(|language| language.trim().is_empty())
        {
            return Err("language must not be blank when set".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapsConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com/maps/api");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = MapsConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_language() {
        let config = MapsConfig {
            language: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = MapsConfig::for_testing("http://localhost");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("test-maps-key"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MapsConfig = serde_json::from_str(r#"{"api_key":"abc"}"#).unwrap();
        assert!(config.api_key.is_some());
        assert_eq!(config.timeout_secs, 10);
    }
}
