//! Application configuration
//!
//! Sources are layered, later ones winning:
//! - built-in defaults
//! - optional `config.toml` in the working directory
//! - `WAYPOINT_`-prefixed environment variables (`WAYPOINT_SERVER__PORT`)
//! - the legacy variables `OPENAI_KEY`, `GOOGLE_API_KEY`,
//!   `GOOGLE_SEARCH_API_KEY` and `PORT`

mod server;

use ai_core::InferenceConfig;
use integration_maps::MapsConfig;
use integration_websearch::WebSearchConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

const ENV_PREFIX: &str = "WAYPOINT";

/// Legacy environment variables and the keys they override
const LEGACY_OVERRIDES: [(&str, &str); 4] = [
    ("OPENAI_KEY", "inference.api_key"),
    ("GOOGLE_API_KEY", "maps.api_key"),
    ("GOOGLE_SEARCH_API_KEY", "websearch.api_key"),
    ("PORT", "server.port"),
];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat completion settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Places and geocoding settings
    #[serde(default)]
    pub maps: MapsConfig,

    /// Custom Search settings
    #[serde(default)]
    pub websearch: WebSearchConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config", None)
    }

    /// Load configuration from the file `file_stem` (any supported extension)
    /// and either the given variables or, when `None`, the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_from(
        file_stem: &str,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let lookup = |name: &str| match &env {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        };

        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("inference.default_model", "gpt-4o-mini")?
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(env.clone()),
            );

        for (variable, key) in LEGACY_OVERRIDES {
            builder = builder.set_override_option(key, lookup(variable))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns all problems found, one per section, joined by `"; "`.
    pub fn validate(&self) -> Result<(), String> {
        let problems: Vec<String> = [
            ("server", self.server.validate()),
            ("inference", self.inference.validate()),
            ("maps", self.maps.validate()),
            ("websearch", self.websearch.validate()),
        ]
        .into_iter()
        .filter_map(|(section, result)| result.err().map(|e| format!("{section}: {e}")))
        .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }

    /// Sections whose upstream API key is not configured
    #[must_use]
    pub fn missing_api_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.inference.api_key.is_none() {
            missing.push("inference");
        }
        if self.maps.api_key.is_none() {
            missing.push("maps");
        }
        if self.websearch.api_key.is_none() {
            missing.push("websearch");
        }
        missing
    }

    /// Require every upstream API key
    ///
    /// # Errors
    ///
    /// Names every section whose key is missing.
    pub fn require_api_keys(&self) -> Result<(), String> {
        let missing = self.missing_api_keys();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing API keys for: {}", missing.join(", ")))
        }
    }
}
