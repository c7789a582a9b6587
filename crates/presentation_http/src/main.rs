//! Waypoint HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    CheckpointPlanner, SearchService,
    ports::{GeocodingPort, InferencePort, PlacesPort, WebSearchPort},
};
use axum::http::{HeaderValue, Method};
use infrastructure::{
    AppConfig, DEFAULT_LOG_FILTER, MapsAdapter, OpenAiInferenceAdapter, ServerConfig,
    WebSearchAdapter, init_tracing,
};
use presentation_http::{routes, server, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map_or("text", |config| config.server.log_format.as_str());
    init_tracing(log_format, DEFAULT_LOG_FILTER)?;

    info!("Waypoint v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    config
        .require_api_keys()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    let inference: Arc<dyn InferencePort> = Arc::new(
        OpenAiInferenceAdapter::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference: {e}"))?,
    );
    let maps = Arc::new(
        MapsAdapter::new(config.maps.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize maps: {e}"))?,
    );
    let web_search: Arc<dyn WebSearchPort> = Arc::new(
        WebSearchAdapter::new(config.websearch.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize web search: {e}"))?,
    );
    let places: Arc<dyn PlacesPort> = maps.clone();
    let geocoding: Arc<dyn GeocodingPort> = maps;

    let state = AppState {
        search_service: Arc::new(SearchService::new(
            Arc::clone(&inference),
            places,
            web_search,
        )),
        checkpoint_planner: Arc::new(CheckpointPlanner::new(inference, geocoding)),
    };

    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    server::serve(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// CORS restricted to the configured origins, or open when none are set
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
