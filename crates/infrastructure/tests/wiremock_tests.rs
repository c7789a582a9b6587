//! Integration tests for infrastructure adapters
//!
//! Tests cover:
//! - Inference adapter against a mocked chat completions API
//! - Maps adapter against mocked Places and Geocoding endpoints
//! - Web search adapter against a mocked Custom Search API

use ai_core::InferenceConfig;
use application::{
    error::ApplicationError,
    ports::{GeocodingPort, InferencePort, PlacesPort, WebSearchPort},
};
use domain::GeoLocation;
use infrastructure::{MapsAdapter, OpenAiInferenceAdapter, WebSearchAdapter};
use integration_maps::MapsConfig;
use integration_websearch::WebSearchConfig;
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Inference Adapter Tests
// ============================================================================

mod inference_adapter_tests {
    use super::*;

    fn adapter_for(mock_server: &MockServer) -> OpenAiInferenceAdapter {
        OpenAiInferenceAdapter::new(InferenceConfig {
            base_url: format!("{}/v1", mock_server.uri()),
            api_key: Some(SecretString::from("sk-test")),
            timeout_ms: 5000,
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sends_system_and_user_messages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "Answer with 1 or 2."},
                    {"role": "user", "content": "directions to the louvre"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4o-mini-2024-07-18",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "1"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 20, "completion_tokens": 1, "total_tokens": 21}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);
        let result = adapter
            .generate_with_system("Answer with 1 or 2.", "directions to the louvre")
            .await
            .unwrap();

        assert_eq!(result.content, "1");
        assert_eq!(result.model, "gpt-4o-mini-2024-07-18");
        assert_eq!(result.tokens_used, Some(21));
    }

    #[tokio::test]
    async fn rate_limit_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let result = adapter_for(&mock_server)
            .generate_with_system("system", "message")
            .await;
        assert!(matches!(result, Err(ApplicationError::RateLimited)));
    }

    #[tokio::test]
    async fn server_error_is_inference_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = adapter_for(&mock_server)
            .generate_with_system("system", "message")
            .await;
        assert!(matches!(result, Err(ApplicationError::Inference(_))));
    }
}

// ============================================================================
// Maps Adapter Tests
// ============================================================================

mod maps_adapter_tests {
    use super::*;

    fn adapter_for(mock_server: &MockServer) -> MapsAdapter {
        MapsAdapter::new(MapsConfig::for_testing(format!(
            "{}/maps/api",
            mock_server.uri()
        )))
        .unwrap()
    }

    #[tokio::test]
    async fn suggest_returns_located_places() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/autocomplete/json"))
            .and(query_param("input", "Louvre, Paris "))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OK",
                "predictions": [{"description": "Louvre Museum, Paris, France", "place_id": "place-louvre"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/details/json"))
            .and(query_param("place_id", "place-louvre"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OK",
                "result": {"geometry": {"location": {"lat": 48.8606, "lng": 2.3376}}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let places = adapter_for(&mock_server)
            .suggest("Louvre, Paris ")
            .await
            .unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].description, "Louvre Museum, Paris, France");
        assert_eq!(places[0].place_id, "place-louvre");
        assert!((places[0].lat - 48.8606).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn forward_and_reverse_geocode() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("address", "Bow Bridge, New York, NY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OK",
                "results": [{
                    "formatted_address": "Bow Bridge, New York, NY 10024, USA",
                    "geometry": {"location": {"lat": 40.7756, "lng": -73.9717}}
                }]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .and(query_param("latlng", "40.7812,-73.9665"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let adapter = adapter_for(&mock_server);

        let location = adapter
            .forward("Bow Bridge, New York, NY")
            .await
            .unwrap()
            .unwrap();
        assert!((location.latitude() - 40.7756).abs() < f64::EPSILON);

        let address = adapter
            .reverse(GeoLocation::new(40.7812, -73.9665).unwrap())
            .await
            .unwrap();
        assert!(address.is_none());
    }

    #[tokio::test]
    async fn over_query_limit_is_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/geocode/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "OVER_QUERY_LIMIT",
                "error_message": "You have exceeded your daily request quota.",
                "results": []
            })))
            .mount(&mock_server)
            .await;

        let result = adapter_for(&mock_server).forward("anywhere").await;
        assert!(matches!(result, Err(ApplicationError::RateLimited)));
    }

    #[tokio::test]
    async fn http_failure_is_external_service() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/autocomplete/json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = adapter_for(&mock_server).suggest("anything").await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}

// ============================================================================
// Web Search Adapter Tests
// ============================================================================

mod websearch_adapter_tests {
    use super::*;

    fn adapter_for(mock_server: &MockServer) -> WebSearchAdapter {
        WebSearchAdapter::new(WebSearchConfig::for_testing(format!(
            "{}/customsearch/v1",
            mock_server.uri()
        )))
        .unwrap()
    }

    #[tokio::test]
    async fn returns_snippets_in_rank_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("q", "concerts in austin"))
            .and(query_param("num", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"title": "A", "link": "https://a.example/1", "snippet": "First snippet."},
                    {"title": "B", "link": "https://b.example/2", "snippet": "  "},
                    {"title": "C", "link": "https://c.example/3", "snippet": "Third snippet."}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let snippets = adapter_for(&mock_server)
            .search("concerts in austin")
            .await
            .unwrap();

        assert_eq!(snippets, vec!["First snippet.", "Third snippet."]);
    }

    #[tokio::test]
    async fn no_items_yields_no_snippets() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "kind": "customsearch#search"
            })))
            .mount(&mock_server)
            .await;

        let snippets = adapter_for(&mock_server).search("qwzx").await.unwrap();
        assert!(snippets.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_external_service() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = adapter_for(&mock_server).search("anything").await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }
}
