//! Response of the search operation

use serde::{Deserialize, Serialize};

use super::PlaceSuggestion;

/// Web results attached to a search response
///
/// Navigation queries carry an empty array; discovery queries carry the
/// extracted entity document encoded as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WebResults {
    /// No web results (serialized as `[]`)
    Empty(Vec<String>),
    /// JSON-encoded entity document
    Encoded(String),
}

impl WebResults {
    /// Empty web results
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty(Vec::new())
    }
}

impl Default for WebResults {
    fn default() -> Self {
        Self::empty()
    }
}

/// Normalized payload returned for a free-text query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Best-guess place suggestions for the query
    pub places: Vec<PlaceSuggestion>,
    /// Extracted web results
    pub webresults: WebResults,
}

impl SearchResponse {
    /// Response for a navigation query
    #[must_use]
    pub const fn navigation(places: Vec<PlaceSuggestion>) -> Self {
        Self {
            places,
            webresults: WebResults::empty(),
        }
    }

    /// Response for a discovery query
    #[must_use]
    pub const fn discovery(places: Vec<PlaceSuggestion>, encoded: String) -> Self {
        Self {
            places,
            webresults: WebResults::Encoded(encoded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoLocation;

    #[test]
    fn navigation_response_has_empty_array() {
        let response = SearchResponse::navigation(vec![]);
        let json = serde_json::to_string(&response).expect("serialize");
        assert_eq!(json, r#"{"places":[],"webresults":[]}"#);
        assert_eq!(response.webresults, WebResults::empty());
    }

    #[test]
    fn discovery_response_has_encoded_string() {
        let place = PlaceSuggestion::new("Central Park", "p1", GeoLocation::new_unchecked(40.78, -73.96));
        let response =
            SearchResponse::discovery(vec![place], r#"{"landmarks":[],"events":[]}"#.to_string());
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["webresults"], r#"{"landmarks":[],"events":[]}"#);
        assert_eq!(json["places"][0]["description"], "Central Park");
    }

    #[test]
    fn deserializes_both_shapes() {
        let nav: SearchResponse =
            serde_json::from_str(r#"{"places":[],"webresults":[]}"#).expect("nav");
        assert_eq!(nav.webresults, WebResults::empty());

        let disc: SearchResponse =
            serde_json::from_str(r#"{"places":[],"webresults":"{}"}"#).expect("disc");
        assert_eq!(disc.webresults, WebResults::Encoded("{}".to_string()));
    }
}
