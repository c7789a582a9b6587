//! Landmarks and events extracted from web search snippets

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Free-form JSON object produced by the entity extraction model
///
/// The shape follows a natural-language schema (`landmarks`, `events`) and is
/// otherwise trusted as-is. Only the `events` list is interpreted, to attach
/// coordinates to each event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityDocument(Map<String, Value>);

impl EntityDocument {
    /// Key holding the list of landmarks
    pub const LANDMARKS: &'static str = "landmarks";

    /// Key holding the list of events
    pub const EVENTS: &'static str = "events";

    /// Document with empty landmark and event lists
    #[must_use]
    pub fn empty() -> Self {
        let mut map = Map::new();
        map.insert(Self::LANDMARKS.to_string(), Value::Array(Vec::new()));
        map.insert(Self::EVENTS.to_string(), Value::Array(Vec::new()));
        Self(map)
    }

    /// Wrap a parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value is not a JSON object, or if
    /// `landmarks` or `events` is present but not an array.
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(DomainError::ValidationError(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )));
            },
        };

        for key in [Self::LANDMARKS, Self::EVENTS] {
            if let Some(field) = map.get(key).filter(|field| !field.is_array()) {
                return Err(DomainError::ValidationError(format!(
                    "expected \"{key}\" to be an array, got {}",
                    json_kind(field)
                )));
            }
        }

        Ok(Self(map))
    }

    /// Address of every event, `None` for events without a string address
    #[must_use]
    pub fn event_addresses(&self) -> Vec<Option<String>> {
        self.events()
            .map(|events| {
                events
                    .iter()
                    .map(|event| {
                        event
                            .get("address")
                            .and_then(Value::as_str)
                            .map(ToString::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Attach coordinates to events, dropping events without a location
    ///
    /// `locations` is matched to events by position.
    pub fn locate_events(&mut self, locations: &[Option<GeoLocation>]) {
        let Some(Value::Array(events)) = self.0.get_mut(Self::EVENTS) else {
            return;
        };

        let located = std::mem::take(events)
            .into_iter()
            .zip(locations.iter().copied().chain(std::iter::repeat(None)))
            .filter_map(|(mut event, location)| {
                let location = location?;
                let object = event.as_object_mut()?;
                object.insert("lat".to_string(), Value::from(location.latitude()));
                object.insert("lng".to_string(), Value::from(location.longitude()));
                Some(event)
            })
            .collect();
        *events = located;
    }

    /// Encode the document as a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Number of events in the document
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events().map_or(0, Vec::len)
    }

    fn events(&self) -> Option<&Vec<Value>> {
        self.0.get(Self::EVENTS).and_then(Value::as_array)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
