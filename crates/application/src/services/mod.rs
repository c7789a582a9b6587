//! Application services

mod address_extractor;
mod checkpoint_planner;
mod entity_extractor;
mod intent_classifier;
pub mod prompts;
pub mod response_parser;
mod search_service;

pub use address_extractor::AddressExtractor;
pub use checkpoint_planner::CheckpointPlanner;
pub use entity_extractor::EntityExtractor;
pub use intent_classifier::IntentClassifier;
pub use response_parser::{ResponseParseError, extract_json_object, parse_json_object};
pub use search_service::{SearchRequest, SearchService};
