//! Adapters implementing application ports

mod inference_adapter;
mod maps_adapter;
mod websearch_adapter;

pub use inference_adapter::OpenAiInferenceAdapter;
pub use maps_adapter::MapsAdapter;
pub use websearch_adapter::WebSearchAdapter;
