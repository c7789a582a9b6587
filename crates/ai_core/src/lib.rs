//! AI Core - chat completion engine
//!
//! Provides an abstraction for single-shot LLM calls and an implementation
//! against any OpenAI-compatible `chat/completions` endpoint.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
