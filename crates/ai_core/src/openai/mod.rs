//! OpenAI-compatible inference engine implementation
//!
//! Talks to any server exposing the `chat/completions` API.

mod client;

pub use client::OpenAiInferenceEngine;
