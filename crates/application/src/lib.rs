//! Application layer - Use cases and orchestration
//!
//! Contains the model-driven components (intent classification, address and
//! entity extraction, route checkpoint planning), the request orchestrator and
//! the port definitions implemented by infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
