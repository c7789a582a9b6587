//! Domain layer for Waypoint
//!
//! Contains the value objects and entities exchanged between the
//! orchestration services and the HTTP surface. Nothing here performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
