//! Route planning entities

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A stop along a planned route, serialized as a `[lat, lng]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Checkpoint(GeoLocation);

impl Checkpoint {
    /// Latitude of the checkpoint
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.0.latitude()
    }

    /// Longitude of the checkpoint
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.0.longitude()
    }
}

impl From<GeoLocation> for Checkpoint {
    fn from(location: GeoLocation) -> Self {
        Self(location)
    }
}

impl From<(f64, f64)> for Checkpoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self(GeoLocation::new_unchecked(lat, lng))
    }
}

impl From<Checkpoint> for (f64, f64) {
    fn from(checkpoint: Checkpoint) -> Self {
        (checkpoint.latitude(), checkpoint.longitude())
    }
}

/// Checkpoints for both route flavours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCheckpoints {
    /// Checkpoints prioritising scenery
    pub scenic: Vec<Checkpoint>,
    /// Checkpoints prioritising safety
    pub safety: Vec<Checkpoint>,
}

/// Address-level plan emitted by the route planner model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Start address as understood by the model
    #[serde(default)]
    pub start: Option<String>,
    /// Ordered scenic checkpoint addresses
    #[serde(default)]
    pub scenic: Vec<String>,
    /// Ordered safety checkpoint addresses
    #[serde(default)]
    pub safety: Vec<String>,
    /// End address as understood by the model
    #[serde(default)]
    pub end: Option<String>,
}
