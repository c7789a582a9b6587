//! Intent of a free-text search query

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user wants from a free-text query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchIntent {
    /// Directions to a specific place
    Navigation,
    /// Suggestions for activities or locations
    Discovery,
}

impl SearchIntent {
    /// Sentinel the classifier model emits for navigation queries
    pub const NAVIGATION_SENTINEL: &'static str = "1";

    /// Interpret raw classifier output
    ///
    /// Only the navigation sentinel selects [`SearchIntent::Navigation`];
    /// everything else, including unexpected output, is discovery.
    #[must_use]
    pub fn from_model_output(output: &str) -> Self {
        if output.trim() == Self::NAVIGATION_SENTINEL {
            Self::Navigation
        } else {
            Self::Discovery
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigation => write!(f, "navigation"),
            Self::Discovery => write!(f, "discovery"),
        }
    }
}
