//! Route preference requested by the client

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label describing what a planned route should prioritise
///
/// Usually `scenic` or `safety`, but free text is passed through to the
/// planner unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePreference(String);

impl RoutePreference {
    /// Create a preference from a label, falling back to scenic when blank
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            Self::scenic()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Scenic route preference
    #[must_use]
    pub fn scenic() -> Self {
        Self("scenic".to_string())
    }

    /// Safety route preference
    #[must_use]
    pub fn safety() -> Self {
        Self("safety".to_string())
    }

    /// Get the label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RoutePreference {
    fn default() -> Self {
        Self::scenic()
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_free_text_labels() {
        assert_eq!(RoutePreference::new("quiet streets").as_str(), "quiet streets");
    }

    #[test]
    fn blank_label_defaults_to_scenic() {
        assert_eq!(RoutePreference::new("  "), RoutePreference::scenic());
        assert_eq!(RoutePreference::default().to_string(), "scenic");
    }

    #[test]
    fn trims_label() {
        assert_eq!(RoutePreference::new(" safety "), RoutePreference::safety());
    }
}
