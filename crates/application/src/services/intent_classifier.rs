//! Intent classification - navigation vs. discovery

use std::{fmt, sync::Arc};

use domain::SearchIntent;
use tracing::{debug, instrument};

use super::prompts::INTENT_PROMPT;
use crate::{error::ApplicationError, ports::InferencePort};

/// Labels a free-text query as a navigation or a discovery request
pub struct IntentClassifier {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentClassifier").finish_non_exhaustive()
    }
}

impl IntentClassifier {
    /// Create a new classifier
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Classify a query with a single model call
    #[instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn classify(&self, query: &str) -> Result<SearchIntent, ApplicationError> {
        let result = self.inference.generate_with_system(INTENT_PROMPT, query).await?;
        let intent = SearchIntent::from_model_output(&result.content);

        debug!(raw = %result.content, %intent, "Query classified");
        Ok(intent)
    }
}
