//! Shared application state for request handlers.

use std::sync::Arc;

use crate::classifier::RiskClassifier;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the classifier behind its trait so the keyword matcher can be replaced
/// without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn RiskClassifier>,
}

impl AppState {
    /// Creates a new application state around the given classifier.
    pub fn new<C: RiskClassifier + 'static>(classifier: C) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}
