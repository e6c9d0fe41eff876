use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Threshold applied when a request omits one.
    pub default_success_rate_threshold: f64,
    /// Result count applied when a request omits one.
    pub default_max_results: usize,
    /// Largest `max_results` a request may ask for.
    pub max_results_limit: usize,
    /// Per-query timeout for every store call (milliseconds).
    pub store_timeout_ms: u64,
    pub include_research: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_success_rate_threshold: defaults::DEFAULT_SUCCESS_RATE_THRESHOLD,
            default_max_results: defaults::DEFAULT_MAX_RESULTS,
            max_results_limit: defaults::DEFAULT_MAX_RESULTS_LIMIT,
            store_timeout_ms: defaults::DEFAULT_STORE_TIMEOUT_MS,
            include_research: defaults::DEFAULT_INCLUDE_RESEARCH,
        }
    }
}
