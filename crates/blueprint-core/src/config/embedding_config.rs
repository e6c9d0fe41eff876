use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Timeout for a single provider call (milliseconds).
    pub timeout_ms: u64,
    /// Max cached query vectors.
    pub cache_size: u64,
    /// Absolute lifetime of a cached vector (seconds).
    pub cache_ttl_secs: u64,
    /// Evict a cached vector unused for this long (seconds).
    pub cache_idle_secs: u64,
    /// Expected vector length. 0 accepts whatever the provider reports.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            cache_ttl_secs: defaults::DEFAULT_EMBEDDING_CACHE_TTL_SECS,
            cache_idle_secs: defaults::DEFAULT_EMBEDDING_CACHE_IDLE_SECS,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
