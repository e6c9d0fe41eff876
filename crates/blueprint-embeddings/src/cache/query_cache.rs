//! Query vector cache backed by moka.
//!
//! Capacity and both expiry windows come from `EmbeddingConfig`.

use std::sync::Arc;
use std::time::Duration;

use blueprint_core::config::EmbeddingConfig;
use moka::sync::Cache;

/// Vectors keyed by the hash of the normalized query text.
///
/// Values are shared `Arc<[f32]>`; a hit clones a pointer, not the vector.
pub struct QueryCache {
    vectors: Cache<String, Arc<[f32]>>,
}

impl QueryCache {
    pub fn from_config(config: &EmbeddingConfig) -> Self {
        let vectors = Cache::builder()
            .max_capacity(config.cache_size)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .time_to_idle(Duration::from_secs(config.cache_idle_secs))
            .build();
        Self { vectors }
    }

    pub fn lookup(&self, key: &str) -> Option<Arc<[f32]>> {
        self.vectors.get(key)
    }

    pub fn store(&self, key: String, vector: Arc<[f32]>) {
        self.vectors.insert(key, vector);
    }

    /// Live entries, after flushing moka's pending maintenance.
    pub fn entries(&self) -> u64 {
        self.vectors.run_pending_tasks();
        self.vectors.entry_count()
    }
}
