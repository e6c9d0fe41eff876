//! QueryEmbedder: the single entry point for query vectors.
//!
//! Wraps the provider call with an explicit timeout, validates the returned
//! vector, and caches it by normalized query text.

use std::sync::Arc;
use std::time::Duration;

use blueprint_core::config::EmbeddingConfig;
use blueprint_core::errors::{BlueprintError, BlueprintResult, EmbeddingError};
use blueprint_core::traits::IEmbeddingProvider;
use tracing::{debug, info, warn};

use crate::cache::{query_key, QueryCache};

/// A query vector plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedQuery {
    pub vector: Arc<[f32]>,
    /// True when served from the cache without a provider call.
    pub cached: bool,
}

/// Query embedding front-end over an external provider.
pub struct QueryEmbedder {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: QueryCache,
    config: EmbeddingConfig,
}

impl QueryEmbedder {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: EmbeddingConfig) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            timeout_ms = config.timeout_ms,
            "QueryEmbedder initialized"
        );
        Self {
            provider,
            cache: QueryCache::from_config(&config),
            config,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Embed a feature request. Any failure here is a provider error.
    pub async fn embed_query(&self, text: &str) -> BlueprintResult<EmbeddedQuery> {
        let key = query_key(text);
        if let Some(vector) = self.cache.lookup(&key) {
            debug!(provider = self.provider.name(), "query embedding cache hit");
            return Ok(EmbeddedQuery {
                vector,
                cached: true,
            });
        }

        let timeout = Duration::from_millis(self.config.timeout_ms);
        let vector = match tokio::time::timeout(timeout, self.provider.embed(text)).await {
            Ok(Ok(vector)) => vector,
            Ok(Err(BlueprintError::Embedding(e))) => return Err(e.into()),
            Ok(Err(other)) => {
                return Err(EmbeddingError::InferenceFailed {
                    reason: other.to_string(),
                }
                .into())
            }
            Err(_) => {
                warn!(
                    provider = self.provider.name(),
                    timeout_ms = self.config.timeout_ms,
                    "embedding request timed out"
                );
                return Err(EmbeddingError::Timeout {
                    provider: self.provider.name().to_string(),
                    timeout_ms: self.config.timeout_ms,
                }
                .into());
            }
        };

        self.validate(&vector)?;
        let vector: Arc<[f32]> = vector.into();
        self.cache.store(key, Arc::clone(&vector));

        Ok(EmbeddedQuery {
            vector,
            cached: false,
        })
    }

    fn validate(&self, vector: &[f32]) -> BlueprintResult<()> {
        if vector.is_empty() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} returned an empty vector", self.provider.name()),
            }
            .into());
        }
        if self.config.dimensions > 0 && vector.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("{} returned non-finite values", self.provider.name()),
            }
            .into());
        }
        Ok(())
    }

    /// Number of cached query vectors.
    pub fn cached_entries(&self) -> u64 {
        self.cache.entries()
    }
}
