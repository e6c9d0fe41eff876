//! Embedding provider fakes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use blueprint_core::errors::{BlueprintResult, EmbeddingError};
use blueprint_core::traits::IEmbeddingProvider;

/// Returns the same vector for every text and counts calls.
#[derive(Debug)]
pub struct StaticEmbedder {
    vector: Vec<f32>,
    calls: AtomicUsize,
}

impl StaticEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IEmbeddingProvider for StaticEmbedder {
    async fn embed(&self, _text: &str) -> BlueprintResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// How a `FailingEmbedder` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFailure {
    Authentication,
    Quota,
    Unavailable,
    /// Sleeps for the given duration, then answers with an empty vector.
    Hangs(Duration),
}

/// A provider that never produces a usable vector.
#[derive(Debug)]
pub struct FailingEmbedder {
    failure: ProviderFailure,
    calls: AtomicUsize,
}

impl FailingEmbedder {
    pub fn new(failure: ProviderFailure) -> Self {
        Self {
            failure,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IEmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> BlueprintResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let provider = self.name().to_string();
        let err = match self.failure {
            ProviderFailure::Authentication => EmbeddingError::AuthenticationFailed {
                provider,
                reason: "invalid api key".to_string(),
            },
            ProviderFailure::Quota => EmbeddingError::QuotaExceeded { provider },
            ProviderFailure::Unavailable => EmbeddingError::ProviderUnavailable {
                provider,
                reason: "connection refused".to_string(),
            },
            ProviderFailure::Hangs(duration) => {
                tokio::time::sleep(duration).await;
                return Ok(Vec::new());
            }
        };
        Err(err.into())
    }

    fn dimensions(&self) -> usize {
        4
    }

    fn name(&self) -> &str {
        "failing"
    }
}
