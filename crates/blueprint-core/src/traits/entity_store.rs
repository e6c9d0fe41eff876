use async_trait::async_trait;

use crate::errors::BlueprintResult;
use crate::models::Entity;

/// Filters shared by the similarity and plain queries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFilter {
    /// Normalized tags; empty means unfiltered.
    pub technologies: Vec<String>,
    /// Applied to entities that carry a success rate.
    pub min_success_rate: Option<f64>,
    pub limit: usize,
}

/// Read-only store for one entity kind.
///
/// `similarity_search` fails with `StoreError::CapabilityUnavailable` when the
/// vector index is missing or not ready. Any other error is treated as fatal
/// for the kind.
#[async_trait]
pub trait IEntityStore<T: Entity>: Send + Sync {
    /// Nearest neighbours of `embedding`, as `(entity, similarity)` pairs.
    async fn similarity_search(
        &self,
        embedding: &[f32],
        filter: &EntityFilter,
    ) -> BlueprintResult<Vec<(T, f64)>>;

    /// Plain filtered query used when similarity search degrades.
    async fn filtered_search(&self, filter: &EntityFilter) -> BlueprintResult<Vec<T>>;
}
