//! HybridRetriever: similarity search with a deterministic filtered fallback.
//!
//! Similarity results are kept when at least one row survives the filter.
//! `CapabilityUnavailable`, a similarity timeout, or zero usable rows switch
//! to the plain query. Anything else is fatal for that entity kind only.

use std::time::Duration;

use blueprint_core::errors::{BlueprintError, BlueprintResult, StoreError};
use blueprint_core::models::Entity;
use blueprint_core::scores::{clamp_unit, desc};
use blueprint_core::traits::{EntityFilter, IEntityStore};
use tracing::{debug, warn};

/// A retrieved entity before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    pub item: T,
    /// Clamped similarity; `None` when served by the plain query.
    pub similarity: Option<f64>,
}

/// What a single-kind retrieval produced.
#[derive(Debug)]
pub enum RetrievalOutcome<T> {
    /// Similarity search answered.
    Ok(Vec<Candidate<T>>),
    /// The plain query answered after similarity search degraded.
    Degraded {
        items: Vec<Candidate<T>>,
        reason: String,
    },
    /// The store failed outright.
    Fatal(BlueprintError),
}

impl<T> RetrievalOutcome<T> {
    pub fn used_fallback(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }

    /// `(candidates, used_fallback)`; a fatal outcome yields an empty list.
    pub fn into_candidates(self) -> (Vec<Candidate<T>>, bool) {
        match self {
            Self::Ok(items) => (items, false),
            Self::Degraded { items, .. } => (items, true),
            Self::Fatal(_) => (Vec::new(), false),
        }
    }
}

/// Classification of a raw similarity query result.
#[derive(Debug)]
pub enum SimilarityOutcome<T> {
    Hits(Vec<(T, f64)>),
    Degrade(String),
    Fatal(BlueprintError),
}

/// Map a similarity result onto hit / degrade / fatal.
pub fn classify_similarity<T>(result: BlueprintResult<Vec<(T, f64)>>) -> SimilarityOutcome<T> {
    match result {
        Ok(rows) if rows.is_empty() => {
            SimilarityOutcome::Degrade("similarity search returned no rows".to_string())
        }
        Ok(rows) => SimilarityOutcome::Hits(rows),
        Err(BlueprintError::Store(e)) if e.is_capability_unavailable() => {
            SimilarityOutcome::Degrade(e.to_string())
        }
        Err(e) => SimilarityOutcome::Fatal(e),
    }
}

/// Retrieves one entity kind from its store. Stateless apart from the timeout.
#[derive(Debug, Clone, Copy)]
pub struct HybridRetriever {
    timeout: Duration,
}

impl HybridRetriever {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }

    /// Retrieve up to `filter.limit` entities, deterministically ordered.
    pub async fn retrieve<T: Entity>(
        &self,
        store: &dyn IEntityStore<T>,
        query_vector: &[f32],
        filter: &EntityFilter,
    ) -> RetrievalOutcome<T> {
        let similarity = match tokio::time::timeout(
            self.timeout,
            store.similarity_search(query_vector, filter),
        )
        .await
        {
            Ok(result) => classify_similarity(result),
            Err(_) => SimilarityOutcome::Degrade(
                StoreError::Timeout {
                    kind: T::KIND,
                    timeout_ms: self.timeout.as_millis() as u64,
                }
                .to_string(),
            ),
        };

        let reason = match similarity {
            SimilarityOutcome::Hits(rows) => {
                let items = finish_similarity(rows, filter);
                if !items.is_empty() {
                    debug!(kind = %T::KIND, hits = items.len(), "similarity search answered");
                    return RetrievalOutcome::Ok(items);
                }
                // The index may ignore part of the filter; nothing usable came back.
                "similarity rows did not pass the filter".to_string()
            }
            SimilarityOutcome::Degrade(reason) => reason,
            SimilarityOutcome::Fatal(e) => {
                warn!(kind = %T::KIND, error = %e, "similarity search failed");
                return RetrievalOutcome::Fatal(e);
            }
        };

        warn!(kind = %T::KIND, %reason, "similarity search degraded, using filtered query");
        match self.filtered(store, filter).await {
            Ok(items) => RetrievalOutcome::Degraded { items, reason },
            Err(e) => {
                warn!(kind = %T::KIND, error = %e, "filtered query failed");
                RetrievalOutcome::Fatal(e)
            }
        }
    }

    async fn filtered<T: Entity>(
        &self,
        store: &dyn IEntityStore<T>,
        filter: &EntityFilter,
    ) -> BlueprintResult<Vec<Candidate<T>>> {
        let rows = tokio::time::timeout(self.timeout, store.filtered_search(filter))
            .await
            .map_err(|_| StoreError::Timeout {
                kind: T::KIND,
                timeout_ms: self.timeout.as_millis() as u64,
            })??;
        Ok(finish_filtered(rows, filter))
    }
}

/// Re-apply the filter, order by similarity desc then the kind's plain order, truncate.
fn finish_similarity<T: Entity>(rows: Vec<(T, f64)>, filter: &EntityFilter) -> Vec<Candidate<T>> {
    let mut items: Vec<Candidate<T>> = rows
        .into_iter()
        .filter(|(item, _)| passes(item, filter))
        .map(|(item, sim)| Candidate {
            item,
            similarity: Some(clamp_unit(sim)),
        })
        .collect();
    items.sort_by(|a, b| {
        desc(a.similarity.unwrap_or(0.0), b.similarity.unwrap_or(0.0))
            .then_with(|| a.item.fallback_order(&b.item))
    });
    dedup_by_id(&mut items);
    items.truncate(filter.limit);
    items
}

/// Same filter semantics as the similarity path, plain order, truncate.
fn finish_filtered<T: Entity>(rows: Vec<T>, filter: &EntityFilter) -> Vec<Candidate<T>> {
    let mut items: Vec<Candidate<T>> = rows
        .into_iter()
        .filter(|item| passes(item, filter))
        .map(|item| Candidate {
            item,
            similarity: None,
        })
        .collect();
    items.sort_by(|a, b| a.item.fallback_order(&b.item));
    dedup_by_id(&mut items);
    items.truncate(filter.limit);
    items
}

fn passes<T: Entity>(item: &T, filter: &EntityFilter) -> bool {
    item.matches_technologies(&filter.technologies) && item.meets_threshold(filter.min_success_rate)
}

/// Keep the first (best-ranked) occurrence of each id.
fn dedup_by_id<T: Entity>(items: &mut Vec<Candidate<T>>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|c| seen.insert(c.item.id().to_string()));
}
