//! In-memory entity store with a switchable similarity capability.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use blueprint_core::errors::{BlueprintResult, StoreError};
use blueprint_core::models::Entity;
use blueprint_core::traits::{EntityFilter, IEntityStore};

/// How `similarity_search` behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMode {
    /// Cosine similarity over the stored embeddings.
    Available,
    /// Fails with `StoreError::CapabilityUnavailable`.
    Unavailable,
    /// Answers with zero rows.
    Empty,
    /// Ranks every stored item by cosine similarity, ignoring tags and threshold.
    IgnoresFilter,
    /// Never answers within any reasonable timeout.
    TimesOut,
    /// Both queries fail with `StoreError::Unreachable`.
    Unreachable,
}

pub struct InMemoryEntityStore<T> {
    items: Vec<T>,
    mode: SimilarityMode,
    similarity_calls: AtomicUsize,
    filtered_calls: AtomicUsize,
}

impl<T: Entity> InMemoryEntityStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_mode(items, SimilarityMode::Available)
    }

    pub fn with_mode(items: Vec<T>, mode: SimilarityMode) -> Self {
        Self {
            items,
            mode,
            similarity_calls: AtomicUsize::new(0),
            filtered_calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn similarity_calls(&self) -> usize {
        self.similarity_calls.load(Ordering::SeqCst)
    }

    pub fn filtered_calls(&self) -> usize {
        self.filtered_calls.load(Ordering::SeqCst)
    }

    /// Total calls of either kind.
    pub fn calls(&self) -> usize {
        self.similarity_calls() + self.filtered_calls()
    }

    fn matching<'a>(&'a self, filter: &'a EntityFilter) -> impl Iterator<Item = &'a T> + 'a {
        self.items.iter().filter(move |item| {
            item.matches_technologies(&filter.technologies)
                && item.meets_threshold(filter.min_success_rate)
        })
    }

    fn unreachable(&self) -> StoreError {
        StoreError::Unreachable {
            kind: T::KIND,
            reason: "connection refused".to_string(),
        }
    }
}

#[async_trait]
impl<T: Entity> IEntityStore<T> for InMemoryEntityStore<T> {
    async fn similarity_search(
        &self,
        embedding: &[f32],
        filter: &EntityFilter,
    ) -> BlueprintResult<Vec<(T, f64)>> {
        self.similarity_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            SimilarityMode::Available => {
                Ok(ranked(self.matching(filter), embedding, filter.limit))
            }
            SimilarityMode::IgnoresFilter => {
                Ok(ranked(self.items.iter(), embedding, filter.limit))
            }
            SimilarityMode::Unavailable => Err(StoreError::CapabilityUnavailable {
                kind: T::KIND,
                reason: "vector index not built".to_string(),
            }
            .into()),
            SimilarityMode::Empty => Ok(Vec::new()),
            SimilarityMode::TimesOut => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
            SimilarityMode::Unreachable => Err(self.unreachable().into()),
        }
    }

    async fn filtered_search(&self, filter: &EntityFilter) -> BlueprintResult<Vec<T>> {
        self.filtered_calls.fetch_add(1, Ordering::SeqCst);
        if self.mode == SimilarityMode::Unreachable {
            return Err(self.unreachable().into());
        }
        let mut rows: Vec<T> = self.matching(filter).cloned().collect();
        rows.sort_by(|a, b| a.fallback_order(b));
        rows.truncate(filter.limit);
        Ok(rows)
    }
}

/// Items with an embedding, by cosine similarity desc, truncated to `limit`.
fn ranked<'a, T: Entity>(
    items: impl Iterator<Item = &'a T>,
    embedding: &[f32],
    limit: usize,
) -> Vec<(T, f64)> {
    let mut rows: Vec<(T, f64)> = items
        .filter_map(|item| {
            item.embedding()
                .map(|e| (item.clone(), cosine_similarity(embedding, e)))
        })
        .collect();
    rows.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    rows.truncate(limit);
    rows
}

/// Cosine similarity mapped to [0, 1]. Mismatched lengths or zero vectors give 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (dot, na, nb) = a.iter().zip(b).fold((0.0f64, 0.0f64, 0.0f64), |(d, x, y), (p, q)| {
        let (p, q) = (*p as f64, *q as f64);
        (d + p * q, x + p * p, y + q * q)
    });
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na.sqrt() * nb.sqrt())).clamp(0.0, 1.0)
}
