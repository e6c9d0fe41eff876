use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::{Pattern, ResearchItem, Rule};
use super::tags::normalize_tag;
use crate::scores::desc;

/// The three knowledge kinds retrieved per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Pattern,
    Rule,
    Research,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::Rule => "rule",
            Self::Research => "research",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared behavior the retriever needs from every stored entity kind.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn technologies(&self) -> &BTreeSet<String>;

    /// Stored embedding, if the ingestion side computed one.
    fn embedding(&self) -> Option<&[f32]>;

    /// Success rate used by threshold filtering. Only patterns carry one.
    fn success_rate(&self) -> Option<f64> {
        None
    }

    /// Deterministic order of the plain (non-similarity) query.
    fn fallback_order(&self, other: &Self) -> Ordering;

    /// True when no tags were requested or the entity carries any requested tag.
    /// `requested` must already be normalized.
    fn matches_technologies(&self, requested: &[String]) -> bool {
        requested.is_empty()
            || self
                .technologies()
                .iter()
                .any(|t| requested.contains(&normalize_tag(t)))
    }

    /// True when the entity clears the success-rate threshold (or has no rate).
    fn meets_threshold(&self, threshold: Option<f64>) -> bool {
        match (threshold, self.success_rate()) {
            (Some(min), Some(rate)) => rate >= min,
            _ => true,
        }
    }
}

impl Entity for Pattern {
    const KIND: EntityKind = EntityKind::Pattern;

    fn id(&self) -> &str {
        &self.id
    }

    fn technologies(&self) -> &BTreeSet<String> {
        &self.technologies
    }

    fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    fn success_rate(&self) -> Option<f64> {
        Some(self.metrics.rate())
    }

    /// success_rate desc, usage_count desc, id asc.
    fn fallback_order(&self, other: &Self) -> Ordering {
        desc(self.metrics.rate(), other.metrics.rate())
            .then_with(|| other.metrics.usage_count.cmp(&self.metrics.usage_count))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Entity for Rule {
    const KIND: EntityKind = EntityKind::Rule;

    fn id(&self) -> &str {
        &self.id
    }

    fn technologies(&self) -> &BTreeSet<String> {
        &self.technologies
    }

    fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// enforcement (mandatory first), priority asc, id asc.
    fn fallback_order(&self, other: &Self) -> Ordering {
        self.enforcement
            .cmp(&other.enforcement)
            .then_with(|| self.priority.cmp(&other.priority))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl Entity for ResearchItem {
    const KIND: EntityKind = EntityKind::Research;

    fn id(&self) -> &str {
        &self.id
    }

    fn technologies(&self) -> &BTreeSet<String> {
        &self.technologies
    }

    fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// freshness desc, id asc.
    fn fallback_order(&self, other: &Self) -> Ordering {
        desc(self.freshness(), other.freshness()).then_with(|| self.id.cmp(&other.id))
    }
}
