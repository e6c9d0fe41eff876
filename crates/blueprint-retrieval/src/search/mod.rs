//! Hybrid search: similarity query first, plain filtered query as fallback.

pub mod hybrid;

use blueprint_core::models::{Pattern, ResearchItem, Rule};
use blueprint_core::traits::IEntityStore;

pub use hybrid::{
    classify_similarity, Candidate, HybridRetriever, RetrievalOutcome, SimilarityOutcome,
};

/// The three entity stores a research request fans out to.
#[derive(Clone, Copy)]
pub struct KnowledgeStores<'a> {
    pub patterns: &'a dyn IEntityStore<Pattern>,
    pub rules: &'a dyn IEntityStore<Rule>,
    pub research: &'a dyn IEntityStore<ResearchItem>,
}
