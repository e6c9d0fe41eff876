//! ResearchEngine: orchestrates the `research` operation.
//!
//! Step 1: Validate and embed the feature request (provider errors are fatal)
//! Step 2: Retrieve patterns, rules, and research concurrently (store errors are absorbed)
//! Step 3: Score, summarize, and attach guidance and metadata

use blueprint_core::config::{RetrievalConfig, ScoringConfig};
use blueprint_core::constants::VERSION;
use blueprint_core::errors::BlueprintResult;
use blueprint_core::models::{
    DegradationEvent, Entity, EntityKind, ResearchMetadata, ResearchResponse, RetrievalQuery,
};
use blueprint_core::traits::EntityFilter;
use blueprint_embeddings::QueryEmbedder;
use tracing::{debug, info, warn};

use crate::ranking::{score_patterns, score_research, score_rules};
use crate::research::guidance::{self, GuidanceInput};
use crate::research::summary;
use crate::search::{Candidate, HybridRetriever, KnowledgeStores, RetrievalOutcome};

/// Entry point for `research`. Borrows its collaborators; holds no request state.
pub struct ResearchEngine<'a> {
    embedder: &'a QueryEmbedder,
    stores: KnowledgeStores<'a>,
    retrieval: RetrievalConfig,
    scoring: ScoringConfig,
}

/// Degradation bookkeeping collected across the three kinds.
#[derive(Default)]
struct Ledger {
    fallback_kinds: Vec<EntityKind>,
    failed_kinds: Vec<EntityKind>,
    warnings: Vec<String>,
    degradations: Vec<DegradationEvent>,
}

impl Ledger {
    fn record<T: Entity>(&mut self, outcome: RetrievalOutcome<T>) -> Vec<Candidate<T>> {
        match outcome {
            RetrievalOutcome::Ok(items) => items,
            RetrievalOutcome::Degraded { items, reason } => {
                self.fallback_kinds.push(T::KIND);
                self.warnings.push(format!(
                    "{} similarity search unavailable ({reason}); ranked without similarity",
                    T::KIND
                ));
                self.degradations.push(DegradationEvent::new(
                    format!("retrieval.{}", T::KIND),
                    reason,
                    "filtered_query",
                ));
                items
            }
            RetrievalOutcome::Fatal(e) => {
                self.failed_kinds.push(T::KIND);
                self.warnings
                    .push(format!("{} store failed ({e}); no {} returned", T::KIND, T::KIND));
                self.degradations.push(DegradationEvent::new(
                    format!("retrieval.{}", T::KIND),
                    e.to_string(),
                    "empty_result",
                ));
                Vec::new()
            }
        }
    }
}

impl<'a> ResearchEngine<'a> {
    pub fn new(
        embedder: &'a QueryEmbedder,
        stores: KnowledgeStores<'a>,
        retrieval: RetrievalConfig,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            embedder,
            stores,
            retrieval,
            scoring,
        }
    }

    /// Run the full research pipeline for one feature request.
    pub async fn research(&self, query: &RetrievalQuery) -> BlueprintResult<ResearchResponse> {
        // Step 1: Validate before any external call, then embed.
        query.validate(self.retrieval.max_results_limit)?;
        let technologies = query.technologies();
        let embedded = self.embedder.embed_query(&query.feature_request).await?;
        debug!(
            dims = embedded.vector.len(),
            cached = embedded.cached,
            "feature request embedded"
        );

        // Step 2: Fan out. Only patterns carry a success rate to filter on.
        let retriever = HybridRetriever::from_millis(self.retrieval.store_timeout_ms);
        let pattern_filter = EntityFilter {
            technologies: technologies.clone(),
            min_success_rate: Some(query.success_rate_threshold),
            limit: query.max_results,
        };
        let plain_filter = EntityFilter {
            min_success_rate: None,
            ..pattern_filter.clone()
        };
        let vector: &[f32] = &embedded.vector;

        let (patterns, rules, research) = tokio::join!(
            retriever.retrieve(self.stores.patterns, vector, &pattern_filter),
            retriever.retrieve(self.stores.rules, vector, &plain_filter),
            async {
                if query.include_research {
                    Some(retriever.retrieve(self.stores.research, vector, &plain_filter).await)
                } else {
                    None
                }
            },
        );

        let mut ledger = Ledger::default();
        let patterns = ledger.record(patterns);
        let rules = ledger.record(rules);
        let research = research.map(|r| ledger.record(r)).unwrap_or_default();

        // Step 3: Score and shape the response.
        let patterns = score_patterns(patterns, &self.scoring.pattern);
        let rules = score_rules(rules, &self.scoring.rule);
        let research = score_research(research, &self.scoring.research);
        let summary = summary::summarize(&patterns, &rules, &research);

        let guidance = guidance::generate(&GuidanceInput {
            technologies: &technologies,
            pattern_count: summary.pattern_count,
            mandatory_rule_count: summary.mandatory_rule_count,
            research_count: summary.research_count,
            include_research: query.include_research,
            fallback_kinds: &ledger.fallback_kinds,
            failed_kinds: &ledger.failed_kinds,
        });

        if !ledger.failed_kinds.is_empty() {
            warn!(failed = ?ledger.failed_kinds, "research completed with failed stores");
        }
        info!(
            patterns = summary.pattern_count,
            rules = summary.rule_count,
            research = summary.research_count,
            fallback = ?ledger.fallback_kinds,
            "research complete"
        );

        Ok(ResearchResponse {
            patterns,
            rules,
            research,
            summary,
            guidance,
            metadata: ResearchMetadata {
                request_id: uuid::Uuid::new_v4().to_string(),
                technology_filter: technologies,
                success_rate_threshold: query.success_rate_threshold,
                max_results: query.max_results,
                include_research: query.include_research,
                embedding_dimensions: embedded.vector.len(),
                embedding_cached: embedded.cached,
                fallback_kinds: ledger.fallback_kinds,
                failed_kinds: ledger.failed_kinds,
                warnings: ledger.warnings,
                degradations: ledger.degradations,
                engine_version: VERSION.to_string(),
            },
        })
    }
}
