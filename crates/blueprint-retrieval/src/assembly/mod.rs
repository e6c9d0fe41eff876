//! ContextAssembler: complexity filter → rank → cap → quality score.

pub mod quality;

use std::collections::HashSet;

use blueprint_core::config::AssemblyConfig;
use blueprint_core::models::{
    AssembledContext, AssemblyMetadata, ComplexityLevel, Entity, Pattern, RankedPattern,
    ResearchResults, Scored,
};
use blueprint_core::scores::{clamp_unit, desc, unit_score};
use tracing::debug;

/// Whether a pattern survives the caller's complexity preference.
///
/// `beginner` keeps beginner only, `advanced` keeps intermediate and advanced,
/// `intermediate` keeps everything.
pub fn complexity_allows(preference: ComplexityLevel, pattern: ComplexityLevel) -> bool {
    match preference {
        ComplexityLevel::Beginner => pattern == ComplexityLevel::Beginner,
        ComplexityLevel::Intermediate => true,
        ComplexityLevel::Advanced => pattern != ComplexityLevel::Beginner,
    }
}

/// Turns raw research results into a capped, ranked context.
#[derive(Debug, Clone, Default)]
pub struct ContextAssembler {
    config: AssemblyConfig,
}

impl ContextAssembler {
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    pub fn assemble(
        &self,
        results: &ResearchResults,
        complexity: ComplexityLevel,
    ) -> AssembledContext {
        let received = results.patterns.len();
        let eligible: Vec<Scored<Pattern>> = results
            .patterns
            .iter()
            .filter(|p| complexity_allows(complexity, p.item.complexity))
            .map(sanitize)
            .collect();
        let excluded = received - eligible.len();

        let mut ranked: Vec<RankedPattern> = eligible
            .into_iter()
            .map(|scored| {
                let blended = unit_score(
                    self.config.blend_relevance * scored.relevance_score
                        + self.config.blend_success * scored.item.metrics.rate(),
                );
                RankedPattern {
                    scored,
                    blended_score: blended,
                }
            })
            .collect();
        ranked.sort_by(|a, b| {
            desc(a.blended_score, b.blended_score)
                .then_with(|| desc(a.scored.relevance_score, b.scored.relevance_score))
                .then_with(|| a.pattern().fallback_order(b.pattern()))
        });
        let mut seen = HashSet::new();
        ranked.retain(|p| seen.insert(p.pattern().id.clone()));
        let pattern_pool = ranked.len();
        ranked.truncate(self.config.max_patterns);

        let mut rules: Vec<_> = results.rules.iter().map(sanitize).collect();
        rules.sort_by(|a, b| a.item.fallback_order(&b.item));
        dedup(&mut rules);

        let mut research: Vec<_> = results.research.iter().map(sanitize).collect();
        research.sort_by(|a, b| {
            desc(a.relevance_score, b.relevance_score)
                .then_with(|| a.item.fallback_order(&b.item))
        });
        dedup(&mut research);
        let research_pool = research.len();
        research.truncate(self.config.max_research);

        let context_quality_score =
            quality::context_quality(&ranked, &rules, &research, &self.config);

        debug!(
            patterns = ranked.len(),
            rules = rules.len(),
            research = research.len(),
            excluded,
            quality = context_quality_score,
            "context assembled"
        );

        AssembledContext {
            metadata: AssemblyMetadata {
                complexity_filter: complexity,
                patterns_received: received,
                patterns_excluded_by_complexity: excluded,
                patterns_truncated: pattern_pool - ranked.len(),
                rules_received: results.rules.len(),
                research_received: results.research.len(),
                research_truncated: research_pool - research.len(),
            },
            selected_patterns: ranked,
            prioritized_rules: rules,
            relevant_research: research,
            context_quality_score,
        }
    }
}

/// Caller-supplied scores are untrusted: clamp and round on the way in.
fn sanitize<T: Clone>(scored: &Scored<T>) -> Scored<T> {
    Scored::new(
        scored.item.clone(),
        unit_score(scored.relevance_score),
        scored.similarity.map(clamp_unit),
    )
}

fn dedup<T: Entity>(items: &mut Vec<Scored<T>>) {
    let mut seen = HashSet::new();
    items.retain(|s| seen.insert(s.item.id().to_string()));
}
