//! Property tests for blueprint-retrieval: score bounds and ordering.

use std::collections::BTreeSet;

use proptest::prelude::*;

use blueprint_core::config::{AssemblyConfig, ScoringConfig};
use blueprint_core::models::{
    ComplexityLevel, EnforcementLevel, Pattern, ResearchItem, ResearchResults, Rule, Scored,
    SuccessMetrics,
};
use blueprint_retrieval::assembly::complexity_allows;
use blueprint_retrieval::ranking::{score_patterns, score_research, score_rules};
use blueprint_retrieval::search::Candidate;
use blueprint_retrieval::ContextAssembler;

fn complexity() -> impl Strategy<Value = ComplexityLevel> {
    prop_oneof![
        Just(ComplexityLevel::Beginner),
        Just(ComplexityLevel::Intermediate),
        Just(ComplexityLevel::Advanced),
    ]
}

fn enforcement() -> impl Strategy<Value = EnforcementLevel> {
    prop_oneof![
        Just(EnforcementLevel::Mandatory),
        Just(EnforcementLevel::Recommended),
        Just(EnforcementLevel::Optional),
    ]
}

// Out-of-range and missing similarities are deliberately generated.
fn similarity() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (-0.5f64..1.5).prop_map(Some)]
}

fn pattern_candidates() -> impl Strategy<Value = Vec<Candidate<Pattern>>> {
    prop::collection::vec(
        (complexity(), -0.2f64..1.2, 0u64..500, similarity()),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cx, rate, usage, sim))| Candidate {
                item: Pattern {
                    id: format!("p{i}"),
                    title: format!("pattern {i}"),
                    description: String::new(),
                    technologies: BTreeSet::new(),
                    complexity: cx,
                    metrics: SuccessMetrics {
                        success_rate: rate,
                        usage_count: usage,
                    },
                    implementation_steps: vec![],
                    gotchas: vec![],
                    source_references: vec![],
                    embedding: None,
                },
                similarity: sim,
            })
            .collect()
    })
}

fn rule_candidates() -> impl Strategy<Value = Vec<Candidate<Rule>>> {
    prop::collection::vec((enforcement(), -5i32..5, similarity()), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (enforcement, priority, sim))| Candidate {
                item: Rule {
                    id: format!("r{i}"),
                    title: format!("rule {i}"),
                    description: String::new(),
                    technologies: BTreeSet::new(),
                    enforcement,
                    priority,
                    examples: vec![],
                    embedding: None,
                },
                similarity: sim,
            })
            .collect()
    })
}

fn research_candidates() -> impl Strategy<Value = Vec<Candidate<ResearchItem>>> {
    prop::collection::vec((-0.2f64..1.2, similarity()), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (freshness, sim))| Candidate {
                item: ResearchItem {
                    id: format!("n{i}"),
                    title: format!("note {i}"),
                    technologies: BTreeSet::new(),
                    freshness_score: freshness,
                    documentation_refs: vec![],
                    key_insights: vec![],
                    common_pitfalls: vec![],
                    embedding: None,
                },
                similarity: sim,
            })
            .collect()
    })
}

fn bounded_and_non_increasing<T>(items: &[Scored<T>]) -> bool {
    items.iter().all(|s| (0.0..=1.0).contains(&s.relevance_score))
        && items
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score)
}

proptest! {
    #[test]
    fn pattern_scores_bounded_and_sorted(candidates in pattern_candidates()) {
        let scored = score_patterns(candidates, &ScoringConfig::default().pattern);
        prop_assert!(bounded_and_non_increasing(&scored));
    }

    #[test]
    fn rule_scores_bounded_and_sorted(candidates in rule_candidates()) {
        let scored = score_rules(candidates, &ScoringConfig::default().rule);
        prop_assert!(bounded_and_non_increasing(&scored));
    }

    #[test]
    fn research_scores_bounded_and_sorted(candidates in research_candidates()) {
        let scored = score_research(candidates, &ScoringConfig::default().research);
        prop_assert!(bounded_and_non_increasing(&scored));
    }

    #[test]
    fn assembly_respects_caps_filter_and_order(
        patterns in pattern_candidates(),
        rules in rule_candidates(),
        research in research_candidates(),
        preference in complexity(),
    ) {
        let scoring = ScoringConfig::default();
        let results = ResearchResults {
            patterns: score_patterns(patterns, &scoring.pattern),
            rules: score_rules(rules.clone(), &scoring.rule),
            research: score_research(research, &scoring.research),
            summary: Default::default(),
        };
        let config = AssemblyConfig::default();
        let ctx = ContextAssembler::new(config.clone()).assemble(&results, preference);

        prop_assert!(ctx.selected_patterns.len() <= config.max_patterns);
        prop_assert!(ctx.relevant_research.len() <= config.max_research);
        prop_assert_eq!(ctx.prioritized_rules.len(), rules.len());
        prop_assert!((0.0..=1.0).contains(&ctx.context_quality_score));

        prop_assert!(ctx
            .selected_patterns
            .iter()
            .all(|p| complexity_allows(preference, p.pattern().complexity)));
        prop_assert!(ctx
            .selected_patterns
            .windows(2)
            .all(|w| w[0].blended_score >= w[1].blended_score));
        prop_assert!(ctx
            .relevant_research
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
        let rules_ordered = ctx.prioritized_rules.windows(2).all(|w| {
            let (a, b) = (&w[0].item, &w[1].item);
            (a.enforcement, a.priority) <= (b.enforcement, b.priority)
        });
        prop_assert!(rules_ordered, "rules out of enforcement/priority order");
    }
}
