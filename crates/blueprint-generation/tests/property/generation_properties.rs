//! Property tests for blueprint-generation: confidence and compatibility bounds,
//! body determinism.

use std::collections::BTreeSet;

use proptest::prelude::*;

use blueprint_core::config::{ConfidenceConfig, TemplateConfig};
use blueprint_core::models::{
    AssembledContext, ComplexityLevel, EnforcementLevel, Pattern, RankedPattern, ResearchItem,
    Rule, Scored, SuccessMetrics, Template, ValidationStrictness,
};
use blueprint_generation::confidence::calculate;
use blueprint_generation::{compatibility, DocumentGenerator, DocumentInput};
use chrono::{DateTime, Utc};

fn level() -> impl Strategy<Value = ComplexityLevel> {
    prop_oneof![
        Just(ComplexityLevel::Beginner),
        Just(ComplexityLevel::Intermediate),
        Just(ComplexityLevel::Advanced),
    ]
}

fn ranked(i: usize, complexity: ComplexityLevel, rate: f64, relevance: f64) -> RankedPattern {
    RankedPattern {
        scored: Scored::new(
            Pattern {
                id: format!("p{i}"),
                title: format!("Pattern {i}"),
                description: String::new(),
                technologies: BTreeSet::new(),
                complexity,
                metrics: SuccessMetrics {
                    success_rate: rate,
                    usage_count: i as u64,
                },
                implementation_steps: vec![format!("step {i}")],
                gotchas: vec![format!("gotcha {i}")],
                source_references: vec![],
                embedding: None,
            },
            relevance,
            None,
        ),
        blended_score: relevance,
    }
}

prop_compose! {
    fn context()(
        patterns in prop::collection::vec((level(), -0.5f64..1.5, -0.5f64..1.5), 0..6),
        mandatory in 0usize..6,
        freshness in prop::collection::vec(-0.5f64..1.5, 0..4),
        quality in -0.5f64..1.5,
    ) -> AssembledContext {
        AssembledContext {
            selected_patterns: patterns
                .into_iter()
                .enumerate()
                .map(|(i, (cx, rate, rel))| ranked(i, cx, rate, rel))
                .collect(),
            prioritized_rules: (0..mandatory)
                .map(|i| Scored::new(
                    Rule {
                        id: format!("r{i}"),
                        title: format!("Rule {i}"),
                        description: String::new(),
                        technologies: BTreeSet::new(),
                        enforcement: EnforcementLevel::Mandatory,
                        priority: i as i32,
                        examples: vec![],
                        embedding: None,
                    },
                    0.5,
                    None,
                ))
                .collect(),
            relevant_research: freshness
                .into_iter()
                .enumerate()
                .map(|(i, f)| Scored::new(
                    ResearchItem {
                        id: format!("n{i}"),
                        title: format!("Note {i}"),
                        technologies: BTreeSet::new(),
                        freshness_score: f,
                        documentation_refs: vec![],
                        key_insights: vec![],
                        common_pitfalls: vec![format!("pitfall {i}")],
                        embedding: None,
                    },
                    0.5,
                    None,
                ))
                .collect(),
            context_quality_score: quality,
            metadata: Default::default(),
        }
    }
}

proptest! {
    #[test]
    fn confidence_always_in_unit_range(ctx in context(), template in -1.0f64..2.0) {
        let m = calculate(template, &ctx, &ConfidenceConfig::default(), 3.0);
        for v in [
            m.template_confidence,
            m.context_quality_score,
            m.pattern_confidence,
            m.rule_confidence,
            m.research_confidence,
            m.overall_confidence,
        ] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn compatibility_in_unit_range(
        ctx in context(),
        cx in level(),
        rate in -0.5f64..1.5,
        usage in 0u64..1000,
    ) {
        let template = Template {
            id: "t".into(),
            name: "T".into(),
            feature_types: BTreeSet::new(),
            complexity: cx,
            metrics: SuccessMetrics { success_rate: rate, usage_count: usage },
            created_at: DateTime::<Utc>::default(),
        };
        let score = compatibility(&template, &ctx.selected_patterns, &TemplateConfig::default());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn body_is_a_pure_function_of_inputs(ctx in context(), request in "[a-zA-Z ]{1,40}") {
        let template = Template::builtin_default();
        let input = DocumentInput {
            feature_request: &request,
            template: &template,
            context: &ctx,
            strictness: ValidationStrictness::Strict,
        };
        let generator = DocumentGenerator::default();
        prop_assert_eq!(generator.render_body(&input), generator.render_body(&input));
    }
}
