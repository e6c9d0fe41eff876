use std::collections::BTreeSet;

use blueprint_core::models::*;

fn pattern(id: &str, rate: f64, usage: u64, tags: &[&str]) -> Pattern {
    Pattern {
        id: id.to_string(),
        title: format!("pattern {id}"),
        description: String::new(),
        technologies: tags.iter().map(|t| t.to_string()).collect(),
        complexity: ComplexityLevel::Intermediate,
        metrics: SuccessMetrics::new(rate, usage),
        implementation_steps: vec![],
        gotchas: vec![],
        source_references: vec![],
        embedding: None,
    }
}

fn rule(id: &str, enforcement: EnforcementLevel, priority: i32) -> Rule {
    Rule {
        id: id.to_string(),
        title: id.to_string(),
        description: String::new(),
        technologies: BTreeSet::new(),
        enforcement,
        priority,
        examples: vec![],
        embedding: None,
    }
}

#[test]
fn success_metrics_clamp() {
    assert_eq!(SuccessMetrics::new(1.4, 3).success_rate, 1.0);
    assert_eq!(SuccessMetrics::new(-0.1, 3).success_rate, 0.0);
}

#[test]
fn pattern_fallback_order_is_rate_then_usage_then_id() {
    let mut patterns = vec![
        pattern("c", 0.9, 10, &[]),
        pattern("a", 0.95, 1, &[]),
        pattern("b", 0.9, 50, &[]),
        pattern("d", 0.9, 50, &[]),
    ];
    patterns.sort_by(|a, b| a.fallback_order(b));
    let ids: Vec<&str> = patterns.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "d", "c"]);
}

#[test]
fn rule_fallback_order_puts_mandatory_first() {
    let mut rules = vec![
        rule("opt", EnforcementLevel::Optional, 0),
        rule("rec", EnforcementLevel::Recommended, 1),
        rule("man-2", EnforcementLevel::Mandatory, 2),
        rule("man-1", EnforcementLevel::Mandatory, 1),
    ];
    rules.sort_by(|a, b| a.fallback_order(b));
    let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["man-1", "man-2", "rec", "opt"]);
}

#[test]
fn technology_match_is_case_insensitive_and_empty_matches_all() {
    let p = pattern("p", 0.8, 1, &["Rust", "Tokio"]);
    assert!(p.matches_technologies(&[]));
    assert!(p.matches_technologies(&["rust".to_string()]));
    assert!(!p.matches_technologies(&["python".to_string()]));
}

#[test]
fn threshold_applies_only_to_rated_entities() {
    let p = pattern("p", 0.5, 1, &[]);
    assert!(!p.meets_threshold(Some(0.7)));
    assert!(p.meets_threshold(None));
    let r = rule("r", EnforcementLevel::Mandatory, 1);
    assert!(r.meets_threshold(Some(0.99)));
}

#[test]
fn retrieval_query_defaults_from_json() {
    let query: RetrievalQuery =
        serde_json::from_str(r#"{"feature_request": "add oauth login"}"#).unwrap();
    assert_eq!(query.success_rate_threshold, 0.7);
    assert_eq!(query.max_results, 10);
    assert!(query.include_research);
    assert!(query.technology_stack.is_empty());
    assert!(query.validate(50).is_ok());
}

#[test]
fn retrieval_query_validation_rejects_bad_input() {
    assert!(RetrievalQuery::new("   ").validate(50).is_err());
    assert!(RetrievalQuery::new("x").with_threshold(1.2).validate(50).is_err());
    assert!(RetrievalQuery::new("x").with_threshold(f64::NAN).validate(50).is_err());
    assert!(RetrievalQuery::new("x").with_max_results(0).validate(50).is_err());
    assert!(RetrievalQuery::new("x").with_max_results(51).validate(50).is_err());
}

#[test]
fn assemble_request_defaults_from_json() {
    let req: AssembleRequest = serde_json::from_str(
        r#"{"feature_request": "add oauth login", "research_results": {}}"#,
    )
    .unwrap();
    assert_eq!(req.complexity_preference, ComplexityLevel::Intermediate);
    assert_eq!(req.validation_strictness, ValidationStrictness::Standard);
    assert!(req.template_preferences.is_empty());
    assert_eq!(req.research_results.summary, ResearchSummary::default());
}

#[test]
fn scored_flattens_entity_fields() {
    let scored = Scored::new(pattern("p1", 0.9, 4, &["rust"]), 0.81, None);
    let value = serde_json::to_value(&scored).unwrap();
    assert_eq!(value["id"], "p1");
    assert_eq!(value["relevance_score"], 0.81);
    assert!(value.get("similarity").is_none());

    let back: Scored<Pattern> = serde_json::from_value(value).unwrap();
    assert_eq!(back, scored);
}

#[test]
fn empty_summary_reports_every_complexity_level() {
    let summary = ResearchSummary::default();
    assert_eq!(summary.complexity_distribution.len(), 3);
    assert!(summary.complexity_distribution.values().all(|c| *c == 0));
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["complexity_distribution"]["beginner"], 0);
}

#[test]
fn builtin_template_is_recognized() {
    let t = Template::builtin_default();
    assert!(t.is_builtin());
    assert_eq!(t.complexity, ComplexityLevel::Intermediate);
}
