use blueprint_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = BlueprintConfig::from_toml("").unwrap();

    // Retrieval defaults
    assert_eq!(config.retrieval.default_success_rate_threshold, 0.7);
    assert_eq!(config.retrieval.default_max_results, 10);
    assert_eq!(config.retrieval.max_results_limit, 50);
    assert_eq!(config.retrieval.store_timeout_ms, 10_000);
    assert!(config.retrieval.include_research);

    // Embedding defaults
    assert_eq!(config.embedding.timeout_ms, 10_000);
    assert_eq!(config.embedding.dimensions, 0);
    assert_eq!(config.embedding.cache_ttl_secs, 86_400);
    assert_eq!(config.embedding.cache_idle_secs, 3_600);

    // Scoring defaults
    assert_eq!(config.scoring.pattern.similarity, 0.4);
    assert_eq!(config.scoring.pattern.usage_saturation, 100.0);
    assert_eq!(config.scoring.rule.mandatory, 0.3);
    assert_eq!(config.scoring.research.freshness, 0.4);

    // Assembly defaults
    assert_eq!(config.assembly.max_patterns, 5);
    assert_eq!(config.assembly.max_research, 3);

    // Confidence defaults
    assert_eq!(config.confidence.rule, 0.15);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);

    assert!(config.validate().is_empty());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[retrieval]
store_timeout_ms = 2500

[scoring.pattern]
similarity = 0.5

[generation]
unit_test_command = "cargo test --workspace"
"#;
    let config = BlueprintConfig::from_toml(toml).unwrap();
    assert_eq!(config.retrieval.store_timeout_ms, 2500);
    assert_eq!(config.scoring.pattern.similarity, 0.5);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.pattern.success_rate, 0.3);
    assert_eq!(config.retrieval.default_max_results, 10);
    assert_eq!(config.generation.unit_test_command, "cargo test --workspace");
    assert_eq!(config.generation.strict_success_threshold, 0.9);
}

#[test]
fn config_serde_roundtrip() {
    let config = BlueprintConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = BlueprintConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.assembly.max_patterns, config.assembly.max_patterns);
    assert_eq!(
        roundtripped.generation.syntax_command,
        config.generation.syntax_command
    );
}

#[test]
fn invalid_weights_are_all_reported() {
    let toml = r#"
[scoring.rule]
mandatory = 1.5

[assembly]
max_patterns = 0

[generation]
standard_success_threshold = 0.95
strict_success_threshold = 0.9
"#;
    let config = BlueprintConfig::from_toml(toml).unwrap();
    let errors = config.validate();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"scoring.rule.mandatory"));
    assert!(fields.contains(&"assembly.max_patterns"));
    assert!(fields.contains(&"generation.strict_success_threshold"));
    assert!(errors[0].to_string().starts_with("config."));
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(BlueprintConfig::from_toml("[retrieval\nstore_timeout_ms = ").is_err());
}

#[test]
fn zero_cache_lifetimes_are_rejected() {
    let toml = r#"
[embedding]
cache_ttl_secs = 0
cache_idle_secs = 0
"#;
    let config = BlueprintConfig::from_toml(toml).unwrap();
    let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["embedding.cache_ttl_secs".to_string(), "embedding.cache_idle_secs".to_string()]
    );
}
