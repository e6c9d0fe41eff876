//! Config validation: reject invalid combinations at startup.

use super::BlueprintConfig;

/// Validation error for a single config field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "config.{}: {}", self.field, self.message)
    }
}

/// Validate a BlueprintConfig, returning all errors found.
pub fn validate(config: &BlueprintConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    let r = &config.retrieval;
    check_unit(
        &mut errors,
        "retrieval.default_success_rate_threshold",
        r.default_success_rate_threshold,
    );
    check_nonzero(&mut errors, "retrieval.default_max_results", r.default_max_results as u64);
    check_nonzero(&mut errors, "retrieval.max_results_limit", r.max_results_limit as u64);
    check_nonzero(&mut errors, "retrieval.store_timeout_ms", r.store_timeout_ms);
    if r.default_max_results > r.max_results_limit {
        errors.push(ConfigValidationError {
            field: "retrieval.default_max_results".to_string(),
            message: format!(
                "must not exceed max_results_limit ({}), got {}",
                r.max_results_limit, r.default_max_results
            ),
        });
    }

    let e = &config.embedding;
    check_nonzero(&mut errors, "embedding.timeout_ms", e.timeout_ms);
    check_nonzero(&mut errors, "embedding.cache_size", e.cache_size);
    check_nonzero(&mut errors, "embedding.cache_ttl_secs", e.cache_ttl_secs);
    check_nonzero(&mut errors, "embedding.cache_idle_secs", e.cache_idle_secs);

    let p = &config.scoring.pattern;
    check_unit(&mut errors, "scoring.pattern.similarity", p.similarity);
    check_unit(&mut errors, "scoring.pattern.success_rate", p.success_rate);
    check_unit(&mut errors, "scoring.pattern.usage", p.usage);
    check_unit(&mut errors, "scoring.pattern.complexity", p.complexity);
    check_positive(&mut errors, "scoring.pattern.usage_saturation", p.usage_saturation);

    let rule = &config.scoring.rule;
    check_unit(&mut errors, "scoring.rule.similarity", rule.similarity);
    check_unit(&mut errors, "scoring.rule.mandatory", rule.mandatory);
    check_unit(&mut errors, "scoring.rule.recommended", rule.recommended);

    let research = &config.scoring.research;
    check_unit(&mut errors, "scoring.research.similarity", research.similarity);
    check_unit(&mut errors, "scoring.research.freshness", research.freshness);

    let a = &config.assembly;
    check_nonzero(&mut errors, "assembly.max_patterns", a.max_patterns as u64);
    check_nonzero(&mut errors, "assembly.max_research", a.max_research as u64);
    for (field, value) in [
        ("assembly.blend_relevance", a.blend_relevance),
        ("assembly.blend_success", a.blend_success),
        ("assembly.quality_relevance", a.quality_relevance),
        ("assembly.quality_mandatory", a.quality_mandatory),
        ("assembly.quality_freshness", a.quality_freshness),
        ("assembly.quality_completeness", a.quality_completeness),
        ("assembly.completeness_patterns", a.completeness_patterns),
        ("assembly.completeness_rules", a.completeness_rules),
        ("assembly.completeness_research", a.completeness_research),
    ] {
        check_unit(&mut errors, field, value);
    }
    check_positive(&mut errors, "assembly.mandatory_rule_saturation", a.mandatory_rule_saturation);

    let t = &config.templates;
    check_unit(&mut errors, "templates.success_rate", t.success_rate);
    check_unit(&mut errors, "templates.usage", t.usage);
    check_unit(&mut errors, "templates.complexity_overlap", t.complexity_overlap);
    check_unit(&mut errors, "templates.high_performer", t.high_performer);
    check_unit(&mut errors, "templates.high_performer_threshold", t.high_performer_threshold);
    check_positive(&mut errors, "templates.usage_saturation", t.usage_saturation);

    let g = &config.generation;
    check_unit(&mut errors, "generation.standard_success_threshold", g.standard_success_threshold);
    check_unit(&mut errors, "generation.strict_success_threshold", g.strict_success_threshold);
    if g.strict_success_threshold < g.standard_success_threshold {
        errors.push(ConfigValidationError {
            field: "generation.strict_success_threshold".to_string(),
            message: "must be >= standard_success_threshold".to_string(),
        });
    }

    let c = &config.confidence;
    check_unit(&mut errors, "confidence.template", c.template);
    check_unit(&mut errors, "confidence.context", c.context);
    check_unit(&mut errors, "confidence.pattern", c.pattern);
    check_unit(&mut errors, "confidence.rule", c.rule);
    check_unit(&mut errors, "confidence.research", c.research);

    errors
}

fn check_unit(errors: &mut Vec<ConfigValidationError>, field: &str, value: f64) {
    if value.is_nan() {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: "must not be NaN".to_string(),
        });
    } else if !(0.0..=1.0).contains(&value) {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: format!("must be in [0.0, 1.0], got {value}"),
        });
    }
}

fn check_positive(errors: &mut Vec<ConfigValidationError>, field: &str, value: f64) {
    if value.is_nan() || value <= 0.0 {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: format!("must be > 0, got {value}"),
        });
    }
}

fn check_nonzero(errors: &mut Vec<ConfigValidationError>, field: &str, value: u64) {
    if value == 0 {
        errors.push(ConfigValidationError {
            field: field.to_string(),
            message: "must be > 0".to_string(),
        });
    }
}
