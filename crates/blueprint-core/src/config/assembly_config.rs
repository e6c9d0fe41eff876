use serde::{Deserialize, Serialize};

use super::defaults;

/// Context assembly caps and weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub max_patterns: usize,
    pub max_research: usize,
    /// Pattern rank = blend_relevance * relevance + blend_success * success_rate.
    pub blend_relevance: f64,
    pub blend_success: f64,
    pub quality_relevance: f64,
    pub quality_mandatory: f64,
    pub quality_freshness: f64,
    pub quality_completeness: f64,
    pub completeness_patterns: f64,
    pub completeness_rules: f64,
    pub completeness_research: f64,
    pub mandatory_rule_saturation: f64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_patterns: defaults::MAX_SELECTED_PATTERNS,
            max_research: defaults::MAX_SELECTED_RESEARCH,
            blend_relevance: defaults::BLEND_RELEVANCE_WEIGHT,
            blend_success: defaults::BLEND_SUCCESS_WEIGHT,
            quality_relevance: defaults::QUALITY_RELEVANCE_WEIGHT,
            quality_mandatory: defaults::QUALITY_MANDATORY_WEIGHT,
            quality_freshness: defaults::QUALITY_FRESHNESS_WEIGHT,
            quality_completeness: defaults::QUALITY_COMPLETENESS_WEIGHT,
            completeness_patterns: defaults::COMPLETENESS_PATTERN_WEIGHT,
            completeness_rules: defaults::COMPLETENESS_RULE_WEIGHT,
            completeness_research: defaults::COMPLETENESS_RESEARCH_WEIGHT,
            mandatory_rule_saturation: defaults::MANDATORY_RULE_SATURATION,
        }
    }
}
