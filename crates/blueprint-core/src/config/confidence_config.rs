use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the overall confidence sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub template: f64,
    pub context: f64,
    pub pattern: f64,
    pub rule: f64,
    pub research: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            template: defaults::CONFIDENCE_TEMPLATE_WEIGHT,
            context: defaults::CONFIDENCE_CONTEXT_WEIGHT,
            pattern: defaults::CONFIDENCE_PATTERN_WEIGHT,
            rule: defaults::CONFIDENCE_RULE_WEIGHT,
            research: defaults::CONFIDENCE_RESEARCH_WEIGHT,
        }
    }
}
