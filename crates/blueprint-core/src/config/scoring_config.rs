use serde::{Deserialize, Serialize};

use super::defaults;

/// Relevance weights for patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternWeights {
    pub similarity: f64,
    pub success_rate: f64,
    pub usage: f64,
    /// Bonus for beginner/intermediate patterns.
    pub complexity: f64,
    /// Usage count at which the usage term saturates.
    pub usage_saturation: f64,
}

impl Default for PatternWeights {
    fn default() -> Self {
        Self {
            similarity: defaults::PATTERN_SIMILARITY_WEIGHT,
            success_rate: defaults::PATTERN_SUCCESS_WEIGHT,
            usage: defaults::PATTERN_USAGE_WEIGHT,
            complexity: defaults::PATTERN_COMPLEXITY_WEIGHT,
            usage_saturation: defaults::PATTERN_USAGE_SATURATION,
        }
    }
}

/// Relevance weights for rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWeights {
    pub similarity: f64,
    pub mandatory: f64,
    pub recommended: f64,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            similarity: defaults::RULE_SIMILARITY_WEIGHT,
            mandatory: defaults::RULE_MANDATORY_WEIGHT,
            recommended: defaults::RULE_RECOMMENDED_WEIGHT,
        }
    }
}

/// Relevance weights for research items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchWeights {
    pub similarity: f64,
    pub freshness: f64,
}

impl Default for ResearchWeights {
    fn default() -> Self {
        Self {
            similarity: defaults::RESEARCH_SIMILARITY_WEIGHT,
            freshness: defaults::RESEARCH_FRESHNESS_WEIGHT,
        }
    }
}

/// Per-kind relevance weights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub pattern: PatternWeights,
    pub rule: RuleWeights,
    pub research: ResearchWeights,
}
