use serde::{Deserialize, Serialize};

use super::entities::{Pattern, ResearchItem, Rule};
use super::levels::ComplexityLevel;
use super::scored::Scored;

/// A pattern that survived assembly, with its blended rank score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPattern {
    #[serde(flatten)]
    pub scored: Scored<Pattern>,
    /// `relevance` and `success_rate` blended, in [0.0, 1.0].
    pub blended_score: f64,
}

impl RankedPattern {
    pub fn pattern(&self) -> &Pattern {
        &self.scored.item
    }
}

/// Counters describing what assembly kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyMetadata {
    pub complexity_filter: ComplexityLevel,
    pub patterns_received: usize,
    pub patterns_excluded_by_complexity: usize,
    pub patterns_truncated: usize,
    pub rules_received: usize,
    pub research_received: usize,
    pub research_truncated: usize,
}

/// Ranked, capped knowledge ready for document generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssembledContext {
    pub selected_patterns: Vec<RankedPattern>,
    pub prioritized_rules: Vec<Scored<Rule>>,
    pub relevant_research: Vec<Scored<ResearchItem>>,
    pub context_quality_score: f64,
    pub metadata: AssemblyMetadata,
}

impl AssembledContext {
    pub fn mandatory_rule_count(&self) -> usize {
        self.prioritized_rules
            .iter()
            .filter(|r| r.item.enforcement == super::levels::EnforcementLevel::Mandatory)
            .count()
    }
}

/// Bounded sub-scores summarizing how trustworthy a document is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub template_confidence: f64,
    pub context_quality_score: f64,
    pub pattern_confidence: f64,
    pub rule_confidence: f64,
    pub research_confidence: f64,
    pub overall_confidence: f64,
}
