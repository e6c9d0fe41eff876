use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::context::{AssembledContext, ConfidenceMetrics};
use super::degradation_event::DegradationEvent;
use super::entities::{Pattern, ResearchItem, Rule};
use super::entity::EntityKind;
use super::levels::{ComplexityLevel, ValidationStrictness};
use super::requests::ResearchResults;
use super::scored::Scored;

/// Aggregate statistics over a `research` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSummary {
    pub pattern_count: usize,
    pub rule_count: usize,
    pub research_count: usize,
    pub mandatory_rule_count: usize,
    pub average_pattern_relevance: f64,
    pub average_rule_relevance: f64,
    pub average_research_relevance: f64,
    pub average_success_rate: f64,
    pub average_freshness: f64,
    /// Always carries all three levels.
    pub complexity_distribution: BTreeMap<ComplexityLevel, usize>,
}

impl Default for ResearchSummary {
    fn default() -> Self {
        Self {
            pattern_count: 0,
            rule_count: 0,
            research_count: 0,
            mandatory_rule_count: 0,
            average_pattern_relevance: 0.0,
            average_rule_relevance: 0.0,
            average_research_relevance: 0.0,
            average_success_rate: 0.0,
            average_freshness: 0.0,
            complexity_distribution: ComplexityLevel::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

/// Bookkeeping attached to a `research` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchMetadata {
    pub request_id: String,
    pub technology_filter: Vec<String>,
    pub success_rate_threshold: f64,
    pub max_results: usize,
    pub include_research: bool,
    pub embedding_dimensions: usize,
    pub embedding_cached: bool,
    /// Kinds served by the plain query instead of similarity search.
    pub fallback_kinds: Vec<EntityKind>,
    /// Kinds whose store failed outright; their lists are empty.
    pub failed_kinds: Vec<EntityKind>,
    pub warnings: Vec<String>,
    pub degradations: Vec<DegradationEvent>,
    pub engine_version: String,
}

/// Result of the `research` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub patterns: Vec<Scored<Pattern>>,
    pub rules: Vec<Scored<Rule>>,
    pub research: Vec<Scored<ResearchItem>>,
    pub summary: ResearchSummary,
    /// Follow-up steps the calling assistant should still perform.
    pub guidance: Vec<String>,
    pub metadata: ResearchMetadata,
}

impl ResearchResponse {
    /// The part of the response `assemble` consumes.
    pub fn into_results(self) -> ResearchResults {
        ResearchResults {
            patterns: self.patterns,
            rules: self.rules,
            research: self.research,
            summary: self.summary,
        }
    }
}

/// Which template rendered the document, and how well it fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateChoice {
    pub template_id: String,
    pub template_name: String,
    pub compatibility_score: f64,
    pub is_default: bool,
    pub candidates_considered: usize,
}

/// Bookkeeping attached to an `assemble` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembleMetadata {
    pub generated_at: DateTime<Utc>,
    /// blake3 hex digest of the document body (timestamp header excluded).
    pub document_hash: String,
    pub complexity_preference: ComplexityLevel,
    pub validation_strictness: ValidationStrictness,
    pub template_preferences: Vec<String>,
    pub sections: Vec<String>,
    pub warnings: Vec<String>,
    pub degradations: Vec<DegradationEvent>,
    pub engine_version: String,
}

/// Result of the `assemble` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembleResponse {
    pub document_text: String,
    pub template_used: TemplateChoice,
    pub assembled_context: AssembledContext,
    pub confidence_metrics: ConfidenceMetrics,
    pub metadata: AssembleMetadata,
}
