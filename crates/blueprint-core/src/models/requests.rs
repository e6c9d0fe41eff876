use serde::{Deserialize, Serialize};

use super::entities::{Pattern, ResearchItem, Rule};
use super::levels::{ComplexityLevel, ValidationStrictness};
use super::responses::ResearchSummary;
use super::scored::Scored;
use super::tags::normalize_tags;
use crate::config::defaults;
use crate::errors::{BlueprintError, BlueprintResult};

/// Arguments of the `research` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalQuery {
    pub feature_request: String,
    #[serde(default)]
    pub technology_stack: Vec<String>,
    #[serde(default = "default_threshold")]
    pub success_rate_threshold: f64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_include_research")]
    pub include_research: bool,
}

fn default_threshold() -> f64 {
    defaults::DEFAULT_SUCCESS_RATE_THRESHOLD
}

fn default_max_results() -> usize {
    defaults::DEFAULT_MAX_RESULTS
}

fn default_include_research() -> bool {
    defaults::DEFAULT_INCLUDE_RESEARCH
}

impl RetrievalQuery {
    pub fn new(feature_request: impl Into<String>) -> Self {
        Self {
            feature_request: feature_request.into(),
            technology_stack: Vec::new(),
            success_rate_threshold: default_threshold(),
            max_results: default_max_results(),
            include_research: default_include_research(),
        }
    }

    pub fn with_technologies<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.technology_stack = tags.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.success_rate_threshold = threshold;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_research(mut self, include: bool) -> Self {
        self.include_research = include;
        self
    }

    /// Normalized, deduplicated, sorted technology tags.
    pub fn technologies(&self) -> Vec<String> {
        normalize_tags(&self.technology_stack)
    }

    /// Reject malformed input before any external call is made.
    pub fn validate(&self, max_results_limit: usize) -> BlueprintResult<()> {
        validate_feature_request(&self.feature_request)?;
        let threshold = self.success_rate_threshold;
        if threshold.is_nan() || !(0.0..=1.0).contains(&threshold) {
            return Err(BlueprintError::validation(
                "success_rate_threshold",
                format!("must be in [0.0, 1.0], got {}", self.success_rate_threshold),
            ));
        }
        if self.max_results == 0 {
            return Err(BlueprintError::validation("max_results", "must be > 0"));
        }
        if self.max_results > max_results_limit {
            return Err(BlueprintError::validation(
                "max_results",
                format!("must be <= {max_results_limit}, got {}", self.max_results),
            ));
        }
        Ok(())
    }
}

/// The `research` output consumed by `assemble`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchResults {
    #[serde(default)]
    pub patterns: Vec<Scored<Pattern>>,
    #[serde(default)]
    pub rules: Vec<Scored<Rule>>,
    #[serde(default)]
    pub research: Vec<Scored<ResearchItem>>,
    #[serde(default)]
    pub summary: ResearchSummary,
}

/// Arguments of the `assemble` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembleRequest {
    pub feature_request: String,
    pub research_results: ResearchResults,
    #[serde(default)]
    pub template_preferences: Vec<String>,
    #[serde(default)]
    pub complexity_preference: ComplexityLevel,
    #[serde(default)]
    pub validation_strictness: ValidationStrictness,
}

impl AssembleRequest {
    pub fn new(feature_request: impl Into<String>, research_results: ResearchResults) -> Self {
        Self {
            feature_request: feature_request.into(),
            research_results,
            template_preferences: Vec::new(),
            complexity_preference: ComplexityLevel::default(),
            validation_strictness: ValidationStrictness::default(),
        }
    }

    pub fn with_template_preferences<S: AsRef<str>>(mut self, prefs: &[S]) -> Self {
        self.template_preferences = prefs.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityLevel) -> Self {
        self.complexity_preference = complexity;
        self
    }

    pub fn with_strictness(mut self, strictness: ValidationStrictness) -> Self {
        self.validation_strictness = strictness;
        self
    }

    pub fn validate(&self) -> BlueprintResult<()> {
        validate_feature_request(&self.feature_request)?;
        let bad_score = self
            .research_results
            .patterns
            .iter()
            .map(|p| p.relevance_score)
            .chain(self.research_results.rules.iter().map(|r| r.relevance_score))
            .chain(self.research_results.research.iter().map(|r| r.relevance_score))
            .find(|s| s.is_nan());
        if bad_score.is_some() {
            return Err(BlueprintError::validation(
                "research_results",
                "relevance_score must be a number",
            ));
        }
        Ok(())
    }
}

fn validate_feature_request(feature_request: &str) -> BlueprintResult<()> {
    if feature_request.trim().is_empty() {
        return Err(BlueprintError::validation(
            "feature_request",
            "must not be empty",
        ));
    }
    Ok(())
}
