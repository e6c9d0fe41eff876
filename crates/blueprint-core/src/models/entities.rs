use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::levels::{ComplexityLevel, EnforcementLevel};

/// Observed outcome statistics for a pattern or template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessMetrics {
    /// Fraction of recorded uses that succeeded, in [0.0, 1.0].
    pub success_rate: f64,
    pub usage_count: u64,
}

impl SuccessMetrics {
    /// Create metrics, clamping the rate to [0.0, 1.0].
    pub fn new(success_rate: f64, usage_count: u64) -> Self {
        Self {
            success_rate: crate::scores::clamp_unit(success_rate),
            usage_count,
        }
    }

    /// The rate as published by scorers: clamped, NaN-safe.
    pub fn rate(&self) -> f64 {
        crate::scores::clamp_unit(self.success_rate)
    }
}

/// A previously recorded implementation pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    #[serde(default)]
    pub complexity: ComplexityLevel,
    #[serde(default)]
    pub metrics: SuccessMetrics,
    /// Ordered steps to reproduce the pattern.
    #[serde(default)]
    pub implementation_steps: Vec<String>,
    #[serde(default)]
    pub gotchas: Vec<String>,
    /// Files, URLs, or commits the pattern was extracted from.
    #[serde(default)]
    pub source_references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

/// A project rule the generated guidance must respect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    #[serde(default)]
    pub enforcement: EnforcementLevel,
    /// Lower values are more important within an enforcement level.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

/// A research note about a technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    /// How current the note is, in [0.0, 1.0].
    #[serde(default)]
    pub freshness_score: f64,
    #[serde(default)]
    pub documentation_refs: Vec<String>,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub common_pitfalls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl ResearchItem {
    pub fn freshness(&self) -> f64 {
        crate::scores::clamp_unit(self.freshness_score)
    }
}

/// A document template candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub feature_types: BTreeSet<String>,
    #[serde(default)]
    pub complexity: ComplexityLevel,
    #[serde(default)]
    pub metrics: SuccessMetrics,
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// The built-in template used when the store offers nothing suitable.
    pub fn builtin_default() -> Self {
        Self {
            id: crate::constants::DEFAULT_TEMPLATE_ID.to_string(),
            name: "Standard feature blueprint".to_string(),
            feature_types: BTreeSet::from(["general".to_string()]),
            complexity: ComplexityLevel::Intermediate,
            metrics: SuccessMetrics::new(0.5, 0),
            created_at: DateTime::<Utc>::default(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.id == crate::constants::DEFAULT_TEMPLATE_ID
    }
}
