use serde::{Deserialize, Serialize};

use super::defaults;

/// Template compatibility weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub success_rate: f64,
    pub usage: f64,
    pub complexity_overlap: f64,
    pub high_performer: f64,
    pub usage_saturation: f64,
    /// A pattern at or above this rate earns the high-performer bonus.
    pub high_performer_threshold: f64,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            success_rate: defaults::TEMPLATE_SUCCESS_WEIGHT,
            usage: defaults::TEMPLATE_USAGE_WEIGHT,
            complexity_overlap: defaults::TEMPLATE_OVERLAP_WEIGHT,
            high_performer: defaults::TEMPLATE_HIGH_PERFORMER_WEIGHT,
            usage_saturation: defaults::TEMPLATE_USAGE_SATURATION,
            high_performer_threshold: defaults::TEMPLATE_HIGH_PERFORMER_THRESHOLD,
        }
    }
}
