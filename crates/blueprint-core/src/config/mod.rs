//! Layered TOML configuration. Every section defaults independently, so an
//! empty document yields a fully usable config.

mod assembly_config;
mod confidence_config;
pub mod defaults;
mod embedding_config;
mod generation_config;
mod observability_config;
mod retrieval_config;
mod scoring_config;
mod template_config;
mod validation;

use serde::{Deserialize, Serialize};

pub use assembly_config::AssemblyConfig;
pub use confidence_config::ConfidenceConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use scoring_config::{PatternWeights, ResearchWeights, RuleWeights, ScoringConfig};
pub use template_config::TemplateConfig;
pub use validation::ConfigValidationError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub scoring: ScoringConfig,
    pub assembly: AssemblyConfig,
    pub templates: TemplateConfig,
    pub generation: GenerationConfig,
    pub confidence: ConfidenceConfig,
    pub observability: ObservabilityConfig,
}

impl BlueprintConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Every invalid field, or an empty list.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        validation::validate(self)
    }
}
