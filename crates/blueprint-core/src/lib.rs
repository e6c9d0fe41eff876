//! # blueprint-core
//!
//! Foundation crate for the Blueprint guidance engine.
//! Defines the entity model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod scores;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BlueprintConfig;
pub use errors::{BlueprintError, BlueprintResult};
pub use models::{
    ComplexityLevel, EnforcementLevel, EntityKind, Pattern, ResearchItem, Rule, Scored,
    SuccessMetrics, Template, ValidationStrictness,
};
