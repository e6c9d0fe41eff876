//! Entity model, transient pipeline values, and request/response shapes.

mod context;
mod degradation_event;
mod entities;
mod entity;
mod levels;
mod requests;
mod responses;
mod scored;
mod tags;

pub use context::{AssembledContext, AssemblyMetadata, ConfidenceMetrics, RankedPattern};
pub use degradation_event::DegradationEvent;
pub use entities::{Pattern, ResearchItem, Rule, SuccessMetrics, Template};
pub use entity::{Entity, EntityKind};
pub use levels::{ComplexityLevel, EnforcementLevel, ValidationStrictness};
pub use requests::{AssembleRequest, ResearchResults, RetrievalQuery};
pub use responses::{
    AssembleMetadata, AssembleResponse, ResearchMetadata, ResearchResponse, ResearchSummary,
    TemplateChoice,
};
pub use scored::Scored;
pub use tags::{normalize_tag, normalize_tags};
