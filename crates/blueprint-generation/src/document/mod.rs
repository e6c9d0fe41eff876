//! DocumentGenerator: an ordered list of (section, pure renderer) pairs.
//!
//! Only the header sees the generation timestamp. The body is a pure function
//! of the feature request, template, assembled context, and strictness, so
//! identical inputs always render identical bodies.

pub mod sections;

use std::fmt;

use blueprint_core::config::GenerationConfig;
use blueprint_core::models::{AssembledContext, Template, ValidationStrictness};
use chrono::{DateTime, SecondsFormat, Utc};

/// Everything a section renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct DocumentInput<'a> {
    pub feature_request: &'a str,
    pub template: &'a Template,
    pub context: &'a AssembledContext,
    pub strictness: ValidationStrictness,
}

/// Body sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Goal,
    Why,
    SuccessCriteria,
    ContextReferences,
    KnownGotchas,
    ImplementationBlueprint,
    ProjectRules,
    ValidationLoop,
    FinalChecklist,
    AntiPatterns,
    Provenance,
}

impl SectionId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Goal => "Goal",
            Self::Why => "Why",
            Self::SuccessCriteria => "What / Success Criteria",
            Self::ContextReferences => "Context & References",
            Self::KnownGotchas => "Known Gotchas",
            Self::ImplementationBlueprint => "Implementation Blueprint",
            Self::ProjectRules => "Project Rules",
            Self::ValidationLoop => "Validation Loop",
            Self::FinalChecklist => "Final Checklist",
            Self::AntiPatterns => "Anti-Patterns to Avoid",
            Self::Provenance => "Provenance",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A section renderer returns its body entries, without the heading.
pub type SectionFn = fn(&DocumentInput<'_>, &GenerationConfig) -> Vec<String>;

pub const SECTIONS: &[(SectionId, SectionFn)] = &[
    (SectionId::Goal, sections::goal),
    (SectionId::Why, sections::why),
    (SectionId::SuccessCriteria, sections::success_criteria),
    (SectionId::ContextReferences, sections::context_references),
    (SectionId::KnownGotchas, sections::known_gotchas),
    (SectionId::ImplementationBlueprint, sections::implementation_blueprint),
    (SectionId::ProjectRules, sections::project_rules),
    (SectionId::ValidationLoop, sections::validation_loop),
    (SectionId::FinalChecklist, sections::final_checklist),
    (SectionId::AntiPatterns, sections::anti_patterns),
    (SectionId::Provenance, sections::provenance),
];

/// A rendered guidance document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Header followed by body.
    pub text: String,
    /// Everything after the timestamp header.
    pub body: String,
    pub sections: Vec<String>,
}

impl RenderedDocument {
    /// blake3 hex digest of the body.
    pub fn body_hash(&self) -> String {
        blake3::hash(self.body.as_bytes()).to_hex().to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentGenerator {
    config: GenerationConfig,
}

impl DocumentGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Render the timestamp header and every body section.
    pub fn render(
        &self,
        input: &DocumentInput<'_>,
        generated_at: DateTime<Utc>,
    ) -> RenderedDocument {
        let body = self.render_body(input);
        let mut text = header(generated_at);
        text.push_str(&body);
        RenderedDocument {
            text,
            body,
            sections: SECTIONS.iter().map(|(id, _)| id.title().to_string()).collect(),
        }
    }

    /// The reproducible part of the document.
    pub fn render_body(&self, input: &DocumentInput<'_>) -> String {
        let mut lines = Vec::new();
        for (id, render) in SECTIONS {
            lines.push(format!("## {}", id.title()));
            lines.push(String::new());
            lines.extend(render(input, &self.config));
            lines.push(String::new());
        }
        let mut body = lines.join("\n");
        body.push('\n');
        body
    }
}

/// The only wall-clock dependent text in the document.
pub fn header(generated_at: DateTime<Utc>) -> String {
    format!(
        "# Feature Blueprint\n\n_Generated at {}_\n\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
