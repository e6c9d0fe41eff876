//! # blueprint-generation
//!
//! The `assemble` half of the pipeline:
//! assemble context → select template → render document → score confidence.
//! Everything except the template store read and the clock is pure.

pub mod confidence;
pub mod document;
pub mod engine;
pub mod template;

pub use document::{DocumentGenerator, DocumentInput, RenderedDocument, SectionId};
pub use engine::AssemblyEngine;
pub use template::{compatibility, TemplateSelection, TemplateSelector};
