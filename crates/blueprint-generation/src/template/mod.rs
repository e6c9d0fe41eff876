//! Template selection by compatibility with the assembled context.

mod selector;

pub use selector::{compatibility, TemplateSelection, TemplateSelector};
