//! Collaborator interfaces. Handles are constructed once at startup and
//! injected by reference, so tests substitute in-memory fakes.

mod clock;
mod embedding;
mod entity_store;
mod template_store;

pub use clock::{Clock, SystemClock};
pub use embedding::IEmbeddingProvider;
pub use entity_store::{EntityFilter, IEntityStore};
pub use template_store::ITemplateStore;
