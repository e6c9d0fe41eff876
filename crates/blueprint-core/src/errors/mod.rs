//! Error taxonomy: one top-level enum plus one enum per collaborator.

mod blueprint_error;
mod embedding_error;
mod store_error;

pub use blueprint_error::{BlueprintError, BlueprintResult};
pub use embedding_error::EmbeddingError;
pub use store_error::StoreError;
