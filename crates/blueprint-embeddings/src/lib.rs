//! # blueprint-embeddings
//!
//! Turns a feature request into a query vector through the external
//! Embedding Provider. Provider failures and timeouts are fatal to the request.

pub mod cache;
pub mod engine;

pub use engine::{EmbeddedQuery, QueryEmbedder};
