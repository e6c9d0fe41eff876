//! # blueprint-retrieval
//!
//! The `research` half of the pipeline:
//! embed → {patterns, rules, research} retrieved concurrently → score → summarize.
//! Also hosts the context assembler consumed by `assemble`.

pub mod assembly;
pub mod engine;
pub mod ranking;
pub mod research;
pub mod search;

pub use assembly::ContextAssembler;
pub use engine::ResearchEngine;
pub use search::{HybridRetriever, KnowledgeStores, RetrievalOutcome};
