//! # blueprint-runtime
//!
//! Owns the collaborator handles for the life of the process and exposes the
//! two operations, `research` and `assemble`, to a transport layer as JSON in,
//! JSON out. Failures leave as [`ToolFailure`] values with a probable cause
//! and a remediation hint.

pub mod errors;
pub mod ops;
pub mod runtime;
pub mod tracing_setup;

pub use errors::{to_tool_failure, FailureKind, ToolFailure};
pub use ops::{assemble_json, research_json};
pub use runtime::{get, initialize, is_initialized, BlueprintRuntime, RuntimeOptions};
