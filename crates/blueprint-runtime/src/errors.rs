//! User-facing failures. Never a debug dump: a kind, a message, the probable
//! cause, and what to do about it.

use std::fmt;

use blueprint_core::errors::BlueprintError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Malformed or missing input; nothing external was called.
    Validation,
    /// The embedding provider failed; the request was aborted.
    Provider,
    /// The runtime is misconfigured or not initialized.
    Configuration,
    Internal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Validation => "validation",
            Self::Provider => "provider",
            Self::Configuration => "configuration",
            Self::Internal => "internal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind} failure: {message} (probable cause: {probable_cause}; {remediation})")]
pub struct ToolFailure {
    pub kind: FailureKind,
    pub message: String,
    pub probable_cause: String,
    pub remediation: String,
}

pub fn to_tool_failure(err: &BlueprintError) -> ToolFailure {
    let kind = match err {
        BlueprintError::Validation { .. } | BlueprintError::Serialization(_) => {
            FailureKind::Validation
        }
        BlueprintError::Embedding(_) => FailureKind::Provider,
        BlueprintError::ConfigError(_) | BlueprintError::Runtime(_) => FailureKind::Configuration,
        BlueprintError::Store(_) => FailureKind::Internal,
    };
    ToolFailure {
        kind,
        message: err.to_string(),
        probable_cause: err.probable_cause(),
        remediation: err.remediation().to_string(),
    }
}

impl From<BlueprintError> for ToolFailure {
    fn from(err: BlueprintError) -> Self {
        to_tool_failure(&err)
    }
}
