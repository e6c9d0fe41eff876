use super::{EmbeddingError, StoreError};

/// Workspace-wide result alias.
pub type BlueprintResult<T> = Result<T, BlueprintError>;

/// Top-level error. Only `Embedding` and `Validation` reach callers of the
/// two public operations; store failures are absorbed into response metadata.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl BlueprintError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::Embedding(_))
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Short description of the most likely cause, phrased for an end user.
    pub fn probable_cause(&self) -> String {
        match self {
            Self::Validation { field, reason } => format!("the `{field}` argument {reason}"),
            Self::Embedding(EmbeddingError::AuthenticationFailed { provider, .. }) => {
                format!("missing or invalid credentials for the {provider} embedding provider")
            }
            Self::Embedding(EmbeddingError::QuotaExceeded { provider }) => {
                format!("the {provider} embedding quota is exhausted")
            }
            Self::Embedding(EmbeddingError::Timeout { provider, .. })
            | Self::Embedding(EmbeddingError::ProviderUnavailable { provider, .. }) => {
                format!("the {provider} embedding provider could not be reached")
            }
            Self::Embedding(EmbeddingError::DimensionMismatch { .. }) => {
                "the embedding model does not match the configured dimensions".to_string()
            }
            Self::Embedding(EmbeddingError::InferenceFailed { .. }) => {
                "the embedding provider rejected the request".to_string()
            }
            Self::Store(_) => "the knowledge store could not be queried".to_string(),
            Self::ConfigError(_) => "the configuration file is invalid".to_string(),
            Self::Serialization(_) => "the request or response could not be encoded".to_string(),
            Self::Runtime(_) => "the engine is not initialized".to_string(),
        }
    }

    /// The action a user should take to recover.
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "correct the argument and retry the request",
            Self::Embedding(EmbeddingError::AuthenticationFailed { .. }) => {
                "set a valid API key for the embedding provider and retry"
            }
            Self::Embedding(EmbeddingError::QuotaExceeded { .. }) => {
                "wait for the quota window to reset or raise the plan limit"
            }
            Self::Embedding(EmbeddingError::Timeout { .. })
            | Self::Embedding(EmbeddingError::ProviderUnavailable { .. }) => {
                "check network connectivity to the embedding provider and retry"
            }
            Self::Embedding(EmbeddingError::DimensionMismatch { .. }) => {
                "align `embedding.dimensions` with the model that populated the store"
            }
            Self::Embedding(EmbeddingError::InferenceFailed { .. }) => {
                "shorten or simplify the feature description and retry"
            }
            Self::Store(_) => "check that the knowledge store is running and reachable",
            Self::ConfigError(_) => "fix the reported configuration fields and restart",
            Self::Serialization(_) => "send well-formed JSON matching the documented arguments",
            Self::Runtime(_) => "initialize the runtime before issuing requests",
        }
    }
}
