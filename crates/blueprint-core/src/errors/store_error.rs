use crate::models::EntityKind;

/// Entity and template store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The similarity index is missing or not ready. Always recovered locally.
    #[error("similarity search unavailable for {kind}: {reason}")]
    CapabilityUnavailable { kind: EntityKind, reason: String },

    #[error("{kind} store query timed out after {timeout_ms}ms")]
    Timeout { kind: EntityKind, timeout_ms: u64 },

    #[error("{kind} store unreachable: {reason}")]
    Unreachable { kind: EntityKind, reason: String },

    #[error("{kind} store query failed: {reason}")]
    QueryFailed { kind: EntityKind, reason: String },

    #[error("template store failed: {reason}")]
    TemplateStore { reason: String },
}

impl StoreError {
    /// Whether a similarity query failing this way should degrade to the plain query.
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::CapabilityUnavailable { .. } | StoreError::Timeout { .. }
        )
    }
}
