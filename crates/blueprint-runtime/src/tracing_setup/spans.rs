//! Span definitions per operation.

/// Create a research span.
#[macro_export]
macro_rules! research_span {
    ($request_len:expr, $technologies:expr) => {
        tracing::info_span!(
            "blueprint.research",
            request_len = $request_len,
            technologies = ?$technologies
        )
    };
}

/// Create an assemble span.
#[macro_export]
macro_rules! assemble_span {
    ($complexity:expr, $strictness:expr) => {
        tracing::info_span!(
            "blueprint.assemble",
            complexity = %$complexity,
            strictness = %$strictness
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RESEARCH: &str = "blueprint.research";
    pub const ASSEMBLE: &str = "blueprint.assemble";
}
