/// Blueprint engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the built-in template used when no stored template qualifies.
pub const DEFAULT_TEMPLATE_ID: &str = "builtin-default";

/// Environment variable read by the tracing filter.
pub const LOG_ENV_VAR: &str = "BLUEPRINT_LOG";
