// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_SUCCESS_RATE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_MAX_RESULTS_LIMIT: usize = 50;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_INCLUDE_RESEARCH: bool = true;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 1_000;
pub const DEFAULT_EMBEDDING_CACHE_TTL_SECS: u64 = 86_400;
pub const DEFAULT_EMBEDDING_CACHE_IDLE_SECS: u64 = 3_600;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 0; // 0 = accept provider dimensions

// --- Scoring: patterns ---
pub const PATTERN_SIMILARITY_WEIGHT: f64 = 0.4;
pub const PATTERN_SUCCESS_WEIGHT: f64 = 0.3;
pub const PATTERN_USAGE_WEIGHT: f64 = 0.2;
pub const PATTERN_COMPLEXITY_WEIGHT: f64 = 0.1;
pub const PATTERN_USAGE_SATURATION: f64 = 100.0;

// --- Scoring: rules ---
pub const RULE_SIMILARITY_WEIGHT: f64 = 0.5;
pub const RULE_MANDATORY_WEIGHT: f64 = 0.3;
pub const RULE_RECOMMENDED_WEIGHT: f64 = 0.2;

// --- Scoring: research ---
pub const RESEARCH_SIMILARITY_WEIGHT: f64 = 0.6;
pub const RESEARCH_FRESHNESS_WEIGHT: f64 = 0.4;

// --- Assembly ---
pub const MAX_SELECTED_PATTERNS: usize = 5;
pub const MAX_SELECTED_RESEARCH: usize = 3;
pub const BLEND_RELEVANCE_WEIGHT: f64 = 0.6;
pub const BLEND_SUCCESS_WEIGHT: f64 = 0.4;
pub const QUALITY_RELEVANCE_WEIGHT: f64 = 0.4;
pub const QUALITY_MANDATORY_WEIGHT: f64 = 0.3;
pub const QUALITY_FRESHNESS_WEIGHT: f64 = 0.2;
pub const QUALITY_COMPLETENESS_WEIGHT: f64 = 0.1;
pub const COMPLETENESS_PATTERN_WEIGHT: f64 = 0.4;
pub const COMPLETENESS_RULE_WEIGHT: f64 = 0.4;
pub const COMPLETENESS_RESEARCH_WEIGHT: f64 = 0.2;
pub const MANDATORY_RULE_SATURATION: f64 = 3.0;

// --- Templates ---
pub const TEMPLATE_SUCCESS_WEIGHT: f64 = 0.4;
pub const TEMPLATE_USAGE_WEIGHT: f64 = 0.2;
pub const TEMPLATE_OVERLAP_WEIGHT: f64 = 0.3;
pub const TEMPLATE_HIGH_PERFORMER_WEIGHT: f64 = 0.1;
pub const TEMPLATE_USAGE_SATURATION: f64 = 50.0;
pub const TEMPLATE_HIGH_PERFORMER_THRESHOLD: f64 = 0.9;

// --- Generation ---
pub const STANDARD_SUCCESS_THRESHOLD: f64 = 0.7;
pub const STRICT_SUCCESS_THRESHOLD: f64 = 0.9;
pub const SYNTAX_COMMAND: &str = "<syntax-and-style command>";
pub const UNIT_TEST_COMMAND: &str = "<unit test command>";
pub const INTEGRATION_COMMAND: &str = "<integration test command>";

// --- Confidence ---
pub const CONFIDENCE_TEMPLATE_WEIGHT: f64 = 0.2;
pub const CONFIDENCE_CONTEXT_WEIGHT: f64 = 0.3;
pub const CONFIDENCE_PATTERN_WEIGHT: f64 = 0.3;
pub const CONFIDENCE_RULE_WEIGHT: f64 = 0.15;
pub const CONFIDENCE_RESEARCH_WEIGHT: f64 = 0.05;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
