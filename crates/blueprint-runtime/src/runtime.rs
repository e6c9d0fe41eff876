//! BlueprintRuntime: owns the collaborator handles and config.
//!
//! The runtime is a singleton stored behind `OnceLock`. It's initialized once
//! via `initialize()` and accessed via `get()` for the lifetime of the process.

use std::sync::{Arc, OnceLock};

use blueprint_core::config::BlueprintConfig;
use blueprint_core::errors::{BlueprintError, BlueprintResult};
use blueprint_core::models::{
    AssembleRequest, AssembleResponse, Pattern, ResearchItem, ResearchResponse, RetrievalQuery,
    Rule,
};
use blueprint_core::traits::{Clock, IEmbeddingProvider, IEntityStore, ITemplateStore, SystemClock};
use blueprint_embeddings::QueryEmbedder;
use blueprint_generation::AssemblyEngine;
use blueprint_retrieval::{KnowledgeStores, ResearchEngine};
use tracing::{info, Instrument};

/// Global singleton.
static RUNTIME: OnceLock<Arc<BlueprintRuntime>> = OnceLock::new();

/// Options for initializing the runtime. Collaborators are required; config
/// and clock default.
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    pub embedder: Arc<dyn IEmbeddingProvider>,
    pub pattern_store: Arc<dyn IEntityStore<Pattern>>,
    pub rule_store: Arc<dyn IEntityStore<Rule>>,
    pub research_store: Arc<dyn IEntityStore<ResearchItem>>,
    pub template_store: Arc<dyn ITemplateStore>,
    /// If None, uses the system clock.
    pub clock: Option<Arc<dyn Clock>>,
}

impl RuntimeOptions {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        pattern_store: Arc<dyn IEntityStore<Pattern>>,
        rule_store: Arc<dyn IEntityStore<Rule>>,
        research_store: Arc<dyn IEntityStore<ResearchItem>>,
        template_store: Arc<dyn ITemplateStore>,
    ) -> Self {
        Self {
            config_toml: None,
            embedder,
            pattern_store,
            rule_store,
            research_store,
            template_store,
            clock: None,
        }
    }

    pub fn with_config_toml(mut self, toml: impl Into<String>) -> Self {
        self.config_toml = Some(toml.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }
}

/// The process-wide engine state. Read-only after construction.
pub struct BlueprintRuntime {
    pub config: BlueprintConfig,
    embedder: QueryEmbedder,
    pattern_store: Arc<dyn IEntityStore<Pattern>>,
    rule_store: Arc<dyn IEntityStore<Rule>>,
    research_store: Arc<dyn IEntityStore<ResearchItem>>,
    template_store: Arc<dyn ITemplateStore>,
    clock: Arc<dyn Clock>,
}

impl BlueprintRuntime {
    /// Build a runtime. An unparsable or invalid config is refused.
    pub fn new(opts: RuntimeOptions) -> BlueprintResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => BlueprintConfig::from_toml(toml_str)
                .map_err(|e| BlueprintError::ConfigError(e.to_string()))?,
            None => BlueprintConfig::default(),
        };

        let problems = config.validate();
        if !problems.is_empty() {
            let joined = problems
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BlueprintError::ConfigError(joined));
        }

        let embedder = QueryEmbedder::new(opts.embedder, config.embedding.clone());
        info!(provider = embedder.provider_name(), "blueprint runtime ready");

        Ok(Self {
            embedder,
            pattern_store: opts.pattern_store,
            rule_store: opts.rule_store,
            research_store: opts.research_store,
            template_store: opts.template_store,
            clock: opts.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            config,
        })
    }

    pub async fn research(&self, query: &RetrievalQuery) -> BlueprintResult<ResearchResponse> {
        let span = crate::research_span!(query.feature_request.len(), query.technologies());
        let engine = ResearchEngine::new(
            &self.embedder,
            KnowledgeStores {
                patterns: self.pattern_store.as_ref(),
                rules: self.rule_store.as_ref(),
                research: self.research_store.as_ref(),
            },
            self.config.retrieval.clone(),
            self.config.scoring.clone(),
        );
        engine.research(query).instrument(span).await
    }

    pub async fn assemble(&self, request: &AssembleRequest) -> BlueprintResult<AssembleResponse> {
        let span = crate::assemble_span!(
            request.complexity_preference,
            request.validation_strictness
        );
        let engine = AssemblyEngine::new(
            self.template_store.as_ref(),
            self.clock.as_ref(),
            &self.config,
        );
        engine.assemble(request).instrument(span).await
    }

    /// Number of query vectors currently cached.
    pub fn cached_embeddings(&self) -> u64 {
        self.embedder.cached_entries()
    }
}

/// Initialize the global BlueprintRuntime singleton.
///
/// Returns an error if already initialized or if initialization fails.
pub fn initialize(opts: RuntimeOptions) -> BlueprintResult<()> {
    if is_initialized() {
        return Err(BlueprintError::Runtime(
            "BlueprintRuntime already initialized".to_string(),
        ));
    }
    let runtime = BlueprintRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| BlueprintError::Runtime("BlueprintRuntime already initialized".to_string()))
}

/// Get a reference to the global BlueprintRuntime.
///
/// Returns an error if not yet initialized.
pub fn get() -> BlueprintResult<Arc<BlueprintRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| BlueprintError::Runtime("BlueprintRuntime not initialized".to_string()))
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
