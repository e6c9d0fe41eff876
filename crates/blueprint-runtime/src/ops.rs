//! JSON entry points for a transport layer.
//!
//! Omitted `research` arguments take the runtime's configured defaults; omitted
//! `assemble` arguments take the documented enum defaults. Malformed input is a
//! validation failure.

use blueprint_core::errors::BlueprintError;
use blueprint_core::models::{AssembleRequest, RetrievalQuery};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::{to_tool_failure, ToolFailure};
use crate::runtime::{self, BlueprintRuntime};

/// Raw `research` arguments before runtime defaults are applied.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResearchArgs {
    feature_request: String,
    #[serde(default)]
    technology_stack: Vec<String>,
    success_rate_threshold: Option<f64>,
    max_results: Option<usize>,
    include_research: Option<bool>,
}

fn parse<T: DeserializeOwned>(value: Value) -> Result<T, BlueprintError> {
    serde_json::from_value(value).map_err(|e| BlueprintError::validation("request", e.to_string()))
}

fn encode<T: Serialize>(response: &T) -> Result<Value, BlueprintError> {
    serde_json::to_value(response).map_err(|e| BlueprintError::Serialization(e.to_string()))
}

fn fail(err: BlueprintError) -> ToolFailure {
    let failure = to_tool_failure(&err);
    warn!(kind = %failure.kind, error = %err, "request failed");
    failure
}

impl BlueprintRuntime {
    pub async fn research_value(&self, args: Value) -> Result<Value, ToolFailure> {
        let args: ResearchArgs = parse(args).map_err(fail)?;
        let defaults = &self.config.retrieval;
        let query = RetrievalQuery {
            feature_request: args.feature_request,
            technology_stack: args.technology_stack,
            success_rate_threshold: args
                .success_rate_threshold
                .unwrap_or(defaults.default_success_rate_threshold),
            max_results: args.max_results.unwrap_or(defaults.default_max_results),
            include_research: args.include_research.unwrap_or(defaults.include_research),
        };
        let response = self.research(&query).await.map_err(fail)?;
        encode(&response).map_err(fail)
    }

    pub async fn assemble_value(&self, args: Value) -> Result<Value, ToolFailure> {
        let request: AssembleRequest = parse(args).map_err(fail)?;
        let response = self.assemble(&request).await.map_err(fail)?;
        encode(&response).map_err(fail)
    }
}

/// `research` against the global runtime.
pub async fn research_json(args: Value) -> Result<Value, ToolFailure> {
    let rt = runtime::get().map_err(fail)?;
    rt.research_value(args).await
}

/// `assemble` against the global runtime.
pub async fn assemble_json(args: Value) -> Result<Value, ToolFailure> {
    let rt = runtime::get().map_err(fail)?;
    rt.assemble_value(args).await
}
