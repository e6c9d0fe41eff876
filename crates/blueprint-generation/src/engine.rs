//! AssemblyEngine: implements the `assemble` operation.
//!
//! Step 1: Validate the request
//! Step 2: Assemble the context from the caller's research results
//! Step 3: Select a template (store failures fall back to the built-in default)
//! Step 4: Render the document, hash its body, score confidence

use std::time::Duration;

use blueprint_core::config::{
    AssemblyConfig, BlueprintConfig, ConfidenceConfig, GenerationConfig, TemplateConfig,
};
use blueprint_core::constants::VERSION;
use blueprint_core::errors::{BlueprintResult, StoreError};
use blueprint_core::models::{
    AssembleMetadata, AssembleRequest, AssembleResponse, DegradationEvent, Template,
};
use blueprint_core::traits::{Clock, ITemplateStore};
use blueprint_retrieval::ContextAssembler;
use tracing::{info, warn};

use crate::confidence;
use crate::document::{DocumentGenerator, DocumentInput};
use crate::template::TemplateSelector;

/// Entry point for `assemble`. Borrows the template store and clock.
pub struct AssemblyEngine<'a> {
    templates: &'a dyn ITemplateStore,
    clock: &'a dyn Clock,
    assembler: ContextAssembler,
    selector: TemplateSelector,
    generator: DocumentGenerator,
    confidence: ConfidenceConfig,
    mandatory_saturation: f64,
    store_timeout: Duration,
}

impl<'a> AssemblyEngine<'a> {
    pub fn new(
        templates: &'a dyn ITemplateStore,
        clock: &'a dyn Clock,
        config: &BlueprintConfig,
    ) -> Self {
        Self::with_sections(
            templates,
            clock,
            config.assembly.clone(),
            config.templates.clone(),
            config.generation.clone(),
            config.confidence.clone(),
            Duration::from_millis(config.retrieval.store_timeout_ms),
        )
    }

    pub fn with_sections(
        templates: &'a dyn ITemplateStore,
        clock: &'a dyn Clock,
        assembly: AssemblyConfig,
        template: TemplateConfig,
        generation: GenerationConfig,
        confidence: ConfidenceConfig,
        store_timeout: Duration,
    ) -> Self {
        Self {
            templates,
            clock,
            mandatory_saturation: assembly.mandatory_rule_saturation,
            assembler: ContextAssembler::new(assembly),
            selector: TemplateSelector::new(template),
            generator: DocumentGenerator::new(generation),
            confidence,
            store_timeout,
        }
    }

    pub async fn assemble(&self, request: &AssembleRequest) -> BlueprintResult<AssembleResponse> {
        // Step 1: Validate.
        request.validate()?;

        // Step 2: Context.
        let context = self
            .assembler
            .assemble(&request.research_results, request.complexity_preference);

        let mut warnings = Vec::new();
        let mut degradations = Vec::new();
        if context.metadata.patterns_received > 0 && context.selected_patterns.is_empty() {
            warnings.push(format!(
                "all {} patterns were excluded by the {} complexity preference",
                context.metadata.patterns_received, request.complexity_preference
            ));
        }

        // Step 3: Template.
        let templates = match self.load_templates().await {
            Ok(templates) => templates,
            Err(e) => {
                warn!(error = %e, "template store failed, using built-in default");
                warnings.push(format!("template store failed ({e}); built-in template used"));
                degradations.push(DegradationEvent::new(
                    "generation.templates",
                    e.to_string(),
                    "builtin_default",
                ));
                Vec::new()
            }
        };
        let selection = self.selector.select(
            &templates,
            &request.template_preferences,
            &context.selected_patterns,
        );
        if selection.choice.is_default && !templates.is_empty() {
            warnings.push(
                "no stored template matched the requested types; built-in template used"
                    .to_string(),
            );
        }

        // Step 4: Render and score.
        let generated_at = self.clock.now();
        let document = self.generator.render(
            &DocumentInput {
                feature_request: &request.feature_request,
                template: &selection.template,
                context: &context,
                strictness: request.validation_strictness,
            },
            generated_at,
        );
        let confidence_metrics = confidence::calculate(
            selection.choice.compatibility_score,
            &context,
            &self.confidence,
            self.mandatory_saturation,
        );

        info!(
            template = %selection.choice.template_id,
            patterns = context.selected_patterns.len(),
            rules = context.prioritized_rules.len(),
            research = context.relevant_research.len(),
            confidence = confidence_metrics.overall_confidence,
            "assemble complete"
        );

        Ok(AssembleResponse {
            metadata: AssembleMetadata {
                generated_at,
                document_hash: document.body_hash(),
                complexity_preference: request.complexity_preference,
                validation_strictness: request.validation_strictness,
                template_preferences: request.template_preferences.clone(),
                sections: document.sections,
                warnings,
                degradations,
                engine_version: VERSION.to_string(),
            },
            document_text: document.text,
            template_used: selection.choice,
            assembled_context: context,
            confidence_metrics,
        })
    }

    async fn load_templates(&self) -> BlueprintResult<Vec<Template>> {
        tokio::time::timeout(self.store_timeout, self.templates.list_templates())
            .await
            .map_err(|_| StoreError::TemplateStore {
                reason: format!("timed out after {}ms", self.store_timeout.as_millis()),
            })?
    }
}
