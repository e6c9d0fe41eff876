//! overall = w_t*template + w_c*context_quality + w_p*pattern + w_r*rule + w_res*research
//!
//! Each term is clamped to [0, 1] before weighting; the sum is clamped and
//! rounded to two decimals.

use blueprint_core::config::ConfidenceConfig;
use blueprint_core::models::{AssembledContext, ConfidenceMetrics};
use blueprint_core::scores::{clamp_unit, mean, saturate, unit_score};

/// Score how much the assembled guidance can be trusted.
///
/// `mandatory_saturation` is the mandatory-rule count at which rule confidence
/// reaches 1.0.
pub fn calculate(
    template_confidence: f64,
    context: &AssembledContext,
    weights: &ConfidenceConfig,
    mandatory_saturation: f64,
) -> ConfidenceMetrics {
    let template_confidence = unit_score(template_confidence);
    let context_quality_score = unit_score(context.context_quality_score);
    let pattern_confidence = unit_score(mean(
        context.selected_patterns.iter().map(|p| p.pattern().metrics.rate()),
    ));
    let rule_confidence = unit_score(saturate(
        context.mandatory_rule_count() as f64,
        mandatory_saturation,
    ));
    let research_confidence = unit_score(mean(
        context.relevant_research.iter().map(|r| r.item.freshness()),
    ));

    let overall = weights.template * clamp_unit(template_confidence)
        + weights.context * clamp_unit(context_quality_score)
        + weights.pattern * clamp_unit(pattern_confidence)
        + weights.rule * clamp_unit(rule_confidence)
        + weights.research * clamp_unit(research_confidence);

    ConfidenceMetrics {
        template_confidence,
        context_quality_score,
        pattern_confidence,
        rule_confidence,
        research_confidence,
        overall_confidence: unit_score(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_leaves_template_term_only() {
        let context = AssembledContext::default();
        let metrics = calculate(0.5, &context, &ConfidenceConfig::default(), 3.0);
        assert_eq!(metrics.pattern_confidence, 0.0);
        assert_eq!(metrics.rule_confidence, 0.0);
        assert_eq!(metrics.research_confidence, 0.0);
        assert_eq!(metrics.overall_confidence, 0.1);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let context = AssembledContext {
            context_quality_score: 7.0,
            ..Default::default()
        };
        let metrics = calculate(-3.0, &context, &ConfidenceConfig::default(), 3.0);
        assert_eq!(metrics.template_confidence, 0.0);
        assert_eq!(metrics.context_quality_score, 1.0);
        assert_eq!(metrics.overall_confidence, 0.3);
    }
}
