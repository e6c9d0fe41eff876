//! compatibility = w_rate*success_rate + w_usage*min(usage/sat, 1)
//!               + w_overlap*complexity_overlap + w_hp*[any pattern >= threshold]

use blueprint_core::config::TemplateConfig;
use blueprint_core::models::{
    normalize_tag, normalize_tags, RankedPattern, Template, TemplateChoice,
};
use blueprint_core::scores::{desc, saturate, unit_score};
use tracing::debug;

/// Share of assembled patterns whose complexity equals the template's. 0 with no patterns.
fn complexity_overlap(template: &Template, patterns: &[RankedPattern]) -> f64 {
    if patterns.is_empty() {
        return 0.0;
    }
    let matching = patterns
        .iter()
        .filter(|p| p.pattern().complexity == template.complexity)
        .count();
    matching as f64 / patterns.len() as f64
}

pub fn compatibility(
    template: &Template,
    patterns: &[RankedPattern],
    config: &TemplateConfig,
) -> f64 {
    let high_performer = patterns
        .iter()
        .any(|p| p.pattern().metrics.rate() >= config.high_performer_threshold);
    unit_score(
        config.success_rate * template.metrics.rate()
            + config.usage * saturate(template.metrics.usage_count as f64, config.usage_saturation)
            + config.complexity_overlap * complexity_overlap(template, patterns)
            + config.high_performer * if high_performer { 1.0 } else { 0.0 },
    )
}

/// The chosen template and the public description of the choice.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSelection {
    pub template: Template,
    pub choice: TemplateChoice,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateSelector {
    config: TemplateConfig,
}

impl TemplateSelector {
    pub fn new(config: TemplateConfig) -> Self {
        Self { config }
    }

    /// Pick the most compatible template among those matching `preferences`
    /// (all templates when no preference is given). Ties go to the newest
    /// template, then the smallest id. Falls back to the built-in default.
    pub fn select(
        &self,
        templates: &[Template],
        preferences: &[String],
        patterns: &[RankedPattern],
    ) -> TemplateSelection {
        let wanted = normalize_tags(preferences);
        let candidates: Vec<&Template> = templates
            .iter()
            .filter(|t| {
                wanted.is_empty()
                    || t.feature_types
                        .iter()
                        .any(|ft| wanted.contains(&normalize_tag(ft)))
            })
            .collect();

        let best = candidates
            .iter()
            .map(|t| (*t, compatibility(t, patterns, &self.config)))
            .min_by(|(a, sa), (b, sb)| {
                desc(*sa, *sb)
                    .then_with(|| b.created_at.cmp(&a.created_at))
                    .then_with(|| a.id.cmp(&b.id))
            });

        let (template, score, is_default) = match best {
            Some((t, score)) => (t.clone(), score, false),
            None => {
                let fallback = Template::builtin_default();
                let score = compatibility(&fallback, &[], &self.config);
                (fallback, score, true)
            }
        };

        debug!(
            template = %template.id,
            score,
            candidates = candidates.len(),
            is_default,
            "template selected"
        );

        TemplateSelection {
            choice: TemplateChoice {
                template_id: template.id.clone(),
                template_name: template.name.clone(),
                compatibility_score: score,
                is_default,
                candidates_considered: candidates.len(),
            },
            template,
        }
    }
}
