//! Context quality:
//! w_rel*avg(pattern relevance) + w_man*min(mandatory/sat, 1)
//! + w_fresh*avg(research freshness) + w_comp*completeness.
//!
//! Completeness is the weighted share of source kinds that contributed at
//! least one item. Empty components contribute 0.

use blueprint_core::config::AssemblyConfig;
use blueprint_core::models::{EnforcementLevel, RankedPattern, ResearchItem, Rule, Scored};
use blueprint_core::scores::{mean, saturate, unit_score};

pub fn completeness(
    has_patterns: bool,
    has_rules: bool,
    has_research: bool,
    config: &AssemblyConfig,
) -> f64 {
    let mut bonus = 0.0;
    if has_patterns {
        bonus += config.completeness_patterns;
    }
    if has_rules {
        bonus += config.completeness_rules;
    }
    if has_research {
        bonus += config.completeness_research;
    }
    bonus
}

pub fn context_quality(
    patterns: &[RankedPattern],
    rules: &[Scored<Rule>],
    research: &[Scored<ResearchItem>],
    config: &AssemblyConfig,
) -> f64 {
    let relevance = mean(patterns.iter().map(|p| p.scored.relevance_score));
    let mandatory = rules
        .iter()
        .filter(|r| r.item.enforcement == EnforcementLevel::Mandatory)
        .count();
    let freshness = mean(research.iter().map(|r| r.item.freshness()));
    let bonus = completeness(
        !patterns.is_empty(),
        !rules.is_empty(),
        !research.is_empty(),
        config,
    );

    let mandatory = saturate(mandatory as f64, config.mandatory_rule_saturation);
    unit_score(
        config.quality_relevance * relevance
            + config.quality_mandatory * mandatory
            + config.quality_freshness * freshness
            + config.quality_completeness * bonus,
    )
}
