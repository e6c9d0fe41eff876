//! Counts, averages, and complexity distribution over a research result.

use blueprint_core::models::{
    ComplexityLevel, EnforcementLevel, Pattern, ResearchItem, ResearchSummary, Rule, Scored,
};
use blueprint_core::scores::{mean, unit_score};

pub fn summarize(
    patterns: &[Scored<Pattern>],
    rules: &[Scored<Rule>],
    research: &[Scored<ResearchItem>],
) -> ResearchSummary {
    let mut complexity_distribution: std::collections::BTreeMap<ComplexityLevel, usize> =
        ComplexityLevel::ALL.iter().map(|c| (*c, 0)).collect();
    for p in patterns {
        *complexity_distribution.entry(p.item.complexity).or_default() += 1;
    }

    ResearchSummary {
        pattern_count: patterns.len(),
        rule_count: rules.len(),
        research_count: research.len(),
        mandatory_rule_count: rules
            .iter()
            .filter(|r| r.item.enforcement == EnforcementLevel::Mandatory)
            .count(),
        average_pattern_relevance: unit_score(mean(patterns.iter().map(|p| p.relevance_score))),
        average_rule_relevance: unit_score(mean(rules.iter().map(|r| r.relevance_score))),
        average_research_relevance: unit_score(mean(research.iter().map(|r| r.relevance_score))),
        average_success_rate: unit_score(mean(patterns.iter().map(|p| p.item.metrics.rate()))),
        average_freshness: unit_score(mean(research.iter().map(|r| r.item.freshness()))),
        complexity_distribution,
    }
}
