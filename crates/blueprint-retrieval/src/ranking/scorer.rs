//! Per-kind relevance formulas.
//!
//! Pattern:  w_sim*sim + w_rate*success_rate + w_usage*min(usage/sat, 1)
//!           + w_cx*[beginner|intermediate]
//! Rule:     w_sim*sim + w_m*[mandatory] + w_r*[recommended]
//! Research: w_sim*sim + w_f*freshness
//!
//! Without a similarity value the similarity term is dropped and the remaining
//! weights are rescaled to sum to 1. Every score is clamped to [0, 1] and
//! rounded to two decimals.

use blueprint_core::config::{PatternWeights, ResearchWeights, RuleWeights};
use blueprint_core::models::{EnforcementLevel, Entity, Pattern, ResearchItem, Rule, Scored};
use blueprint_core::scores::{clamp_unit, desc, saturate, unit_score};

use crate::search::Candidate;

/// Fuse a similarity term with domain terms, renormalizing when similarity is absent.
fn fuse(similarity: Option<f64>, similarity_weight: f64, terms: &[(f64, f64)]) -> f64 {
    let domain: f64 = terms.iter().map(|(w, v)| w * v).sum();
    let raw = match similarity {
        Some(sim) => similarity_weight * clamp_unit(sim) + domain,
        None => {
            let total: f64 = terms.iter().map(|(w, _)| w).sum();
            if total <= 0.0 {
                0.0
            } else {
                domain / total
            }
        }
    };
    unit_score(raw)
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

pub fn pattern_score(pattern: &Pattern, similarity: Option<f64>, w: &PatternWeights) -> f64 {
    fuse(
        similarity,
        w.similarity,
        &[
            (w.success_rate, pattern.metrics.rate()),
            (
                w.usage,
                saturate(pattern.metrics.usage_count as f64, w.usage_saturation),
            ),
            (w.complexity, indicator(pattern.complexity.is_approachable())),
        ],
    )
}

pub fn rule_score(rule: &Rule, similarity: Option<f64>, w: &RuleWeights) -> f64 {
    fuse(
        similarity,
        w.similarity,
        &[
            (w.mandatory, indicator(rule.enforcement == EnforcementLevel::Mandatory)),
            (
                w.recommended,
                indicator(rule.enforcement == EnforcementLevel::Recommended),
            ),
        ],
    )
}

pub fn research_score(item: &ResearchItem, similarity: Option<f64>, w: &ResearchWeights) -> f64 {
    fuse(similarity, w.similarity, &[(w.freshness, item.freshness())])
}

/// Score and sort: relevance desc, then the kind's plain order.
fn score_all<T: Entity>(
    candidates: Vec<Candidate<T>>,
    score: impl Fn(&T, Option<f64>) -> f64,
) -> Vec<Scored<T>> {
    let mut scored: Vec<Scored<T>> = candidates
        .into_iter()
        .map(|c| {
            let relevance = score(&c.item, c.similarity);
            Scored::new(c.item, relevance, c.similarity)
        })
        .collect();
    scored.sort_by(|a, b| {
        desc(a.relevance_score, b.relevance_score).then_with(|| a.item.fallback_order(&b.item))
    });
    scored
}

pub fn score_patterns(
    candidates: Vec<Candidate<Pattern>>,
    w: &PatternWeights,
) -> Vec<Scored<Pattern>> {
    score_all(candidates, |p, sim| pattern_score(p, sim, w))
}

/// Without similarity the rule score is a function of enforcement alone, so the
/// fallback list comes out mandatory first, then by priority.
pub fn score_rules(candidates: Vec<Candidate<Rule>>, w: &RuleWeights) -> Vec<Scored<Rule>> {
    score_all(candidates, |r, sim| rule_score(r, sim, w))
}

pub fn score_research(
    candidates: Vec<Candidate<ResearchItem>>,
    w: &ResearchWeights,
) -> Vec<Scored<ResearchItem>> {
    score_all(candidates, |r, sim| research_score(r, sim, w))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use blueprint_core::models::{ComplexityLevel, SuccessMetrics};

    use super::*;

    fn pattern(id: &str, rate: f64, usage: u64, complexity: ComplexityLevel) -> Pattern {
        Pattern {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            technologies: BTreeSet::new(),
            complexity,
            metrics: SuccessMetrics::new(rate, usage),
            implementation_steps: vec![],
            gotchas: vec![],
            source_references: vec![],
            embedding: None,
        }
    }

    fn rule(id: &str, enforcement: EnforcementLevel) -> Rule {
        Rule {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            technologies: BTreeSet::new(),
            enforcement,
            priority: 1,
            examples: vec![],
            embedding: None,
        }
    }

    fn research(id: &str, freshness: f64) -> ResearchItem {
        ResearchItem {
            id: id.to_string(),
            title: id.to_string(),
            technologies: BTreeSet::new(),
            freshness_score: freshness,
            documentation_refs: vec![],
            key_insights: vec![],
            common_pitfalls: vec![],
            embedding: None,
        }
    }

    #[test]
    fn pattern_formula_with_similarity() {
        let p = pattern("p", 0.9, 50, ComplexityLevel::Beginner);
        // 0.4*0.8 + 0.3*0.9 + 0.2*0.5 + 0.1*1 = 0.32 + 0.27 + 0.10 + 0.10
        assert_eq!(pattern_score(&p, Some(0.8), &PatternWeights::default()), 0.79);
    }

    #[test]
    fn pattern_formula_renormalizes_without_similarity() {
        let p = pattern("p", 0.9, 50, ComplexityLevel::Advanced);
        // (0.3*0.9 + 0.2*0.5 + 0) / 0.6 = 0.37 / 0.6
        assert_eq!(pattern_score(&p, None, &PatternWeights::default()), 0.62);
    }

    #[test]
    fn usage_saturates_at_one_hundred() {
        let w = PatternWeights::default();
        let a = pattern("a", 0.5, 100, ComplexityLevel::Advanced);
        let b = pattern("b", 0.5, 10_000, ComplexityLevel::Advanced);
        assert_eq!(pattern_score(&a, Some(0.5), &w), pattern_score(&b, Some(0.5), &w));
    }

    #[test]
    fn rule_formula_by_enforcement() {
        let w = RuleWeights::default();
        assert_eq!(rule_score(&rule("m", EnforcementLevel::Mandatory), Some(0.6), &w), 0.6);
        assert_eq!(rule_score(&rule("r", EnforcementLevel::Recommended), Some(0.6), &w), 0.5);
        assert_eq!(rule_score(&rule("o", EnforcementLevel::Optional), Some(0.6), &w), 0.3);
        // Fallback: 0.3/0.5 and 0.2/0.5.
        assert_eq!(rule_score(&rule("m", EnforcementLevel::Mandatory), None, &w), 0.6);
        assert_eq!(rule_score(&rule("r", EnforcementLevel::Recommended), None, &w), 0.4);
        assert_eq!(rule_score(&rule("o", EnforcementLevel::Optional), None, &w), 0.0);
    }

    #[test]
    fn research_formula() {
        let w = ResearchWeights::default();
        assert_eq!(research_score(&research("r", 0.5), Some(1.0), &w), 0.8);
        assert_eq!(research_score(&research("r", 0.5), None, &w), 0.5);
    }

    #[test]
    fn out_of_range_inputs_stay_bounded() {
        let w = PatternWeights::default();
        let mut p = pattern("p", 1.0, 500, ComplexityLevel::Beginner);
        p.metrics.success_rate = 7.0;
        let s = pattern_score(&p, Some(3.0), &w);
        assert!((0.0..=1.0).contains(&s));
        let stale = research("r", -2.0);
        assert_eq!(research_score(&stale, Some(-1.0), &ResearchWeights::default()), 0.0);
    }

    #[test]
    fn zero_weights_without_similarity_score_zero() {
        let w = ResearchWeights {
            similarity: 1.0,
            freshness: 0.0,
        };
        assert_eq!(research_score(&research("r", 0.9), None, &w), 0.0);
    }

    #[test]
    fn score_patterns_sorts_descending_with_id_tiebreak() {
        let candidates = vec![
            Candidate { item: pattern("b", 0.9, 10, ComplexityLevel::Beginner), similarity: None },
            Candidate { item: pattern("a", 0.9, 10, ComplexityLevel::Beginner), similarity: None },
            Candidate { item: pattern("c", 0.95, 10, ComplexityLevel::Beginner), similarity: None },
        ];
        let scored = score_patterns(candidates, &PatternWeights::default());
        let ids: Vec<&str> = scored.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert!(scored.windows(2).all(|w| w[0].relevance_score >= w[1].relevance_score));
    }

    #[test]
    fn fallback_rules_lead_with_mandatory_then_priority() {
        let mut second = rule("man-b", EnforcementLevel::Mandatory);
        second.priority = 2;
        let candidates = vec![
            Candidate { item: rule("opt", EnforcementLevel::Optional), similarity: None },
            Candidate { item: second, similarity: None },
            Candidate { item: rule("rec", EnforcementLevel::Recommended), similarity: None },
            Candidate { item: rule("man-a", EnforcementLevel::Mandatory), similarity: None },
        ];
        let scored = score_rules(candidates, &RuleWeights::default());
        let ids: Vec<&str> = scored.iter().map(|s| s.item.id.as_str()).collect();
        assert_eq!(ids, vec!["man-a", "man-b", "rec", "opt"]);
    }
}
