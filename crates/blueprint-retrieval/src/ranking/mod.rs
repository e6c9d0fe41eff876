//! Relevance scoring: bounded composite scores per entity kind.

pub mod scorer;

pub use scorer::{
    pattern_score, research_score, rule_score, score_patterns, score_research, score_rules,
};
