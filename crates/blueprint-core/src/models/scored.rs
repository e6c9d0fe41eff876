use serde::{Deserialize, Serialize};

/// An entity plus its bounded relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub item: T,
    /// Composite relevance in [0.0, 1.0], rounded to two decimals.
    pub relevance_score: f64,
    /// Raw similarity from the vector query; `None` when the plain query was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl<T> Scored<T> {
    pub fn new(item: T, relevance_score: f64, similarity: Option<f64>) -> Self {
        Self {
            item,
            relevance_score,
            similarity,
        }
    }
}
