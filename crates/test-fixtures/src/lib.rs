//! Test fixtures for Blueprint: JSON catalog loading plus in-memory fakes for
//! every external collaborator (entity stores, embedding providers, template
//! store, clock).
//!
//! The fakes carry injectable failure modes so degradation paths can be
//! exercised without a real database or provider.

mod clock;
mod embedders;
mod stores;
mod templates;

use std::path::PathBuf;

use blueprint_core::models::{Pattern, ResearchItem, Rule, Template};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use clock::FixedClock;
pub use embedders::{FailingEmbedder, ProviderFailure, StaticEmbedder};
pub use stores::{cosine_similarity, InMemoryEntityStore, SimilarityMode};
pub use templates::InMemoryTemplateStore;

/// Root directory of the fixture JSON files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The sample knowledge base shared by integration tests.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub patterns: Vec<Pattern>,
    pub rules: Vec<Rule>,
    pub research: Vec<ResearchItem>,
    pub templates: Vec<Template>,
}

/// Load `catalog/*.json` into one value.
pub fn load_catalog() -> Catalog {
    Catalog {
        patterns: load_fixture("catalog/patterns.json"),
        rules: load_fixture("catalog/rules.json"),
        research: load_fixture("catalog/research.json"),
        templates: load_fixture("catalog/templates.json"),
    }
}

/// A query vector pointing at the "auth" corner of the catalog's 4-d space.
pub fn auth_query_vector() -> Vec<f32> {
    vec![1.0, 0.0, 0.0, 0.0]
}
