//! The global runtime can only be initialized once per process, so this
//! binary holds a single test.

use std::sync::Arc;

use blueprint_runtime::{
    get, initialize, is_initialized, research_json, FailureKind, RuntimeOptions,
};
use serde_json::json;
use test_fixtures::{
    auth_query_vector, load_catalog, InMemoryEntityStore, InMemoryTemplateStore, StaticEmbedder,
};

fn options() -> RuntimeOptions {
    let catalog = load_catalog();
    RuntimeOptions::new(
        Arc::new(StaticEmbedder::new(auth_query_vector())),
        Arc::new(InMemoryEntityStore::new(catalog.patterns)),
        Arc::new(InMemoryEntityStore::new(catalog.rules)),
        Arc::new(InMemoryEntityStore::new(catalog.research)),
        Arc::new(InMemoryTemplateStore::new(catalog.templates)),
    )
}

#[tokio::test]
async fn singleton_lifecycle() {
    assert!(!is_initialized());
    assert!(get().is_err());
    let failure = research_json(json!({ "feature_request": "auth" }))
        .await
        .unwrap_err();
    assert_eq!(failure.kind, FailureKind::Configuration);

    initialize(options()).unwrap();
    assert!(is_initialized());
    assert!(initialize(options()).is_err());

    let response = research_json(json!({ "feature_request": "auth" })).await.unwrap();
    assert!(response["patterns"].is_array());
    assert_eq!(get().unwrap().cached_embeddings(), 1);
}
