use async_trait::async_trait;

use crate::errors::BlueprintResult;
use crate::models::Template;

/// Source of document templates.
#[async_trait]
pub trait ITemplateStore: Send + Sync {
    async fn list_templates(&self) -> BlueprintResult<Vec<Template>>;
}
