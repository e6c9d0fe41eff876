use async_trait::async_trait;
use blueprint_core::errors::{BlueprintResult, StoreError};
use blueprint_core::models::Template;
use blueprint_core::traits::ITemplateStore;

/// Template store over a fixed list; `failing()` makes every call error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateStore {
    templates: Vec<Template>,
    fail: bool,
}

impl InMemoryTemplateStore {
    pub fn new(templates: Vec<Template>) -> Self {
        Self {
            templates,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            templates: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ITemplateStore for InMemoryTemplateStore {
    async fn list_templates(&self) -> BlueprintResult<Vec<Template>> {
        if self.fail {
            return Err(StoreError::TemplateStore {
                reason: "template table unreachable".to_string(),
            }
            .into());
        }
        Ok(self.templates.clone())
    }
}
