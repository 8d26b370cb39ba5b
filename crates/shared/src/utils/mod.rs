use std::collections::HashMap;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
pub mod local_storage;
pub mod page_token;
use anyhow::Result;

/// Source of the workflow descriptions written by the workflow engine.
#[async_trait]
pub trait WorkflowDescriptionProvider: Send + Sync {
    /// Raw description for a workflow, `None` if there is none.
    async fn read_description(&self, workflow_id: &str) -> Result<Option<String>>;
}

/// Used when no workflow storage is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWorkflowStorage;

#[async_trait]
impl WorkflowDescriptionProvider for NoWorkflowStorage {
    async fn read_description(&self, _workflow_id: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

pub struct MockWorkflowStorage {
    descriptions: Arc<Mutex<HashMap<String, String>>>, // Maps workflow id to description
    failing: Arc<Mutex<bool>>,
}

impl Default for MockWorkflowStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWorkflowStorage {
    pub fn new() -> Self {
        Self {
            descriptions: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn add_description(&self, workflow_id: &str, content: &str) {
        let mut descriptions = self.descriptions.lock().await;
        descriptions.insert(workflow_id.to_string(), content.to_string());
    }

    /// Make every subsequent read fail, as an unreachable storage account would.
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.lock().await = failing;
    }
}

#[async_trait]
impl WorkflowDescriptionProvider for MockWorkflowStorage {
    async fn read_description(&self, workflow_id: &str) -> Result<Option<String>> {
        if *self.failing.lock().await {
            return Err(anyhow::anyhow!("mock storage is unavailable"));
        }
        let descriptions = self.descriptions.lock().await;
        Ok(descriptions.get(workflow_id).cloned())
    }
}
