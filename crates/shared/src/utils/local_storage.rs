use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::WorkflowDescriptionProvider;

/// Reads CWL documents that the workflow engine drops into a shared directory
/// as `cwl_temp_file_{workflow_id}.cwl`.
#[derive(Clone, Debug)]
pub struct LocalWorkflowStorage {
    root: PathBuf,
}

impl LocalWorkflowStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn description_path(&self, workflow_id: &str) -> Option<PathBuf> {
        // workflow ids come from client-supplied paths
        if workflow_id.is_empty()
            || workflow_id.contains(['/', '\\'])
            || workflow_id.contains("..")
        {
            return None;
        }
        Some(self.root.join(format!("cwl_temp_file_{workflow_id}.cwl")))
    }
}

#[async_trait]
impl WorkflowDescriptionProvider for LocalWorkflowStorage {
    async fn read_description(&self, workflow_id: &str) -> Result<Option<String>> {
        let Some(path) = self.description_path(workflow_id) else {
            debug!("Ignoring unsafe workflow id {workflow_id:?}");
            return Ok(None);
        };

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}
