use super::{TaskPredicate, TaskRepository};
use anyhow::{bail, Result};
use async_trait::async_trait;
use shared::models::task::TesTask;
use std::collections::BTreeMap;
use std::ops::Bound;
use tokio::sync::RwLock;

/// Process-local repository ordered by task id. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<BTreeMap<String, TesTask>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn try_get(&self, id: &str) -> Result<Option<TesTask>> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn create(&self, task: &TesTask) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&task.id) {
            bail!("Task {} already exists", task.id);
        }
        tasks.insert(task.id.clone(), task.clone());
        Ok(())
    }

    async fn update(&self, id: &str, task: &TesTask) -> Result<()> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(())
            }
            None => bail!("Task {id} does not exist"),
        }
    }

    async fn list(
        &self,
        predicate: TaskPredicate<'_>,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<(Option<String>, Vec<TesTask>)> {
        let tasks = self.tasks.read().await;
        let start = match cursor {
            Some(cursor) => Bound::Included(cursor),
            None => Bound::Unbounded,
        };

        let mut page = Vec::new();
        for (id, task) in tasks.range::<str, _>((start, Bound::Unbounded)) {
            if page.len() == page_size {
                return Ok((Some(id.clone()), page));
            }
            if predicate(task) {
                page.push(task.clone());
            }
        }
        Ok((None, page))
    }
}
