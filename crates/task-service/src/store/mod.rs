pub(crate) mod memory;
pub(crate) mod redis;

pub use self::memory::InMemoryTaskRepository;
pub use self::redis::{RedisStore, RedisTaskRepository};

use anyhow::Result;
use async_trait::async_trait;
use shared::models::task::TesTask;

/// Filter applied to each record while listing.
pub type TaskPredicate<'a> = &'a (dyn Fn(&TesTask) -> bool + Send + Sync);

/// Persistence for tasks. Implementations own any locking needed for
/// concurrent updates of the same id.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn try_get(&self, id: &str) -> Result<Option<TesTask>>;

    /// Fails if a task with the same id already exists.
    async fn create(&self, task: &TesTask) -> Result<()>;

    async fn update(&self, id: &str, task: &TesTask) -> Result<()>;

    /// Returns up to `page_size` matching tasks starting at `cursor`
    /// (inclusive), plus the cursor of the next unscanned task if any remain.
    async fn list(
        &self,
        predicate: TaskPredicate<'_>,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<(Option<String>, Vec<TesTask>)>;
}
