use super::{TaskPredicate, TaskRepository};
use anyhow::{bail, Result};
use async_trait::async_trait;
#[cfg(test)]
use log::debug;
use log::info;
use redis::{AsyncCommands, Client};
#[cfg(test)]
use redis_test::server::RedisServer;
use shared::models::task::TesTask;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::thread;
#[cfg(test)]
use std::time::Duration;

const TASK_KEY_PREFIX: &str = "tes:task:";
// Sorted set of task ids, all with score 0, so ZRANGEBYLEX walks them in id order.
const TASK_INDEX_KEY: &str = "tes:tasks";
const SCAN_BATCH_SIZE: isize = 256;

#[derive(Clone)]
pub struct RedisStore {
    pub client: Client,
    #[allow(dead_code)]
    #[cfg(test)]
    server: Arc<RedisServer>,
}

impl RedisStore {
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = Client::open(redis_url)?;
        info!("Using Redis at {redis_url}");
        Ok(Self {
            client,
            #[cfg(test)]
            server: Arc::new(RedisServer::new()),
        })
    }

    #[cfg(test)]
    pub fn new_test() -> Self {
        let server = RedisServer::new();

        let (host, port) = match server.client_addr() {
            redis::ConnectionAddr::Tcp(host, port) => (host.clone(), *port),
            _ => panic!("Expected TCP connection"),
        };

        let redis_url = format!("redis://{host}:{port}");
        debug!("Starting test Redis server at {redis_url}");

        thread::sleep(Duration::from_millis(100));

        let client = loop {
            if let Ok(client) = Client::open(redis_url.clone()) {
                if let Ok(mut conn) = client.get_connection() {
                    if redis::cmd("PING").query::<String>(&mut conn).is_ok() {
                        break client;
                    }
                }
            }
            thread::sleep(Duration::from_millis(100));
        };

        Self {
            client,
            server: Arc::new(server),
        }
    }
}

pub struct RedisTaskRepository {
    redis: RedisStore,
}

impl RedisTaskRepository {
    pub fn new(redis: RedisStore) -> Self {
        Self { redis }
    }

    fn task_key(id: &str) -> String {
        format!("{TASK_KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl TaskRepository for RedisTaskRepository {
    async fn try_get(&self, id: &str) -> Result<Option<TesTask>> {
        let mut con = self.redis.client.get_multiplexed_async_connection().await?;
        let task: Option<TesTask> = con.get(Self::task_key(id)).await?;
        Ok(task)
    }

    async fn create(&self, task: &TesTask) -> Result<()> {
        let mut con = self.redis.client.get_multiplexed_async_connection().await?;
        // Record and index entry land together. Re-adding an indexed id is a no-op.
        let (created, _): (bool, i64) = redis::pipe()
            .atomic()
            .set_nx(Self::task_key(&task.id), task)
            .zadd(TASK_INDEX_KEY, &task.id, 0)
            .query_async(&mut con)
            .await?;
        if !created {
            bail!("Task {} already exists", task.id);
        }
        Ok(())
    }

    async fn update(&self, id: &str, task: &TesTask) -> Result<()> {
        let mut con = self.redis.client.get_multiplexed_async_connection().await?;
        let key = Self::task_key(id);
        let exists: bool = con.exists(&key).await?;
        if !exists {
            bail!("Task {id} does not exist");
        }
        let _: () = con.set(&key, task).await?;
        Ok(())
    }

    async fn list(
        &self,
        predicate: TaskPredicate<'_>,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<(Option<String>, Vec<TesTask>)> {
        let mut con = self.redis.client.get_multiplexed_async_connection().await?;
        let mut start = match cursor {
            Some(cursor) => format!("[{cursor}"),
            None => "-".to_string(),
        };
        let mut page = Vec::new();

        loop {
            let ids: Vec<String> = con
                .zrangebylex_limit(TASK_INDEX_KEY, &start, "+", 0, SCAN_BATCH_SIZE)
                .await?;
            if ids.is_empty() {
                return Ok((None, page));
            }

            let keys: Vec<String> = ids.iter().map(|id| Self::task_key(id)).collect();
            let tasks: Vec<Option<TesTask>> = redis::cmd("MGET")
                .arg(&keys)
                .query_async(&mut con)
                .await?;

            for (id, task) in ids.iter().zip(tasks) {
                if page.len() == page_size {
                    return Ok((Some(id.clone()), page));
                }
                if let Some(task) = task.filter(|task| predicate(task)) {
                    page.push(task);
                }
            }

            if ids.len() < SCAN_BATCH_SIZE as usize {
                return Ok((None, page));
            }
            if let Some(last) = ids.last() {
                start = format!("({last}");
            }
        }
    }
}
