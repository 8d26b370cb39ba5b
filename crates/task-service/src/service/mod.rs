pub(crate) mod identity;
pub(crate) mod lifecycle;
pub(crate) mod resources;

use crate::error::TaskServiceError;
use crate::store::TaskRepository;
use lifecycle::CancelOutcome;
use log::{debug, error, info};
use serde::Deserialize;
use serde_json::Value;
use shared::models::api::{TesCreateTaskResponse, TesListTasksResponse};
use shared::models::task::TesTask;
use shared::models::view::TesView;
use shared::utils::page_token::{decode_page_token, encode_page_token};
use shared::utils::WorkflowDescriptionProvider;
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: i64 = 256;
pub const MAX_PAGE_SIZE: i64 = 2047;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default, alias = "namePrefix")]
    pub name_prefix: Option<String>,
    #[serde(default, alias = "pageSize")]
    pub page_size: Option<i64>,
    #[serde(default, alias = "pageToken")]
    pub page_token: Option<String>,
    #[serde(default)]
    pub view: Option<String>,
}

/// Create, get, list and cancel on top of a task repository.
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    workflow_storage: Arc<dyn WorkflowDescriptionProvider>,
}

impl TaskService {
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        workflow_storage: Arc<dyn WorkflowDescriptionProvider>,
    ) -> Self {
        Self {
            repository,
            workflow_storage,
        }
    }

    pub async fn create_task(
        &self,
        mut task: TesTask,
    ) -> Result<TesCreateTaskResponse, TaskServiceError> {
        identity::validate_new_task(&task)?;
        identity::assign_identity(&mut task);
        resources::apply_workflow_resource_hints(&mut task, self.workflow_storage.as_ref()).await;

        debug!("Creating task with id {} state {}", task.id, task.state);
        self.repository.create(&task).await?;
        Ok(TesCreateTaskResponse { id: task.id })
    }

    pub async fn get_task(&self, id: &str, view: Option<&str>) -> Result<Value, TaskServiceError> {
        let task = self
            .repository
            .try_get(id)
            .await?
            .ok_or_else(|| TaskServiceError::task_not_found(id))?;
        let view = TesView::parse_optional(view)?;
        Ok(view.project(&task))
    }

    pub async fn list_tasks(
        &self,
        query: &ListTasksQuery,
    ) -> Result<TesListTasksResponse, TaskServiceError> {
        let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            error!("pageSize invalid {page_size}");
            return Err(TaskServiceError::Validation(
                "If provided, pageSize must be greater than 0 and less than 2048. Defaults to 256."
                    .to_string(),
            ));
        }

        let view = TesView::parse_optional(query.view.as_deref()).inspect_err(|e| error!("{e}"))?;

        let cursor = match query.page_token.as_deref() {
            None | Some("") => None,
            Some(token) => Some(decode_page_token(token).map_err(|e| {
                debug!("Rejecting page token {token:?}: {e:#}");
                TaskServiceError::Validation("Invalid page token.".to_string())
            })?),
        };

        let name_prefix = query
            .name_prefix
            .as_deref()
            .filter(|prefix| !prefix.trim().is_empty());
        let matches_prefix = |task: &TesTask| match name_prefix {
            None => true,
            Some(prefix) => task
                .name
                .as_deref()
                .is_some_and(|name| name.starts_with(prefix)),
        };

        let (next_cursor, tasks) = self
            .repository
            .list(&matches_prefix, page_size as usize, cursor.as_deref())
            .await?;

        Ok(TesListTasksResponse {
            tasks: tasks.iter().map(|task| view.project(task)).collect(),
            next_page_token: next_cursor.as_deref().map(encode_page_token),
        })
    }

    /// Succeeds for every existing task, whatever its state.
    pub async fn cancel_task(&self, id: &str) -> Result<(), TaskServiceError> {
        let mut task = self
            .repository
            .try_get(id)
            .await?
            .ok_or_else(|| TaskServiceError::task_not_found(id))?;

        match lifecycle::request_cancel(&mut task) {
            CancelOutcome::Canceled => {
                info!("Canceling task {id}");
                self.repository.update(id, &task).await?;
            }
            CancelOutcome::AlreadyFinished(state) => {
                info!("Task {id} cannot be canceled because it is in {state} state.");
            }
            CancelOutcome::AlreadyCanceled => {
                debug!("Task {id} is already canceled");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTaskRepository;
    use shared::models::task::{TesExecutor, TesInput, TesResources, TesState};
    use shared::utils::MockWorkflowStorage;

    const WORKFLOW_ID: &str = "daf1a044-d741-4db9-8eb5-d6fd0519b1f1";

    struct Fixture {
        service: TaskService,
        repository: Arc<InMemoryTaskRepository>,
        workflow_storage: Arc<MockWorkflowStorage>,
    }

    fn fixture() -> Fixture {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let workflow_storage = Arc::new(MockWorkflowStorage::new());
        Fixture {
            service: TaskService::new(repository.clone(), workflow_storage.clone()),
            repository,
            workflow_storage,
        }
    }

    fn new_task(name: &str) -> TesTask {
        TesTask {
            name: Some(name.to_string()),
            executors: vec![TesExecutor {
                image: "ubuntu".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    async fn stored_task(fixture: &Fixture, state: TesState) -> String {
        let task = TesTask {
            id: format!("task-{state}"),
            state,
            ..new_task("stored")
        };
        fixture.repository.create(&task).await.unwrap();
        task.id
    }

    #[tokio::test]
    async fn test_create_persists_queued_task() {
        let fixture = fixture();
        let mut task = new_task("hello");
        task.inputs = vec![TesInput {
            path: format!("/cromwell-executions/test/{WORKFLOW_ID}/call-hello/execution/script"),
            ..Default::default()
        }];

        let response = fixture.service.create_task(task).await.unwrap();
        assert!(response.id.starts_with("daf1a044_"));

        let stored = fixture.repository.try_get(&response.id).await.unwrap().unwrap();
        assert_eq!(stored.state, TesState::QUEUED);
        assert_eq!(stored.workflow_id.as_deref(), Some(WORKFLOW_ID));
        assert!(stored.creation_time.is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_client_id_and_missing_image() {
        let fixture = fixture();
        let mut task = new_task("hello");
        task.id = "client-chosen".to_string();
        assert!(matches!(
            fixture.service.create_task(task).await,
            Err(TaskServiceError::Validation(_))
        ));

        let mut task = new_task("hello");
        task.executors.clear();
        assert!(matches!(
            fixture.service.create_task(task).await,
            Err(TaskServiceError::Validation(_))
        ));

        let (_, tasks) = fixture.repository.list(&|_: &TesTask| true, 10, None).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_backfills_resources_from_cwl() {
        let fixture = fixture();
        fixture
            .workflow_storage
            .add_description(
                WORKFLOW_ID,
                "requirements:\n  - class: ResourceRequirement\n    disk: 10\n    cpu: 2\n    memory: 8\n    preemptible: false\n",
            )
            .await;

        let mut task = new_task("hello");
        task.inputs = vec![TesInput {
            path: format!("/cromwell-executions/hello.cwl/{WORKFLOW_ID}/call-hello/execution/script"),
            ..Default::default()
        }];
        task.resources = Some(TesResources {
            disk_gb: Some(100.0),
            ..Default::default()
        });

        let response = fixture.service.create_task(task).await.unwrap();
        let stored = fixture.repository.try_get(&response.id).await.unwrap().unwrap();
        let resources = stored.resources.unwrap();
        assert_eq!(resources.disk_gb, Some(100.0));
        assert_eq!(resources.cpu_cores, Some(2));
        assert_eq!(resources.ram_gb, Some(8.0));
        assert_eq!(resources.preemptible, Some(false));
    }

    #[tokio::test]
    async fn test_get_projects_view() {
        let fixture = fixture();
        let id = stored_task(&fixture, TesState::RUNNING).await;

        let minimal = fixture.service.get_task(&id, None).await.unwrap();
        assert_eq!(minimal.as_object().unwrap().len(), 2);
        assert_eq!(minimal["state"], "RUNNING");

        let full = fixture.service.get_task(&id, Some("full")).await.unwrap();
        assert_eq!(full["name"], "stored");

        assert!(matches!(
            fixture.service.get_task(&id, Some("verbose")).await,
            Err(TaskServiceError::Validation(_))
        ));
        assert!(matches!(
            fixture.service.get_task("missing", Some("FULL")).await,
            Err(TaskServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_cancel_transitions() {
        let fixture = fixture();

        let queued = stored_task(&fixture, TesState::QUEUED).await;
        fixture.service.cancel_task(&queued).await.unwrap();
        let task = fixture.repository.try_get(&queued).await.unwrap().unwrap();
        assert_eq!(task.state, TesState::CANCELED);
        assert!(task.is_cancel_requested);

        // second cancel is a no-op
        fixture.service.cancel_task(&queued).await.unwrap();
        assert_eq!(
            fixture.repository.try_get(&queued).await.unwrap().unwrap(),
            task
        );

        for state in [
            TesState::COMPLETE,
            TesState::EXECUTOR_ERROR,
            TesState::SYSTEM_ERROR,
        ] {
            let id = stored_task(&fixture, state).await;
            fixture.service.cancel_task(&id).await.unwrap();
            let task = fixture.repository.try_get(&id).await.unwrap().unwrap();
            assert_eq!(task.state, state);
            assert!(!task.is_cancel_requested);
        }

        let err = fixture.service.cancel_task("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "The task with id missing does not exist.");
    }

    #[tokio::test]
    async fn test_list_validates_page_size() {
        let fixture = fixture();
        for page_size in [0, -1, 2048] {
            let query = ListTasksQuery {
                page_size: Some(page_size),
                ..Default::default()
            };
            assert!(matches!(
                fixture.service.list_tasks(&query).await,
                Err(TaskServiceError::Validation(_))
            ));
        }

        let query = ListTasksQuery {
            page_size: Some(2047),
            ..Default::default()
        };
        assert!(fixture.service.list_tasks(&query).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_pages_with_prefix_and_token() {
        let fixture = fixture();
        for i in 0..5 {
            fixture
                .service
                .create_task(new_task(&format!("align-{i}")))
                .await
                .unwrap();
        }
        fixture.service.create_task(new_task("call-0")).await.unwrap();

        let mut seen = Vec::new();
        let mut query = ListTasksQuery {
            name_prefix: Some("align".to_string()),
            page_size: Some(2),
            view: Some("BASIC".to_string()),
            ..Default::default()
        };
        loop {
            let response = fixture.service.list_tasks(&query).await.unwrap();
            assert!(response.tasks.len() <= 2);
            seen.extend(
                response
                    .tasks
                    .iter()
                    .map(|task| task["name"].as_str().unwrap().to_string()),
            );
            match response.next_page_token {
                Some(token) => query.page_token = Some(token),
                None => break,
            }
        }

        seen.sort();
        assert_eq!(seen, ["align-0", "align-1", "align-2", "align-3", "align-4"]);
    }

    #[tokio::test]
    async fn test_list_rejects_bad_view_and_token() {
        let fixture = fixture();
        let query = ListTasksQuery {
            view: Some("everything".to_string()),
            ..Default::default()
        };
        let err = fixture.service.list_tasks(&query).await.unwrap_err();
        assert!(err.to_string().contains("MINIMAL, BASIC, FULL"));

        let query = ListTasksQuery {
            page_token: Some("%%%".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            fixture.service.list_tasks(&query).await,
            Err(TaskServiceError::Validation(_))
        ));
    }
}
