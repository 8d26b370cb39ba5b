use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use log::error;
use serde_json::json;
use shared::models::view::InvalidView;

#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// The request broke a documented constraint; reported as 400.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Storage failure. Callers only see an opaque message.
    #[error("Repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl TaskServiceError {
    pub fn task_not_found(id: &str) -> Self {
        TaskServiceError::NotFound(format!("The task with id {id} does not exist."))
    }
}

impl From<InvalidView> for TaskServiceError {
    fn from(err: InvalidView) -> Self {
        TaskServiceError::Validation(err.to_string())
    }
}

impl From<TaskServiceError> for HttpResponse {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": msg
            })),
            TaskServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "error": msg
            })),
            TaskServiceError::Repository(e) => {
                error!("Repository error: {e:#}");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "error": "Internal server error"
                }))
            }
        }
    }
}

/// Query string extraction failures, reported with the same envelope as
/// validation errors.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    InternalError::from_response(err, TaskServiceError::Validation(message).into()).into()
}

pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    InternalError::from_response(err, TaskServiceError::Validation(message).into()).into()
}
