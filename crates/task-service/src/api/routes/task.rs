use crate::api::server::AppState;
use crate::error::{json_error_handler, query_error_handler};
use crate::service::ListTasksQuery;
use actix_web::{
    web::{self, get, post, Data, Path, Query},
    HttpResponse, Scope,
};
use log::info;
use serde::Deserialize;
use serde_json::json;
use shared::models::api::{TesCreateTaskResponse, TesListTasksResponse, TesServiceInfo};
use shared::models::task::TesTask;
use utoipa::OpenApi;

#[derive(Deserialize)]
struct ViewQuery {
    view: Option<String>,
}

#[utoipa::path(
    post,
    path = "/v1/tasks",
    request_body = TesTask,
    responses(
        (status = 200, description = "Task created", body = TesCreateTaskResponse),
        (status = 400, description = "Client supplied an id or no executor image")
    ),
    tag = "tasks"
)]
async fn create_task(task: web::Json<TesTask>, app_state: Data<AppState>) -> HttpResponse {
    match app_state.task_service.create_task(task.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/tasks",
    params(
        ("name_prefix" = Option<String>, Query, description = "Only tasks whose name starts with this prefix"),
        ("page_size" = Option<i64>, Query, description = "Tasks per page, 1 to 2047, default 256"),
        ("page_token" = Option<String>, Query, description = "next_page_token of the previous page"),
        ("view" = Option<String>, Query, description = "MINIMAL (default), BASIC or FULL")
    ),
    responses(
        (status = 200, description = "A page of tasks", body = TesListTasksResponse),
        (status = 400, description = "Invalid page size, page token or view")
    ),
    tag = "tasks"
)]
async fn list_tasks(query: Query<ListTasksQuery>, app_state: Data<AppState>) -> HttpResponse {
    match app_state.task_service.list_tasks(&query).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task id"),
        ("view" = Option<String>, Query, description = "MINIMAL (default), BASIC or FULL")
    ),
    responses(
        (status = 200, description = "The task, shaped by view"),
        (status = 400, description = "Invalid view"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
async fn get_task(
    id: Path<String>,
    query: Query<ViewQuery>,
    app_state: Data<AppState>,
) -> HttpResponse {
    match app_state
        .task_service
        .get_task(&id, query.view.as_deref())
        .await
    {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    post,
    path = "/v1/tasks/{id}:cancel",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task canceled, or already finished"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
async fn cancel_task(id: Path<String>, app_state: Data<AppState>) -> HttpResponse {
    match app_state.task_service.cancel_task(&id).await {
        Ok(()) => HttpResponse::Ok().json(json!({})),
        Err(e) => e.into(),
    }
}

#[utoipa::path(
    get,
    path = "/v1/tasks/service-info",
    responses((status = 200, description = "Service description", body = TesServiceInfo)),
    tag = "tasks"
)]
async fn get_service_info(app_state: Data<AppState>) -> HttpResponse {
    let service_info = &app_state.service_info;
    info!(
        "Name: {} Doc: {} Storage: {:?}",
        service_info.name, service_info.doc, service_info.storage
    );
    HttpResponse::Ok().json(service_info)
}

async fn get_openapi() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(create_task, list_tasks, get_task, cancel_task, get_service_info),
    components(schemas(TesTask, TesCreateTaskResponse, TesListTasksResponse, TesServiceInfo)),
    tags((name = "tasks", description = "Task execution service"))
)]
pub(crate) struct ApiDoc;

pub(crate) const MAX_PAYLOAD_BYTES: usize = 2_097_152;

pub(crate) fn tasks_routes() -> Scope {
    web::scope("/v1/tasks")
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(
            web::JsonConfig::default()
                .limit(MAX_PAYLOAD_BYTES)
                .error_handler(json_error_handler),
        )
        .route("", post().to(create_task))
        .route("", get().to(list_tasks))
        .route("/service-info", get().to(get_service_info))
        .route("/{id}:cancel", post().to(cancel_task))
        .route("/{id}", get().to(get_task))
}

pub(crate) fn openapi_routes() -> Scope {
    web::scope("/v1").route("/openapi.json", get().to(get_openapi))
}
