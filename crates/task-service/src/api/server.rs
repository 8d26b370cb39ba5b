use crate::api::routes::task::{openapi_routes, tasks_routes, MAX_PAYLOAD_BYTES};
use crate::service::TaskService;
use crate::store::TaskRepository;
use actix_web::middleware::{Compress, NormalizePath, TrailingSlash};
use actix_web::{middleware, web::Data, App, HttpServer};
use actix_web::{web, HttpResponse};
use anyhow::Error;
use log::info;
use serde_json::json;
use shared::models::api::TesServiceInfo;
use std::sync::Arc;

pub struct AppState {
    pub task_store: Arc<dyn TaskRepository>,
    pub task_service: Arc<TaskService>,
    pub service_info: TesServiceInfo,
}

pub async fn start_server(host: &str, port: u16, app_state: AppState) -> Result<(), Error> {
    info!("Starting server at http://{host}:{port}");
    let app_state = Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(web::PayloadConfig::default().limit(MAX_PAYLOAD_BYTES))
            .service(tasks_routes())
            .service(openapi_routes())
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(json!({
                    "success": false,
                    "error": "Resource not found"
                }))
            }))
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
