use anyhow::Result;
use clap::Parser;
use clap::ValueEnum;
use log::info;
use log::LevelFilter;
use shared::models::api::TesServiceInfo;
use shared::utils::local_storage::LocalWorkflowStorage;
use shared::utils::NoWorkflowStorage;
use shared::utils::WorkflowDescriptionProvider;
use std::sync::Arc;
use task_service::start_server;
use task_service::AppState;
use task_service::InMemoryTaskRepository;
use task_service::RedisStore;
use task_service::RedisTaskRepository;
use task_service::TaskRepository;
use task_service::TaskService;

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq)]
enum StoreKind {
    Redis,
    Memory,
}

#[derive(Parser)]
struct Args {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Task store backend
    #[arg(long, value_enum, default_value = "redis")]
    store: StoreKind,

    /// Redis store url
    #[arg(short = 's', long, default_value = "redis://localhost:6379")]
    redis_store_url: String,

    /// Directory holding workflow descriptions (cwl_temp_file_<id>.cwl)
    #[arg(long)]
    workflow_dir: Option<String>,

    /// Name reported by service-info
    #[arg(long, default_value = "Task Execution Service")]
    service_name: String,

    /// Documentation string reported by service-info
    #[arg(long, default_value = "")]
    service_doc: String,

    /// Storage locations reported by service-info
    #[arg(long)]
    storage: Vec<String>,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let task_store: Arc<dyn TaskRepository> = match args.store {
        StoreKind::Redis => {
            let store = RedisStore::new(&args.redis_store_url)?;
            Arc::new(RedisTaskRepository::new(store))
        }
        StoreKind::Memory => {
            info!("Using in-memory task store; tasks are lost on shutdown");
            Arc::new(InMemoryTaskRepository::new())
        }
    };

    let workflow_storage: Arc<dyn WorkflowDescriptionProvider> = match &args.workflow_dir {
        Some(dir) => {
            info!("Reading workflow descriptions from {dir}");
            Arc::new(LocalWorkflowStorage::new(dir))
        }
        None => Arc::new(NoWorkflowStorage),
    };

    let task_service = Arc::new(TaskService::new(task_store.clone(), workflow_storage));
    let app_state = AppState {
        task_store,
        task_service,
        service_info: TesServiceInfo {
            name: args.service_name,
            doc: args.service_doc,
            storage: args.storage,
        },
    };

    start_server(&args.host, args.port, app_state).await
}
