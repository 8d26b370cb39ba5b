mod api;
pub mod error;
pub mod service;
pub mod store;

pub use api::server::start_server;
pub use api::server::AppState;
pub use error::TaskServiceError;
pub use service::ListTasksQuery;
pub use service::TaskService;
pub use store::InMemoryTaskRepository;
pub use store::RedisStore;
pub use store::RedisTaskRepository;
pub use store::TaskRepository;
