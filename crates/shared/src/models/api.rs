use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct TesCreateTaskResponse {
    pub id: String,
}

/// A page of tasks, each already shaped for the requested view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct TesListTasksResponse {
    #[schema(value_type = Vec<Object>)]
    pub tasks: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, ToSchema)]
pub struct TesServiceInfo {
    pub name: String,
    pub doc: String,
    pub storage: Vec<String>,
}
