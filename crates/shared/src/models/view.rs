use crate::models::task::TesTask;
use serde_json::{json, Value};
use std::str::FromStr;

/// Controls how much of a task is returned by get and list.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TesView {
    /// Only `id` and `state`.
    #[default]
    MINIMAL,
    /// Everything except executor stdout/stderr, input content and system logs.
    BASIC,
    FULL,
}

impl TesView {
    pub const NAMES: [&'static str; 3] = ["MINIMAL", "BASIC", "FULL"];

    /// Missing or empty view means MINIMAL; anything else must name a view.
    pub fn parse_optional(view: Option<&str>) -> Result<Self, InvalidView> {
        match view {
            None => Ok(TesView::MINIMAL),
            Some(v) if v.is_empty() => Ok(TesView::MINIMAL),
            Some(v) => v.parse(),
        }
    }

    pub fn project(&self, task: &TesTask) -> Value {
        match self {
            TesView::MINIMAL => json!({
                "id": task.id,
                "state": task.state,
            }),
            TesView::BASIC => {
                let mut task = task.clone();
                for input in task.inputs.iter_mut() {
                    input.content = None;
                }
                for task_log in task.logs.iter_mut() {
                    task_log.system_logs = None;
                    for executor_log in task_log.logs.iter_mut() {
                        executor_log.stdout = None;
                        executor_log.stderr = None;
                    }
                }
                to_value(&task)
            }
            TesView::FULL => to_value(task),
        }
    }
}

// TesTask has only string keys and plain data, so conversion cannot fail.
fn to_value(task: &TesTask) -> Value {
    serde_json::to_value(task).unwrap_or(Value::Null)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidView;

impl std::fmt::Display for InvalidView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid view parameter value. If provided, it must be one of: {}",
            TesView::NAMES.join(", ")
        )
    }
}

impl std::error::Error for InvalidView {}

impl FromStr for TesView {
    type Err = InvalidView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MINIMAL" => Ok(TesView::MINIMAL),
            "BASIC" => Ok(TesView::BASIC),
            "FULL" => Ok(TesView::FULL),
            _ => Err(InvalidView),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{
        TesExecutor, TesExecutorLog, TesInput, TesResources, TesState, TesTaskLog,
    };

    fn sample_task() -> TesTask {
        TesTask {
            id: "daf1a044_0123".to_string(),
            state: TesState::RUNNING,
            name: Some("hello".to_string()),
            inputs: vec![TesInput {
                path: "/cromwell-executions/test/script".to_string(),
                content: Some("echo hello".to_string()),
                ..Default::default()
            }],
            executors: vec![TesExecutor {
                image: "ubuntu:22.04".to_string(),
                ..Default::default()
            }],
            resources: Some(TesResources {
                cpu_cores: Some(2),
                ..Default::default()
            }),
            logs: vec![TesTaskLog {
                logs: vec![TesExecutorLog {
                    stdout: Some("hello".to_string()),
                    stderr: Some("warning".to_string()),
                    exit_code: Some(0),
                    ..Default::default()
                }],
                system_logs: Some(vec!["pool created".to_string()]),
                ..Default::default()
            }],
            creation_time: Some("2020-01-01T00:00:00.000+00:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_only_has_id_and_state() {
        let value = TesView::MINIMAL.project(&sample_task());
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["id"], "daf1a044_0123");
        assert_eq!(object["state"], "RUNNING");
    }

    #[test]
    fn test_basic_strips_bodies() {
        let value = TesView::BASIC.project(&sample_task());
        assert_eq!(value["name"], "hello");
        assert_eq!(value["resources"]["cpu_cores"], 2);
        assert!(value["inputs"][0].get("content").is_none());
        assert_eq!(value["inputs"][0]["path"], "/cromwell-executions/test/script");
        assert!(value["logs"][0].get("system_logs").is_none());
        let executor_log = &value["logs"][0]["logs"][0];
        assert!(executor_log.get("stdout").is_none());
        assert!(executor_log.get("stderr").is_none());
        assert_eq!(executor_log["exit_code"], 0);
    }

    #[test]
    fn test_full_is_unmodified() {
        let task = sample_task();
        let value = TesView::FULL.project(&task);
        assert_eq!(value, serde_json::to_value(&task).unwrap());
        let round_trip: TesTask = serde_json::from_value(value).unwrap();
        assert_eq!(round_trip, task);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("full".parse::<TesView>().unwrap(), TesView::FULL);
        assert_eq!("Basic".parse::<TesView>().unwrap(), TesView::BASIC);
        assert_eq!(TesView::parse_optional(None).unwrap(), TesView::MINIMAL);
        assert_eq!(TesView::parse_optional(Some("")).unwrap(), TesView::MINIMAL);
    }

    #[test]
    fn test_unknown_view_names_legal_set() {
        let err = TesView::parse_optional(Some("everything")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid view parameter value. If provided, it must be one of: MINIMAL, BASIC, FULL"
        );
    }
}
