use crate::error::TaskServiceError;
use chrono::Utc;
use shared::models::task::{TesState, TesTask};
use uuid::Uuid;

/// Inputs staged by the workflow engine live under this root, followed by the
/// workflow name and the root workflow id:
/// `/cromwell-executions/{workflow name}/{workflow id}/call-{name}/...`
pub(crate) const ROOT_EXECUTION_PATH: &str = "/cromwell-executions";
const WORKFLOW_ID_SEGMENT: usize = 2;
const CREATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Checks a create request before anything is assigned.
pub(crate) fn validate_new_task(task: &TesTask) -> Result<(), TaskServiceError> {
    if !task.id.trim().is_empty() {
        return Err(TaskServiceError::Validation(
            "Id should not be included by the client in the request; the server is responsible for generating a unique Id."
                .to_string(),
        ));
    }

    if task
        .primary_image()
        .map_or(true, |image| image.trim().is_empty())
    {
        return Err(TaskServiceError::Validation(
            "Docker container image name is required.".to_string(),
        ));
    }

    Ok(())
}

/// Fills in workflow id, task id, state and creation time. Runs once per task,
/// after validation and before anything reads `workflow_id`.
pub(crate) fn assign_identity(task: &mut TesTask) {
    task.state = TesState::QUEUED;
    task.creation_time = Some(Utc::now().format(CREATION_TIME_FORMAT).to_string());
    task.workflow_id = derive_workflow_id(task);
    task.id = new_task_id(task.workflow_id.as_deref());
}

/// Third non-empty segment of the first input under the execution root.
pub(crate) fn derive_workflow_id(task: &TesTask) -> Option<String> {
    task.inputs
        .iter()
        .find(|input| starts_with_ignore_case(&input.path, ROOT_EXECUTION_PATH))?
        .path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .nth(WORKFLOW_ID_SEGMENT)
        .map(str::to_string)
}

/// 32 random hex digits, prefixed with the first 8 characters of the workflow
/// id when it is a UUID. The prefix only helps when reading logs.
pub(crate) fn new_task_id(workflow_id: Option<&str>) -> String {
    let prefix = match workflow_id {
        Some(workflow_id) if is_plain_uuid(workflow_id) => {
            let short: String = workflow_id.chars().take(8).collect();
            format!("{short}_")
        }
        _ => String::new(),
    };
    format!("{prefix}{}", Uuid::new_v4().simple())
}

/// Simple, hyphenated or braced UUID. The URN form is not accepted, so the
/// prefix never carries a colon.
fn is_plain_uuid(value: &str) -> bool {
    !starts_with_ignore_case(value, "urn:") && Uuid::parse_str(value).is_ok()
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::task::{TesExecutor, TesInput};

    const SCRIPT_PATH: &str =
        "/cromwell-executions/test/daf1a044-d741-4db9-8eb5-d6fd0519b1f1/call-hello/execution/script";

    fn task_with_inputs(paths: &[&str]) -> TesTask {
        TesTask {
            inputs: paths
                .iter()
                .map(|path| TesInput {
                    path: path.to_string(),
                    ..Default::default()
                })
                .collect(),
            executors: vec![TesExecutor {
                image: "ubuntu".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn is_hex_id(s: &str) -> bool {
        s.len() == 32 && s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_workflow_id_from_execution_path() {
        let mut task = task_with_inputs(&["/other/input.txt", SCRIPT_PATH]);
        assign_identity(&mut task);

        assert_eq!(
            task.workflow_id.as_deref(),
            Some("daf1a044-d741-4db9-8eb5-d6fd0519b1f1")
        );
        let suffix = task.id.strip_prefix("daf1a044_").unwrap();
        assert!(is_hex_id(suffix), "{}", task.id);
        assert_eq!(task.state, TesState::QUEUED);
    }

    #[test]
    fn test_root_prefix_is_case_insensitive() {
        let task = task_with_inputs(&["/Cromwell-Executions/wf/abc/call-x/script"]);
        assert_eq!(derive_workflow_id(&task).as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let task = task_with_inputs(&["//cromwell-executions//wf///abc/call-x"]);
        // does not start with the root, so nothing is derived
        assert_eq!(derive_workflow_id(&task), None);

        let task = task_with_inputs(&["/cromwell-executions//wf///abc/call-x"]);
        assert_eq!(derive_workflow_id(&task).as_deref(), Some("abc"));
    }

    #[test]
    fn test_no_workflow_id_without_execution_input() {
        let mut task = task_with_inputs(&["/data/reads.bam"]);
        assign_identity(&mut task);
        assert_eq!(task.workflow_id, None);
        assert!(is_hex_id(&task.id), "{}", task.id);
    }

    #[test]
    fn test_id_prefix_only_for_plain_uuid_forms() {
        let id = new_task_id(Some("{daf1a044-d741-4db9-8eb5-d6fd0519b1f1}"));
        assert!(id.starts_with("{daf1a04_"), "{id}");

        let id = new_task_id(Some("daf1a044d7414db98eb5d6fd0519b1f1"));
        assert!(id.starts_with("daf1a044_"), "{id}");

        for urn in [
            "urn:uuid:daf1a044-d741-4db9-8eb5-d6fd0519b1f1",
            "URN:UUID:daf1a044-d741-4db9-8eb5-d6fd0519b1f1",
        ] {
            let id = new_task_id(Some(urn));
            assert!(is_hex_id(&id), "{id}");
        }
    }

    #[test]
    fn test_short_execution_path_has_no_workflow_id() {
        let task = task_with_inputs(&["/cromwell-executions/test"]);
        assert_eq!(derive_workflow_id(&task), None);
    }

    #[test]
    fn test_non_uuid_workflow_id_gets_no_prefix() {
        let id = new_task_id(Some("not-a-uuid"));
        assert!(is_hex_id(&id), "{id}");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_task_id(None);
        let b = new_task_id(None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_creation_time_format() {
        let mut task = task_with_inputs(&[]);
        assign_identity(&mut task);
        let creation_time = task.creation_time.unwrap();
        // e.g. 2020-01-01T12:34:56.789+00:00
        assert_eq!(creation_time.len(), 29, "{creation_time}");
        assert!(creation_time.ends_with("+00:00"));
        assert!(chrono::DateTime::parse_from_rfc3339(&creation_time).is_ok());
    }

    #[test]
    fn test_client_id_is_rejected() {
        let mut task = task_with_inputs(&[]);
        task.id = "mine".to_string();
        assert!(matches!(
            validate_new_task(&task),
            Err(TaskServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_image_is_rejected() {
        let mut task = task_with_inputs(&[]);
        task.executors[0].image = "   ".to_string();
        assert!(matches!(
            validate_new_task(&task),
            Err(TaskServiceError::Validation(_))
        ));

        task.executors.clear();
        let err = validate_new_task(&task).unwrap_err();
        assert_eq!(err.to_string(), "Docker container image name is required.");
    }
}
