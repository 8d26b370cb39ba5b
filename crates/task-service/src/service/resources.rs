use log::{debug, warn};
use shared::models::cwl::CwlDocument;
use shared::models::task::{TesResources, TesTask};
use shared::utils::WorkflowDescriptionProvider;

/// Inputs staged from a CWL workflow carry the `.cwl` file name as a directory.
const CWL_PATH_MARKER: &str = ".cwl/";

/// Fills unset resources of a CWL task from its workflow description.
///
/// Does nothing unless the task is named, has a CWL input and a workflow id,
/// and the description can be read and parsed. Read and parse failures are
/// logged and otherwise ignored.
pub(crate) async fn apply_workflow_resource_hints(
    task: &mut TesTask,
    provider: &dyn WorkflowDescriptionProvider,
) {
    if task.name.as_deref().map_or(true, str::is_empty)
        || !task
            .inputs
            .iter()
            .any(|input| input.path.contains(CWL_PATH_MARKER))
    {
        return;
    }
    let Some(workflow_id) = task.workflow_id.clone() else {
        return;
    };

    let content = match provider.read_description(&workflow_id).await {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("No workflow description found for workflow {workflow_id}");
            return;
        }
        Err(e) => {
            warn!("Failed to read workflow description for workflow {workflow_id}: {e:#}");
            return;
        }
    };

    let Some(document) = CwlDocument::try_parse(&content) else {
        warn!("Workflow description for workflow {workflow_id} could not be parsed");
        return;
    };

    merge_resources(task.resources.get_or_insert_with(TesResources::default), &document);
}

pub(crate) fn merge_resources(resources: &mut TesResources, document: &CwlDocument) {
    resources.disk_gb = resources.disk_gb.or(document.disk_gb);
    resources.cpu_cores = resources.cpu_cores.or(document.cpu);
    resources.ram_gb = resources.ram_gb.or(document.memory_gb);

    // The workflow engine does not forward `preemptible` from CWL and sends its
    // own default (true) instead of leaving it unset, so an explicit value in
    // the description replaces whatever the request carries. Unlike the fields
    // above this can override a value the client set itself.
    resources.preemptible = document.preemptible.or(resources.preemptible);
}
