use shared::models::task::{TesState, TesTask};

/// What a cancel request did to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CancelOutcome {
    /// The task moved to CANCELED and must be written back.
    Canceled,
    /// The task already finished in this state; nothing changed.
    AlreadyFinished(TesState),
    AlreadyCanceled,
}

/// Applies a cancel request. Only `Canceled` mutates the task.
pub(crate) fn request_cancel(task: &mut TesTask) -> CancelOutcome {
    if task.state.is_terminal() {
        CancelOutcome::AlreadyFinished(task.state)
    } else if task.state != TesState::CANCELED {
        task.is_cancel_requested = true;
        task.state = TesState::CANCELED;
        CancelOutcome::Canceled
    } else {
        CancelOutcome::AlreadyCanceled
    }
}
