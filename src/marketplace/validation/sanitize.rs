//! Status-scoped projection of task records.

use crate::marketplace::domain::{Task, TaskStatus};

/// Returns a copy of `task` with every field not licensed by its current
/// status dropped.
///
/// Used at serialization boundaries so a record that briefly carried stale
/// fields during a transition never leaves the engine inconsistent. This is
/// a projection, not a validator: it never errors — missing *required*
/// fields are [`super::validate_task`]'s business.
#[must_use]
pub fn sanitize_task(task: &Task) -> Task {
    let mut sanitized = task.clone();
    match task.status() {
        TaskStatus::Pending => {
            sanitized.clear_applicants();
            sanitized.clear_assignment();
            sanitized.clear_completed_at();
            sanitized.clear_cancelled_at();
        }
        TaskStatus::PendingConfirmation => {
            sanitized.clear_assignment();
            sanitized.clear_completed_at();
            sanitized.clear_cancelled_at();
        }
        TaskStatus::InProgress | TaskStatus::PendingCompletion => {
            sanitized.clear_completed_at();
            sanitized.clear_cancelled_at();
        }
        TaskStatus::Completed => {
            sanitized.clear_cancelled_at();
        }
        // The roster survives cancellation: tasks cancelled out of
        // PendingConfirmation keep their application history.
        TaskStatus::Cancelled => {
            sanitized.clear_assignment();
            sanitized.clear_completed_at();
        }
    }
    sanitized
}
