//! Lifecycle engine and orchestration service.
//!
//! [`apply_event`] is the pure core: it takes a task snapshot, an acting
//! role, an event, and an explicit `now`, and returns the sanitized
//! successor snapshot or a typed rejection. [`TaskLifecycleService`] wraps
//! it with storage and clock collaborators under optimistic concurrency.

use crate::marketplace::{
    domain::{
        Application, LifecycleEvent, Role, Task, TaskAction, TaskDetails, TaskId, TaskStatus,
        UserId,
    },
    policy::{TaskView, TransitionCondition, can_perform_action, is_legal_transition, redact},
    ports::{StoreVersion, TaskRepository, TaskRepositoryError},
    validation::{InvariantViolation, sanitize_task, validate_task},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Typed rejections of a lifecycle event.
///
/// All variants but [`LifecycleError::InvariantBroken`] are caller errors:
/// the request was understood and refused, and no state changed. An
/// invariant break is an internal defect — the mutation is discarded and
/// must never be persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested status change has no edge in the transition table.
    #[error("no transition from {from} to {to}")]
    InvalidTransition {
        /// Status the task is in.
        from: TaskStatus,
        /// Status the event would move it to.
        to: TaskStatus,
    },

    /// The edge exists but its business precondition is false.
    #[error("transition condition not met: {condition}")]
    ConditionNotMet {
        /// The unmet condition, by name.
        condition: TransitionCondition,
    },

    /// The role may not invoke this action at the current status.
    #[error("{role} may not {action} while task is {status}")]
    Forbidden {
        /// The acting role.
        role: Role,
        /// The action the event implies.
        action: TaskAction,
        /// The task's current status.
        status: TaskStatus,
    },

    /// A mutation was attempted against a terminal task.
    #[error("task is terminal in status {status}")]
    TerminalStateViolation {
        /// The terminal status.
        status: TaskStatus,
    },

    /// Post-transition validation failed; internal consistency bug.
    #[error("transition produced an invalid record: {violations:?}")]
    InvariantBroken {
        /// Every invariant the produced record violated.
        violations: Vec<InvariantViolation>,
    },
}

/// Applies `event` to a snapshot of `task` acting as `role` at `now`.
///
/// The pipeline runs in a fixed order with no side effects before the
/// mutation step: terminal check and target resolution, transition-table
/// legality, edge condition evaluation, permission check, mutation of a
/// copy, quorum resolution, invariant validation, sanitization. Every check
/// is replayable against the same snapshot.
///
/// # Errors
///
/// Returns a [`LifecycleError`]; see the variant docs for which step each
/// comes from.
pub fn apply_event(
    task: &Task,
    role: Role,
    event: &LifecycleEvent,
    now: DateTime<Utc>,
) -> Result<Task, LifecycleError> {
    let from = task.status();
    if from.is_terminal() {
        return Err(LifecycleError::TerminalStateViolation { status: from });
    }

    let to = resolve_target(task, role, event);
    // In-state mutations (a further application, a withdrawal, a repeated
    // confirmation) are not edges; the table only judges status changes.
    if to != from && !is_legal_transition(from, to) {
        return Err(LifecycleError::InvalidTransition { from, to });
    }

    check_conditions(task, event)?;

    let action = event.action();
    if !can_perform_action(from, role, action) {
        return Err(LifecycleError::Forbidden {
            role,
            action,
            status: from,
        });
    }

    let mut next = task.clone();
    match event {
        LifecycleEvent::Apply { provider } => {
            next.record_application(Application::new(*provider, now), now);
        }
        LifecycleEvent::WithdrawApplication { provider } => {
            next.remove_application(*provider, now);
        }
        LifecycleEvent::SelectProvider { provider } => {
            next.assign_provider(*provider, now);
        }
        LifecycleEvent::ConfirmCompletion => {
            next.record_confirmation(role, now);
        }
        LifecycleEvent::Cancel => {
            next.cancel(now);
        }
    }

    let report = validate_task(&next);
    if !report.is_ok() {
        return Err(LifecycleError::InvariantBroken {
            violations: report.into_violations(),
        });
    }

    Ok(sanitize_task(&next))
}

/// Resolves the status the event drives the task towards. Events that do
/// not change status resolve to the current one.
fn resolve_target(task: &Task, role: Role, event: &LifecycleEvent) -> TaskStatus {
    match event {
        LifecycleEvent::Apply { .. } => TaskStatus::PendingConfirmation,
        LifecycleEvent::WithdrawApplication { .. } => task.status(),
        LifecycleEvent::SelectProvider { .. } => TaskStatus::InProgress,
        LifecycleEvent::ConfirmCompletion => {
            let quorum = task.completion().unwrap_or_default().confirm(role);
            if quorum.is_reached() {
                TaskStatus::Completed
            } else {
                TaskStatus::PendingCompletion
            }
        }
        LifecycleEvent::Cancel => TaskStatus::Cancelled,
    }
}

/// Evaluates the payload-level conditions licensing the event.
fn check_conditions(task: &Task, event: &LifecycleEvent) -> Result<(), LifecycleError> {
    match event {
        LifecycleEvent::Apply { provider } => {
            if task.application_of(*provider).is_some() {
                return Err(LifecycleError::ConditionNotMet {
                    condition: TransitionCondition::UniqueApplicant,
                });
            }
        }
        LifecycleEvent::WithdrawApplication { provider } => {
            if task.application_of(*provider).is_none() {
                return Err(LifecycleError::ConditionNotMet {
                    condition: TransitionCondition::KnownApplicant,
                });
            }
            if task.applicants().len() == 1 {
                return Err(LifecycleError::ConditionNotMet {
                    condition: TransitionCondition::RetainsApplicant,
                });
            }
        }
        LifecycleEvent::SelectProvider { provider } => {
            if task.application_of(*provider).is_none() {
                return Err(LifecycleError::ConditionNotMet {
                    condition: TransitionCondition::KnownApplicant,
                });
            }
        }
        // Quorum state is resolved during target resolution; cancellation
        // carries no payload condition.
        LifecycleEvent::ConfirmCompletion | LifecycleEvent::Cancel => {}
    }
    Ok(())
}

/// Service-level errors for lifecycle orchestration.
#[derive(Debug, Clone, Error)]
pub enum TaskLifecycleError {
    /// The engine rejected the event.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// The addressed task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Lifecycle orchestration over a repository and clock.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new `Pending` task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence rejects
    /// the record.
    pub async fn post_task(
        &self,
        requester: UserId,
        details: TaskDetails,
    ) -> TaskLifecycleResult<Task> {
        let task = Task::new(requester, details, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Loads the task, applies the event through the pure engine, and
    /// commits the result under the version the snapshot was read at.
    ///
    /// A concurrent writer surfaces as
    /// [`TaskRepositoryError::VersionConflict`]; the caller re-reads and
    /// retries. An [`LifecycleError::InvariantBroken`] is logged and the
    /// mutation discarded — it never reaches storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when the task is missing, the engine
    /// rejects the event, or the commit fails.
    pub async fn apply(
        &self,
        task_id: TaskId,
        role: Role,
        event: &LifecycleEvent,
    ) -> TaskLifecycleResult<Task> {
        let snapshot = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))?;

        let now = self.clock.utc();
        let next = apply_event(&snapshot.record, role, event, now).map_err(|err| {
            if let LifecycleError::InvariantBroken { ref violations } = err {
                tracing::error!(
                    task_id = %task_id,
                    ?violations,
                    "lifecycle transition produced an invalid record; mutation discarded"
                );
            }
            err
        })?;

        let version: StoreVersion = self.repository.update(&next, snapshot.version).await?;
        tracing::debug!(
            task_id = %task_id,
            action = %event.action(),
            status = %next.status(),
            version = %version,
            "lifecycle event applied"
        );
        Ok(next)
    }

    /// Loads the task and projects it down to what `viewer` acting as
    /// `role` may see.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, or [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn view_task(
        &self,
        task_id: TaskId,
        role: Role,
        viewer: UserId,
    ) -> TaskLifecycleResult<TaskView> {
        let snapshot = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))?;
        Ok(redact(&snapshot.record, role, viewer))
    }
}
