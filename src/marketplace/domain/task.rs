//! Task aggregate root.

use super::{
    Application, Budget, CategoryName, CompletionQuorum, DomainError, LocationName, Role, TaskId,
    TaskStatus, TaskTitle, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Always-present descriptive fields of a task.
///
/// Editable only by the owning requester while the task is `Pending`; the
/// field types carry their own construction validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Short human-readable title.
    pub title: TaskTitle,
    /// Free-form problem description.
    pub description: String,
    /// Category label, e.g. `rodent-control`.
    pub category: CategoryName,
    /// Offered budget in minor currency units.
    pub budget: Budget,
    /// Where the work happens.
    pub location: LocationName,
}

/// Task aggregate root.
///
/// Fields beyond the detail block are lifecycle-conditional: their required
/// presence or absence is a deterministic function of [`TaskStatus`],
/// enforced by [`crate::marketplace::validation::validate_task`] after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    requester: UserId,
    details: TaskDetails,
    status: TaskStatus,
    applicants: Vec<Application>,
    assigned_provider: Option<UserId>,
    completion: Option<CompletionQuorum>,
    completed_at: Option<DateTime<Utc>>,
    cancelled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning requester.
    pub requester: UserId,
    /// Persisted detail block.
    pub details: TaskDetails,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted application roster.
    pub applicants: Vec<Application>,
    /// Persisted assigned provider, if any.
    pub assigned_provider: Option<UserId>,
    /// Persisted completion quorum, if any.
    pub completion: Option<CompletionQuorum>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted cancellation timestamp, if any.
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a newly posted task in `Pending` status.
    #[must_use]
    pub fn new(requester: UserId, details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            requester,
            details,
            status: TaskStatus::Pending,
            applicants: Vec::new(),
            assigned_provider: None,
            completion: None,
            completed_at: None,
            cancelled_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// Storage reconstruction performs no invariant checking; callers
    /// defending against partial writes run
    /// [`crate::marketplace::validation::validate_task`] on the result.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            requester: data.requester,
            details: data.details,
            status: data.status,
            applicants: data.applicants,
            assigned_provider: data.assigned_provider,
            completion: data.completion,
            completed_at: data.completed_at,
            cancelled_at: data.cancelled_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning requester.
    #[must_use]
    pub const fn requester(&self) -> UserId {
        self.requester
    }

    /// Returns the detail block.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the application roster in submission order.
    #[must_use]
    pub fn applicants(&self) -> &[Application] {
        &self.applicants
    }

    /// Returns the application submitted by the given provider, if any.
    #[must_use]
    pub fn application_of(&self, provider: UserId) -> Option<&Application> {
        self.applicants
            .iter()
            .find(|application| application.provider() == provider)
    }

    /// Returns the assigned provider, if any.
    #[must_use]
    pub const fn assigned_provider(&self) -> Option<UserId> {
        self.assigned_provider
    }

    /// Returns the completion quorum, if any.
    #[must_use]
    pub const fn completion(&self) -> Option<CompletionQuorum> {
        self.completion
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the cancellation timestamp, if any.
    #[must_use]
    pub const fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        self.cancelled_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the detail block.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotTaskOwner`] when the actor is not the
    /// owning requester, or [`DomainError::DetailsLocked`] once the task has
    /// left `Pending`.
    pub fn edit_details(
        &mut self,
        actor: UserId,
        details: TaskDetails,
        clock: &impl Clock,
    ) -> Result<(), DomainError> {
        if actor != self.requester {
            return Err(DomainError::NotTaskOwner(self.id));
        }
        if self.status != TaskStatus::Pending {
            return Err(DomainError::DetailsLocked(self.status.as_str()));
        }
        self.details = details;
        self.touch(clock);
        Ok(())
    }

    /// Records a new application and moves the task to
    /// `PendingConfirmation`. Engine-only: uniqueness and permission checks
    /// happen in the lifecycle pipeline.
    pub(crate) fn record_application(&mut self, application: Application, now: DateTime<Utc>) {
        self.applicants.push(application);
        self.status = TaskStatus::PendingConfirmation;
        self.updated_at = now;
    }

    /// Removes the given provider's application, leaving the status alone.
    pub(crate) fn remove_application(&mut self, provider: UserId, now: DateTime<Utc>) {
        self.applicants
            .retain(|application| application.provider() != provider);
        self.updated_at = now;
    }

    /// Assigns the chosen provider: their application becomes `Selected`,
    /// every sibling `Rejected`, the quorum is initialized, and the task
    /// enters `InProgress`.
    pub(crate) fn assign_provider(&mut self, provider: UserId, now: DateTime<Utc>) {
        for application in &mut self.applicants {
            if application.provider() == provider {
                application.mark_selected();
            } else {
                application.mark_rejected();
            }
        }
        self.assigned_provider = Some(provider);
        self.completion = Some(CompletionQuorum::new());
        self.status = TaskStatus::InProgress;
        self.updated_at = now;
    }

    /// Records one party's completion confirmation and resolves the
    /// resulting status: both confirmed stamps `completed_at` and completes
    /// the task; one confirmation parks it in `PendingCompletion`.
    pub(crate) fn record_confirmation(&mut self, role: Role, now: DateTime<Utc>) {
        let quorum = self.completion.unwrap_or_default().confirm(role);
        self.completion = Some(quorum);
        if quorum.is_reached() {
            self.status = TaskStatus::Completed;
            self.completed_at = Some(now);
        } else {
            self.status = TaskStatus::PendingCompletion;
        }
        self.updated_at = now;
    }

    /// Cancels the task and stamps `cancelled_at`.
    pub(crate) fn cancel(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Cancelled;
        self.cancelled_at = Some(now);
        self.updated_at = now;
    }

    /// Drops the application roster (sanitization only).
    pub(crate) fn clear_applicants(&mut self) {
        self.applicants.clear();
    }

    /// Drops assignment state (sanitization only).
    pub(crate) const fn clear_assignment(&mut self) {
        self.assigned_provider = None;
        self.completion = None;
    }

    /// Drops the completion timestamp (sanitization only).
    pub(crate) const fn clear_completed_at(&mut self) {
        self.completed_at = None;
    }

    /// Drops the cancellation timestamp (sanitization only).
    pub(crate) const fn clear_cancelled_at(&mut self) {
        self.cancelled_at = None;
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
