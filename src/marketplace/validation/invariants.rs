//! Status-conditional invariant validation for task records.

use crate::marketplace::domain::{ApplicationDisposition, Task, TaskStatus};
use thiserror::Error;

/// A single way a task record disagrees with its declared status.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The roster is empty where the status requires applicants.
    #[error("status {0} requires a non-empty application roster")]
    MissingApplicants(TaskStatus),

    /// The roster is non-empty in `Pending`.
    #[error("status pending requires an empty application roster")]
    UnexpectedApplicants,

    /// No assigned provider where the status requires one.
    #[error("status {0} requires an assigned provider")]
    MissingAssignee(TaskStatus),

    /// An assigned provider is present before assignment is possible.
    #[error("status {0} forbids an assigned provider")]
    UnexpectedAssignee(TaskStatus),

    /// No completion quorum where the status requires one.
    #[error("status {0} requires completion confirmation state")]
    MissingCompletionQuorum(TaskStatus),

    /// Completion quorum state exists before work started.
    #[error("status {0} forbids completion confirmation state")]
    UnexpectedCompletionQuorum(TaskStatus),

    /// No completion timestamp on a completed task.
    #[error("status completed requires a completion timestamp")]
    MissingCompletedAt,

    /// A completion timestamp outside `Completed`.
    #[error("status {0} forbids a completion timestamp")]
    UnexpectedCompletedAt(TaskStatus),

    /// No cancellation timestamp on a cancelled task.
    #[error("status cancelled requires a cancellation timestamp")]
    MissingCancelledAt,

    /// A cancellation timestamp outside `Cancelled`.
    #[error("status {0} forbids a cancellation timestamp")]
    UnexpectedCancelledAt(TaskStatus),

    /// Confirmation flags are set while the status is still `InProgress`.
    #[error("status in_progress requires an empty completion quorum")]
    ConfirmationAheadOfStatus,

    /// `PendingCompletion` without exactly one confirmation.
    #[error("status pending_completion requires exactly one confirmation")]
    QuorumMismatch,

    /// `Completed` without both confirmations.
    #[error("status completed requires both confirmations")]
    QuorumIncomplete,

    /// The selected application does not match the assigned provider, or
    /// the roster does not hold exactly one selected application.
    #[error("status {0} requires exactly one selected application matching the assignee")]
    SelectionMismatch(TaskStatus),
}

/// Outcome of validating one task record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    violations: Vec<InvariantViolation>,
}

impl ValidationReport {
    /// Returns whether no invariant was violated.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violated invariants, in evaluation order.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Consumes the report, yielding the violation list.
    #[must_use]
    pub fn into_violations(self) -> Vec<InvariantViolation> {
        self.violations
    }

    fn check(&mut self, holds: bool, violation: InvariantViolation) {
        if !holds {
            self.violations.push(violation);
        }
    }
}

/// Re-derives, from the task's status alone, the required presence or
/// absence of its lifecycle-conditional fields, and reports every
/// disagreement.
///
/// Run as a post-condition after every transition; equally usable against
/// records arriving from storage, defending against partial writes.
#[must_use]
pub fn validate_task(task: &Task) -> ValidationReport {
    let mut report = ValidationReport::default();
    let status = task.status();

    check_applicants(task, status, &mut report);
    check_assignment(task, status, &mut report);
    check_quorum(task, status, &mut report);
    check_timestamps(task, status, &mut report);
    check_selection(task, status, &mut report);

    report
}

fn check_applicants(task: &Task, status: TaskStatus, report: &mut ValidationReport) {
    match status {
        TaskStatus::Pending => report.check(
            task.applicants().is_empty(),
            InvariantViolation::UnexpectedApplicants,
        ),
        TaskStatus::PendingConfirmation
        | TaskStatus::InProgress
        | TaskStatus::PendingCompletion
        | TaskStatus::Completed => report.check(
            !task.applicants().is_empty(),
            InvariantViolation::MissingApplicants(status),
        ),
        // Reachable from both Pending and PendingConfirmation, so either
        // roster shape is consistent.
        TaskStatus::Cancelled => {}
    }
}

fn check_assignment(task: &Task, status: TaskStatus, report: &mut ValidationReport) {
    if status.requires_assignment() {
        report.check(
            task.assigned_provider().is_some(),
            InvariantViolation::MissingAssignee(status),
        );
    } else {
        report.check(
            task.assigned_provider().is_none(),
            InvariantViolation::UnexpectedAssignee(status),
        );
    }
}

fn check_quorum(task: &Task, status: TaskStatus, report: &mut ValidationReport) {
    if status.requires_assignment() {
        report.check(
            task.completion().is_some(),
            InvariantViolation::MissingCompletionQuorum(status),
        );
    } else {
        report.check(
            task.completion().is_none(),
            InvariantViolation::UnexpectedCompletionQuorum(status),
        );
    }

    let Some(quorum) = task.completion() else {
        return;
    };
    match status {
        TaskStatus::InProgress => report.check(
            !quorum.is_partial() && !quorum.is_reached(),
            InvariantViolation::ConfirmationAheadOfStatus,
        ),
        TaskStatus::PendingCompletion => {
            report.check(quorum.is_partial(), InvariantViolation::QuorumMismatch);
        }
        TaskStatus::Completed => {
            report.check(quorum.is_reached(), InvariantViolation::QuorumIncomplete);
        }
        _ => {}
    }
}

fn check_timestamps(task: &Task, status: TaskStatus, report: &mut ValidationReport) {
    if status == TaskStatus::Completed {
        report.check(
            task.completed_at().is_some(),
            InvariantViolation::MissingCompletedAt,
        );
    } else {
        report.check(
            task.completed_at().is_none(),
            InvariantViolation::UnexpectedCompletedAt(status),
        );
    }

    if status == TaskStatus::Cancelled {
        report.check(
            task.cancelled_at().is_some(),
            InvariantViolation::MissingCancelledAt,
        );
    } else {
        report.check(
            task.cancelled_at().is_none(),
            InvariantViolation::UnexpectedCancelledAt(status),
        );
    }
}

fn check_selection(task: &Task, status: TaskStatus, report: &mut ValidationReport) {
    if !status.requires_assignment() {
        return;
    }
    let selected: Vec<_> = task
        .applicants()
        .iter()
        .filter(|application| application.disposition() == ApplicationDisposition::Selected)
        .collect();
    let consistent = match (selected.as_slice(), task.assigned_provider()) {
        ([only], Some(assignee)) => only.provider() == assignee,
        _ => false,
    };
    report.check(consistent, InvariantViolation::SelectionMismatch(status));
}
