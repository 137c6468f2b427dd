//! Unit tests for status-conditional invariant validation.

use super::support::{fixture_at, sample_details};
use crate::marketplace::domain::{
    Application, CompletionQuorum, PersistedTaskData, Task, TaskId, TaskStatus, UserId,
};
use crate::marketplace::validation::{InvariantViolation, validate_task};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn persisted(status: TaskStatus) -> PersistedTaskData {
    let now = Utc::now();
    PersistedTaskData {
        id: TaskId::new(),
        requester: UserId::new(),
        details: sample_details(),
        status,
        applicants: Vec::new(),
        assigned_provider: None,
        completion: None,
        completed_at: None,
        cancelled_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn selected_application(provider: UserId) -> Application {
    let mut application = Application::new(provider, Utc::now());
    application.mark_selected();
    application
}

#[rstest]
#[case(TaskStatus::Pending)]
#[case(TaskStatus::PendingConfirmation)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::PendingCompletion)]
#[case(TaskStatus::Completed)]
#[case(TaskStatus::Cancelled)]
fn engine_built_records_validate(#[case] status: TaskStatus, clock: DefaultClock) {
    let fixture = fixture_at(status, &clock);
    let report = validate_task(&fixture.task);
    assert!(report.is_ok(), "unexpected violations: {:?}", report.violations());
}

#[rstest]
fn pending_rejects_stale_assignment_fields() {
    let mut data = persisted(TaskStatus::Pending);
    let provider = UserId::new();
    data.assigned_provider = Some(provider);
    data.completion = Some(CompletionQuorum::new());
    data.completed_at = Some(Utc::now());

    let report = validate_task(&Task::from_persisted(data));
    let violations = report.violations();
    assert!(violations.contains(&InvariantViolation::UnexpectedAssignee(TaskStatus::Pending)));
    assert!(violations.contains(&InvariantViolation::UnexpectedCompletionQuorum(
        TaskStatus::Pending
    )));
    assert!(violations.contains(&InvariantViolation::UnexpectedCompletedAt(TaskStatus::Pending)));
}

#[rstest]
fn pending_confirmation_requires_applicants() {
    let data = persisted(TaskStatus::PendingConfirmation);
    let report = validate_task(&Task::from_persisted(data));
    assert!(report.violations().contains(&InvariantViolation::MissingApplicants(
        TaskStatus::PendingConfirmation
    )));
}

#[rstest]
fn in_progress_requires_assignment_and_quorum() {
    let provider = UserId::new();
    let mut data = persisted(TaskStatus::InProgress);
    data.applicants = vec![selected_application(provider)];

    let report = validate_task(&Task::from_persisted(data));
    let violations = report.violations();
    assert!(violations.contains(&InvariantViolation::MissingAssignee(TaskStatus::InProgress)));
    assert!(violations.contains(&InvariantViolation::MissingCompletionQuorum(
        TaskStatus::InProgress
    )));
}

#[rstest]
fn in_progress_rejects_premature_confirmations() {
    let provider = UserId::new();
    let mut data = persisted(TaskStatus::InProgress);
    data.applicants = vec![selected_application(provider)];
    data.assigned_provider = Some(provider);
    data.completion = Some(CompletionQuorum::from_flags(true, false));

    let report = validate_task(&Task::from_persisted(data));
    assert!(report
        .violations()
        .contains(&InvariantViolation::ConfirmationAheadOfStatus));
}

#[rstest]
fn pending_completion_requires_exactly_one_confirmation() {
    let provider = UserId::new();
    let mut data = persisted(TaskStatus::PendingCompletion);
    data.applicants = vec![selected_application(provider)];
    data.assigned_provider = Some(provider);
    data.completion = Some(CompletionQuorum::new());

    let report = validate_task(&Task::from_persisted(data));
    assert!(report.violations().contains(&InvariantViolation::QuorumMismatch));
}

#[rstest]
fn completed_requires_quorum_and_timestamp() {
    let provider = UserId::new();
    let mut data = persisted(TaskStatus::Completed);
    data.applicants = vec![selected_application(provider)];
    data.assigned_provider = Some(provider);
    data.completion = Some(CompletionQuorum::from_flags(true, false));

    let report = validate_task(&Task::from_persisted(data));
    let violations = report.violations();
    assert!(violations.contains(&InvariantViolation::QuorumIncomplete));
    assert!(violations.contains(&InvariantViolation::MissingCompletedAt));
}

#[rstest]
fn cancelled_requires_timestamp_but_any_roster() {
    let data = persisted(TaskStatus::Cancelled);
    let report = validate_task(&Task::from_persisted(data));
    assert_eq!(
        report.violations(),
        &[InvariantViolation::MissingCancelledAt]
    );
}

#[rstest]
fn selection_must_match_assignee() {
    let provider = UserId::new();
    let impostor = UserId::new();
    let mut data = persisted(TaskStatus::InProgress);
    data.applicants = vec![selected_application(provider)];
    data.assigned_provider = Some(impostor);
    data.completion = Some(CompletionQuorum::new());

    let report = validate_task(&Task::from_persisted(data));
    assert!(report
        .violations()
        .contains(&InvariantViolation::SelectionMismatch(TaskStatus::InProgress)));
}
