//! Unit tests for the status transition table.

use crate::marketplace::domain::TaskStatus;
use crate::marketplace::policy::{TransitionCondition, condition_for, is_legal_transition};
use rstest::rstest;

#[rstest]
#[case(TaskStatus::Pending, TaskStatus::PendingConfirmation, true)]
#[case(TaskStatus::Pending, TaskStatus::InProgress, false)]
#[case(TaskStatus::Pending, TaskStatus::PendingCompletion, false)]
#[case(TaskStatus::Pending, TaskStatus::Completed, false)]
#[case(TaskStatus::Pending, TaskStatus::Cancelled, true)]
#[case(TaskStatus::Pending, TaskStatus::Pending, false)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::Pending, false)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::InProgress, true)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::PendingCompletion, false)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::Completed, false)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::Cancelled, true)]
#[case(TaskStatus::PendingConfirmation, TaskStatus::PendingConfirmation, false)]
#[case(TaskStatus::InProgress, TaskStatus::Pending, false)]
#[case(TaskStatus::InProgress, TaskStatus::PendingConfirmation, false)]
#[case(TaskStatus::InProgress, TaskStatus::PendingCompletion, true)]
#[case(TaskStatus::InProgress, TaskStatus::Completed, false)]
#[case(TaskStatus::InProgress, TaskStatus::Cancelled, false)]
#[case(TaskStatus::InProgress, TaskStatus::InProgress, false)]
#[case(TaskStatus::PendingCompletion, TaskStatus::Pending, false)]
#[case(TaskStatus::PendingCompletion, TaskStatus::PendingConfirmation, false)]
#[case(TaskStatus::PendingCompletion, TaskStatus::InProgress, false)]
#[case(TaskStatus::PendingCompletion, TaskStatus::Completed, true)]
#[case(TaskStatus::PendingCompletion, TaskStatus::Cancelled, false)]
#[case(TaskStatus::PendingCompletion, TaskStatus::PendingCompletion, false)]
fn is_legal_transition_returns_expected(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: bool,
) {
    assert_eq!(is_legal_transition(from, to), expected);
}

#[rstest]
#[case(TaskStatus::Completed)]
#[case(TaskStatus::Cancelled)]
fn terminal_statuses_have_no_outgoing_edges(#[case] from: TaskStatus) {
    assert!(from.is_terminal());
    for to in TaskStatus::ALL {
        assert!(
            !is_legal_transition(from, to),
            "unexpected edge {from} -> {to}"
        );
    }
}

#[rstest]
#[case(
    TaskStatus::Pending,
    TaskStatus::PendingConfirmation,
    TransitionCondition::HasApplicants
)]
#[case(
    TaskStatus::PendingConfirmation,
    TaskStatus::InProgress,
    TransitionCondition::ProviderSelected
)]
#[case(
    TaskStatus::InProgress,
    TaskStatus::PendingCompletion,
    TransitionCondition::SingleConfirmation
)]
#[case(
    TaskStatus::PendingCompletion,
    TaskStatus::Completed,
    TransitionCondition::QuorumReached
)]
#[case(
    TaskStatus::Pending,
    TaskStatus::Cancelled,
    TransitionCondition::RequesterInitiated
)]
#[case(
    TaskStatus::PendingConfirmation,
    TaskStatus::Cancelled,
    TransitionCondition::RequesterInitiated
)]
fn condition_for_names_each_edge(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
    #[case] expected: TransitionCondition,
) {
    assert_eq!(condition_for(from, to), Some(expected));
}

#[rstest]
fn completion_must_pass_through_pending_completion() {
    assert_eq!(condition_for(TaskStatus::InProgress, TaskStatus::Completed), None);
}

#[rstest]
fn condition_names_are_stable() {
    assert_eq!(TransitionCondition::HasApplicants.as_str(), "has_applicants");
    assert_eq!(TransitionCondition::QuorumReached.as_str(), "quorum_reached");
    assert_eq!(
        TransitionCondition::RetainsApplicant.to_string(),
        "retains_applicant"
    );
}
