//! Legal status transitions and the business conditions licensing them.

use crate::marketplace::domain::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Business predicate that must hold for an edge (or in-state mutation) to
/// fire. The table only names conditions; the lifecycle engine evaluates
/// them against the event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCondition {
    /// At least one application exists on the task.
    HasApplicants,
    /// The requester has selected exactly one application.
    ProviderSelected,
    /// Exactly one party has confirmed completion.
    SingleConfirmation,
    /// Both parties have confirmed completion.
    QuorumReached,
    /// The edge is requester-initiated and otherwise unconditional.
    RequesterInitiated,
    /// A provider may hold at most one application per task.
    UniqueApplicant,
    /// The referenced provider must hold an application on the task.
    KnownApplicant,
    /// A withdrawal may not empty the application roster; the lifecycle has
    /// no back-edge to `Pending`.
    RetainsApplicant,
}

impl TransitionCondition {
    /// Returns the canonical condition name surfaced in rejections.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HasApplicants => "has_applicants",
            Self::ProviderSelected => "provider_selected",
            Self::SingleConfirmation => "single_confirmation",
            Self::QuorumReached => "quorum_reached",
            Self::RequesterInitiated => "requester_initiated",
            Self::UniqueApplicant => "unique_applicant",
            Self::KnownApplicant => "known_applicant",
            Self::RetainsApplicant => "retains_applicant",
        }
    }
}

impl fmt::Display for TransitionCondition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Returns the condition licensing the `from → to` edge, or `None` when no
/// such edge exists.
///
/// `InProgress → Completed` is deliberately absent: completion must pass
/// through `PendingCompletion`, one confirmation at a time. `Completed` and
/// `Cancelled` have no outgoing edges.
#[must_use]
pub const fn condition_for(from: TaskStatus, to: TaskStatus) -> Option<TransitionCondition> {
    match (from, to) {
        (TaskStatus::Pending, TaskStatus::PendingConfirmation) => {
            Some(TransitionCondition::HasApplicants)
        }
        (TaskStatus::PendingConfirmation, TaskStatus::InProgress) => {
            Some(TransitionCondition::ProviderSelected)
        }
        (TaskStatus::InProgress, TaskStatus::PendingCompletion) => {
            Some(TransitionCondition::SingleConfirmation)
        }
        (TaskStatus::PendingCompletion, TaskStatus::Completed) => {
            Some(TransitionCondition::QuorumReached)
        }
        (TaskStatus::Pending | TaskStatus::PendingConfirmation, TaskStatus::Cancelled) => {
            Some(TransitionCondition::RequesterInitiated)
        }
        _ => None,
    }
}

/// Returns whether the `from → to` edge exists in the lifecycle table.
#[must_use]
pub const fn is_legal_transition(from: TaskStatus, to: TaskStatus) -> bool {
    condition_for(from, to).is_some()
}
