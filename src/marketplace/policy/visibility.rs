//! Role-scoped field visibility per lifecycle status.

use crate::marketplace::domain::{Application, Role, Task, TaskDetails, TaskStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named bundle of related fields used as the unit of visibility control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    /// Title, description, category, budget, location.
    TaskDetails,
    /// The full application roster with dispositions.
    ApplicantRoster,
    /// Applicant profile and history details.
    ApplicantProfile,
    /// The acting provider's own application.
    OwnApplication,
    /// The counterparty's basic profile.
    CounterpartyProfile,
    /// The counterparty's contact channel (phone/IM handle).
    ContactChannel,
    /// Completion quorum flags and timestamps.
    CompletionProgress,
}

impl FieldGroup {
    /// All field groups.
    pub const ALL: [Self; 7] = [
        Self::TaskDetails,
        Self::ApplicantRoster,
        Self::ApplicantProfile,
        Self::OwnApplication,
        Self::CounterpartyProfile,
        Self::ContactChannel,
        Self::CompletionProgress,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskDetails => "task_details",
            Self::ApplicantRoster => "applicant_roster",
            Self::ApplicantProfile => "applicant_profile",
            Self::OwnApplication => "own_application",
            Self::CounterpartyProfile => "counterparty_profile",
            Self::ContactChannel => "contact_channel",
            Self::CompletionProgress => "completion_progress",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Visible and hidden field groups for one status/role combination.
///
/// The two sets are independently specified, mirroring the business
/// configuration they were lifted from: they are neither guaranteed
/// disjoint nor total over [`FieldGroup`]. A group absent from both sets is
/// not visible; a group present in both is not visible either. Always check
/// both via [`is_field_visible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Groups the role may see.
    pub visible: &'static [FieldGroup],
    /// Groups explicitly withheld from the role.
    pub hidden: &'static [FieldGroup],
}

impl Visibility {
    const fn new(visible: &'static [FieldGroup], hidden: &'static [FieldGroup]) -> Self {
        Self { visible, hidden }
    }
}

/// Returns the visibility entry for the given status and role.
///
/// Total over the finite domain; a gap would be a configuration defect.
#[must_use]
pub const fn visibility_for(status: TaskStatus, role: Role) -> Visibility {
    match (status, role) {
        (TaskStatus::Pending, Role::Requester) => Visibility::new(
            &[FieldGroup::TaskDetails, FieldGroup::ApplicantRoster],
            &[FieldGroup::ContactChannel, FieldGroup::CompletionProgress],
        ),
        (TaskStatus::Pending, Role::Provider) => Visibility::new(
            &[FieldGroup::TaskDetails, FieldGroup::CounterpartyProfile],
            &[
                FieldGroup::ContactChannel,
                FieldGroup::ApplicantRoster,
                FieldGroup::CompletionProgress,
            ],
        ),
        (TaskStatus::PendingConfirmation, Role::Requester) => Visibility::new(
            &[
                FieldGroup::TaskDetails,
                FieldGroup::ApplicantRoster,
                FieldGroup::ApplicantProfile,
            ],
            &[FieldGroup::ContactChannel, FieldGroup::CompletionProgress],
        ),
        (TaskStatus::PendingConfirmation, Role::Provider) => Visibility::new(
            &[
                FieldGroup::TaskDetails,
                FieldGroup::CounterpartyProfile,
                FieldGroup::OwnApplication,
            ],
            &[
                FieldGroup::ContactChannel,
                FieldGroup::ApplicantRoster,
                FieldGroup::ApplicantProfile,
            ],
        ),
        (TaskStatus::InProgress | TaskStatus::PendingCompletion, Role::Requester) => {
            Visibility::new(
                &[
                    FieldGroup::TaskDetails,
                    FieldGroup::ApplicantRoster,
                    FieldGroup::CounterpartyProfile,
                    FieldGroup::ContactChannel,
                    FieldGroup::CompletionProgress,
                ],
                &[],
            )
        }
        (TaskStatus::InProgress | TaskStatus::PendingCompletion, Role::Provider) => {
            Visibility::new(
                &[
                    FieldGroup::TaskDetails,
                    FieldGroup::OwnApplication,
                    FieldGroup::CounterpartyProfile,
                    FieldGroup::ContactChannel,
                    FieldGroup::CompletionProgress,
                ],
                &[FieldGroup::ApplicantRoster, FieldGroup::ApplicantProfile],
            )
        }
        (TaskStatus::Completed, Role::Requester | Role::Provider) => Visibility::new(
            &[
                FieldGroup::TaskDetails,
                FieldGroup::CounterpartyProfile,
                FieldGroup::CompletionProgress,
            ],
            &[FieldGroup::ContactChannel],
        ),
        (TaskStatus::Cancelled, Role::Requester | Role::Provider) => Visibility::new(
            &[FieldGroup::TaskDetails],
            &[
                FieldGroup::ContactChannel,
                FieldGroup::CompletionProgress,
                FieldGroup::ApplicantProfile,
            ],
        ),
    }
}

/// Returns whether `group` is visible to `role` at `status`: membership in
/// the visible set *and* absence from the hidden set. The sets are
/// independent, so both checks are required.
#[must_use]
pub fn is_field_visible(status: TaskStatus, role: Role, group: FieldGroup) -> bool {
    let visibility = visibility_for(status, role);
    visibility.visible.contains(&group) && !visibility.hidden.contains(&group)
}

/// Task projection with non-visible field groups dropped.
///
/// Covers the groups borne by the task record itself. User-borne groups
/// (`CounterpartyProfile`, `ContactChannel`) belong to the caller's user
/// store; callers gate those joins with [`is_field_visible`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier; always visible.
    pub id: crate::marketplace::domain::TaskId,
    /// Lifecycle status; always visible.
    pub status: TaskStatus,
    /// Detail block, when `TaskDetails` is visible.
    pub details: Option<TaskDetails>,
    /// Full roster, when `ApplicantRoster` is visible.
    pub applicants: Option<Vec<Application>>,
    /// The viewer's own application, when `OwnApplication` is visible.
    pub own_application: Option<Application>,
    /// Quorum flags, when `CompletionProgress` is visible.
    pub completion: Option<crate::marketplace::domain::CompletionQuorum>,
    /// Completion timestamp, when `CompletionProgress` is visible.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Projects `task` down to what `viewer` acting as `role` may see.
///
/// Redaction is a projection, not a validator: it never errors, whatever
/// shape the record is in.
#[must_use]
pub fn redact(task: &Task, role: Role, viewer: UserId) -> TaskView {
    let pick = |group: FieldGroup| is_field_visible(task.status(), role, group);

    TaskView {
        id: task.id(),
        status: task.status(),
        details: pick(FieldGroup::TaskDetails).then(|| task.details().clone()),
        applicants: pick(FieldGroup::ApplicantRoster).then(|| task.applicants().to_vec()),
        own_application: pick(FieldGroup::OwnApplication)
            .then(|| task.application_of(viewer).cloned())
            .flatten(),
        completion: pick(FieldGroup::CompletionProgress)
            .then(|| task.completion())
            .flatten(),
        completed_at: pick(FieldGroup::CompletionProgress)
            .then(|| task.completed_at())
            .flatten(),
    }
}
