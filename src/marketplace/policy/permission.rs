//! Role-scoped permissions per lifecycle status.

use crate::marketplace::domain::{Role, TaskAction, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse-grained bundle of task fields used for view/edit grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Title, description, category, budget, location.
    Details,
    /// The application roster and its dispositions.
    Applications,
    /// The assigned provider.
    Assignment,
    /// Completion quorum state and timestamps.
    Completion,
    /// Post-completion rating controls.
    Ratings,
}

impl FieldCategory {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Applications => "applications",
            Self::Assignment => "assignment",
            Self::Completion => "completion",
            Self::Ratings => "ratings",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// What a role may see, change, and invoke at a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    /// Field categories the role may view.
    pub viewable: &'static [FieldCategory],
    /// Field categories the role may edit.
    pub editable: &'static [FieldCategory],
    /// Actions the role may invoke.
    pub actions: &'static [TaskAction],
}

impl Permissions {
    const fn new(
        viewable: &'static [FieldCategory],
        editable: &'static [FieldCategory],
        actions: &'static [TaskAction],
    ) -> Self {
        Self {
            viewable,
            editable,
            actions,
        }
    }

    /// Returns whether the action set contains `action`.
    #[must_use]
    pub fn allows(&self, action: TaskAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Returns the permission entry for the given status and role.
///
/// Total over the finite domain: every combination maps to an entry,
/// possibly with empty sets. A gap here would be a configuration defect,
/// not a silent deny.
#[must_use]
pub const fn permissions_for(status: TaskStatus, role: Role) -> Permissions {
    match (status, role) {
        (TaskStatus::Pending, Role::Requester) => Permissions::new(
            &[FieldCategory::Details, FieldCategory::Applications],
            &[FieldCategory::Details],
            &[
                TaskAction::EditTask,
                TaskAction::DeleteTask,
                TaskAction::CancelTask,
            ],
        ),
        (TaskStatus::Pending, Role::Provider) => {
            Permissions::new(&[FieldCategory::Details], &[], &[TaskAction::Apply])
        }
        (TaskStatus::PendingConfirmation, Role::Requester) => Permissions::new(
            &[FieldCategory::Details, FieldCategory::Applications],
            &[],
            &[TaskAction::SelectProvider, TaskAction::CancelTask],
        ),
        (TaskStatus::PendingConfirmation, Role::Provider) => Permissions::new(
            &[FieldCategory::Details, FieldCategory::Applications],
            &[],
            &[TaskAction::Apply, TaskAction::WithdrawApplication],
        ),
        (TaskStatus::InProgress | TaskStatus::PendingCompletion, Role::Requester) => {
            Permissions::new(
                &[
                    FieldCategory::Details,
                    FieldCategory::Applications,
                    FieldCategory::Assignment,
                    FieldCategory::Completion,
                ],
                &[],
                &[TaskAction::ConfirmCompletion],
            )
        }
        (TaskStatus::InProgress | TaskStatus::PendingCompletion, Role::Provider) => {
            Permissions::new(
                &[
                    FieldCategory::Details,
                    FieldCategory::Assignment,
                    FieldCategory::Completion,
                ],
                &[],
                &[TaskAction::ConfirmCompletion],
            )
        }
        (TaskStatus::Completed, Role::Requester | Role::Provider) => Permissions::new(
            &[
                FieldCategory::Details,
                FieldCategory::Assignment,
                FieldCategory::Completion,
                FieldCategory::Ratings,
            ],
            &[],
            &[TaskAction::Rate],
        ),
        (TaskStatus::Cancelled, Role::Requester | Role::Provider) => {
            Permissions::new(&[FieldCategory::Details], &[], &[])
        }
    }
}

/// Returns whether `role` may invoke `action` while the task sits at
/// `status`. Membership only; no side effects. Every mutating entry point
/// checks this before running a transition.
#[must_use]
pub fn can_perform_action(status: TaskStatus, role: Role, action: TaskAction) -> bool {
    permissions_for(status, role).allows(action)
}
