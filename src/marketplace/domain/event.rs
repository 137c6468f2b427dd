//! Lifecycle events and the policy action vocabulary.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action names the permission policy grants or withholds per status/role.
///
/// A superset of the lifecycle events: `EditTask`, `DeleteTask`, and `Rate`
/// are policy-only actions whose effects live with collaborators (detail
/// edits go through the aggregate, deletion and rating outside this core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    /// Submit an application on the task.
    Apply,
    /// Withdraw a previously submitted application.
    WithdrawApplication,
    /// Choose one applicant as the assigned provider.
    SelectProvider,
    /// Confirm one's own side of task completion.
    ConfirmCompletion,
    /// Cancel the task before work starts.
    CancelTask,
    /// Edit the task's detail fields.
    EditTask,
    /// Remove the task listing.
    DeleteTask,
    /// Rate the counterparty after completion.
    Rate,
}

impl TaskAction {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::WithdrawApplication => "withdraw_application",
            Self::SelectProvider => "select_provider",
            Self::ConfirmCompletion => "confirm_completion",
            Self::CancelTask => "cancel_task",
            Self::EditTask => "edit_task",
            Self::DeleteTask => "delete_task",
            Self::Rate => "rate",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// An external action entering the lifecycle engine.
///
/// Events carry the payload the engine needs to evaluate edge conditions
/// and mutate the task; the acting role travels alongside the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A provider submits an application.
    Apply {
        /// The applying provider.
        provider: UserId,
    },
    /// A provider withdraws their application.
    WithdrawApplication {
        /// The withdrawing provider.
        provider: UserId,
    },
    /// The requester selects an applicant.
    SelectProvider {
        /// The chosen provider; must hold an application on the task.
        provider: UserId,
    },
    /// The acting role confirms their side of completion.
    ConfirmCompletion,
    /// The requester cancels the task.
    Cancel,
}

impl LifecycleEvent {
    /// Returns the policy action this event invokes.
    #[must_use]
    pub const fn action(&self) -> TaskAction {
        match self {
            Self::Apply { .. } => TaskAction::Apply,
            Self::WithdrawApplication { .. } => TaskAction::WithdrawApplication,
            Self::SelectProvider { .. } => TaskAction::SelectProvider,
            Self::ConfirmCompletion => TaskAction::ConfirmCompletion,
            Self::Cancel => TaskAction::CancelTask,
        }
    }
}
