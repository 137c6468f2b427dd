//! Task lifecycle statuses.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a marketplace task.
///
/// The lifecycle is totally ordered with no back-edges:
/// `Pending → PendingConfirmation → InProgress → PendingCompletion →
/// Completed`, with `Cancelled` reachable as a side-exit from `Pending` and
/// `PendingConfirmation` only. Which edges are legal is owned by
/// [`crate::marketplace::policy::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is posted and open for applications.
    Pending,
    /// Applications exist; the requester is choosing a provider.
    PendingConfirmation,
    /// A provider is assigned and working.
    InProgress,
    /// Exactly one party has confirmed completion.
    PendingCompletion,
    /// Both parties confirmed; the task is done.
    Completed,
    /// The requester cancelled the task before work started.
    Cancelled,
}

impl TaskStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::PendingConfirmation,
        Self::InProgress,
        Self::PendingCompletion,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PendingConfirmation => "pending_confirmation",
            Self::InProgress => "in_progress",
            Self::PendingCompletion => "pending_completion",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns whether an assigned provider must be present.
    #[must_use]
    pub const fn requires_assignment(self) -> bool {
        matches!(
            self,
            Self::InProgress | Self::PendingCompletion | Self::Completed
        )
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "pending_confirmation" => Ok(Self::PendingConfirmation),
            "in_progress" => Ok(Self::InProgress),
            "pending_completion" => Ok(Self::PendingCompletion),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
