//! Provider applications on a pending task.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an application from the requester's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationDisposition {
    /// Awaiting the requester's decision.
    Pending,
    /// Chosen by the requester; the applicant becomes the assigned provider.
    Selected,
    /// Passed over when a sibling application was selected.
    Rejected,
}

impl ApplicationDisposition {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationDisposition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A provider's bid on a task, unique per provider within a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    provider: UserId,
    submitted_at: DateTime<Utc>,
    disposition: ApplicationDisposition,
}

impl Application {
    /// Creates a fresh application awaiting the requester's decision.
    #[must_use]
    pub const fn new(provider: UserId, submitted_at: DateTime<Utc>) -> Self {
        Self {
            provider,
            submitted_at,
            disposition: ApplicationDisposition::Pending,
        }
    }

    /// Returns the applying provider.
    #[must_use]
    pub const fn provider(&self) -> UserId {
        self.provider
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the current disposition.
    #[must_use]
    pub const fn disposition(&self) -> ApplicationDisposition {
        self.disposition
    }

    /// Marks this application as the requester's choice.
    pub const fn mark_selected(&mut self) {
        self.disposition = ApplicationDisposition::Selected;
    }

    /// Marks this application as passed over.
    pub const fn mark_rejected(&mut self) {
        self.disposition = ApplicationDisposition::Rejected;
    }
}
