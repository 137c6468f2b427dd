//! Marketplace participant roles.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user acts under when driving a task's lifecycle.
///
/// Requesters post tasks; providers apply for and fulfil them. Every policy
/// lookup and lifecycle event is scoped to one of these two roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The user who posted the task.
    Requester,
    /// A user bidding on or fulfilling the task.
    Provider,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Provider => "provider",
        }
    }

    /// Returns the opposite side of the marketplace.
    #[must_use]
    pub const fn counterparty(self) -> Self {
        match self {
            Self::Requester => Self::Provider,
            Self::Provider => Self::Requester,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "requester" => Ok(Self::Requester),
            "provider" => Ok(Self::Provider),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
