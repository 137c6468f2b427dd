//! Two-party completion confirmation state.

use super::Role;
use serde::{Deserialize, Serialize};

/// Confirmation flags for the dual sign-off that gates task completion.
///
/// Initialized to both-false when a task enters `InProgress`. Confirming is
/// idempotent per role; the quorum is reached once both flags are true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionQuorum {
    requester_confirmed: bool,
    provider_confirmed: bool,
}

impl CompletionQuorum {
    /// Creates an empty quorum with neither party confirmed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requester_confirmed: false,
            provider_confirmed: false,
        }
    }

    /// Reconstructs a quorum from persisted flags.
    #[must_use]
    pub const fn from_flags(requester_confirmed: bool, provider_confirmed: bool) -> Self {
        Self {
            requester_confirmed,
            provider_confirmed,
        }
    }

    /// Returns whether the given role has confirmed.
    #[must_use]
    pub const fn confirmed_by(self, role: Role) -> bool {
        match role {
            Role::Requester => self.requester_confirmed,
            Role::Provider => self.provider_confirmed,
        }
    }

    /// Returns whether both parties have confirmed.
    #[must_use]
    pub const fn is_reached(self) -> bool {
        self.requester_confirmed && self.provider_confirmed
    }

    /// Returns whether exactly one party has confirmed.
    #[must_use]
    pub const fn is_partial(self) -> bool {
        self.requester_confirmed != self.provider_confirmed
    }

    /// Records the given role's confirmation. Re-confirming is a no-op.
    #[must_use]
    pub const fn confirm(self, role: Role) -> Self {
        match role {
            Role::Requester => Self {
                requester_confirmed: true,
                ..self
            },
            Role::Provider => Self {
                provider_confirmed: true,
                ..self
            },
        }
    }
}
