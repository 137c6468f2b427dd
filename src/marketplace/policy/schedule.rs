//! Declarative timing thresholds for lifecycle follow-ups.
//!
//! The engine only evaluates deadlines against an injected `now`; firing
//! reminders, auto-cancellations, or escalations on a clock belongs to an
//! external scheduler.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Timing thresholds, in hours, governing lifecycle follow-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// Window for a party to confirm completion before it counts as overdue.
    pub confirmation_window_hours: i64,
    /// Cadence for reminding the party that has not yet confirmed.
    pub reminder_interval_hours: i64,
    /// Age at which a still-unconfirmed `Pending` task becomes eligible for
    /// auto-cancellation.
    pub auto_cancel_after_hours: i64,
    /// Age at which an unresolved task is escalated to support.
    pub escalation_after_hours: i64,
    /// Age at which an unresolved task is escalated a second time.
    pub second_escalation_after_hours: i64,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            confirmation_window_hours: 24,
            reminder_interval_hours: 6,
            auto_cancel_after_hours: 72,
            escalation_after_hours: 7 * 24,
            second_escalation_after_hours: 14 * 24,
        }
    }
}

impl SchedulePolicy {
    /// Returns the instant by which the outstanding confirmation is due,
    /// given when the task entered the confirmation-bearing status.
    #[must_use]
    pub fn confirmation_deadline(&self, entered_at: DateTime<Utc>) -> DateTime<Utc> {
        entered_at + Duration::hours(self.confirmation_window_hours)
    }

    /// Returns whether the outstanding confirmation is overdue at `now`.
    #[must_use]
    pub fn is_confirmation_overdue(&self, entered_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now > self.confirmation_deadline(entered_at)
    }

    /// Returns the next reminder instant no earlier than `now`, or `None`
    /// once the confirmation window has lapsed. A cadence that is
    /// non-positive or too large for [`Duration`] yields no reminders.
    #[must_use]
    pub fn next_reminder(
        &self,
        entered_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let interval = Duration::try_hours(self.reminder_interval_hours)
            .filter(|interval| *interval > Duration::zero())?;
        let deadline = self.confirmation_deadline(entered_at);
        let mut candidate = entered_at + interval;
        while candidate < now {
            candidate += interval;
        }
        (candidate <= deadline).then_some(candidate)
    }

    /// Returns whether an unconfirmed task created at `created_at` is
    /// eligible for auto-cancellation at `now`.
    #[must_use]
    pub fn auto_cancel_due(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now > created_at + Duration::hours(self.auto_cancel_after_hours)
    }

    /// Returns whether an unresolved task created at `created_at` has
    /// reached the first escalation threshold at `now`.
    #[must_use]
    pub fn escalation_due(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now > created_at + Duration::hours(self.escalation_after_hours)
    }

    /// Returns whether an unresolved task created at `created_at` has
    /// reached the second escalation threshold at `now`.
    #[must_use]
    pub fn second_escalation_due(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now > created_at + Duration::hours(self.second_escalation_after_hours)
    }
}
