//! Shared fixtures for lifecycle tests.

use crate::marketplace::domain::{
    Budget, CategoryName, LifecycleEvent, LocationName, Role, Task, TaskDetails, TaskStatus,
    TaskTitle, UserId,
};
use crate::marketplace::services::apply_event;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};

/// A task plus the actors that drive its lifecycle in tests.
pub struct Fixture {
    /// The task owner.
    pub requester: UserId,
    /// First applying provider; the one selection picks.
    pub provider_one: UserId,
    /// Second applying provider; rejected on selection.
    pub provider_two: UserId,
    /// The task itself, advanced to the requested status.
    pub task: Task,
}

/// Builds a valid detail block.
pub fn sample_details() -> TaskDetails {
    TaskDetails {
        title: TaskTitle::new("Wasp nest under the eaves").expect("valid title"),
        description: "Active nest above the back door, needs removal".to_owned(),
        category: CategoryName::new("insect-control").expect("valid category"),
        budget: Budget::new(12_500).expect("valid budget"),
        location: LocationName::new("Dunford, rear garden").expect("valid location"),
    }
}

fn step(task: &Task, role: Role, event: &LifecycleEvent, now: DateTime<Utc>) -> Task {
    apply_event(task, role, event, now).expect("fixture transition should succeed")
}

/// Builds a fixture whose task sits at `status`, advanced there through the
/// engine itself so every intermediate record is valid. `Cancelled`
/// fixtures cancel out of `PendingConfirmation`, keeping the roster.
pub fn fixture_at(status: TaskStatus, clock: &DefaultClock) -> Fixture {
    let requester = UserId::new();
    let provider_one = UserId::new();
    let provider_two = UserId::new();
    let now = clock.utc();

    let mut task = Task::new(requester, sample_details(), clock);
    if status == TaskStatus::Pending {
        return Fixture {
            requester,
            provider_one,
            provider_two,
            task,
        };
    }

    task = step(
        &task,
        Role::Provider,
        &LifecycleEvent::Apply {
            provider: provider_one,
        },
        now,
    );
    task = step(
        &task,
        Role::Provider,
        &LifecycleEvent::Apply {
            provider: provider_two,
        },
        now,
    );
    if status == TaskStatus::Cancelled {
        task = step(&task, Role::Requester, &LifecycleEvent::Cancel, now);
    }
    if matches!(
        status,
        TaskStatus::InProgress | TaskStatus::PendingCompletion | TaskStatus::Completed
    ) {
        task = step(
            &task,
            Role::Requester,
            &LifecycleEvent::SelectProvider {
                provider: provider_one,
            },
            now,
        );
    }
    if matches!(
        status,
        TaskStatus::PendingCompletion | TaskStatus::Completed
    ) {
        task = step(&task, Role::Provider, &LifecycleEvent::ConfirmCompletion, now);
    }
    if status == TaskStatus::Completed {
        task = step(
            &task,
            Role::Requester,
            &LifecycleEvent::ConfirmCompletion,
            now,
        );
    }

    assert_eq!(task.status(), status, "fixture reached the wrong status");
    Fixture {
        requester,
        provider_one,
        provider_two,
        task,
    }
}
