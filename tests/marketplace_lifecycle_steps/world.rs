//! Shared world state for marketplace lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use vespid::marketplace::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        Budget, CategoryName, LocationName, Task, TaskDetails, TaskId, TaskTitle, UserId,
    },
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestLifecycleService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for marketplace lifecycle behaviour tests.
pub struct MarketplaceWorld {
    pub service: TestLifecycleService,
    pub requester: UserId,
    pub provider: UserId,
    pub task_id: Option<TaskId>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl MarketplaceWorld {
    /// Creates a world with fresh participants and empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            requester: UserId::new(),
            provider: UserId::new(),
            task_id: None,
            last_result: None,
        }
    }

    /// Returns the identifier of the task under test.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("no task has been posted in this scenario"))
    }
}

impl Default for MarketplaceWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MarketplaceWorld {
    MarketplaceWorld::default()
}

/// Builds the task details used across lifecycle scenarios.
pub fn scenario_details() -> Result<TaskDetails, eyre::Report> {
    Ok(TaskDetails {
        title: TaskTitle::new("Clear the gutters before autumn")?,
        description: "Single-storey cottage; ladder access from the rear yard.".to_owned(),
        category: CategoryName::new("home-maintenance")?,
        budget: Budget::new(9_500)?,
        location: LocationName::new("Ludlow")?,
    })
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
