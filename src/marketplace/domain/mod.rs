//! Domain model for marketplace task lifecycle management.
//!
//! Pure entities and value types with no infrastructure dependencies:
//! identifiers, roles, statuses, applications, the completion quorum, the
//! task aggregate, and the lifecycle event vocabulary.

mod application;
mod error;
mod event;
mod ids;
mod quorum;
mod role;
mod status;
mod task;

pub use application::{Application, ApplicationDisposition};
pub use error::{DomainError, ParseRoleError, ParseTaskStatusError};
pub use event::{LifecycleEvent, TaskAction};
pub use ids::{Budget, CategoryName, LocationName, TaskId, TaskTitle, UserId};
pub use quorum::CompletionQuorum;
pub use role::Role;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDetails};
