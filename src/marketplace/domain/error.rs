//! Error types for marketplace domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The category label is empty after trimming.
    #[error("task category must not be empty")]
    EmptyCategory,

    /// The location description is empty after trimming.
    #[error("task location must not be empty")]
    EmptyLocation,

    /// The budget is zero or exceeds the persistable maximum.
    #[error("invalid budget {0}, expected a positive amount within i64 range")]
    InvalidBudget(u64),

    /// A detail edit was attempted by someone other than the owner.
    #[error("acting user does not own task {0}")]
    NotTaskOwner(TaskId),

    /// A detail edit was attempted after the task left `Pending`.
    #[error("task details are locked in status {0}")]
    DetailsLocked(&'static str),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing marketplace roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown marketplace role: {0}")]
pub struct ParseRoleError(pub String);
