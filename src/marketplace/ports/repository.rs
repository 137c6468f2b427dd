//! Repository port for task persistence with optimistic concurrency.

use crate::marketplace::domain::{Task, TaskId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Monotonically increasing per-task write version.
///
/// The lifecycle engine is pure and assumes a single-writer-per-task
/// discipline; the repository enforces it by rejecting updates whose
/// expected version no longer matches. Two racing `confirm_completion`
/// writers therefore cannot both commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreVersion(u64);

impl StoreVersion {
    /// Version assigned to a freshly stored task.
    pub const INITIAL: Self = Self(1);

    /// Creates a version from a raw counter.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the successor version.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for StoreVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record together with the store version it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    /// The stored record.
    pub record: T,
    /// The version the record was read at; pass back to `update`.
    pub version: StoreVersion,
}

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task at [`StoreVersion::INITIAL`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<StoreVersion>;

    /// Replaces an existing task, provided `expected` still matches the
    /// stored version, and returns the new version.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist, or [`TaskRepositoryError::VersionConflict`] when another
    /// writer committed first; the caller re-reads and retries.
    async fn update(&self, task: &Task, expected: StoreVersion)
    -> TaskRepositoryResult<StoreVersion>;

    /// Finds a task and its current version by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Versioned<Task>>>;

    /// Returns all tasks posted by the given requester.
    async fn find_by_requester(&self, requester: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks on which the given provider holds an application
    /// or an assignment.
    async fn find_by_provider(&self, provider: UserId) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Another writer committed between read and update.
    #[error("version conflict on task {task_id}: expected {expected}, stored {stored}")]
    VersionConflict {
        /// The contested task.
        task_id: TaskId,
        /// The version the caller read.
        expected: StoreVersion,
        /// The version currently stored.
        stored: StoreVersion,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
