//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::marketplace::{
    domain::{Task, TaskId, UserId},
    ports::{StoreVersion, TaskRepository, TaskRepositoryError, TaskRepositoryResult, Versioned},
};

/// Thread-safe in-memory task repository with compare-and-swap versioning.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Versioned<Task>>,
    requester_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn provider_touches(task: &Task, provider: UserId) -> bool {
    task.assigned_provider() == Some(provider) || task.application_of(provider).is_some()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<StoreVersion> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .requester_index
            .entry(task.requester())
            .or_default()
            .push(task.id());
        state.tasks.insert(
            task.id(),
            Versioned {
                record: task.clone(),
                version: StoreVersion::INITIAL,
            },
        );
        Ok(StoreVersion::INITIAL)
    }

    async fn update(
        &self,
        task: &Task,
        expected: StoreVersion,
    ) -> TaskRepositoryResult<StoreVersion> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;

        if stored.version != expected {
            return Err(TaskRepositoryError::VersionConflict {
                task_id: task.id(),
                expected,
                stored: stored.version,
            });
        }

        stored.record = task.clone();
        stored.version = stored.version.next();
        Ok(stored.version)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Versioned<Task>>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_requester(&self, requester: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .requester_index
            .get(&requester)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).map(|entry| entry.record.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn find_by_provider(&self, provider: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let tasks = state
            .tasks
            .values()
            .filter(|entry| provider_touches(&entry.record, provider))
            .map(|entry| entry.record.clone())
            .collect();
        Ok(tasks)
    }
}
