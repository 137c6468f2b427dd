//! Port contracts for marketplace task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by lifecycle
//! services.

pub mod repository;

pub use repository::{
    StoreVersion, TaskRepository, TaskRepositoryError, TaskRepositoryResult, Versioned,
};
