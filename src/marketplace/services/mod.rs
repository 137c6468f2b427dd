//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    LifecycleError, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, apply_event,
};
