//! In-memory adapters backing the ports for tests and local runs.

mod task;

pub use task::InMemoryTaskRepository;
