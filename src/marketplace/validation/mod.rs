//! Post-transition invariant validation and status-scoped sanitization.

mod invariants;
mod sanitize;

pub use invariants::{InvariantViolation, ValidationReport, validate_task};
pub use sanitize::sanitize_task;
