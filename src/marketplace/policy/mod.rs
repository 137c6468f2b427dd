//! Declarative policy tables for the task lifecycle.
//!
//! Pure data plus lookup functions: which status transitions are legal and
//! under what conditions, what each role may see, edit, and invoke at each
//! status, and the timing thresholds an external scheduler evaluates. No
//! module here performs side effects or holds mutable state.

pub mod permission;
pub mod schedule;
pub mod transition;
pub mod visibility;

pub use permission::{FieldCategory, Permissions, can_perform_action, permissions_for};
pub use schedule::SchedulePolicy;
pub use transition::{TransitionCondition, condition_for, is_legal_transition};
pub use visibility::{FieldGroup, TaskView, Visibility, is_field_visible, redact, visibility_for};
