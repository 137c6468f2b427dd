//! Vespid: lifecycle policy engine for a two-sided task marketplace.
//!
//! This crate provides the core rules of a pest-control task marketplace:
//! the task lifecycle state machine, the role-scoped permission and
//! field-visibility policies, the two-party completion quorum, and the
//! invariant validation and sanitization that keep every task record
//! consistent with its declared status.
//!
//! # Architecture
//!
//! Vespid follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Policy**: Declarative transition, permission, and visibility tables
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! The engine itself is synchronous, stateless, pure-function logic over
//! explicit task snapshots; storage, clocks, and authentication are
//! injected collaborators. Single-writer-per-task discipline is enforced at
//! the storage port via optimistic versioning.
//!
//! # Modules
//!
//! - [`marketplace`]: Task lifecycle, policies, validation, and services

pub mod marketplace;
