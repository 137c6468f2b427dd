//! Task lifecycle management for the marketplace.
//!
//! Implements the lifecycle state machine for two-sided task fulfilment:
//! requesters post tasks, providers apply, the requester selects one, and
//! both parties confirm completion through a dual sign-off. Role-scoped
//! permission and visibility tables govern what each side may do and see at
//! every status, and every mutation is invariant-checked and sanitized
//! before it leaves the engine. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Policy tables in [`policy`]
//! - Invariant validation and sanitization in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
