//! Step definitions for marketplace lifecycle behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
