//! Unit tests for marketplace lifecycle behaviour.

mod invariant_tests;
mod support;
mod transition_tests;
