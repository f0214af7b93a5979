//! # Tasklist Testing
//!
//! Testing utilities for tasklist reducers:
//!
//! - [`ReducerTest`]: a fluent Given-When-Then builder for single-action
//!   reducer tests
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`environment`]: deterministic environment doubles (fixed clock,
//!   counter-backed ids)

pub mod environment;

pub use reducer_test::{ReducerTest, assertions};
