//! # Tasklist Core
//!
//! Pure state management for the tasklist application.
//!
//! This crate is the functional core: it knows nothing about terminals,
//! timers, or I/O. Everything here is a value type or a pure function over
//! value types, driven from the outside through the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: the screen's state snapshot ([`screen::ScreenState`])
//! - **Action**: all possible inputs to a reducer ([`screen::ScreenAction`])
//! - **Reducer**: `(State, Action, Environment) → Effects`
//! - **Effect**: follow-up actions returned by reducers, executed by the store
//! - **Environment**: injected dependencies behind traits (clock, id source)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow: presentation sends actions up, snapshots flow
//!   back down
//! - No shared mutable state: the collection is owned by the store and copied
//!   on every mutation

pub mod effect;
pub mod environment;
pub mod reducer;
pub mod screen;
pub mod task;

// Re-export so reducers can name their return type without depending on
// smallvec directly.
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use reducer::Reducer;
