//! # Tasklist Runtime
//!
//! The Store runtime that coordinates reducer execution and effect handling.
//!
//! The store owns the state, the reducer, and the environment. Every user
//! intent enters through [`Store::send`], which runs the reducer and then
//! drains any `Effect::Send` feedback actions until the state is quiescent,
//! all synchronously on the caller's thread. The UI event loop processes one
//! event to completion before the next, so there is no locking and no shared
//! mutable state.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//! store.send(Action::DoSomething);
//! let count = store.with_state(|s| s.items.len());
//! ```

use std::collections::VecDeque;
use tasklist_core::effect::Effect;
use tasklist_core::reducer::Reducer;
use tracing::{debug, trace};

/// Runtime owner of state, reducer, and environment.
///
/// All dispatch is synchronous: when [`Store::send`] returns, the state
/// already reflects the action and every feedback action it triggered.
pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    environment: R::Environment,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Action: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment.
    pub const fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Dispatch an action.
    ///
    /// Runs the reducer on `action`, then on every `Effect::Send` feedback
    /// action, breadth-first, until no effects remain.
    pub fn send(&mut self, action: R::Action) {
        let mut queue = VecDeque::new();
        queue.push_back(action);

        while let Some(action) = queue.pop_front() {
            debug!(?action, "dispatch");
            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);

            for effect in effects {
                match effect {
                    Effect::None => {}
                    Effect::Send(next) => {
                        trace!(?next, "feedback");
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    /// Read the current state snapshot.
    pub const fn state(&self) -> &R::State {
        &self.state
    }

    /// Read a projection of the current state.
    pub fn with_state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::reducer::Effects;
    use tasklist_core::smallvec;

    #[derive(Clone, Debug, Default)]
    struct CountState {
        count: i32,
        echoes: i32,
    }

    #[derive(Clone, Debug)]
    enum CountAction {
        Increment,
        // Increments, then asks the store to dispatch `Echo`.
        IncrementAndEcho,
        Echo,
    }

    struct CountReducer;

    impl Reducer for CountReducer {
        type State = CountState;
        type Action = CountAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Effects<Self::Action> {
            match action {
                CountAction::Increment => {
                    state.count += 1;
                    smallvec![]
                }
                CountAction::IncrementAndEcho => {
                    state.count += 1;
                    smallvec![Effect::None, Effect::Send(CountAction::Echo)]
                }
                CountAction::Echo => {
                    state.echoes += 1;
                    smallvec![]
                }
            }
        }
    }

    #[test]
    fn send_applies_the_reducer() {
        let mut store = Store::new(CountState::default(), CountReducer, ());
        store.send(CountAction::Increment);
        store.send(CountAction::Increment);

        assert_eq!(store.state().count, 2);
        assert_eq!(store.state().echoes, 0);
    }

    #[test]
    fn send_drains_feedback_before_returning() {
        let mut store = Store::new(CountState::default(), CountReducer, ());
        store.send(CountAction::IncrementAndEcho);

        assert_eq!(store.state().count, 1);
        assert_eq!(store.state().echoes, 1);
    }

    #[test]
    fn with_state_projects_the_snapshot() {
        let mut store = Store::new(CountState::default(), CountReducer, ());
        store.send(CountAction::Increment);

        assert_eq!(store.with_state(|s| s.count * 10), 10);
    }
}
