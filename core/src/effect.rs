//! Side effect descriptions.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the store. In this
//! application the only side effect a reducer ever requests is feeding a
//! follow-up action back into the reducer: this is how a child component
//! (input field, list row) delivers a mutation request upward to the owner of
//! the task collection.

/// Effect type - describes a side effect to be executed
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Feed an action back into the reducer.
    ///
    /// The store dispatches the action after the current reduction completes,
    /// before handing control back to the caller.
    Send(Action),
}

impl<Action> Effect<Action> {
    /// Returns `true` if this effect does nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Map the action type carried by this effect.
    pub fn map<B>(self, f: impl FnOnce(Action) -> B) -> Effect<B> {
        match self {
            Self::None => Effect::None,
            Self::Send(action) => Effect::Send(f(action)),
        }
    }
}
