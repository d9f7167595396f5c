//! Reducer trait for unidirectional data flow.

use super::action::Action;
use super::state::State;

/// Reducer derives new state from actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> Result<State, Error>
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// The error returned for rejected transitions.
    type Error;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects. The input
    /// snapshot is borrowed and never mutated; on failure the caller's
    /// snapshot remains valid and unchanged.
    fn reduce(state: &Self::State, action: Self::Action) -> Result<Self::State, Self::Error>;
}
