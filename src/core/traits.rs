//! Core trait for state reducers
//!
//! The session only knows about this trait, so a different reducer can be
//! plugged in without touching the coordination code.

/// A pure state transition function
///
/// Implementations must not mutate `state` and must return a value for every
/// input: rejected or unknown actions produce a state, never an error.
pub trait Reducer {
    /// The state the reducer transforms
    type State: Clone;

    /// The actions the reducer accepts
    type Action;

    /// Compute the next state from the current state and an action
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}
