//! Session: the single owner of the account state
//!
//! A session holds the current state between reducer calls and replaces it
//! with the reducer's result on every dispatch. Actions are applied one at a
//! time, in call order.

use crate::core::reducer::AccountReducer;
use crate::core::traits::Reducer;
use crate::types::AccountState;
use tracing::trace;

/// Holds the current state and routes actions through a reducer
#[derive(Debug, Clone)]
pub struct Session<R: Reducer = AccountReducer> {
    state: R::State,
    dispatched: u64,
}

impl Session<AccountReducer> {
    /// Create a session starting from the initial, never-opened account
    pub fn new() -> Self {
        Self::with_state(AccountState::new())
    }
}

impl Default for Session<AccountReducer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Session<R> {
    /// Create a session starting from a given state
    pub fn with_state(state: R::State) -> Self {
        Session {
            state,
            dispatched: 0,
        }
    }

    /// Apply one action and return the new current state
    pub fn dispatch(&mut self, action: &R::Action) -> &R::State {
        self.state = R::reduce(&self.state, action);
        self.dispatched += 1;
        trace!(dispatched = self.dispatched, "action dispatched");
        &self.state
    }

    /// The current state
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions dispatched so far, including ignored ones
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// End the session, keeping its final state
    pub fn into_state(self) -> R::State {
        self.state
    }
}
