//! Core business logic module
//!
//! - `traits` - The `Reducer` abstraction
//! - `reducer` - The account transition table
//! - `session` - Ownership of the current state and action dispatch

pub mod reducer;
pub mod session;
pub mod traits;

pub use reducer::{reduce, AccountReducer};
pub use session::Session;
pub use traits::Reducer;
