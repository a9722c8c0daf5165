//! Bank Account Reducer Library
//! # Overview
//!
//! A toy bank account modelled as one pure state-transition function, plus
//! the front ends that drive it.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (AccountState, Action, errors)
//! - [`core`] - Business logic components:
//!   - [`core::reducer`] - The transition table
//!   - [`core::session`] - Ownership of the current state
//! - [`view`] - Controls and text rendering of the screen
//! - [`io`] - Script reading and state output
//! - [`strategy`] - Script and console front ends
//! - [`cli`] - CLI arguments parsing and logging setup
//!
//! # Actions
//!
//! - **openAccount**: Activate the account with a 500 bonus
//! - **deposit**: Credit 150
//! - **withdraw**: Debit 50
//! - **requestLoan**: Borrow 5000 if no loan is outstanding
//! - **payLoan**: Repay the loan from the balance
//! - **closeAccount**: Close if there is no loan and the balance is not negative
//!
//! Every action except `openAccount` is ignored while the account is closed.

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;
pub mod view;

pub use core::{reduce, AccountReducer, Reducer, Session};
pub use types::{AccountState, Action, AppError, MessageType};
