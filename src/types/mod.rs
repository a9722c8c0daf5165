//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `account`: AccountState, MessageType and the fixed amounts
//! - `action`: the Action enum
//! - `error`: Error types for the CLI pipeline

pub mod account;
pub mod action;
pub mod error;

pub use account::{
    AccountState, Amount, MessageType, DEFAULT_MESSAGE, DEPOSIT_AMOUNT, LOAN_AMOUNT,
    OPENING_BONUS, WITHDRAWAL_AMOUNT,
};
pub use action::Action;
pub use error::AppError;
