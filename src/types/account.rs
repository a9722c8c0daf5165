//! Account-related types for the bank account reducer
//!
//! This module defines the AccountState structure, the message tag used to
//! present the last result, and the fixed amounts every transition uses.

use serde::Serialize;
use std::fmt;

/// Balance and loan amounts (signed: a loan payment may drive the balance negative)
pub type Amount = i64;

/// Bonus credited when an account is opened
pub const OPENING_BONUS: Amount = 500;

/// Amount credited by a single deposit
pub const DEPOSIT_AMOUNT: Amount = 150;

/// Amount debited by a single withdrawal
pub const WITHDRAWAL_AMOUNT: Amount = 50;

/// Fixed loan amount; `loan` is either zero or exactly this
pub const LOAN_AMOUNT: Amount = 5000;

/// Message shown before the account has ever been opened
pub const DEFAULT_MESSAGE: &str = "Open account to do transactions!!";

/// How the view layer should present `AccountState::message`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl MessageType {
    /// Lowercase tag, as used in CSV traces and console output
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Success => "success",
            MessageType::Error => "error",
            MessageType::Warning => "warning",
            MessageType::Info => "info",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single account value owned by a session
///
/// Only the reducer produces new values of this type. While `is_active` is
/// false the account is in its closed shape: zero balance and no loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Current balance
    ///
    /// Goes negative only after paying a loan with insufficient funds; such
    /// an account cannot be closed until it is back at zero or above.
    pub balance: Amount,

    /// Outstanding loan: `0` or `LOAN_AMOUNT`
    pub loan: Amount,

    /// Whether the account is open
    pub is_active: bool,

    /// Result of the last action, for display only
    pub message: String,

    pub message_type: MessageType,
}

impl AccountState {
    /// Create the initial, never-opened account
    ///
    /// # Returns
    ///
    /// An AccountState with:
    /// - balance = 0
    /// - loan = 0
    /// - is_active = false
    /// - message = "Open account to do transactions!!" (info)
    pub fn new() -> Self {
        AccountState {
            balance: 0,
            loan: 0,
            is_active: false,
            message: DEFAULT_MESSAGE.to_string(),
            message_type: MessageType::Info,
        }
    }

    /// Whether a loan is outstanding
    pub fn has_loan(&self) -> bool {
        self.loan != 0
    }

    /// Whether balance and loan are both zero
    pub fn is_closed_shape(&self) -> bool {
        self.balance == 0 && self.loan == 0
    }

    /// Copy of this state with only the message fields replaced
    pub(crate) fn with_message(&self, message: impl Into<String>, message_type: MessageType) -> Self {
        AccountState {
            message: message.into(),
            message_type,
            ..self.clone()
        }
    }
}

impl Default for AccountState {
    fn default() -> Self {
        Self::new()
    }
}
