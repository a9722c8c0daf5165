//! Action types for the bank account reducer
//!
//! Actions carry no payload: every amount is one of the fixed constants in
//! `types::account`.

use std::fmt;

/// A discrete request to transition the account state
///
/// Names that do not match any known action are kept as `Unrecognized` so
/// they can flow through the reducer, which ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Activate the account and credit the opening bonus
    OpenAccount,

    /// Credit `DEPOSIT_AMOUNT`
    Deposit,

    /// Debit `WITHDRAWAL_AMOUNT` (no funds check)
    Withdraw,

    /// Take out the fixed loan if none is outstanding
    RequestLoan,

    /// Repay the loan from the balance; may leave the balance negative
    PayLoan,

    /// Deactivate the account if there is no loan and no negative balance
    CloseAccount,

    /// Any other action name
    Unrecognized(String),
}

impl Action {
    /// Every recognized action, in control order
    pub const KNOWN: [Action; 6] = [
        Action::OpenAccount,
        Action::Deposit,
        Action::Withdraw,
        Action::RequestLoan,
        Action::PayLoan,
        Action::CloseAccount,
    ];

    /// Parse an action name
    ///
    /// Matching ignores case and surrounding whitespace. This never fails:
    /// unknown names become `Action::Unrecognized` holding the trimmed input.
    pub fn parse(name: &str) -> Action {
        let name = name.trim();
        match name.to_lowercase().as_str() {
            "openaccount" => Action::OpenAccount,
            "deposit" => Action::Deposit,
            "withdraw" => Action::Withdraw,
            "requestloan" => Action::RequestLoan,
            "payloan" => Action::PayLoan,
            "closeaccount" => Action::CloseAccount,
            _ => Action::Unrecognized(name.to_string()),
        }
    }

    /// Wire name of the action
    pub fn name(&self) -> &str {
        match self {
            Action::OpenAccount => "openAccount",
            Action::Deposit => "deposit",
            Action::Withdraw => "withdraw",
            Action::RequestLoan => "requestLoan",
            Action::PayLoan => "payLoan",
            Action::CloseAccount => "closeAccount",
            Action::Unrecognized(name) => name,
        }
    }

    /// Whether this is one of the six known actions
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Action::Unrecognized(_))
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Action::parse(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
