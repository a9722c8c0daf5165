//! The six controls of the account screen
//!
//! Each control dispatches exactly one action. The open control is only
//! enabled while the account is closed; every other control only while it is
//! open.

use crate::types::{AccountState, Action};

/// A button of the account screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Open,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    Close,
}

impl Control {
    /// All controls, in display order
    pub const ALL: [Control; 6] = [
        Control::Open,
        Control::Deposit,
        Control::Withdraw,
        Control::RequestLoan,
        Control::PayLoan,
        Control::Close,
    ];

    /// Button text, as shown on the screen
    pub fn label(&self) -> &'static str {
        match self {
            Control::Open => "Open account",
            Control::Deposit => "Deposit 150",
            Control::Withdraw => "Withdraw 50",
            Control::RequestLoan => "Request a loan of 5000",
            Control::PayLoan => "Pay loan",
            Control::Close => "Close account",
        }
    }

    /// The action dispatched when this control is used
    pub fn action(&self) -> Action {
        match self {
            Control::Open => Action::OpenAccount,
            Control::Deposit => Action::Deposit,
            Control::Withdraw => Action::Withdraw,
            Control::RequestLoan => Action::RequestLoan,
            Control::PayLoan => Action::PayLoan,
            Control::Close => Action::CloseAccount,
        }
    }

    /// The control bound to an action, if any
    pub fn for_action(action: &Action) -> Option<Control> {
        match action {
            Action::OpenAccount => Some(Control::Open),
            Action::Deposit => Some(Control::Deposit),
            Action::Withdraw => Some(Control::Withdraw),
            Action::RequestLoan => Some(Control::RequestLoan),
            Action::PayLoan => Some(Control::PayLoan),
            Action::CloseAccount => Some(Control::Close),
            Action::Unrecognized(_) => None,
        }
    }

    /// Whether the control can be used in `state`
    ///
    /// Open is enabled only while the account is closed, every other control
    /// only while it is open.
    pub fn is_enabled(&self, state: &AccountState) -> bool {
        match self {
            Control::Open => !state.is_active,
            _ => state.is_active,
        }
    }
}
