//! Account reducer
//!
//! This module holds the whole transition table of the account. Every
//! transition is computed from a borrowed state into a fresh value.
//!
//! The reducer enforces these rules:
//! - Only `OpenAccount` has an effect on an inactive account
//! - At most one loan is outstanding
//! - An account with a loan or a negative balance cannot be closed
//!
//! Closing with a positive balance succeeds and discards the funds.

use crate::core::traits::Reducer;
use crate::types::{
    AccountState, Action, MessageType, DEPOSIT_AMOUNT, LOAN_AMOUNT, OPENING_BONUS,
    WITHDRAWAL_AMOUNT,
};
use tracing::debug;

/// Reducer for the single bank account
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountReducer;

impl Reducer for AccountReducer {
    type State = AccountState;
    type Action = Action;

    fn reduce(state: &AccountState, action: &Action) -> AccountState {
        if !state.is_active && *action != Action::OpenAccount {
            debug!(action = %action, "account inactive, action ignored");
            return state.clone();
        }

        match action {
            Action::OpenAccount => open_account(state),
            Action::Deposit => deposit(state),
            Action::Withdraw => withdraw(state),
            Action::RequestLoan => request_loan(state),
            Action::PayLoan => pay_loan(state),
            Action::CloseAccount => close_account(state),
            Action::Unrecognized(name) => {
                debug!(action = %name, "unrecognized action ignored");
                state.clone()
            }
        }
    }
}

/// Compute the next account state
///
/// Shorthand for `AccountReducer::reduce`.
///
/// # Examples
///
/// ```
/// use bank_account_reducer::{reduce, AccountState, Action};
///
/// let opened = reduce(&AccountState::new(), &Action::OpenAccount);
/// assert!(opened.is_active);
/// assert_eq!(opened.balance, 500);
/// ```
pub fn reduce(state: &AccountState, action: &Action) -> AccountState {
    AccountReducer::reduce(state, action)
}

// Sets the balance rather than adding to it, so re-opening an active
// account resets the balance to the bonus.
fn open_account(state: &AccountState) -> AccountState {
    AccountState {
        is_active: true,
        balance: OPENING_BONUS,
        message: format!("{} bonus deposit from us on opening new account", OPENING_BONUS),
        message_type: MessageType::Success,
        ..state.clone()
    }
}

fn deposit(state: &AccountState) -> AccountState {
    AccountState {
        balance: state.balance + DEPOSIT_AMOUNT,
        message: format!(
            "You balance has been updated with a credit of {}",
            DEPOSIT_AMOUNT
        ),
        message_type: MessageType::Success,
        ..state.clone()
    }
}

fn withdraw(state: &AccountState) -> AccountState {
    AccountState {
        balance: state.balance - WITHDRAWAL_AMOUNT,
        message: format!(
            "Your balance amount has been debited by {}",
            WITHDRAWAL_AMOUNT
        ),
        message_type: MessageType::Error,
        ..state.clone()
    }
}

fn request_loan(state: &AccountState) -> AccountState {
    if state.has_loan() {
        return state.with_message("You already have a loan!!", MessageType::Warning);
    }

    AccountState {
        loan: LOAN_AMOUNT,
        balance: state.balance + LOAN_AMOUNT,
        message: format!("Loan of {} has been credited to your account", LOAN_AMOUNT),
        message_type: MessageType::Success,
        ..state.clone()
    }
}

// No funds check: the balance may go negative, which then blocks closing.
fn pay_loan(state: &AccountState) -> AccountState {
    AccountState {
        loan: 0,
        balance: state.balance - LOAN_AMOUNT,
        message: format!("Loan of {} has been debited from your account", LOAN_AMOUNT),
        message_type: MessageType::Warning,
        ..state.clone()
    }
}

fn close_account(state: &AccountState) -> AccountState {
    if state.has_loan() {
        return state.with_message("You have a pending loan!!", MessageType::Warning);
    }
    if state.balance < 0 {
        return state.with_message(
            "You can't close an account with negative balance!!",
            MessageType::Warning,
        );
    }

    AccountState {
        balance: 0,
        loan: 0,
        is_active: false,
        message: "Your account has been closed!".to_string(),
        message_type: MessageType::Info,
    }
}
