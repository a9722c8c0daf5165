//! Text rendering of the account screen

use crate::types::AccountState;
use crate::view::controls::Control;
use std::fmt;

pub const TITLE: &str = "useReducer Bank Account";

/// The account screen for one state
///
/// Layout:
///
/// ```text
/// useReducer Bank Account
/// Balance: 500
/// Loan: 0
///
///   [x] Open account
///   [ ] Deposit 150
///   ...
///
/// Message: [success] 500 bonus deposit from us on opening new account
/// ```
///
/// Enabled controls are marked `[ ]`, disabled ones `[x]`. The message line
/// is left out when the message is empty.
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a>(pub &'a AccountState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "Balance: {}", state.balance)?;
        writeln!(f, "Loan: {}", state.loan)?;
        writeln!(f)?;

        for control in Control::ALL {
            let marker = if control.is_enabled(state) { ' ' } else { 'x' };
            writeln!(f, "  [{}] {}", marker, control.label())?;
        }

        if !state.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "Message: [{}] {}", state.message_type, state.message)?;
        }

        Ok(())
    }
}

/// Render the full screen for a state
pub fn render(state: &AccountState) -> String {
    Screen(state).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageType;

    #[test]
    fn test_render_initial_state() {
        let expected = "useReducer Bank Account\n\
                        Balance: 0\n\
                        Loan: 0\n\
                        \n  [ ] Open account\n\
                        \x20 [x] Deposit 150\n\
                        \x20 [x] Withdraw 50\n\
                        \x20 [x] Request a loan of 5000\n\
                        \x20 [x] Pay loan\n\
                        \x20 [x] Close account\n\
                        \n\
                        Message: [info] Open account to do transactions!!\n";

        assert_eq!(render(&AccountState::new()), expected);
    }

    #[test]
    fn test_render_active_state_flips_controls() {
        let state = AccountState {
            balance: 5500,
            loan: 5000,
            is_active: true,
            message: "Loan of 5000 has been credited to your account".to_string(),
            message_type: MessageType::Success,
        };
        let screen = render(&state);

        assert!(screen.contains("Balance: 5500\n"));
        assert!(screen.contains("Loan: 5000\n"));
        assert!(screen.contains("  [x] Open account\n"));
        assert!(screen.contains("  [ ] Close account\n"));
        assert!(screen.ends_with("Message: [success] Loan of 5000 has been credited to your account\n"));
    }

    #[test]
    fn test_screen_display_matches_render() {
        let state = AccountState {
            balance: -4500,
            is_active: true,
            ..AccountState::new()
        };
        assert_eq!(format!("{}", Screen(&state)), render(&state));
        assert!(render(&state).contains("Balance: -4500\n"));
    }

    #[test]
    fn test_render_omits_empty_message() {
        let state = AccountState {
            message: String::new(),
            ..AccountState::new()
        };
        let screen = render(&state);

        assert!(!screen.contains("Message:"));
        assert!(screen.ends_with("  [x] Close account\n"));
    }
}
