//! Console processing strategy
//!
//! Plays the part of the screen: reads one action name per line, refuses
//! actions whose control is currently disabled, and redraws the screen after
//! every line. Blank lines, lines starting with `#` and lines that are not
//! valid UTF-8 are skipped.

use crate::core::Session;
use crate::strategy::ProcessingStrategy;
use crate::types::{AccountState, Action, AppError};
use crate::view::{Control, Screen};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Console front end: one action per line in, rendered screens out
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStrategy;

impl ConsoleStrategy {
    /// Handle one action, returning the note to show above the screen
    ///
    /// Actions bound to a disabled control are not dispatched. Unrecognized
    /// actions are dispatched; the reducer leaves the state as it is.
    fn handle(session: &mut Session, action: &Action) -> Option<String> {
        match Control::for_action(action) {
            Some(control) if !control.is_enabled(session.state()) => {
                debug!(control = control.label(), "control disabled, action dropped");
                Some(format!("Control '{}' is disabled", control.label()))
            }
            Some(_) => {
                session.dispatch(action);
                None
            }
            None => {
                session.dispatch(action);
                Some(format!("Unknown action '{}' ignored", action))
            }
        }
    }
}

impl ProcessingStrategy for ConsoleStrategy {
    fn process(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<AccountState, AppError> {
        let mut session = Session::new();
        write!(output, "{}", Screen(session.state()))?;

        let mut buf = Vec::new();
        let mut line_no = 0u64;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    warn!(line = line_no, error = %e, "skipping line that is not valid UTF-8");
                    continue;
                }
            };
            let name = line.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }

            let action = Action::parse(name);
            writeln!(output)?;
            writeln!(output, "> {}", action)?;
            if let Some(note) = Self::handle(&mut session, &action) {
                writeln!(output, "! {}", note)?;
            }
            write!(output, "{}", Screen(session.state()))?;
        }

        output.flush()?;
        info!(dispatched = session.dispatched(), "console session ended");

        Ok(session.into_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render;

    fn run(lines: &str) -> (AccountState, String) {
        let mut input = lines.as_bytes();
        let mut output = Vec::new();

        let state = ConsoleStrategy
            .process(&mut input, &mut output)
            .expect("console should process");
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_input_draws_initial_screen() {
        let (state, output) = run("");

        assert_eq!(state, AccountState::new());
        assert_eq!(output, render(&AccountState::new()));
    }

    #[test]
    fn test_disabled_controls_block_actions() {
        let (state, output) = run("deposit\nopenAccount\nopenAccount\n");

        assert_eq!(state.balance, 500);
        assert!(output.contains("> deposit\n! Control 'Deposit 150' is disabled\n"));
        assert!(output.contains("> openAccount\n! Control 'Open account' is disabled\n"));
    }

    #[test]
    fn test_unknown_actions_are_reported() {
        let (state, output) = run("openAccount\ntransfer\n");

        assert_eq!(state.balance, 500);
        assert!(output.contains("> transfer\n! Unknown action 'transfer' ignored\n"));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let (state, output) = run("# session\n\nopenAccount\n   \nwithdraw\n");

        assert_eq!(state.balance, 450);
        assert_eq!(output.matches("> ").count(), 2);
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut input: &[u8] = b"openAccount\n\xff\xfe\ndeposit\n";
        let mut output = Vec::new();

        let state = ConsoleStrategy
            .process(&mut input, &mut output)
            .expect("invalid line should not end the session");

        assert_eq!(state.balance, 650);
        assert_eq!(String::from_utf8(output).unwrap().matches("> ").count(), 2);
    }

    #[test]
    fn test_last_line_without_newline_is_handled() {
        let (state, _) = run("openAccount\nwithdraw");
        assert_eq!(state.balance, 450);
    }

    #[test]
    fn test_full_lifecycle_ends_closed() {
        let (state, output) = run(
            "openAccount\nrequestLoan\npayLoan\nwithdraw\ncloseAccount\ncloseAccount\n",
        );

        assert!(!state.is_active);
        assert!(state.is_closed_shape());
        assert!(output.contains("Balance: 5500\n"));
        assert!(output.contains("> closeAccount\n! Control 'Close account' is disabled\n"));
        assert!(output.ends_with("Message: [info] Your account has been closed!\n"));
    }

    #[test]
    fn test_reopen_after_close() {
        let (state, _) = run("openAccount\ncloseAccount\nopenAccount\ndeposit\n");
        assert!(state.is_active);
        assert_eq!(state.balance, 650);
    }
}
