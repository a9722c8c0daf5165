//! Script processing strategy
//!
//! Reads a CSV script of action names and feeds every action straight to the
//! reducer. No control is ever disabled here: an `openAccount` on an open
//! account reaches the reducer and resets the balance to the bonus.
//!
//! Output is either the full CSV trace (one row per state, starting with the
//! initial one) or the final state as JSON.

use crate::cli::OutputFormat;
use crate::core::Session;
use crate::io::csv_format::{write_state_json, TraceWriter, INITIAL_STEP};
use crate::io::script_reader::ScriptReader;
use crate::strategy::ProcessingStrategy;
use crate::types::{AccountState, Action, AppError};
use std::io::{BufRead, Read, Write};
use tracing::{debug, info, warn};

/// Script front end: CSV actions in, trace or final state out
#[derive(Debug, Clone, Copy)]
pub struct ScriptStrategy {
    format: OutputFormat,
}

impl ScriptStrategy {
    /// Create a script strategy writing `format` output
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Default for ScriptStrategy {
    fn default() -> Self {
        Self::new(OutputFormat::Csv)
    }
}

/// Dispatch every script row, calling `on_step` after each dispatched action
///
/// Malformed rows are logged and skipped; they do not advance the step.
fn run_script<R, F>(reader: ScriptReader<R>, mut on_step: F) -> Result<AccountState, AppError>
where
    R: Read,
    F: FnMut(u64, &Action, &AccountState) -> Result<(), AppError>,
{
    let mut session = Session::new();
    let mut skipped = 0u64;

    for result in reader {
        match result {
            Ok(action) => {
                if !action.is_recognized() {
                    debug!(action = %action, "dispatching unrecognized action");
                }
                session.dispatch(&action);
                on_step(session.dispatched(), &action, session.state())?;
            }
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping script row");
            }
        }
    }

    info!(dispatched = session.dispatched(), skipped, "script finished");
    Ok(session.into_state())
}

impl ProcessingStrategy for ScriptStrategy {
    fn process(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<AccountState, AppError> {
        let reader = ScriptReader::from_reader(input)?;

        match self.format {
            OutputFormat::Csv => {
                let mut trace = TraceWriter::new(output)?;
                trace.write_step(0, INITIAL_STEP, &AccountState::new())?;
                let state = run_script(reader, |step, action, state| {
                    trace.write_step(step, action.name(), state)
                })?;
                trace.flush()?;
                Ok(state)
            }
            OutputFormat::Json => {
                let state = run_script(reader, |_, _, _| Ok(()))?;
                write_state_json(&state, output)?;
                Ok(state)
            }
        }
    }
}
