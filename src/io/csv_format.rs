//! CSV and JSON format handling for scripts and state output
//!
//! This module centralizes all format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to actions
//! - The per-step state trace writer
//! - The final-state JSON writer

use crate::types::{AccountState, Action, AppError};
use csv::Writer;
use serde::Deserialize;
use std::io::Write;

/// Header of the trace output
pub const TRACE_HEADER: [&str; 7] = [
    "step",
    "action",
    "balance",
    "loan",
    "active",
    "message_type",
    "message",
];

/// Action name written on the trace row of the initial state
pub const INITIAL_STEP: &str = "init";

/// Script record structure for deserialization
///
/// Matches the script CSV format with a single column: action
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScriptRecord {
    pub action: String,
}

/// Convert a ScriptRecord to an Action
///
/// An empty action cell is an error; any other name converts, unknown names
/// becoming `Action::Unrecognized`.
pub fn convert_script_record(record: ScriptRecord) -> Result<Action, String> {
    if record.action.trim().is_empty() {
        return Err("Missing action name".to_string());
    }
    Ok(Action::parse(&record.action))
}

/// Streaming writer for the per-step state trace
///
/// Writes one CSV row per state: `step,action,balance,loan,active,message_type,message`.
pub struct TraceWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> TraceWriter<W> {
    /// Create a TraceWriter and write the header row
    pub fn new(output: W) -> Result<Self, AppError> {
        let mut writer = Writer::from_writer(output);
        writer.write_record(TRACE_HEADER)?;
        Ok(Self { writer })
    }

    /// Write one trace row
    ///
    /// # Arguments
    ///
    /// * `step` - 0 for the initial state, then the 1-based action index
    /// * `action` - Name of the action that produced `state`
    /// * `state` - The state after the action
    pub fn write_step(
        &mut self,
        step: u64,
        action: &str,
        state: &AccountState,
    ) -> Result<(), AppError> {
        self.writer.write_record(&[
            step.to_string(),
            action.to_string(),
            state.balance.to_string(),
            state.loan.to_string(),
            state.is_active.to_string(),
            state.message_type.to_string(),
            state.message.clone(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn flush(&mut self) -> Result<(), AppError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write a state as a pretty-printed JSON object followed by a newline
pub fn write_state_json(state: &AccountState, output: &mut dyn Write) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *output, state)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
