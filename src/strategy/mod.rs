//! Processing strategy module
//!
//! A strategy is a front end that drives a `Session` from an input stream and
//! writes what the user sees. The reducer is the same for every strategy;
//! they differ in input format, output format and in whether the control
//! disabling rules of the screen apply.

use crate::cli::{OutputFormat, StrategyType};
use crate::types::{AccountState, AppError};
use std::io::{BufRead, Write};

pub mod console;
pub mod script;

pub use console::ConsoleStrategy;
pub use script::ScriptStrategy;

/// A complete input-to-output pipeline around one session
pub trait ProcessingStrategy: Send + Sync {
    /// Run every action from `input`, writing results to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(AccountState)` - the final state once the input is exhausted
    /// * `Err(AppError)` - a fatal error (unreadable input, failed write)
    ///
    /// Malformed individual actions are logged and skipped; they never make
    /// this method fail.
    fn process(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<AccountState, AppError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `format` only affects the script strategy; the console always renders the
/// screen as text.
pub fn create_strategy(
    strategy_type: StrategyType,
    format: OutputFormat,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Script => Box::new(ScriptStrategy::new(format)),
        StrategyType::Console => Box::new(ConsoleStrategy),
    }
}
