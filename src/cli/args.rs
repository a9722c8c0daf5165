use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Drive the bank account reducer from a script or an interactive console
#[derive(Parser, Debug)]
#[command(name = "bank-account")]
#[command(about = "Drive the toy bank account reducer from a script or a console", long_about = None)]
pub struct CliArgs {
    /// Input file; "-" or omitted reads stdin
    #[arg(value_name = "INPUT", help = "Path to the script or console input ('-' for stdin)")]
    pub input_file: Option<PathBuf>,

    /// Front end used to drive the account
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "script",
        help = "Front end: 'script' for CSV scripts or 'console' for line-by-line actions"
    )]
    pub strategy: StrategyType,

    /// Output format of the script strategy
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Script output: 'csv' for a per-step trace or 'json' for the final state"
    )]
    pub format: OutputFormat,

    /// Log filter directive
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log filter (e.g. 'debug', 'bank_account_reducer=trace'); logs go to stderr"
    )]
    pub log_level: String,
}

/// Available front ends
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Script,
    Console,
}

/// Output formats for the script front end
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl CliArgs {
    /// The input path, or `None` when reading stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.input_file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}
