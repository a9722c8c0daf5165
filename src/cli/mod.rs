// CLI module
// Command-line interface, argument parsing and logging setup

mod args;

pub use args::{CliArgs, OutputFormat, StrategyType};

use crate::types::AppError;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `level` when set. Events go to stderr so
/// stdout only carries program output.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Open the input selected on the command line
pub fn open_input(args: &CliArgs) -> Result<Box<dyn BufRead>, AppError> {
    match args.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::file_not_found(&path.display().to_string()),
                _ => e.into(),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
