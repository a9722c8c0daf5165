//! Bank account CLI
//!
//! Drives the account reducer from a CSV script or from line-by-line console
//! input.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > trace.csv
//! cargo run -- --format json script.csv
//! cargo run -- --strategy console
//! cargo run -- --strategy console --log-level debug session.txt
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable)

use bank_account_reducer::cli;
use bank_account_reducer::strategy;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    let strategy = strategy::create_strategy(args.strategy, args.format);

    let mut input = match cli::open_input(&args) {
        Ok(input) => input,
        Err(e) => {
            error!(error = %e, "cannot open input");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&mut input, &mut output) {
        error!(error = %e, "processing failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
