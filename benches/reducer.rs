//! Benchmarks for the reducer and the script pipeline
//!
//! ```bash
//! cargo bench
//! ```

use bank_account_reducer::cli::{OutputFormat, StrategyType};
use bank_account_reducer::strategy::create_strategy;
use bank_account_reducer::{Action, Session};

fn main() {
    divan::main();
}

const CYCLE: [Action; 6] = Action::KNOWN;

/// Dispatch `n` actions, cycling through every known action
#[divan::bench(args = [100, 10_000])]
fn session_dispatch(n: usize) -> i64 {
    let mut session = Session::new();
    for action in CYCLE.iter().cycle().take(n) {
        session.dispatch(divan::black_box(action));
    }
    session.state().balance
}

/// Run a generated script through the CSV trace pipeline
#[divan::bench(args = [100, 10_000])]
fn script_strategy_trace(bencher: divan::Bencher, n: usize) {
    let mut script = String::from("action\n");
    for action in CYCLE.iter().cycle().take(n) {
        script.push_str(action.name());
        script.push('\n');
    }
    let strategy = create_strategy(StrategyType::Script, OutputFormat::Csv);

    bencher.bench_local(|| {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        strategy
            .process(&mut input, &mut output)
            .expect("Processing failed");
        output.len()
    });
}
