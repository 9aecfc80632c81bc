//! Two-jug puzzle CLI.
//!
//! # Usage
//!
//! ```bash
//! jugs 4 7 6
//! jugs 3 5 4 --strategy all --witnesses
//! ```

#![expect(clippy::print_stdout, clippy::print_stderr, reason = "command-line output")]

use clap::Parser;
use example::{LogArgs, StrategyChoice, outcome_summary, witness_table};
use statespace_core::TracingObserver;
use statespace_domains::jugs::{JugPuzzle, JugState};
use statespace_search::hooks::SearchHooks;
use statespace_search::search::Searcher;
use statespace_search::witness::WitnessSearch;
use std::process::ExitCode;

/// Measure a target amount with two unmarked jugs.
#[derive(Debug, Parser)]
#[command(name = "jugs", version)]
struct Cli {
    /// Capacity of jug A
    #[arg(default_value_t = 4)]
    capacity_a: u32,

    /// Capacity of jug B
    #[arg(default_value_t = 7)]
    capacity_b: u32,

    /// Amount either jug must hold
    #[arg(default_value_t = 6)]
    target: u32,

    /// Exploration order
    #[arg(short, long, value_enum, default_value = "bfs")]
    strategy: StrategyChoice,

    /// Also report the first state measuring every amount, and the
    /// unreachable states
    #[arg(short, long)]
    witnesses: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    cli.log.init();

    if cli.capacity_a == 0 || cli.capacity_b == 0 {
        eprintln!("Error: jug capacities must be positive");
        return ExitCode::FAILURE;
    }
    let puzzle = JugPuzzle::new(cli.capacity_a, cli.capacity_b, cli.target);

    let hooks = SearchHooks::<JugState>::new();
    if let Err(error) = TracingObserver::new()
        .with_states(cli.log.trace_states)
        .attach(&hooks)
    {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }

    println!(
        "jugs of {} and {}, target {}",
        puzzle.capacity_a(),
        puzzle.capacity_b(),
        puzzle.target()
    );
    let mut solved = false;
    for strategy in cli.strategy.strategies() {
        let outcome = Searcher::new(strategy).with_hooks(&hooks).run_space(&puzzle);
        solved |= outcome.is_found();
        print!("{}", outcome_summary(strategy, &outcome));
        if let Some(path) = outcome.path() {
            for pair in path.windows(2) {
                if let Some(op) = puzzle.operation_between(pair[0], pair[1]) {
                    println!("    {op:<14} -> ({})", pair[1]);
                }
            }
        }
    }

    if cli.witnesses {
        let search = WitnessSearch::new().with_hooks(&hooks);
        let amounts = puzzle.amount_witnesses_with(&search);
        println!();
        print!("{}", witness_table("either jug holds", &amounts));
        let totals = puzzle.total_witnesses_with(&search);
        print!("{}", witness_table("both jugs hold together", &totals));

        let unreachable = puzzle.unreachable_states(amounts.ledger());
        println!("unreachable states: {}", unreachable.len());
        for state in unreachable {
            println!("  ({state})");
        }
    }

    if !solved {
        tracing::warn!(amount = puzzle.target(), "target amount cannot be measured");
    }
    ExitCode::SUCCESS
}
