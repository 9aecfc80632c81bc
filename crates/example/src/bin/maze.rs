//! Maze solver CLI.
//!
//! # Usage
//!
//! ```bash
//! maze --file maze.txt --strategy all
//! maze --rows 15 --columns 31 --density 0.3 --seed 7 --distances
//! ```

#![expect(clippy::print_stdout, clippy::print_stderr, reason = "command-line output")]

use clap::Parser;
use example::{LogArgs, StrategyChoice, outcome_summary};
use statespace_core::TracingObserver;
use statespace_domains::maze::{Cell, Maze};
use statespace_domains::MazeError;
use statespace_search::hooks::SearchHooks;
use statespace_search::search::{Searcher, Strategy};
use std::path::PathBuf;
use std::process::ExitCode;

/// Find a route from the top-row midpoint to the bottom-row midpoint.
#[derive(Debug, Parser)]
#[command(name = "maze", version)]
struct Cli {
    /// Maze file: a "<rows> <columns>" header, then one line per row with `#` for walls
    #[arg(short, long, conflicts_with_all = ["rows", "columns", "density", "seed"])]
    file: Option<PathBuf>,

    /// Rows of a generated maze
    #[arg(long, default_value_t = 12)]
    rows: usize,

    /// Columns of a generated maze
    #[arg(long, default_value_t = 24)]
    columns: usize,

    /// Probability that an interior cell of a generated maze is a wall
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Seed for a generated maze
    #[arg(long, env = "STATESPACE_SEED", default_value_t = 1)]
    seed: u64,

    /// Exploration order
    #[arg(short, long, value_enum, default_value = "bfs")]
    strategy: StrategyChoice,

    /// Print the breadth-first distance of every cell
    #[arg(long)]
    distances: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn build_maze(cli: &Cli) -> Result<Maze, MazeError> {
    match &cli.file {
        Some(path) => Maze::load(path),
        None => Maze::seeded(cli.rows, cli.columns, cli.density, cli.seed),
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    cli.log.init();

    let maze = match build_maze(&cli) {
        Ok(maze) => maze,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        rows = maze.rows(),
        columns = maze.columns(),
        walls = maze.wall_count(),
        "maze ready"
    );

    let hooks = SearchHooks::<Cell>::new();
    if let Err(error) = TracingObserver::new()
        .with_states(cli.log.trace_states)
        .attach(&hooks)
    {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }

    println!("{maze}");
    for strategy in cli.strategy.strategies() {
        let outcome = Searcher::new(strategy).with_hooks(&hooks).run_space(&maze);
        print!("{}", outcome_summary(strategy, &outcome));
        if let Some(path) = outcome.path() {
            println!("{}", maze.render_solution(&path));
        }
    }

    if cli.distances {
        let exhaustive = Searcher::new(Strategy::BreadthFirst).run(
            maze.entrance(),
            |_| false,
            |cell| maze.neighbors(*cell).collect::<Vec<_>>(),
        );
        println!("distances from {}:", maze.entrance());
        print!("{}", maze.render_distances(exhaustive.ledger()));
    }

    ExitCode::SUCCESS
}
