//! Command-line drivers for the statespace maze and jug solvers.
//!
//! Two binaries share this library:
//!
//! - `maze` loads or generates a maze, solves it with one or all strategies
//!   and prints the grid, the route and optionally the distance map.
//! - `jugs` solves a two-jug puzzle and can list, for every amount, the first
//!   state that measures it and the states that can never be reached.
//!
//! Settings can also come from the environment or a `.env` file:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `STATESPACE_LOG` | `tracing` filter directives |
//! | `STATESPACE_LOG_FORMAT` | `pretty`, `compact` or `json` |
//! | `STATESPACE_SEED` | seed for generated mazes |

mod cli;
mod report;

pub use cli::{LogArgs, StrategyChoice};
pub use report::{outcome_summary, witness_table};
