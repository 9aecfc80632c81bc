//! Implicit-state graph search.
//!
//! `statespace_search` explores graphs that are never materialized: the
//! caller supplies a start state, a successor function and a goal test, and
//! the engine discovers states on demand.
//!
//! # Core Concepts
//!
//! - [`SearchState`] - value-typed states with equality and hashing
//! - [`StateSpace`] - a domain bundling start, successors and goal
//! - [`Ledger`] - first-discovery records (parent, distance) per state
//! - [`Searcher`] - runs one of three [`Strategy`] orders, optionally with hooks
//! - [`reconstruct_path`] - turns a ledger chain into a start-to-goal route
//! - [`WitnessSearch`] - exhaustive breadth-first search with per-target witnesses
//!
//! # Example
//!
//! ```
//! use statespace_search::{breadth_first, depth_first_iterative, depth_first_recursive};
//!
//! // Move along 0..=9 by +1 or +2.
//! let neighbors = |n: &u8| [n + 1, n + 2].into_iter().filter(|m| *m <= 9);
//!
//! let bfs = breadth_first(0u8, |n| *n == 9, neighbors);
//! assert_eq!(bfs.distance(), Some(5));
//!
//! assert!(depth_first_iterative(0u8, |n| *n == 9, neighbors).is_found());
//! assert!(depth_first_recursive(0u8, |n| *n == 9, neighbors).is_found());
//! ```
//!
//! # Observation
//!
//! [`hooks`] exposes discovery and expansion events so that renderers and
//! loggers can follow a run without the engine depending on them.

/// Frontier containers (queue and stack).
pub mod frontier;

/// Lifecycle hooks for search runs.
pub mod hooks;

/// First-discovery bookkeeping.
pub mod ledger;

/// Route reconstruction.
pub mod path;

/// Strategies, the run driver and outcomes.
pub mod search;

/// State and state-space abstractions.
pub mod state;

/// Multi-target breadth-first search.
pub mod witness;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::hooks::schedule::{OnDiscover, OnExpand, OnSearchComplete, OnSearchStart};
    pub use crate::hooks::{HookRegistrationError, SearchEvent, SearchHooks};
    pub use crate::ledger::{Entry, Ledger};
    pub use crate::path::{format_path, reconstruct_path};
    pub use crate::search::{
        Outcome, Searcher, Strategy, breadth_first, depth_first_iterative, depth_first_recursive,
    };
    pub use crate::state::{SearchState, StateSpace};
    pub use crate::witness::{TargetReport, WitnessReport, WitnessSearch, breadth_first_witnesses};
}

// Re-export key types at crate root for convenience
pub use ledger::Ledger;
pub use path::{format_path, reconstruct_path};
pub use search::{
    Outcome, Searcher, Strategy, breadth_first, depth_first_iterative, depth_first_recursive,
};
pub use state::{SearchState, StateSpace};
pub use witness::{WitnessReport, WitnessSearch, breadth_first_witnesses};
