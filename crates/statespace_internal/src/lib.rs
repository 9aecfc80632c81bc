//! # Statespace Internal Library
//!
//! Re-exports the statespace crates for convenience.

/// Search engine: ledger, frontiers, strategies and hooks.
pub use statespace_search;

/// Maze and jug state spaces.
pub use statespace_domains;

/// Logging infrastructure.
pub use statespace_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use statespace_core::{TracingFormat, TracingObserver, TracingSetup};
    pub use statespace_domains::prelude::*;
    pub use statespace_search::prelude::*;
}
