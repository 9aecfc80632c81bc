//! Concrete state spaces for `statespace_search`.
//!
//! - [`maze`] - wall grids with four-directional movement, a text loader and
//!   seeded random generation
//! - [`jugs`] - the two-jug measuring puzzle
//!
//! Both implement [`StateSpace`](statespace_search::StateSpace), so any
//! [`Searcher`](statespace_search::Searcher) strategy runs on them directly.

/// Maze construction and loading errors.
pub mod error;

/// The two-jug puzzle.
pub mod jugs;

/// Wall grids.
pub mod maze;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::MazeError;
    pub use crate::jugs::{JugOp, JugPuzzle, JugState};
    pub use crate::maze::{Cell, Maze};
}

pub use error::MazeError;
pub use jugs::{JugOp, JugPuzzle, JugState};
pub use maze::{Cell, Maze};
