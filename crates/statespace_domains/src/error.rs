//! Errors raised while building or loading mazes.

use crate::maze::Cell;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed maze input or invalid maze construction parameters.
///
/// Raised at the adapter boundary; the search engine never sees an
/// inconsistent grid.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file could not be read.
    #[error("failed to read maze file {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input has no header line.
    #[error("maze file is empty; expected a '<rows> <columns>' header")]
    MissingHeader,

    /// The header is not two non-negative integers.
    #[error("invalid maze header '{0}'; expected '<rows> <columns>'")]
    InvalidHeader(String),

    /// A dimension is zero.
    #[error("maze dimensions must be positive, got {rows}x{columns}")]
    EmptyDimensions {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        columns: usize,
    },

    /// The grid has more cells than fit in memory addressing.
    #[error("maze of {rows}x{columns} cells is too large")]
    TooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        columns: usize,
    },

    /// The number of rows differs from the header.
    #[error("maze header declares {expected} rows but {found} follow")]
    RowCount {
        /// Rows declared in the header.
        expected: usize,
        /// Rows present in the input.
        found: usize,
    },

    /// A row's length differs from the header.
    #[error("maze row {row} has {found} columns, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Columns declared in the header.
        expected: usize,
        /// Characters in the row.
        found: usize,
    },

    /// Wall density outside `0.0..=1.0`.
    #[error("wall density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    /// A cell outside the grid was addressed.
    #[error("cell ({cell}) lies outside the {rows}x{columns} maze")]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        columns: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_inconsistency() {
        let error = MazeError::RowLength {
            row: 2,
            expected: 5,
            found: 3,
        };
        assert_eq!(error.to_string(), "maze row 2 has 3 columns, expected 5");

        let error = MazeError::OutOfBounds {
            cell: Cell::new(4, 1),
            rows: 3,
            columns: 3,
        };
        assert_eq!(error.to_string(), "cell (4,1) lies outside the 3x3 maze");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let error = MazeError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().starts_with("failed to read maze file missing.txt"));
        assert!(error.source().is_some());
    }
}
