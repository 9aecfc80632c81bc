//! Grid cell state.

use core::fmt;

/// A square of a rectangular grid, identified by `(row, column)`.
///
/// A cell knows nothing about walls. Its neighbors are the axis-aligned
/// cells inside the grid bounds; the [`Maze`](super::Maze) filters blocked
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub column: usize,
}

impl Cell {
    /// Creates a cell.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// In-bounds neighbors of this cell in a `rows` × `columns` grid,
    /// enumerated up, down, left, right.
    pub fn neighbors(self, rows: usize, columns: usize) -> impl Iterator<Item = Cell> {
        let Cell { row, column } = self;
        [
            row.checked_sub(1).map(|up| Cell::new(up, column)),
            row.checked_add(1).map(|down| Cell::new(down, column)),
            column.checked_sub(1).map(|left| Cell::new(row, left)),
            column.checked_add(1).map(|right| Cell::new(row, right)),
        ]
        .into_iter()
        .flatten()
        .filter(move |cell| cell.row < rows && cell.column < columns)
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}
