//! Rectangular wall grids searched cell by cell.
//!
//! A [`Maze`] is a `rows` × `columns` grid of wall or floor cells. The
//! entrance is the midpoint of the top row and the exit the midpoint of the
//! bottom row. Movement is four-directional and blocked by walls.
//!
//! Mazes come from three places:
//!
//! - [`Maze::open`] builds an all-floor grid that callers edit with
//!   [`Maze::set_wall`].
//! - [`Maze::random`] lays an outer wall ring and scatters interior walls at a
//!   given density. Connectivity is not guaranteed.
//! - [`Maze::parse`] and [`Maze::load`] read the text format described in
//!   [`loader`].
//!
//! # Example
//!
//! ```
//! use statespace_domains::maze::{Cell, Maze};
//! use statespace_search::search::{Searcher, Strategy};
//!
//! let maze: Maze = "3 3\n# #\n#  \n## \n".parse().unwrap();
//! assert_eq!(maze.entrance(), Cell::new(0, 1));
//! assert_eq!(maze.exit(), Cell::new(2, 1));
//!
//! // The exit is a wall, so there is nothing to find.
//! let outcome = Searcher::new(Strategy::BreadthFirst).run_space(&maze);
//! assert!(!outcome.is_found());
//! ```

mod cell;
pub mod loader;
mod render;

pub use cell::Cell;

use crate::error::MazeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statespace_search::state::StateSpace;

/// A wall grid with fixed entrance and exit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    /// Row-major; `true` marks a wall.
    walls: Vec<bool>,
}

impl Maze {
    /// Creates a grid with no walls.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyDimensions`] if either dimension is zero and
    /// [`MazeError::TooLarge`] if the cell count does not fit in `usize`.
    pub fn open(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::EmptyDimensions { rows, columns });
        }
        let cells = rows
            .checked_mul(columns)
            .ok_or(MazeError::TooLarge { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            walls: vec![false; cells],
        })
    }

    /// Creates a grid surrounded by walls except at the entrance and exit,
    /// with each interior cell a wall with probability `density`.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::EmptyDimensions`] for a zero dimension and
    /// [`MazeError::InvalidDensity`] unless `0.0 <= density <= 1.0`.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MazeError::InvalidDensity(density));
        }
        let mut maze = Self::open(rows, columns)?;
        for row in 0..rows {
            for column in 0..columns {
                let border = row == 0 || column == 0 || row + 1 == rows || column + 1 == columns;
                let wall = border || rng.random::<f64>() < density;
                maze.walls[row * columns + column] = wall;
            }
        }

        let (entrance, exit) = (maze.entrance(), maze.exit());
        maze.set_wall(entrance, false)?;
        maze.set_wall(exit, false)?;

        tracing::debug!(rows, columns, density, walls = maze.wall_count(), "generated maze");
        Ok(maze)
    }

    /// [`random`](Self::random) driven by a `StdRng` seeded with `seed`, so
    /// the same arguments always produce the same maze.
    ///
    /// # Errors
    ///
    /// As for [`random`](Self::random).
    pub fn seeded(rows: usize, columns: usize, density: f64, seed: u64) -> Result<Self, MazeError> {
        Self::random(rows, columns, density, &mut StdRng::seed_from_u64(seed))
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Midpoint of the top row.
    #[must_use]
    pub fn entrance(&self) -> Cell {
        Cell::new(0, self.columns / 2)
    }

    /// Midpoint of the bottom row.
    #[must_use]
    pub fn exit(&self) -> Cell {
        Cell::new(self.rows - 1, self.columns / 2)
    }

    /// Whether `cell` lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// Whether `cell` is blocked. Cells outside the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.index(cell).is_none_or(|index| self.walls[index])
    }

    /// Marks `cell` as a wall or as floor.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] if `cell` lies outside the grid.
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> Result<(), MazeError> {
        let index = self.index(cell).ok_or(MazeError::OutOfBounds {
            cell,
            rows: self.rows,
            columns: self.columns,
        })?;
        self.walls[index] = wall;
        Ok(())
    }

    /// Number of wall cells.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }

    /// Floor cells reachable in one step from `cell`, in the order up, down,
    /// left, right.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors(self.rows, self.columns)
            .filter(|next| !self.is_wall(*next))
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.row * self.columns + cell.column)
    }
}

impl StateSpace for Maze {
    type State = Cell;

    fn start(&self) -> Cell {
        self.entrance()
    }

    fn successors(&self, state: &Cell) -> impl Iterator<Item = Cell> {
        self.neighbors(*state)
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.exit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_empty_dimensions() {
        assert!(matches!(
            Maze::open(0, 3),
            Err(MazeError::EmptyDimensions { rows: 0, columns: 3 })
        ));
        assert!(Maze::open(1, 1).is_ok());
    }

    #[test]
    fn open_rejects_overflowing_cell_count() {
        assert!(matches!(
            Maze::open(usize::MAX, 2),
            Err(MazeError::TooLarge { rows: usize::MAX, columns: 2 })
        ));
        assert!(matches!(
            Maze::seeded(usize::MAX / 2, 3, 0.5, 0),
            Err(MazeError::TooLarge { .. })
        ));
    }

    #[test]
    fn entrance_and_exit_are_midpoints() {
        let maze = Maze::open(5, 7).unwrap();
        assert_eq!(maze.entrance(), Cell::new(0, 3));
        assert_eq!(maze.exit(), Cell::new(4, 3));
    }

    #[test]
    fn walls_filter_neighbors() {
        let mut maze = Maze::open(3, 3).unwrap();
        maze.set_wall(Cell::new(0, 1), true).unwrap();
        maze.set_wall(Cell::new(1, 2), true).unwrap();

        let around: Vec<_> = maze.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(around, vec![Cell::new(2, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let mut maze = Maze::open(2, 2).unwrap();
        assert!(maze.is_wall(Cell::new(2, 0)));
        assert!(matches!(
            maze.set_wall(Cell::new(0, 5), true),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn random_maze_has_ring_and_openings() {
        let maze = Maze::seeded(6, 9, 0.0, 7).unwrap();
        for column in 0..9 {
            let top = Cell::new(0, column);
            let bottom = Cell::new(5, column);
            assert_eq!(maze.is_wall(top), top != maze.entrance());
            assert_eq!(maze.is_wall(bottom), bottom != maze.exit());
        }
        for row in 0..6 {
            assert!(maze.is_wall(Cell::new(row, 0)));
            assert!(maze.is_wall(Cell::new(row, 8)));
        }
        // Zero density leaves the interior open.
        assert!(!maze.is_wall(Cell::new(3, 4)));
    }

    #[test]
    fn full_density_walls_interior() {
        let maze = Maze::seeded(5, 5, 1.0, 1).unwrap();
        assert_eq!(maze.wall_count(), 25 - 2);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = Maze::seeded(12, 15, 0.3, 42).unwrap();
        let second = Maze::seeded(12, 15, 0.3, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn density_outside_unit_interval_is_rejected() {
        assert!(matches!(
            Maze::seeded(4, 4, 1.5, 0),
            Err(MazeError::InvalidDensity(_))
        ));
        assert!(matches!(
            Maze::seeded(4, 4, f64::NAN, 0),
            Err(MazeError::InvalidDensity(_))
        ));
    }
}
