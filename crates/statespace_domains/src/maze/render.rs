//! Plain-text views of a maze and of search results over it.

use super::{Cell, Maze};
use super::loader::WALL;
use core::fmt;
use hashbrown::HashSet;
use statespace_search::ledger::Ledger;

const FLOOR: char = ' ';
const ROUTE: char = '*';

impl Maze {
    /// The grid as it would appear in a maze file body: `#` for walls and
    /// a space for floor, one line per row.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_cells(|cell| if self.is_wall(cell) { WALL } else { FLOOR })
    }

    /// The grid with route cells marked `*`.
    #[must_use]
    pub fn render_solution(&self, path: &[Cell]) -> String {
        let route: HashSet<Cell> = path.iter().copied().collect();
        self.render_cells(|cell| {
            if route.contains(&cell) {
                ROUTE
            } else if self.is_wall(cell) {
                WALL
            } else {
                FLOOR
            }
        })
    }

    /// Recorded distance of every cell, comma terminated, one line per row.
    ///
    /// Walls print as `#` and floor the search never reached prints as `0`,
    /// so the entrance and unreached cells are indistinguishable.
    #[must_use]
    pub fn render_distances(&self, ledger: &Ledger<Cell>) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for column in 0..self.columns {
                let cell = Cell::new(row, column);
                if self.is_wall(cell) {
                    out.push(WALL);
                } else {
                    out.push_str(&ledger.distance(&cell).unwrap_or(0).to_string());
                }
                out.push(',');
            }
            out.push('\n');
        }
        out
    }

    fn render_cells(&self, symbol: impl Fn(Cell) -> char) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns + 1));
        for row in 0..self.rows {
            out.extend((0..self.columns).map(|column| symbol(Cell::new(row, column))));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.columns)?;
        f.write_str(&self.render())
    }
}
