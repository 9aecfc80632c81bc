//! Shared test utilities for `statespace_domains` integration tests.
//!
//! Import via `mod test_utils;` in test files.

#![allow(
    dead_code,
    missing_docs,
    reason = "shared test utilities, not all items used in every test binary"
)]

use std::io::Write;

use statespace_domains::maze::{Cell, Maze};
use tempfile::NamedTempFile;

/// A `rows` × `columns` maze with an outer wall ring, open at the entrance
/// and exit, and an empty interior.
pub fn ringed(rows: usize, columns: usize) -> Maze {
    let mut maze = Maze::open(rows, columns).unwrap();
    for row in 0..rows {
        for column in 0..columns {
            let border = row == 0 || column == 0 || row + 1 == rows || column + 1 == columns;
            maze.set_wall(Cell::new(row, column), border).unwrap();
        }
    }
    let (entrance, exit) = (maze.entrance(), maze.exit());
    maze.set_wall(entrance, false).unwrap();
    maze.set_wall(exit, false).unwrap();
    maze
}

/// Writes `contents` to a fresh temporary file.
pub fn maze_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Whether consecutive cells of `path` are open and one step apart.
pub fn is_walkable(maze: &Maze, path: &[Cell]) -> bool {
    path.iter().all(|cell| !maze.is_wall(*cell))
        && path.windows(2).all(|pair| pair[0].manhattan(pair[1]) == 1)
}
