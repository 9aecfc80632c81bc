//! Maze text format.
//!
//! ```text
//! 4 5
//! ## ##
//! #   #
//! # # #
//! ## ##
//! ```
//!
//! The first line holds the row and column counts separated by whitespace.
//! Each following line is one row: `#` is a wall and any other character is
//! floor. Every row must be exactly `columns` characters long and exactly
//! `rows` rows must follow. Trailing blank lines and `\r` line endings are
//! accepted.

use super::Maze;
use crate::error::MazeError;
use core::str::FromStr;
use std::path::Path;

/// Character marking a wall cell.
pub const WALL: char = '#';

impl Maze {
    /// Parses a maze from text.
    ///
    /// # Errors
    ///
    /// Returns a [`MazeError`] describing the first inconsistency between the
    /// header and the rows. The grid is only allocated once the body matches
    /// the header, so an oversized header costs nothing.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut lines = text.lines();

        let header = lines.next().ok_or(MazeError::MissingHeader)?;
        let (rows, columns) = parse_header(header)?;
        if rows == 0 || columns == 0 {
            return Err(MazeError::EmptyDimensions { rows, columns });
        }

        let mut body: Vec<&str> = lines.collect();
        while body.last().is_some_and(|line| line.is_empty()) {
            body.pop();
        }
        if body.len() != rows {
            return Err(MazeError::RowCount {
                expected: rows,
                found: body.len(),
            });
        }

        for (row, line) in body.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(MazeError::RowLength {
                    row,
                    expected: columns,
                    found,
                });
            }
        }

        let mut maze = Maze::open(rows, columns)?;
        let symbols = body.iter().flat_map(|line| line.chars());
        for (wall, symbol) in maze.walls.iter_mut().zip(symbols) {
            *wall = symbol == WALL;
        }
        Ok(maze)
    }

    /// Reads and parses a maze file.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Io`] if the file cannot be read, or any parse
    /// error from [`parse`](Self::parse).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let maze = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            rows = maze.rows,
            columns = maze.columns,
            "loaded maze"
        );
        Ok(maze)
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidHeader(header.to_owned());
    let mut fields = header.split_whitespace();
    let rows = fields.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let columns = fields.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    if fields.next().is_some() {
        return Err(invalid());
    }
    Ok((rows, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn parses_walls_and_floor() {
        let maze = Maze::parse("2 3\n#.#\n  #\n").unwrap();
        assert_eq!((maze.rows(), maze.columns()), (2, 3));
        assert!(maze.is_wall(Cell::new(0, 0)));
        assert!(!maze.is_wall(Cell::new(0, 1)));
        assert!(!maze.is_wall(Cell::new(1, 0)));
        assert!(maze.is_wall(Cell::new(1, 2)));
    }

    #[test]
    fn accepts_crlf_and_trailing_blank_lines() {
        let maze = Maze::parse("2 2\r\n# \r\n #\r\n\r\n\n").unwrap();
        assert_eq!(maze.wall_count(), 2);
    }

    #[test]
    fn header_errors() {
        assert!(matches!(Maze::parse(""), Err(MazeError::MissingHeader)));
        assert!(matches!(
            Maze::parse("three 4\n"),
            Err(MazeError::InvalidHeader(h)) if h == "three 4"
        ));
        assert!(matches!(Maze::parse("3\n"), Err(MazeError::InvalidHeader(_))));
        assert!(matches!(Maze::parse("1 1 1\n#\n"), Err(MazeError::InvalidHeader(_))));
        assert!(matches!(
            Maze::parse("0 4\n"),
            Err(MazeError::EmptyDimensions { rows: 0, columns: 4 })
        ));
    }

    #[test]
    fn row_count_must_match_header() {
        assert!(matches!(
            Maze::parse("3 2\n##\n##\n"),
            Err(MazeError::RowCount { expected: 3, found: 2 })
        ));
        assert!(matches!(
            Maze::parse("1 2\n##\n##\n"),
            Err(MazeError::RowCount { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn oversized_header_is_rejected_before_allocating() {
        assert!(matches!(
            Maze::parse("18446744073709551615 2\n##\n"),
            Err(MazeError::RowCount { expected: usize::MAX, found: 1 })
        ));
        assert!(matches!(
            Maze::parse("1000000 1000000\n"),
            Err(MazeError::RowCount { expected: 1_000_000, found: 0 })
        ));
        assert!(matches!(
            Maze::parse("1 1000000000000\n##\n"),
            Err(MazeError::RowLength { row: 0, expected: 1_000_000_000_000, found: 2 })
        ));
    }

    #[test]
    fn row_length_must_match_header() {
        assert!(matches!(
            Maze::parse("2 3\n###\n#\n"),
            Err(MazeError::RowLength { row: 1, expected: 3, found: 1 })
        ));
        assert!(matches!(
            Maze::parse("1 2\n####\n"),
            Err(MazeError::RowLength { row: 0, expected: 2, found: 4 })
        ));
    }

    #[test]
    fn from_str_matches_parse() {
        let text = "1 3\n# #\n";
        assert_eq!(text.parse::<Maze>().unwrap(), Maze::parse(text).unwrap());
    }
}
