//! The maze files shipped with the drivers load and solve.

use std::path::PathBuf;

use example::outcome_summary;
use statespace_domains::maze::Maze;
use statespace_search::search::{Searcher, Strategy};

fn bundled(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("mazes").join(name)
}

#[test]
fn winding_maze_is_solvable_by_every_strategy() {
    let maze = Maze::load(bundled("winding.txt")).unwrap();
    assert_eq!((maze.rows(), maze.columns()), (9, 11));

    let bfs = Searcher::new(Strategy::BreadthFirst).run_space(&maze);
    assert_eq!(bfs.distance(), Some(12));

    for strategy in Strategy::ALL {
        let outcome = Searcher::new(strategy).run_space(&maze);
        assert!(outcome.distance().unwrap() >= 12, "{strategy}");
        let summary = outcome_summary(strategy, &outcome);
        assert!(summary.starts_with(&format!("{strategy}: reached (8,5)")), "{summary}");
    }
}
