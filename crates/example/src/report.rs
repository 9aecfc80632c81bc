//! Plain-text summaries of search results.

use core::fmt::Display;
use statespace_search::format_path;
use statespace_search::search::{Outcome, Strategy};
use statespace_search::state::SearchState;
use statespace_search::witness::WitnessReport;

/// One paragraph describing a single run: the goal, its distance and the
/// route, or the number of states explored before giving up.
#[must_use]
pub fn outcome_summary<S>(strategy: Strategy, outcome: &Outcome<S>) -> String
where
    S: SearchState + Display,
{
    let explored = outcome.ledger().len();
    match (outcome.goal(), outcome.distance(), outcome.path()) {
        (Some(goal), Some(distance), Some(path)) => format!(
            "{strategy}: reached ({goal}) in {distance} steps, {explored} states discovered\n  path: {}\n",
            format_path(&path)
        ),
        _ => format!("{strategy}: no path, {explored} states discovered\n"),
    }
}

/// One line per target: the witness and its distance, or `unreachable`.
#[must_use]
pub fn witness_table<S, V>(title: &str, report: &WitnessReport<S, V>) -> String
where
    S: SearchState + Display,
    V: PartialEq + Display,
{
    let mut out = format!("{title}\n");
    for entry in report.reports() {
        let line = match (&entry.witness, entry.distance) {
            (Some(state), Some(distance)) => {
                format!("  {:>3}: ({state}) after {distance} steps\n", entry.target)
            }
            _ => format!("  {:>3}: unreachable\n", entry.target),
        };
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use statespace_domains::jugs::JugPuzzle;
    use statespace_search::breadth_first;
    use statespace_search::search::Searcher;

    #[test]
    fn found_outcome_lists_route() {
        let puzzle = JugPuzzle::new(4, 7, 4);
        let outcome = Searcher::new(Strategy::BreadthFirst).run_space(&puzzle);
        assert_eq!(
            outcome_summary(Strategy::BreadthFirst, &outcome),
            "bfs: reached (4,0) in 1 steps, 3 states discovered\n  path: (0,0),(4,0)\n"
        );
    }

    #[test]
    fn missing_outcome_counts_states() {
        let outcome = breadth_first(0u8, |_| false, |n| [n.saturating_add(1) % 4]);
        assert_eq!(
            outcome_summary(Strategy::BreadthFirst, &outcome),
            "bfs: no path, 4 states discovered\n"
        );
    }

    #[test]
    fn witness_table_marks_unreachable_targets() {
        let report = JugPuzzle::new(2, 4, 0).total_witnesses();
        let table = witness_table("totals", &report);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "totals");
        assert_eq!(lines[1], "    1: unreachable");
        assert_eq!(lines[2], "    2: (2,0) after 1 steps");
        assert_eq!(lines.len(), 7);
    }
}
