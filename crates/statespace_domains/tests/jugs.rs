//! Two-jug puzzle scenarios and reachability reports.

use statespace_domains::jugs::{JugOp, JugPuzzle, JugState};
use statespace_search::search::{Searcher, Strategy};
use statespace_search::{StateSpace, breadth_first, format_path};

const PUZZLE: JugPuzzle = JugPuzzle::new(4, 7, 6);

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════════

/// Capacities 4 and 7, target 6: six moves from two empty jugs.
#[test]
fn measure_six_with_four_and_seven() {
    let outcome = Searcher::new(Strategy::BreadthFirst).run_space(&PUZZLE);
    let goal = *outcome.goal().unwrap();
    assert!(goal.holds(6));
    assert_eq!(goal, JugState::new(4, 6));
    assert_eq!(outcome.distance(), Some(6));

    let path = outcome.path().unwrap();
    assert_eq!(
        format_path(&path),
        "(0,0),(0,7),(4,3),(0,3),(3,0),(3,7),(4,6)"
    );
    let moves: Vec<JugOp> = path
        .windows(2)
        .map(|pair| PUZZLE.operation_between(pair[0], pair[1]).unwrap())
        .collect();
    assert_eq!(moves, vec![
        JugOp::FillB,
        JugOp::PourBToA,
        JugOp::EmptyA,
        JugOp::PourBToA,
        JugOp::FillB,
        JugOp::PourBToA,
    ]);
}

/// The route to "A holds 4" starts empty and every step is one move.
#[test]
fn route_to_four_in_a() {
    let outcome = breadth_first(JugState::default(), |s| s.a == 4, |s| {
        PUZZLE.successors(s).collect::<Vec<_>>()
    });
    let path = outcome.path().unwrap();
    assert_eq!(path[0], JugState::new(0, 0));
    assert!(PUZZLE.operation_between(path[0], path[1]).is_some());
    assert_eq!(path, vec![JugState::new(0, 0), JugState::new(4, 0)]);
}

/// Every strategy solves the puzzle with a sequence of legal moves.
#[test]
fn all_strategies_solve_with_legal_moves() {
    for strategy in Strategy::ALL {
        let path = Searcher::new(strategy).run_space(&PUZZLE).path().unwrap();
        assert_eq!(path.first(), Some(&JugState::default()), "{strategy}");
        assert!(path.last().unwrap().holds(6), "{strategy}");
        assert!(
            path.windows(2)
                .all(|pair| PUZZLE.operation_between(pair[0], pair[1]).is_some()),
            "{strategy}: {}",
            format_path(&path)
        );
    }
}

/// Fill followed by empty returns to the start; the search still ends.
#[test]
fn cycles_through_start_terminate() {
    let impossible = JugPuzzle::new(2, 4, 3);
    for strategy in Strategy::ALL {
        let outcome = Searcher::new(strategy).run_space(&impossible);
        assert!(!outcome.is_found(), "{strategy}");
        // Only even amounts are ever measurable.
        assert!(outcome.ledger().states().all(|s| s.a % 2 == 0 && s.b % 2 == 0));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn unreachable_states_are_the_partial_pairs() {
    let exhaustive = breadth_first(JugState::default(), |_| false, |s| {
        PUZZLE.successors(s).collect::<Vec<_>>()
    });
    assert_eq!(exhaustive.ledger().len(), 22);

    let missing = PUZZLE.unreachable_states(exhaustive.ledger());
    assert_eq!(missing.len(), 5 * 8 - 22);
    // Some jug is always empty or full.
    assert!(missing.iter().all(|s| (1..4).contains(&s.a) && (1..7).contains(&s.b)));
    assert!(missing.contains(&JugState::new(2, 3)));
}

#[test]
fn amount_witnesses_cover_every_amount() {
    let report = PUZZLE.amount_witnesses();
    assert_eq!(report.unmatched().count(), 0);

    let distances: Vec<(u32, Option<usize>)> = report
        .reports()
        .iter()
        .map(|r| (r.target, r.distance))
        .collect();
    assert_eq!(distances, vec![
        (1, Some(4)),
        (2, Some(8)),
        (3, Some(2)),
        (4, Some(1)),
        (5, Some(8)),
        (6, Some(6)),
        (7, Some(1)),
    ]);
    assert_eq!(report.get(&6).unwrap().witness, Some(JugState::new(4, 6)));
    assert_eq!(report.path_for(&3).unwrap().last(), Some(&JugState::new(4, 3)));
}

#[test]
fn total_witnesses_cover_every_total() {
    let report = PUZZLE.total_witnesses();
    assert_eq!(report.reports().len(), 11);
    assert_eq!(report.get(&11).unwrap().witness, Some(JugState::new(4, 7)));
    assert_eq!(report.get(&11).unwrap().distance, Some(2));
    assert_eq!(report.get(&1).unwrap().witness, Some(JugState::new(1, 0)));
    assert_eq!(report.get(&2).unwrap().distance, Some(9));
}

/// Totals that no reachable state adds up to are reported as unmatched.
#[test]
fn unmatched_totals() {
    let report = JugPuzzle::new(2, 4, 0).total_witnesses();
    let unmatched: Vec<u64> = report.unmatched().copied().collect();
    assert_eq!(unmatched, vec![1, 3, 5]);
}
