//! Route reconstruction from ledger parent links.

use crate::ledger::Ledger;
use crate::state::SearchState;

/// Walks parent links from `goal` back to the start and returns the route
/// in start-to-goal order, both ends included.
///
/// Returns `None` if `goal` was never recorded in `ledger`. The walk always
/// terminates: every parent was discovered strictly before its child.
///
/// # Example
///
/// ```
/// use statespace_search::{breadth_first, reconstruct_path};
///
/// let outcome = breadth_first(0u32, |n| *n == 3, |n| [n + 1]);
/// let goal = outcome.goal().copied().unwrap();
/// let path = reconstruct_path(outcome.ledger(), &goal).unwrap();
/// assert_eq!(path, vec![0, 1, 2, 3]);
/// ```
#[must_use]
pub fn reconstruct_path<S: SearchState>(ledger: &Ledger<S>, goal: &S) -> Option<Vec<S>> {
    let mut index = ledger.index_of(goal)?;
    let mut route = vec![ledger.state_at(index).clone()];
    while let Some(parent) = ledger.parent_at(index) {
        route.push(ledger.state_at(parent).clone());
        index = parent;
    }
    route.reverse();
    Some(route)
}

/// Formats a route as `(a),(b),(c)`.
///
/// Each state is rendered with `Display`.
#[must_use]
pub fn format_path<S: core::fmt::Display>(path: &[S]) -> String {
    path.iter()
        .map(|state| format!("({state})"))
        .collect::<Vec<_>>()
        .join(",")
}
