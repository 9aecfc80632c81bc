//! Unified event enum for search hooks.
//!
//! All hooks receive `&SearchEvent<S>` and match on the variants they care
//! about.
//!
//! # Example
//!
//! ```
//! use statespace_search::hooks::SearchEvent;
//!
//! fn handle_event(event: &SearchEvent<(u8, u8)>) {
//!     match event {
//!         SearchEvent::Discovered { state, distance, .. } => {
//!             println!("found {:?} at distance {}", state, distance);
//!         }
//!         SearchEvent::Expanded { state, .. } => println!("expanding {:?}", state),
//!         _ => {}
//!     }
//! }
//! ```

use core::fmt;

use crate::search::Strategy;

/// Event delivered to search hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent<S> {
    /// A run is about to begin.
    SearchStart {
        /// Exploration order used by the run.
        strategy: Strategy,
        /// The start state.
        start: S,
    },

    /// A state was recorded in the ledger for the first time.
    Discovered {
        /// The newly discovered state.
        state: S,
        /// The state it was discovered from, `None` for the start.
        parent: Option<S>,
        /// Edges from the start along the discovery chain.
        distance: usize,
    },

    /// A state is being processed: goal test, then successor generation.
    Expanded {
        /// The state being expanded.
        state: S,
        /// Its recorded distance from the start.
        distance: usize,
        /// Zero-based position of this expansion within the run.
        expansion: usize,
    },

    /// A run finished.
    SearchComplete {
        /// Exploration order used by the run.
        strategy: Strategy,
        /// Whether a goal state was reached.
        found: bool,
        /// Number of states recorded in the ledger.
        discovered: usize,
        /// Number of states expanded.
        expanded: usize,
    },
}

impl<S> SearchEvent<S> {
    /// Returns the schedule name for this event variant.
    #[must_use]
    pub fn schedule_name(&self) -> &'static str {
        match self {
            SearchEvent::SearchStart { .. } => "OnSearchStart",
            SearchEvent::Discovered { .. } => "OnDiscover",
            SearchEvent::Expanded { .. } => "OnExpand",
            SearchEvent::SearchComplete { .. } => "OnSearchComplete",
        }
    }

    /// Returns the state this event concerns, if it is a state-level event.
    #[must_use]
    pub fn state(&self) -> Option<&S> {
        match self {
            SearchEvent::SearchStart { start, .. } => Some(start),
            SearchEvent::Discovered { state, .. } | SearchEvent::Expanded { state, .. } => {
                Some(state)
            }
            SearchEvent::SearchComplete { .. } => None,
        }
    }
}

impl<S: fmt::Debug> fmt::Display for SearchEvent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::SearchStart { strategy, start } => {
                write!(f, "SearchStart({} from {:?})", strategy, start)
            }
            SearchEvent::Discovered {
                state,
                parent,
                distance,
            } => match parent {
                Some(parent) => write!(
                    f,
                    "Discovered({:?} via {:?}, distance: {})",
                    state, parent, distance
                ),
                None => write!(f, "Discovered({:?}, distance: {})", state, distance),
            },
            SearchEvent::Expanded {
                state,
                distance,
                expansion,
            } => {
                write!(
                    f,
                    "Expanded({:?}, distance: {}, #{})",
                    state, distance, expansion
                )
            }
            SearchEvent::SearchComplete {
                strategy,
                found,
                discovered,
                expanded,
            } => {
                write!(
                    f,
                    "SearchComplete({}, found: {}, discovered: {}, expanded: {})",
                    strategy, found, discovered, expanded
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_names_match_markers() {
        let event = SearchEvent::Discovered {
            state: 1u8,
            parent: None,
            distance: 0,
        };
        assert_eq!(event.schedule_name(), "OnDiscover");
        assert_eq!(event.state(), Some(&1));

        let done: SearchEvent<u8> = SearchEvent::SearchComplete {
            strategy: Strategy::BreadthFirst,
            found: false,
            discovered: 1,
            expanded: 1,
        };
        assert_eq!(done.schedule_name(), "OnSearchComplete");
        assert_eq!(done.state(), None);
    }

    #[test]
    fn display_includes_parent() {
        let event = SearchEvent::Discovered {
            state: 2u8,
            parent: Some(1u8),
            distance: 1,
        };
        assert_eq!(event.to_string(), "Discovered(2 via 1, distance: 1)");
    }
}
