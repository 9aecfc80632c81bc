//! State abstraction for implicit graphs.
//!
//! A state is a plain value: identity is its content, never its address or
//! any traversal bookkeeping. Parent links and distances are kept in a
//! [`Ledger`](crate::ledger::Ledger) owned by the search run, so the same
//! state value can be reused across independent runs.

use core::fmt::Debug;
use core::hash::Hash;

/// Capability contract for anything the engine can search over.
///
/// Equality and hashing must agree (equal states hash equally) and must only
/// consider the semantic content of the state.
///
/// The trait is blanket-implemented for every type with the required bounds,
/// so domain types only need the usual derives:
///
/// ```
/// use statespace_search::state::SearchState;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Position(i32, i32);
///
/// fn assert_state<S: SearchState>() {}
/// assert_state::<Position>();
/// ```
pub trait SearchState: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> SearchState for T {}

/// A domain that defines an implicit state graph.
///
/// Implementors own any read-only configuration (a maze grid, jug
/// capacities) that successor generation needs. Successor enumeration must be
/// pure: two calls on equal states yield equal sequences in the same order,
/// since depth-first strategies depend on that order.
pub trait StateSpace {
    /// The state type explored by the search.
    type State: SearchState;

    /// Returns the state the search begins from.
    fn start(&self) -> Self::State;

    /// Enumerates the successors of `state`, in a deterministic order.
    fn successors(&self, state: &Self::State) -> impl Iterator<Item = Self::State>;

    /// Returns `true` if `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
