//! Search strategies and the run driver.
//!
//! Three exploration orders share one ledger discipline:
//!
//! - [`Strategy::BreadthFirst`]: FIFO queue. A successor is recorded when it
//!   is enqueued, so recorded distances are shortest edge counts.
//! - [`Strategy::DepthFirstIterative`]: explicit LIFO stack. The last
//!   enumerated successor is explored first.
//! - [`Strategy::DepthFirstRecursive`]: the native call stack. The first
//!   enumerated successor is explored first, and each subtree completes
//!   before its next sibling is tried.
//!
//! In every strategy a state is recorded in the ledger before it can be
//! expanded and is expanded at most once, which bounds every run by the
//! number of reachable states even when the graph has cycles or self-loops.
//!
//! # Resource limits
//!
//! [`Strategy::DepthFirstRecursive`] uses one native stack frame per level of
//! the discovery tree. Callers must bound the depth of the state graph (for
//! example by grid dimensions); stack exhaustion is not caught. Use one of
//! the iterative strategies for deep graphs.

use core::fmt;

use hashbrown::HashSet;

use crate::frontier::{Frontier, Queue, Stack};
use crate::hooks::SearchHooks;
use crate::hooks::events::SearchEvent;
use crate::hooks::schedule::{
    OnDiscover, OnExpand, OnSearchComplete, OnSearchStart, Schedule, ScheduleId,
};
use crate::ledger::Ledger;
use crate::path::reconstruct_path;
use crate::state::{SearchState, StateSpace};

// ─────────────────────────────────────────────────────────────────────────────
// Strategy
// ─────────────────────────────────────────────────────────────────────────────

/// Exploration order of a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO queue; finds shortest routes.
    BreadthFirst,
    /// Explicit LIFO stack.
    DepthFirstIterative,
    /// Native call stack; depth bounded by the caller.
    DepthFirstRecursive,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirstIterative,
        Strategy::DepthFirstRecursive,
    ];

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirstIterative => "dfs",
            Strategy::DepthFirstRecursive => "dfs-recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a search run. `NotFound` is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub enum Outcome<S> {
    /// A goal state was reached.
    Found {
        /// The goal state.
        state: S,
        /// First-discovery records of the run.
        ledger: Ledger<S>,
    },
    /// The frontier was exhausted without reaching a goal.
    NotFound {
        /// First-discovery records of the run.
        ledger: Ledger<S>,
    },
}

impl<S: SearchState> Outcome<S> {
    /// Returns `true` if a goal state was reached.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    /// The goal state, if found.
    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        match self {
            Outcome::Found { state, .. } => Some(state),
            Outcome::NotFound { .. } => None,
        }
    }

    /// The ledger of the run.
    #[must_use]
    pub fn ledger(&self) -> &Ledger<S> {
        match self {
            Outcome::Found { ledger, .. } | Outcome::NotFound { ledger } => ledger,
        }
    }

    /// Consumes the outcome, returning the ledger.
    #[must_use]
    pub fn into_ledger(self) -> Ledger<S> {
        match self {
            Outcome::Found { ledger, .. } | Outcome::NotFound { ledger } => ledger,
        }
    }

    /// Route from the start to the goal, if found.
    #[must_use]
    pub fn path(&self) -> Option<Vec<S>> {
        reconstruct_path(self.ledger(), self.goal()?)
    }

    /// Recorded distance of the goal, if found.
    ///
    /// This is the shortest edge count only for [`Strategy::BreadthFirst`].
    #[must_use]
    pub fn distance(&self) -> Option<usize> {
        self.ledger().distance(self.goal()?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Successor providers
// ─────────────────────────────────────────────────────────────────────────────

/// Uniform access to successor enumeration for closures and state spaces.
pub(crate) trait Neighbors<S> {
    fn neighbors(&self, state: &S) -> impl Iterator<Item = S>;
}

/// Adapts a `Fn(&S) -> impl IntoIterator<Item = S>` closure.
pub(crate) struct FnNeighbors<N>(pub(crate) N);

impl<S, N, I> Neighbors<S> for FnNeighbors<N>
where
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    fn neighbors(&self, state: &S) -> impl Iterator<Item = S> {
        (self.0)(state).into_iter()
    }
}

/// Adapts a [`StateSpace`].
pub(crate) struct SpaceNeighbors<'a, Sp>(pub(crate) &'a Sp);

impl<Sp: StateSpace> Neighbors<Sp::State> for SpaceNeighbors<'_, Sp> {
    fn neighbors(&self, state: &Sp::State) -> impl Iterator<Item = Sp::State> {
        self.0.successors(state)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Searcher
// ─────────────────────────────────────────────────────────────────────────────

/// Configurable entry point for a search run.
///
/// # Example
///
/// ```
/// use statespace_search::search::{Searcher, Strategy};
///
/// // Each step adds 3 or 5 without passing 11.
/// let outcome = Searcher::new(Strategy::BreadthFirst)
///     .run(0u32, |n| *n == 11, |n| [n + 3, n + 5].into_iter().filter(|m| *m <= 11));
///
/// assert_eq!(outcome.path(), Some(vec![0, 3, 6, 11]));
/// assert_eq!(outcome.distance(), Some(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Searcher<'h, S> {
    strategy: Strategy,
    hooks: Option<&'h SearchHooks<S>>,
}

impl<'h, S: SearchState + 'static> Searcher<'h, S> {
    /// Creates a searcher with the given strategy and no hooks.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            hooks: None,
        }
    }

    /// Attaches an observer registry to every run of this searcher.
    #[must_use]
    pub fn with_hooks(mut self, hooks: &'h SearchHooks<S>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// The configured exploration order.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Searches from `start` until `is_goal` holds or the reachable states
    /// are exhausted.
    ///
    /// `neighbors` must be pure: equal states yield equal successor
    /// sequences in the same order.
    pub fn run<G, N, I>(&self, start: S, is_goal: G, neighbors: N) -> Outcome<S>
    where
        G: FnMut(&S) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        self.drive(start, is_goal, &FnNeighbors(neighbors))
    }

    /// Searches a [`StateSpace`] from its start state towards its goal.
    pub fn run_space<Sp>(&self, space: &Sp) -> Outcome<S>
    where
        Sp: StateSpace<State = S>,
    {
        self.drive(
            space.start(),
            |state| space.is_goal(state),
            &SpaceNeighbors(space),
        )
    }

    pub(crate) fn drive<G, Nb>(&self, start: S, mut is_goal: G, neighbors: &Nb) -> Outcome<S>
    where
        G: FnMut(&S) -> bool,
        Nb: Neighbors<S>,
    {
        let mut run = Run::new(self.strategy, self.hooks);
        run.emit::<OnSearchStart>(|_| SearchEvent::SearchStart {
            strategy: self.strategy,
            start: start.clone(),
        });
        tracing::debug!(strategy = %self.strategy, start = ?start, "search started");

        let root = run.discover_root(start);
        let goal = match self.strategy {
            Strategy::BreadthFirst => run.explore(Queue::new(), root, &mut is_goal, neighbors),
            Strategy::DepthFirstIterative => {
                run.explore(Stack::new(), root, &mut is_goal, neighbors)
            }
            Strategy::DepthFirstRecursive => run.descend(root, &mut is_goal, neighbors),
        };

        run.finish(goal)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Breadth-first search without hooks.
///
/// The recorded distance of every discovered state is its shortest edge
/// count from `start`.
pub fn breadth_first<S, G, N, I>(start: S, is_goal: G, neighbors: N) -> Outcome<S>
where
    S: SearchState + 'static,
    G: FnMut(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Searcher::new(Strategy::BreadthFirst).run(start, is_goal, neighbors)
}

/// Depth-first search over an explicit stack, without hooks.
pub fn depth_first_iterative<S, G, N, I>(start: S, is_goal: G, neighbors: N) -> Outcome<S>
where
    S: SearchState + 'static,
    G: FnMut(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Searcher::new(Strategy::DepthFirstIterative).run(start, is_goal, neighbors)
}

/// Depth-first search over the native call stack, without hooks.
///
/// See the [module documentation](self) for the depth limit.
pub fn depth_first_recursive<S, G, N, I>(start: S, is_goal: G, neighbors: N) -> Outcome<S>
where
    S: SearchState + 'static,
    G: FnMut(&S) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Searcher::new(Strategy::DepthFirstRecursive).run(start, is_goal, neighbors)
}

// ─────────────────────────────────────────────────────────────────────────────
// Run
// ─────────────────────────────────────────────────────────────────────────────

/// State owned by a single search run.
struct Run<'h, S> {
    strategy: Strategy,
    hooks: Option<&'h SearchHooks<S>>,
    ledger: Ledger<S>,
    /// Ledger positions that have already been expanded.
    expanded: HashSet<usize>,
}

impl<'h, S: SearchState + 'static> Run<'h, S> {
    fn new(strategy: Strategy, hooks: Option<&'h SearchHooks<S>>) -> Self {
        Self {
            strategy,
            hooks,
            ledger: Ledger::new(),
            expanded: HashSet::new(),
        }
    }

    /// Shared loop of the two frontier-driven strategies.
    fn explore<F, G, Nb>(
        &mut self,
        mut frontier: F,
        root: usize,
        is_goal: &mut G,
        neighbors: &Nb,
    ) -> Option<usize>
    where
        F: Frontier<usize>,
        G: FnMut(&S) -> bool,
        Nb: Neighbors<S>,
    {
        frontier.push(root);
        while let Some(index) = frontier.pop() {
            // Enqueue-time deduplication keeps duplicates out of the
            // frontier; this guard keeps expansion unique regardless.
            let Some(current) = self.begin_expansion(index) else {
                continue;
            };
            if is_goal(&current) {
                return Some(index);
            }
            for next in neighbors.neighbors(&current) {
                if let Some(child) = self.discover(next, index) {
                    frontier.push(child);
                }
            }
        }
        None
    }

    /// Recursive depth-first step. `index` is already recorded in the ledger.
    fn descend<G, Nb>(&mut self, index: usize, is_goal: &mut G, neighbors: &Nb) -> Option<usize>
    where
        G: FnMut(&S) -> bool,
        Nb: Neighbors<S>,
    {
        let current = self.begin_expansion(index)?;
        if is_goal(&current) {
            return Some(index);
        }
        for next in neighbors.neighbors(&current) {
            if let Some(child) = self.discover(next, index) {
                if let Some(goal) = self.descend(child, is_goal, neighbors) {
                    return Some(goal);
                }
            }
        }
        None
    }

    fn discover_root(&mut self, start: S) -> usize {
        let index = self.ledger.insert_root(start);
        self.emit::<OnDiscover>(|ledger| SearchEvent::Discovered {
            state: ledger.state_at(index).clone(),
            parent: None,
            distance: 0,
        });
        index
    }

    /// Records `state` as a child of `parent`. Returns `None` if it was seen
    /// before.
    fn discover(&mut self, state: S, parent: usize) -> Option<usize> {
        let index = self.ledger.insert(state, parent)?;
        self.emit::<OnDiscover>(|ledger| SearchEvent::Discovered {
            state: ledger.state_at(index).clone(),
            parent: Some(ledger.state_at(parent).clone()),
            distance: ledger.distance_at(index),
        });
        Some(index)
    }

    /// Marks `index` as expanded and returns a copy of its state, or `None`
    /// if it was expanded before.
    fn begin_expansion(&mut self, index: usize) -> Option<S> {
        if !self.expanded.insert(index) {
            return None;
        }
        let state = self.ledger.state_at(index).clone();
        let distance = self.ledger.distance_at(index);
        let expansion = self.expanded.len() - 1;
        tracing::trace!(state = ?state, distance, expansion, "expanding");
        self.emit::<OnExpand>(|_| SearchEvent::Expanded {
            state: state.clone(),
            distance,
            expansion,
        });
        Some(state)
    }

    fn finish(self, goal: Option<usize>) -> Outcome<S> {
        self.emit::<OnSearchComplete>(|ledger| SearchEvent::SearchComplete {
            strategy: self.strategy,
            found: goal.is_some(),
            discovered: ledger.len(),
            expanded: self.expanded.len(),
        });
        tracing::debug!(
            strategy = %self.strategy,
            found = goal.is_some(),
            discovered = self.ledger.len(),
            expanded = self.expanded.len(),
            "search finished"
        );

        match goal {
            Some(index) => Outcome::Found {
                state: self.ledger.state_at(index).clone(),
                ledger: self.ledger,
            },
            None => Outcome::NotFound {
                ledger: self.ledger,
            },
        }
    }

    /// Invokes the hooks of schedule `Sched`. The event is only built when
    /// at least one hook is registered for it.
    fn emit<Sched: Schedule>(&self, event: impl FnOnce(&Ledger<S>) -> SearchEvent<S>) {
        let Some(hooks) = self.hooks else {
            return;
        };
        let schedule = ScheduleId::of::<Sched>();
        if hooks.has_hooks(schedule) {
            hooks.invoke(schedule, &event(&self.ledger));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small directed graph with a cycle and a self-loop:
    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3, 3 -> 0, 3 -> 3, 3 -> 4
    fn diamond(n: &u8) -> Vec<u8> {
        match n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            3 => vec![0, 3, 4],
            _ => vec![],
        }
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::BreadthFirst.to_string(), "bfs");
        assert_eq!(Strategy::DepthFirstIterative.to_string(), "dfs");
        assert_eq!(Strategy::DepthFirstRecursive.to_string(), "dfs-recursive");
    }

    #[test]
    fn breadth_first_records_shortest_distances() {
        let outcome = breadth_first(0u8, |_| false, diamond);
        let ledger = outcome.ledger();
        assert!(!outcome.is_found());
        assert_eq!(ledger.distance(&3), Some(2));
        assert_eq!(ledger.distance(&4), Some(3));
        assert_eq!(ledger.parent(&3), Some(&1));
    }

    #[test]
    fn iterative_depth_first_explores_last_successor_first() {
        let outcome = depth_first_iterative(0u8, |n| *n == 4, diamond);
        assert_eq!(outcome.path(), Some(vec![0, 2, 3, 4]));
    }

    #[test]
    fn recursive_depth_first_explores_first_successor_first() {
        let outcome = depth_first_recursive(0u8, |n| *n == 4, diamond);
        assert_eq!(outcome.path(), Some(vec![0, 1, 3, 4]));
    }

    #[test]
    fn start_can_be_goal() {
        for strategy in Strategy::ALL {
            let outcome = Searcher::new(strategy).run(0u8, |n| *n == 0, diamond);
            assert_eq!(outcome.goal(), Some(&0));
            assert_eq!(outcome.path(), Some(vec![0]));
            assert_eq!(outcome.distance(), Some(0));
        }
    }

    #[test]
    fn self_loop_terminates() {
        for strategy in Strategy::ALL {
            let outcome = Searcher::new(strategy).run(7u8, |_| false, |n| [*n]);
            assert!(!outcome.is_found());
            assert_eq!(outcome.ledger().len(), 1);
        }
    }

    #[test]
    fn not_found_keeps_ledger() {
        let outcome = breadth_first(0u8, |n| *n == 99, diamond);
        assert!(outcome.goal().is_none());
        assert!(outcome.path().is_none());
        assert_eq!(outcome.into_ledger().len(), 5);
    }
}
