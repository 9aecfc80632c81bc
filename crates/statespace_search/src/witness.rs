//! Multi-target breadth-first search.
//!
//! Answers "what is the fewest number of steps to reach *any* state with
//! property P(v)?" for several target values `v` at once, with a single
//! exhaustive breadth-first traversal.
//!
//! Targets are checked when a state is expanded, in dequeue order, and in
//! the order the targets were supplied. Breadth-first expands states in
//! non-decreasing distance order, so the first state matching a target is a
//! shortest-distance witness for it. The traversal always runs to exhaustion;
//! it never stops early and never reorders discovery to favor a target.

use crate::hooks::SearchHooks;
use crate::ledger::Ledger;
use crate::search::{FnNeighbors, Neighbors, Searcher, SpaceNeighbors, Strategy};
use crate::state::{SearchState, StateSpace};

/// Witness found (or not) for one target value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport<S, V> {
    /// The target value.
    pub target: V,
    /// First expanded state matching the target.
    pub witness: Option<S>,
    /// Edges from the start to the witness, by walking its parent chain.
    pub distance: Option<usize>,
}

/// Result of a multi-target run.
#[derive(Debug, Clone)]
pub struct WitnessReport<S, V> {
    reports: Vec<TargetReport<S, V>>,
    ledger: Ledger<S>,
}

impl<S: SearchState, V: PartialEq> WitnessReport<S, V> {
    /// One report per target, in the order targets were supplied.
    #[must_use]
    pub fn reports(&self) -> &[TargetReport<S, V>] {
        &self.reports
    }

    /// Report for `target`, if it was one of the supplied targets.
    #[must_use]
    pub fn get(&self, target: &V) -> Option<&TargetReport<S, V>> {
        self.reports.iter().find(|report| report.target == *target)
    }

    /// Route from the start to the witness of `target`.
    #[must_use]
    pub fn path_for(&self, target: &V) -> Option<Vec<S>> {
        let witness = self.get(target)?.witness.as_ref()?;
        self.ledger.path_to(witness)
    }

    /// Targets for which no reachable state matched.
    pub fn unmatched(&self) -> impl Iterator<Item = &V> + '_ {
        self.reports
            .iter()
            .filter(|report| report.witness.is_none())
            .map(|report| &report.target)
    }

    /// Ledger of the exhaustive traversal: every reachable state.
    #[must_use]
    pub fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }
}

/// Builder for multi-target runs.
#[derive(Debug, Clone, Copy)]
pub struct WitnessSearch<'h, S> {
    hooks: Option<&'h SearchHooks<S>>,
}

impl<S: SearchState + 'static> Default for WitnessSearch<'_, S> {
    fn default() -> Self {
        Self { hooks: None }
    }
}

impl<'h, S: SearchState + 'static> WitnessSearch<'h, S> {
    /// Creates a multi-target search without hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer registry.
    #[must_use]
    pub fn with_hooks(mut self, hooks: &'h SearchHooks<S>) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Explores everything reachable from `start` and records, for each
    /// target, the first expanded state for which `matches(state, target)`
    /// holds.
    pub fn run<V, M, N, I>(
        &self,
        start: S,
        targets: impl IntoIterator<Item = V>,
        matches: M,
        neighbors: N,
    ) -> WitnessReport<S, V>
    where
        M: Fn(&S, &V) -> bool,
        N: Fn(&S) -> I,
        I: IntoIterator<Item = S>,
    {
        self.collect(start, targets, matches, &FnNeighbors(neighbors))
    }

    /// Like [`run`](Self::run), starting from the space's start state and
    /// ignoring its goal.
    pub fn run_space<Sp, V, M>(
        &self,
        space: &Sp,
        targets: impl IntoIterator<Item = V>,
        matches: M,
    ) -> WitnessReport<S, V>
    where
        Sp: StateSpace<State = S>,
        M: Fn(&S, &V) -> bool,
    {
        self.collect(space.start(), targets, matches, &SpaceNeighbors(space))
    }

    fn collect<V, M, Nb>(
        &self,
        start: S,
        targets: impl IntoIterator<Item = V>,
        matches: M,
        neighbors: &Nb,
    ) -> WitnessReport<S, V>
    where
        M: Fn(&S, &V) -> bool,
        Nb: Neighbors<S>,
    {
        let targets: Vec<V> = targets.into_iter().collect();
        let mut witnesses: Vec<Option<S>> = vec![None; targets.len()];

        let mut searcher = Searcher::new(Strategy::BreadthFirst);
        if let Some(hooks) = self.hooks {
            searcher = searcher.with_hooks(hooks);
        }

        // The goal test doubles as the per-expansion target check and never
        // reports a goal, so the traversal runs to exhaustion.
        let ledger = searcher
            .drive(
                start,
                |state| {
                    for (target, slot) in targets.iter().zip(witnesses.iter_mut()) {
                        if slot.is_none() && matches(state, target) {
                            *slot = Some(state.clone());
                        }
                    }
                    false
                },
                neighbors,
            )
            .into_ledger();

        let reports = targets
            .into_iter()
            .zip(witnesses)
            .map(|(target, witness)| {
                let distance = witness
                    .as_ref()
                    .and_then(|state| ledger.chain_len(state))
                    .map(|len| len - 1);
                TargetReport {
                    target,
                    witness,
                    distance,
                }
            })
            .collect();

        tracing::debug!(reachable = ledger.len(), "witness search finished");
        WitnessReport { reports, ledger }
    }
}

/// Multi-target breadth-first search without hooks.
///
/// # Example
///
/// ```
/// use statespace_search::breadth_first_witnesses;
///
/// // Which remainders mod 7 are reachable by adding 3, and how quickly?
/// let report = breadth_first_witnesses(0u32, 0..7, |n, r| n % 7 == *r, |n| [(n + 3) % 14]);
/// assert_eq!(report.get(&3).unwrap().distance, Some(1));
/// assert_eq!(report.get(&6).unwrap().distance, Some(2));
/// ```
pub fn breadth_first_witnesses<S, V, M, N, I>(
    start: S,
    targets: impl IntoIterator<Item = V>,
    matches: M,
    neighbors: N,
) -> WitnessReport<S, V>
where
    S: SearchState + 'static,
    M: Fn(&S, &V) -> bool,
    N: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    WitnessSearch::new().run(start, targets, matches, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - 3 - 4, undirected.
    fn line(n: &u8) -> Vec<u8> {
        let mut out = Vec::new();
        if *n > 0 {
            out.push(n - 1);
        }
        if *n < 4 {
            out.push(n + 1);
        }
        out
    }

    #[test]
    fn each_target_gets_nearest_witness() {
        // Target 1 stands for "any odd state"; every other target is exact.
        let matches = |n: &u8, t: &u8| if *t == 1 { n % 2 == 1 } else { n == t };
        let report = breadth_first_witnesses(2u8, [2u8, 1], matches, line);

        assert_eq!(report.get(&2).unwrap().distance, Some(0));
        // 1 and 3 are both one step away; 1 is enumerated, and so expanded, first.
        assert_eq!(report.get(&1).unwrap().witness, Some(1));
        assert_eq!(report.get(&1).unwrap().distance, Some(1));
    }

    #[test]
    fn traversal_runs_to_exhaustion() {
        let report = breadth_first_witnesses(0u8, [0u8], |n, t| n == t, line);
        assert_eq!(report.ledger().len(), 5);
    }

    #[test]
    fn unreachable_target_is_unmatched() {
        let report = breadth_first_witnesses(0u8, [3u8, 9], |n, t| n == t, line);
        assert_eq!(report.unmatched().copied().collect::<Vec<_>>(), vec![9]);
        assert_eq!(report.path_for(&3), Some(vec![0, 1, 2, 3]));
        assert_eq!(report.path_for(&9), None);
        assert_eq!(report.reports().len(), 2);
    }

    #[test]
    fn one_state_may_witness_several_targets() {
        let report = breadth_first_witnesses(0u8, [10u8, 20], |n, _| *n == 1, line);
        assert_eq!(report.get(&10).unwrap().witness, Some(1));
        assert_eq!(report.get(&20).unwrap().witness, Some(1));
    }
}
