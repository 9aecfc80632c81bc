//! The two-jug measuring puzzle.
//!
//! Two jugs with capacities `A` and `B` start empty. Each move fills a jug
//! from the tap, empties one onto the ground, or pours one into the other
//! until the source is empty or the destination is full. The goal is for
//! either jug to hold exactly `target` units.
//!
//! ```
//! use statespace_domains::jugs::{JugPuzzle, JugState};
//! use statespace_search::search::{Searcher, Strategy};
//!
//! let puzzle = JugPuzzle::new(3, 5, 4);
//! let outcome = Searcher::new(Strategy::BreadthFirst).run_space(&puzzle);
//! assert_eq!(outcome.goal(), Some(&JugState::new(3, 4)));
//! assert_eq!(outcome.distance(), Some(6));
//! ```

use core::fmt;
use statespace_search::ledger::Ledger;
use statespace_search::state::StateSpace;
use statespace_search::witness::{WitnessReport, WitnessSearch};

/// Amounts held by jug A and jug B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JugState {
    /// Units in jug A.
    pub a: u32,
    /// Units in jug B.
    pub b: u32,
}

impl JugState {
    /// Creates a state.
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Combined contents of both jugs. Widened so full jugs of any capacity
    /// add up without overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.a) + u64::from(self.b)
    }

    /// Whether either jug holds exactly `amount`.
    #[must_use]
    pub const fn holds(&self, amount: u32) -> bool {
        self.a == amount || self.b == amount
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.a, self.b)
    }
}

/// A single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JugOp {
    /// Fill A to capacity.
    FillA,
    /// Fill B to capacity.
    FillB,
    /// Empty A.
    EmptyA,
    /// Empty B.
    EmptyB,
    /// Pour A into B until A is empty or B is full.
    PourAToB,
    /// Pour B into A until B is empty or A is full.
    PourBToA,
}

impl JugOp {
    /// Every move, in successor enumeration order.
    pub const ALL: [JugOp; 6] = [
        JugOp::FillA,
        JugOp::FillB,
        JugOp::EmptyA,
        JugOp::EmptyB,
        JugOp::PourAToB,
        JugOp::PourBToA,
    ];

    /// Short human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            JugOp::FillA => "fill A",
            JugOp::FillB => "fill B",
            JugOp::EmptyA => "empty A",
            JugOp::EmptyB => "empty B",
            JugOp::PourAToB => "pour A into B",
            JugOp::PourBToA => "pour B into A",
        }
    }
}

impl fmt::Display for JugOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Jug capacities and the amount to measure.
///
/// Searching the puzzle as a [`StateSpace`] starts from two empty jugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JugPuzzle {
    capacity_a: u32,
    capacity_b: u32,
    target: u32,
}

impl JugPuzzle {
    /// Creates a puzzle. A target larger than both jugs is allowed; it is
    /// simply never reached.
    #[must_use]
    pub const fn new(capacity_a: u32, capacity_b: u32, target: u32) -> Self {
        Self {
            capacity_a,
            capacity_b,
            target,
        }
    }

    /// Capacity of jug A.
    #[must_use]
    pub const fn capacity_a(&self) -> u32 {
        self.capacity_a
    }

    /// Capacity of jug B.
    #[must_use]
    pub const fn capacity_b(&self) -> u32 {
        self.capacity_b
    }

    /// Amount either jug must hold to solve the puzzle.
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// The state after applying `op`, or `None` if the move changes nothing.
    #[must_use]
    pub fn apply(&self, state: JugState, op: JugOp) -> Option<JugState> {
        let JugState { a, b } = state;
        let next = match op {
            JugOp::FillA => JugState::new(self.capacity_a, b),
            JugOp::FillB => JugState::new(a, self.capacity_b),
            JugOp::EmptyA => JugState::new(0, b),
            JugOp::EmptyB => JugState::new(a, 0),
            JugOp::PourAToB => {
                let poured = a.min(self.capacity_b.saturating_sub(b));
                JugState::new(a - poured, b + poured)
            }
            JugOp::PourBToA => {
                let poured = b.min(self.capacity_a.saturating_sub(a));
                JugState::new(a + poured, b - poured)
            }
        };
        (next != state).then_some(next)
    }

    /// Every valid move from `state` paired with its result.
    pub fn transitions(&self, state: JugState) -> impl Iterator<Item = (JugOp, JugState)> + '_ {
        JugOp::ALL
            .into_iter()
            .filter_map(move |op| self.apply(state, op).map(|next| (op, next)))
    }

    /// The first move, in enumeration order, that turns `from` into `to`.
    #[must_use]
    pub fn operation_between(&self, from: JugState, to: JugState) -> Option<JugOp> {
        self.transitions(from)
            .find_map(|(op, next)| (next == to).then_some(op))
    }

    /// Every state within capacity, whether reachable or not, in row-major
    /// order of `(a, b)`.
    pub fn all_states(&self) -> impl Iterator<Item = JugState> + '_ {
        (0..=self.capacity_a)
            .flat_map(move |a| (0..=self.capacity_b).map(move |b| JugState::new(a, b)))
    }

    /// States within capacity that the search recorded in `ledger` never
    /// reached.
    ///
    /// Only meaningful for a ledger from an exhaustive run.
    #[must_use]
    pub fn unreachable_states(&self, ledger: &Ledger<JugState>) -> Vec<JugState> {
        self.all_states()
            .filter(|state| !ledger.contains(state))
            .collect()
    }

    /// For each amount `1..=max(A, B)`, the first state found in which either
    /// jug holds that amount.
    #[must_use]
    pub fn amount_witnesses(&self) -> WitnessReport<JugState, u32> {
        self.amount_witnesses_with(&WitnessSearch::new())
    }

    /// [`amount_witnesses`](Self::amount_witnesses) through a configured
    /// search, e.g. one carrying hooks.
    #[must_use]
    pub fn amount_witnesses_with(
        &self,
        search: &WitnessSearch<'_, JugState>,
    ) -> WitnessReport<JugState, u32> {
        let largest = self.capacity_a.max(self.capacity_b);
        search.run_space(self, 1..=largest, |state, amount| state.holds(*amount))
    }

    /// For each combined amount `1..=A + B`, the first state found whose
    /// jugs hold that much together.
    #[must_use]
    pub fn total_witnesses(&self) -> WitnessReport<JugState, u64> {
        self.total_witnesses_with(&WitnessSearch::new())
    }

    /// [`total_witnesses`](Self::total_witnesses) through a configured
    /// search.
    #[must_use]
    pub fn total_witnesses_with(
        &self,
        search: &WitnessSearch<'_, JugState>,
    ) -> WitnessReport<JugState, u64> {
        let combined = JugState::new(self.capacity_a, self.capacity_b).total();
        search.run_space(self, 1..=combined, |state, total| state.total() == *total)
    }
}

impl StateSpace for JugPuzzle {
    type State = JugState;

    fn start(&self) -> JugState {
        JugState::default()
    }

    fn successors(&self, state: &JugState) -> impl Iterator<Item = JugState> {
        self.transitions(*state).map(|(_, next)| next)
    }

    fn is_goal(&self, state: &JugState) -> bool {
        state.holds(self.target)
    }
}
