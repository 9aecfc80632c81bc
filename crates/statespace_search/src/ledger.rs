//! First-discovery bookkeeping for a search run.
//!
//! The [`Ledger`] maps every discovered state to the record written when it
//! was first seen: the state it was discovered from and its distance from the
//! start along that discovery edge. Records are write-once. A later discovery
//! of the same state, possibly from a different parent, never replaces the
//! first one, which is what keeps breadth-first distances minimal.
//!
//! Entries are kept in discovery order and parents are stored as positions
//! into that order. Because a parent is always inserted before its children,
//! every parent chain strictly decreases in position and therefore ends at
//! the start state.

use indexmap::IndexMap;
use indexmap::map::Entry as Slot;

use crate::path::reconstruct_path;
use crate::state::SearchState;

/// Internal record for one discovered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Discovery {
    /// Position of the parent in discovery order. `None` for the start state.
    parent: Option<usize>,
    /// Number of edges from the start along the discovery chain.
    distance: usize,
}

/// Read-only view of a single ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, S> {
    /// The discovered state.
    pub state: &'a S,
    /// The state it was first discovered from, `None` for the start.
    pub parent: Option<&'a S>,
    /// Edges from the start along the discovery chain.
    pub distance: usize,
}

/// Mapping from state to its first-discovery record.
///
/// A ledger is created by each search run and handed back in the
/// [`Outcome`](crate::search::Outcome); it is never shared between runs.
#[derive(Debug, Clone)]
pub struct Ledger<S> {
    entries: IndexMap<S, Discovery>,
}

impl<S: SearchState> Default for Ledger<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> Ledger<S> {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of discovered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `state` has been discovered.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    /// Returns the first state recorded, which is the start of the run.
    #[must_use]
    pub fn start(&self) -> Option<&S> {
        self.entries.get_index(0).map(|(state, _)| state)
    }

    /// Returns the record for `state`, if it was discovered.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<Entry<'_, S>> {
        let index = self.entries.get_index_of(state)?;
        Some(self.entry_at(index))
    }

    /// Returns the state `state` was first discovered from.
    ///
    /// `None` both for the start state and for undiscovered states; use
    /// [`contains`](Self::contains) to tell them apart.
    #[must_use]
    pub fn parent(&self, state: &S) -> Option<&S> {
        self.get(state).and_then(|entry| entry.parent)
    }

    /// Recorded distance from the start, if `state` was discovered.
    #[must_use]
    pub fn distance(&self, state: &S) -> Option<usize> {
        self.entries.get(state).map(|record| record.distance)
    }

    /// Counts the states on the parent chain from `state` back to the start,
    /// both ends included.
    ///
    /// The count is taken by walking parent links rather than reading the
    /// recorded distance, so it always equals `distance + 1`.
    #[must_use]
    pub fn chain_len(&self, state: &S) -> Option<usize> {
        let mut index = self.entries.get_index_of(state)?;
        let mut count = 1;
        while let Some(parent) = self.discovery_at(index).parent {
            index = parent;
            count += 1;
        }
        Some(count)
    }

    /// Reconstructs the route from the start to `goal`.
    ///
    /// Shorthand for [`reconstruct_path`].
    #[must_use]
    pub fn path_to(&self, goal: &S) -> Option<Vec<S>> {
        reconstruct_path(self, goal)
    }

    /// Iterates over all records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_, S>> + '_ {
        (0..self.entries.len()).map(|index| self.entry_at(index))
    }

    /// Iterates over discovered states in discovery order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.entries.keys()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Engine-facing API
    // ─────────────────────────────────────────────────────────────────────

    /// Records the start state of a run. Returns its position.
    ///
    /// If the state is already present the existing position is returned and
    /// the record is left untouched.
    pub(crate) fn insert_root(&mut self, state: S) -> usize {
        match self.entries.entry(state) {
            Slot::Occupied(existing) => existing.index(),
            Slot::Vacant(vacant) => {
                let index = vacant.index();
                vacant.insert(Discovery {
                    parent: None,
                    distance: 0,
                });
                index
            }
        }
    }

    /// Records `state` as discovered from the state at position `parent`.
    ///
    /// Returns the new position, or `None` if `state` was already recorded
    /// (first-seen wins).
    pub(crate) fn insert(&mut self, state: S, parent: usize) -> Option<usize> {
        if self.entries.contains_key(&state) {
            return None;
        }
        let distance = self.discovery_at(parent).distance + 1;
        let (index, _) = self.entries.insert_full(state, Discovery {
            parent: Some(parent),
            distance,
        });
        Some(index)
    }

    /// Returns the state stored at `index`.
    pub(crate) fn state_at(&self, index: usize) -> &S {
        self.slot(index).0
    }

    /// Returns the recorded distance of the state stored at `index`.
    pub(crate) fn distance_at(&self, index: usize) -> usize {
        self.discovery_at(index).distance
    }

    /// Returns the parent position of the state stored at `index`.
    pub(crate) fn parent_at(&self, index: usize) -> Option<usize> {
        self.discovery_at(index).parent
    }

    /// Returns the position of `state`, if recorded.
    pub(crate) fn index_of(&self, state: &S) -> Option<usize> {
        self.entries.get_index_of(state)
    }

    fn discovery_at(&self, index: usize) -> &Discovery {
        self.slot(index).1
    }

    /// Positions are only ever handed out by this ledger, so they are always
    /// in bounds.
    fn slot(&self, index: usize) -> (&S, &Discovery) {
        self.entries
            .get_index(index)
            .unwrap_or_else(|| panic!("ledger position {index} out of bounds"))
    }

    fn entry_at(&self, index: usize) -> Entry<'_, S> {
        let (state, record) = self.slot(index);
        Entry {
            state,
            parent: record
                .parent
                .and_then(|parent| self.entries.get_index(parent))
                .map(|(parent, _)| parent),
            distance: record.distance,
        }
    }
}
