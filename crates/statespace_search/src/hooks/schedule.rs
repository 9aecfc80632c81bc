//! Schedule markers for search lifecycle events.
//!
//! A schedule identifies *when* a hook runs. Each marker is an empty type
//! implementing [`Schedule`]; event data is carried separately by
//! [`SearchEvent`](super::events::SearchEvent), which every hook receives.

use core::any::TypeId;
use variadics_please::all_tuples;

/// Identifier for a hook schedule, derived from a marker type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleId {
    type_id: TypeId,
    type_name: &'static str,
}

impl ScheduleId {
    /// Creates a `ScheduleId` for the given schedule marker type.
    ///
    /// ```
    /// use statespace_search::hooks::schedule::{OnDiscover, ScheduleId};
    ///
    /// let schedule = ScheduleId::of::<OnDiscover>();
    /// assert!(schedule.type_name().ends_with("OnDiscover"));
    /// ```
    #[must_use]
    pub fn of<S: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            type_name: core::any::type_name::<S>(),
        }
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the type name for debugging.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Marker trait for schedule types.
pub trait Schedule: 'static {}

/// Types that can be converted into a list of schedule IDs.
///
/// Implemented for single schedules and tuples of schedules, so an observer
/// can subscribe to several lifecycle points in one call.
pub trait IntoScheduleIds {
    /// Returns the schedule IDs for this type.
    fn schedule_ids() -> Vec<ScheduleId>;
}

impl<S: Schedule> IntoScheduleIds for S {
    fn schedule_ids() -> Vec<ScheduleId> {
        vec![ScheduleId::of::<S>()]
    }
}

macro_rules! impl_into_schedule_ids_for_tuple {
    ($($S:ident),*) => {
        impl<$($S: Schedule),*> IntoScheduleIds for ($($S,)*) {
            fn schedule_ids() -> Vec<ScheduleId> {
                vec![$(ScheduleId::of::<$S>()),*]
            }
        }
    };
}

all_tuples!(impl_into_schedule_ids_for_tuple, 2, 4, S);

// ─────────────────────────────────────────────────────────────────────────────
// Run Schedules
// ─────────────────────────────────────────────────────────────────────────────

/// Hooks called once before the first state is recorded.
///
/// Event data: [`SearchEvent::SearchStart`](super::events::SearchEvent::SearchStart)
pub struct OnSearchStart;
impl Schedule for OnSearchStart {}

/// Hooks called once after the frontier is exhausted or a goal is reached.
///
/// Event data: [`SearchEvent::SearchComplete`](super::events::SearchEvent::SearchComplete)
pub struct OnSearchComplete;
impl Schedule for OnSearchComplete {}

// ─────────────────────────────────────────────────────────────────────────────
// State Schedules
// ─────────────────────────────────────────────────────────────────────────────

/// Hooks called when a state is recorded in the ledger for the first time.
///
/// For the iterative strategies this is enqueue/push time; for the recursive
/// strategy it is just before descending into the state. The start state is
/// reported too, with no parent.
///
/// Event data: [`SearchEvent::Discovered`](super::events::SearchEvent::Discovered)
pub struct OnDiscover;
impl Schedule for OnDiscover {}

/// Hooks called when a state is taken off the frontier for processing,
/// before its goal test and before its successors are generated.
///
/// Event data: [`SearchEvent::Expanded`](super::events::SearchEvent::Expanded)
pub struct OnExpand;
impl Schedule for OnExpand {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_id_equality() {
        assert_eq!(ScheduleId::of::<OnDiscover>(), ScheduleId::of::<OnDiscover>());
        assert_ne!(ScheduleId::of::<OnDiscover>(), ScheduleId::of::<OnExpand>());
    }

    #[test]
    fn schedule_id_type_id() {
        let id = ScheduleId::of::<OnExpand>();
        assert_eq!(id.type_id(), TypeId::of::<OnExpand>());
    }

    #[test]
    fn into_schedule_ids_tuple_keeps_order() {
        let ids = <(OnDiscover, OnExpand, OnSearchComplete)>::schedule_ids();
        assert_eq!(ids, vec![
            ScheduleId::of::<OnDiscover>(),
            ScheduleId::of::<OnExpand>(),
            ScheduleId::of::<OnSearchComplete>(),
        ]);
    }
}
