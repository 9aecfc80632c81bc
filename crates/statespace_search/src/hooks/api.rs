//! Hook registration API for search runs.
//!
//! [`SearchHooks`] is a registry of named observers keyed by schedule. A
//! [`Searcher`](crate::search::Searcher) borrows the registry for the
//! duration of a run and invokes the hooks of each schedule, in registration
//! order, as the run progresses.
//!
//! # Multi-Schedule Registration
//!
//! ```
//! use statespace_search::hooks::{SearchEvent, SearchHooks};
//! use statespace_search::hooks::schedule::{OnDiscover, OnExpand};
//!
//! let hooks = SearchHooks::<u32>::new();
//! hooks
//!     .register_observer::<(OnDiscover, OnExpand), _>("tracker", |event: &SearchEvent<u32>| {
//!         match event {
//!             SearchEvent::Discovered { state, .. } => println!("seen {state}"),
//!             SearchEvent::Expanded { state, .. } => println!("expand {state}"),
//!             _ => {}
//!         }
//!     })
//!     .unwrap();
//! ```

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use super::events::SearchEvent;
use super::schedule::{IntoScheduleIds, ScheduleId};

// ─────────────────────────────────────────────────────────────────────────────
// BoxedHook
// ─────────────────────────────────────────────────────────────────────────────

/// Type-erased hook that receives `&SearchEvent<S>`.
///
/// Most users should use [`SearchHooks::register_observer`] instead of
/// creating a `BoxedHook` directly.
pub struct BoxedHook<S> {
    handler: Box<dyn Fn(&SearchEvent<S>) + Send + Sync>,
}

impl<S> BoxedHook<S> {
    /// Wraps a handler.
    #[must_use]
    pub fn new(handler: impl Fn(&SearchEvent<S>) + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Invokes the hook with the given event.
    pub fn invoke(&self, event: &SearchEvent<S>) {
        (self.handler)(event);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HookRegistrationError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during hook registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookRegistrationError {
    /// A hook with this name already exists on the schedule.
    #[error("hook '{name}' already registered for schedule '{}'", schedule.type_name())]
    DuplicateName {
        /// The schedule where the duplicate was found.
        schedule: ScheduleId,
        /// The duplicate hook name.
        name: String,
    },
}

/// Entry in the hook registry.
struct HookEntry<S> {
    /// Human-readable name for debugging and logging.
    name: String,
    hook: BoxedHook<S>,
}

// ─────────────────────────────────────────────────────────────────────────────
// SearchHooks
// ─────────────────────────────────────────────────────────────────────────────

/// Registry of observers for search lifecycle events.
///
/// Registration takes `&self`; the registry uses an [`RwLock`] internally so
/// it can be shared between threads that each own their own search runs. The
/// registry itself never holds search state.
pub struct SearchHooks<S> {
    hooks: RwLock<HashMap<ScheduleId, Vec<HookEntry<S>>>>,
}

impl<S> Default for SearchHooks<S> {
    fn default() -> Self {
        Self {
            hooks: RwLock::new(HashMap::new()),
        }
    }
}

impl<S> core::fmt::Debug for SearchHooks<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let hooks = self.hooks.read();
        let mut map = f.debug_map();
        for (schedule, entries) in hooks.iter() {
            let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
            map.entry(&schedule.type_name(), &names);
        }
        map.finish()
    }
}

impl<S: 'static> SearchHooks<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer for one or more schedules.
    ///
    /// When several schedules are given, the hook is registered on each under
    /// `name@ScheduleTypeName`.
    ///
    /// # Errors
    ///
    /// Returns [`HookRegistrationError::DuplicateName`] if a hook with the
    /// same name is already registered on one of the schedules. Schedules
    /// processed before the duplicate keep their registration.
    pub fn register_observer<Sched, F>(
        &self,
        name: impl Into<String>,
        hook: F,
    ) -> Result<&Self, HookRegistrationError>
    where
        Sched: IntoScheduleIds,
        F: Fn(&SearchEvent<S>) + Send + Sync + 'static,
    {
        let schedules = Sched::schedule_ids();
        let name = name.into();
        let hook = Arc::new(hook);

        for schedule in &schedules {
            let hook_name = if schedules.len() > 1 {
                format!("{}@{}", name, schedule.type_name())
            } else {
                name.clone()
            };
            let hook = Arc::clone(&hook);
            self.register_boxed(*schedule, hook_name, BoxedHook::new(move |event| hook(event)))?;
        }
        Ok(self)
    }

    /// Registers a pre-built [`BoxedHook`] for the given schedule.
    ///
    /// # Errors
    ///
    /// Returns [`HookRegistrationError::DuplicateName`] if `name` is already
    /// registered on `schedule`.
    pub fn register_boxed(
        &self,
        schedule: ScheduleId,
        name: impl Into<String>,
        hook: BoxedHook<S>,
    ) -> Result<&Self, HookRegistrationError> {
        let name = name.into();
        let mut hooks = self.hooks.write();
        let entries = hooks.entry(schedule).or_default();

        if entries.iter().any(|entry| entry.name == name) {
            return Err(HookRegistrationError::DuplicateName { schedule, name });
        }

        entries.push(HookEntry { name, hook });
        Ok(self)
    }

    /// Invokes every hook registered for `schedule`, in registration order.
    pub fn invoke(&self, schedule: ScheduleId, event: &SearchEvent<S>) {
        let hooks = self.hooks.read();
        if let Some(entries) = hooks.get(&schedule) {
            for entry in entries {
                entry.hook.invoke(event);
            }
        }
    }

    /// Returns `true` if at least one hook is registered for `schedule`.
    #[must_use]
    pub fn has_hooks(&self, schedule: ScheduleId) -> bool {
        self.hooks
            .read()
            .get(&schedule)
            .is_some_and(|entries| !entries.is_empty())
    }

    /// Names of the hooks registered for `schedule`, in registration order.
    #[must_use]
    pub fn hook_names(&self, schedule: ScheduleId) -> Vec<String> {
        self.hooks
            .read()
            .get(&schedule)
            .map(|entries| entries.iter().map(|entry| entry.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Total number of registered hooks across all schedules.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.hooks.read().values().map(Vec::len).sum()
    }

    /// Removes every registered hook.
    pub fn clear(&self) {
        self.hooks.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::schedule::{OnDiscover, OnExpand, OnSearchStart};
    use crate::search::Strategy;
    use std::sync::Mutex;

    fn discovered(state: u8) -> SearchEvent<u8> {
        SearchEvent::Discovered {
            state,
            parent: None,
            distance: 0,
        }
    }

    #[test]
    fn observer_receives_events_for_its_schedule_only() {
        let hooks = SearchHooks::<u8>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        hooks
            .register_observer::<OnDiscover, _>("collector", move |event| {
                sink.lock().unwrap().push(event.clone());
            })
            .unwrap();

        hooks.invoke(ScheduleId::of::<OnDiscover>(), &discovered(3));
        hooks.invoke(ScheduleId::of::<OnExpand>(), &discovered(4));

        assert_eq!(*seen.lock().unwrap(), vec![discovered(3)]);
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let hooks = SearchHooks::<u8>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            hooks
                .register_observer::<OnSearchStart, _>(name, move |_| {
                    order.lock().unwrap().push(name);
                })
                .unwrap();
        }

        hooks.invoke(ScheduleId::of::<OnSearchStart>(), &SearchEvent::SearchStart {
            strategy: Strategy::BreadthFirst,
            start: 0,
        });
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let hooks = SearchHooks::<u8>::new();
        hooks.register_observer::<OnDiscover, _>("dup", |_| {}).unwrap();

        let err = hooks
            .register_observer::<OnDiscover, _>("dup", |_| {})
            .unwrap_err();
        assert!(matches!(err, HookRegistrationError::DuplicateName { ref name, .. } if name == "dup"));
        assert!(err.to_string().contains("dup"));
        assert_eq!(hooks.hook_count(), 1);
    }

    #[test]
    fn multi_schedule_names_are_suffixed() {
        let hooks = SearchHooks::<u8>::new();
        hooks
            .register_observer::<(OnDiscover, OnExpand), _>("both", |_| {})
            .unwrap();

        let names = hooks.hook_names(ScheduleId::of::<OnExpand>());
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("both@"));
        assert!(names[0].ends_with("OnExpand"));
        assert_eq!(hooks.hook_count(), 2);
    }

    #[test]
    fn clear_removes_everything() {
        let hooks = SearchHooks::<u8>::new();
        hooks.register_observer::<OnDiscover, _>("a", |_| {}).unwrap();
        assert!(hooks.has_hooks(ScheduleId::of::<OnDiscover>()));

        hooks.clear();
        assert!(!hooks.has_hooks(ScheduleId::of::<OnDiscover>()));
        assert_eq!(hooks.hook_count(), 0);
    }
}
