//! Search hooks that forward events to `tracing`.
//!
//! [`TracingObserver`] attaches to a [`SearchHooks`] registry and logs run
//! boundaries at `INFO`. With [`with_states`](TracingObserver::with_states)
//! it also logs each discovery and expansion at `TRACE`, which is how a
//! terminal renderer follows a search without the engine knowing about it.
//!
//! ```
//! use statespace_core::TracingObserver;
//! use statespace_search::hooks::SearchHooks;
//! use statespace_search::search::{Searcher, Strategy};
//!
//! let hooks = SearchHooks::<u32>::new();
//! TracingObserver::new().with_states(true).attach(&hooks).unwrap();
//!
//! Searcher::new(Strategy::BreadthFirst)
//!     .with_hooks(&hooks)
//!     .run(1, |n| *n == 10, |n| [n * 2, n + 1]);
//! ```

use core::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use statespace_search::hooks::schedule::{OnDiscover, OnExpand, OnSearchComplete, OnSearchStart};
use statespace_search::hooks::{HookRegistrationError, SearchEvent, SearchHooks};

/// Counters shared between an observer's hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    /// Runs that have started.
    pub started: usize,
    /// Runs that have completed.
    pub completed: usize,
    /// Completed runs that reached a goal.
    pub found: usize,
}

/// Logs search events through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    name: String,
    states: bool,
    tally: Arc<Mutex<RunTally>>,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self {
            name: "tracing".to_owned(),
            states: false,
            tally: Arc::default(),
        }
    }
}

impl TracingObserver {
    /// Creates an observer that logs run start and completion only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook name used at registration, so several observers can coexist on
    /// one registry.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Also log every discovery and expansion.
    #[must_use]
    pub fn with_states(mut self, enabled: bool) -> Self {
        self.states = enabled;
        self
    }

    /// Run counts observed so far across every registry this observer is
    /// attached to.
    #[must_use]
    pub fn tally(&self) -> RunTally {
        *self.tally.lock()
    }

    /// Registers this observer's hooks on `hooks`.
    ///
    /// # Errors
    ///
    /// Returns [`HookRegistrationError::DuplicateName`] if a hook with this
    /// observer's name is already registered.
    pub fn attach<S>(&self, hooks: &SearchHooks<S>) -> Result<(), HookRegistrationError>
    where
        S: Debug + 'static,
    {
        let tally = Arc::clone(&self.tally);
        hooks.register_observer::<(OnSearchStart, OnSearchComplete), _>(
            self.name.as_str(),
            move |event: &SearchEvent<S>| match event {
                SearchEvent::SearchStart { strategy, start } => {
                    tally.lock().started += 1;
                    tracing::info!(%strategy, start = ?start, "search started");
                }
                SearchEvent::SearchComplete {
                    strategy,
                    found,
                    discovered,
                    expanded,
                } => {
                    let mut tally = tally.lock();
                    tally.completed += 1;
                    tally.found += usize::from(*found);
                    tracing::info!(%strategy, found, discovered, expanded, "search complete");
                }
                _ => {}
            },
        )?;

        if self.states {
            hooks.register_observer::<(OnDiscover, OnExpand), _>(
                self.name.as_str(),
                |event: &SearchEvent<S>| match event {
                    SearchEvent::Discovered {
                        state,
                        parent,
                        distance,
                    } => tracing::trace!(state = ?state, parent = ?parent, distance, "discovered"),
                    SearchEvent::Expanded {
                        state,
                        distance,
                        expansion,
                    } => tracing::trace!(state = ?state, distance, expansion, "expanded"),
                    _ => {}
                },
            )?;
        }

        tracing::debug!(name = %self.name, states = self.states, "tracing observer attached");
        Ok(())
    }
}
