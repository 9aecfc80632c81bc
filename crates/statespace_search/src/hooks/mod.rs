//! Lifecycle hooks for search runs.
//!
//! Hooks let an external observer follow a run without the engine knowing
//! anything about the observer: a renderer animating a maze, a tracing
//! logger, or a test recording the exact discovery order.
//!
//! # Design Principles
//!
//! - Hooks execute in registration order
//! - Hooks observe; they cannot alter the frontier or the ledger
//! - Events are only built when a hook is registered for their schedule
//!
//! # Architecture
//!
//! - **Schedule markers** ([`schedule`]): empty types naming hook points
//! - **Events** ([`events`]): `SearchEvent` enum carrying the data
//! - **API** ([`api`]): registration and invocation
//!
//! # Example
//!
//! ```
//! use statespace_search::hooks::{SearchEvent, SearchHooks};
//! use statespace_search::hooks::schedule::OnExpand;
//! use statespace_search::search::{Searcher, Strategy};
//!
//! let hooks = SearchHooks::<u32>::new();
//! hooks
//!     .register_observer::<OnExpand, _>("logger", |event: &SearchEvent<u32>| {
//!         if let SearchEvent::Expanded { state, .. } = event {
//!             tracing::info!("expanding {}", state);
//!         }
//!     })
//!     .unwrap();
//!
//! let outcome = Searcher::new(Strategy::BreadthFirst)
//!     .with_hooks(&hooks)
//!     .run(0u32, |n| *n == 4, |n| [n + 1, n + 2]);
//! assert!(outcome.is_found());
//! ```

pub mod api;
pub mod events;
pub mod schedule;

pub use api::{BoxedHook, HookRegistrationError, SearchHooks};
pub use events::SearchEvent;
