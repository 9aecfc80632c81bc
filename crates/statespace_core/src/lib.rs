//! Ambient infrastructure for statespace applications.
//!
//! - [`TracingSetup`] - installs a `tracing` subscriber (pretty, compact or JSON)
//! - [`TracingObserver`] - search hooks that log run lifecycle and, optionally,
//!   every discovery and expansion
//!
//! # Example
//!
//! ```
//! use statespace_core::{TracingObserver, TracingSetup};
//! use statespace_search::hooks::SearchHooks;
//! use statespace_search::search::{Searcher, Strategy};
//! use tracing::Level;
//!
//! TracingSetup::new().with_level(Level::DEBUG).init();
//!
//! let hooks = SearchHooks::<u8>::new();
//! let observer = TracingObserver::new();
//! observer.attach(&hooks).unwrap();
//!
//! Searcher::new(Strategy::DepthFirstIterative)
//!     .with_hooks(&hooks)
//!     .run(0u8, |n| *n == 5, |n| [n + 1]);
//! assert_eq!(observer.tally().found, 1);
//! ```

mod observer;
mod tracing_setup;

pub use observer::{RunTally, TracingObserver};
pub use tracing_setup::{TracingConfig, TracingFormat, TracingSetup, UnknownFormat};
