//! Implicit-state graph search in Rust.
//!

pub use statespace_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use statespace_internal::prelude::*;
}
