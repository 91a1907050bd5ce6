//! Set and multimap outputs.
//!
//! This module corresponds to [`std::collections`].

pub mod hash_set;
pub mod multimap;

pub use hash_set::ToSet;
pub use multimap::Multimap;
