//! Joining text with a [`Joiner`].
//!
//! [`Join`] is the strategy: it forwards every element, unchanged and in
//! order, to its joiner. The joiner decides how parts are separated and what
//! happens to null parts. [`Delimited`] is the joiner shipped with this crate.
//!
//! Anything implementing [`JoinPart`] can be joined: string slices, owned
//! strings, `char`s, and [`Option`]s of those, where [`None`] is a null part.
//!
//! This module corresponds to [`std::string`].

mod join;
mod joiner;
mod part;

pub use join::*;
pub use joiner::*;
pub use part::*;
