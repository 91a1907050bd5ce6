//! Fail-fast reductions of an iterator into one value.
//!
//! A *strategy* describes how to reduce a sequence: into a list, a set, a
//! unique index, a grouping index or a joined string. It holds configuration
//! only, so one strategy can be applied to any number of sequences:
//!
//! ```
//! use strict_collect::{prelude::*, index::UniqueIndex};
//!
//! #[derive(Debug, PartialEq)]
//! struct Plugin {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let by_id = UniqueIndex::new(|plugin: &Plugin| plugin.id);
//!
//! let installed = by_id
//!     .collect_from([Plugin { id: 7, name: "lint" }, Plugin { id: 9, name: "fmt" }])
//!     .unwrap();
//! assert_eq!(installed[&9].name, "fmt");
//!
//! // The same strategy, another sequence.
//! let err = by_id
//!     .collect_from([Plugin { id: 7, name: "lint" }, Plugin { id: 7, name: "lint2" }])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Duplicate key 7");
//! ```
//!
//! # Strategies
//!
//! | Strategy                      | Output                          | Fails on                        |
//! |-------------------------------|---------------------------------|---------------------------------|
//! | [`ToList`](vec::ToList)       | `Vec<T>`                        | never                           |
//! | [`ToSet`](collections::ToSet) | `HashSet<T>`                    | never                           |
//! | [`UniqueIndex`](index::UniqueIndex) | `Result<HashMap<K, V>>`   | null key or value, duplicate key |
//! | [`Index`](index::Index)       | `Result<Multimap<K, V>>`        | null key or value               |
//! | [`Join`](string::Join)        | `Result<String>`                | whatever the joiner refuses     |
//!
//! The [`collectors`] module has a shorthand function for each of them.
//!
//! # Failing fast
//!
//! The fallible strategies stop at the first bad element. The collector stops
//! pulling items from the iterator, drops everything it built, and reports a
//! [`CollectError`](error::CollectError). There are no partial results.
//!
//! Constructors taking possibly-absent arguments (`try_new`, `try_with_values`)
//! reject absent ones up front, before any element is looked at.
//!
//! # Collectors
//!
//! Applying a strategy creates a [`Collector`](collector::Collector): a
//! single-use accumulator fed one item at a time. See the [`collector`] module
//! for how the two layers fit together, and [`IteratorExt`](iter::IteratorExt)
//! for driving a collector from an iterator.
//!
//! # Logging
//!
//! Failures are reported as [`tracing`] events at the `debug` level. Install a
//! subscriber to see them.

#[cfg(not(feature = "std"))]
compile_error!("strict_collect requires the `std` feature for its hash-based outputs");

pub mod collections;
pub mod collector;
pub mod collectors;
pub mod error;
pub mod extract;
pub mod index;
pub mod iter;
pub mod prelude;
pub mod string;
pub mod vec;

#[cfg(test)]
mod test_utils;
