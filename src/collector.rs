//! Module contains the traits every collector and strategy in this crate is built on.
//!
//! There are two layers:
//!
//! - [`CollectorBase`] and [`Collector`]: a single-use *accumulator*. It is fed items
//!   one at a time (or a whole iterator at once) and finally [`finish`](CollectorBase::finish)ed
//!   into its output.
//! - [`ToCollector`]: a reusable, stateless *strategy* such as
//!   [`UniqueIndex`](crate::index::UniqueIndex). Every call to
//!   [`to_collector()`](ToCollector::to_collector) starts a brand-new accumulator, so
//!   one strategy can reduce any number of sequences independently.
//!
//! # Stopping
//!
//! [`Collector::collect()`] returns a [`ControlFlow`](std::ops::ControlFlow).
//! [`Break(())`] means the collector will not accumulate anything anymore.
//! The fallible collectors of this crate break on their first failure and stay
//! stopped: further items are ignored and [`finish()`](CollectorBase::finish)
//! returns the error.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use strict_collect::prelude::*;
//!
//! /// Counts how many words it has seen.
//! #[derive(Default)]
//! struct WordCount(usize);
//!
//! impl CollectorBase for WordCount {
//!     type Output = usize;
//!
//!     fn finish(self) -> Self::Output {
//!         self.0
//!     }
//! }
//!
//! impl<'a> Collector<&'a str> for WordCount {
//!     fn collect(&mut self, _word: &'a str) -> ControlFlow<()> {
//!         self.0 += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let count = "the noble and the singer"
//!     .split_whitespace()
//!     .feed_into(WordCount::default());
//!
//! assert_eq!(count, 5);
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

#[allow(clippy::module_inception)]
mod collector;
mod collector_base;
mod to_collector;

pub use collector::*;
pub use collector_base::*;
pub use to_collector::*;

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
