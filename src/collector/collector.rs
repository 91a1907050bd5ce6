use std::ops::ControlFlow;

use super::CollectorBase;

/// The item-accepting half of a collector.
///
/// Only [`collect`](Collector::collect) is required. It takes one item and tells
/// the caller whether to keep feeding.
///
/// # Implementing
///
/// Hold the partial output in a struct, implement [`CollectorBase`] to hand it
/// out, then implement this trait for every item type the struct accepts.
/// Override [`collect_many`](Collector::collect_many) when the container has a
/// faster bulk insert (`Vec::extend`, for one).
///
/// # After a stop
///
/// Once [`collect()`](Collector::collect) or [`collect_many()`](Collector::collect_many)
/// returned [`Break(())`], further items are refused. Feeding them is not an
/// error, but nothing is accumulated; [`finish()`](CollectorBase::finish) is
/// all that is left to do.
///
/// [`Break(())`]: ControlFlow::Break
pub trait Collector<T>: CollectorBase {
    /// Takes `item`, then reports whether the collector still accepts items.
    ///
    /// [`Continue(())`] asks for more. [`Break(())`] means the collector is done,
    /// either because it failed or because it needs nothing else.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, index::UniqueIndex};
    ///
    /// let by_len = UniqueIndex::new(|word: &&str| word.len());
    /// let mut collector = by_len.to_collector();
    ///
    /// assert!(collector.collect("a").is_continue());
    /// assert!(collector.collect("bc").is_continue());
    ///
    /// // Same length as "bc". The index fails right away.
    /// assert!(collector.collect("de").is_break());
    ///
    /// assert!(collector.finish().is_err());
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Feeds every item of `items` until the collector stops, and reports
    /// whether it did.
    ///
    /// Items after the one that stopped the collector stay in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, vec::ToList};
    ///
    /// let mut collector = ToList::new().to_collector();
    /// assert!(collector.collect_many([1, 2]).is_continue());
    /// assert!(collector.collect_many([3, 4, 5]).is_continue());
    ///
    /// assert_eq!(collector.finish(), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()>
    where
        Self: Sized,
    {
        // `try_for_each` lets adaptors like `chain` drive their own loop.
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// [`collect_many()`](Collector::collect_many) followed by
    /// [`finish()`](CollectorBase::finish).
    ///
    /// Override it when knowing that the collector is about to be consumed
    /// allows a shortcut.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, collections::ToSet};
    ///
    /// let set = ToSet::new().to_collector().collect_then_finish([1, 2, 1]);
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output
    where
        Self: Sized,
    {
        let mut this = self;

        // A stop changes nothing here: the output is due either way.
        let _ = this.collect_many(items);
        this.finish()
    }
}
