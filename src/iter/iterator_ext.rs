use crate::collector::{Collector, ToCollector};

/// Extends [`Iterator`] with methods for working seamlessly with [`Collector`]s
/// and [`ToCollector`] strategies.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Feeds items from this iterator into the provided collector till
    /// the collector stops accumulating or the iterator is exhausted,
    /// and returns the collector's output.
    ///
    /// Items the collector did not take are left in the iterator.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, index::UniqueIndex};
    ///
    /// let by_first_char = UniqueIndex::new(|s: &&str| s.chars().next());
    /// let mut words = ["apple", "banana", "avocado", "cherry"].into_iter();
    ///
    /// let result = words.feed_into(by_first_char.to_collector());
    ///
    /// assert!(result.is_err());
    /// // The index stopped right at "avocado".
    /// assert_eq!(words.next(), Some("cherry"));
    /// ```
    #[inline]
    fn feed_into<C>(&mut self, collector: C) -> C::Output
    where
        C: Collector<Self::Item>,
    {
        collector.collect_then_finish(self)
    }

    /// Reduces this iterator with a fresh collector of `strategy`.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, string::{Delimited, Join}};
    ///
    /// let csv = Join::new(Delimited::new(","));
    /// let joined = ["1", "2", "3", "4"].into_iter().collect_with(&csv);
    ///
    /// assert_eq!(joined.unwrap(), "1,2,3,4");
    /// ```
    #[inline]
    fn collect_with<S>(self, strategy: &S) -> S::Output
    where
        Self: Sized,
        S: ToCollector<Self::Item> + ?Sized,
    {
        strategy.collect_from(self)
    }
}

impl<I> IteratorExt for I where I: Iterator + ?Sized {}
