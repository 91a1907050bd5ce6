use super::Collector;

/// A reusable recipe for collectors.
///
/// A strategy holds only configuration (key and value functions, capacity hints,
/// a joiner). It never holds accumulated items: each call to
/// [`to_collector()`](ToCollector::to_collector) hands out a fresh accumulator,
/// so reducing the same input twice yields equal results.
///
/// # Usage in trait bounds
///
/// Bound on `ToCollector` when a function should accept any strategy producing
/// a given output, and let the caller keep ownership of the strategy.
///
/// # Examples
///
/// ```
/// use strict_collect::{prelude::*, index::Index};
///
/// let by_parity = Index::with_values(|n: &i32| n % 2 == 0, |n: i32| n * 10);
///
/// let first = by_parity.collect_from([1, 2, 3]).unwrap();
/// let second = by_parity.collect_from([1, 2, 3]).unwrap();
///
/// assert_eq!(first.get_all(&false), [10, 30]);
/// assert_eq!(first, second);
/// ```
pub trait ToCollector<T> {
    /// The output of every collector this strategy creates.
    type Output;

    /// Which collector is being produced? It may borrow the strategy.
    type Collector<'a>: Collector<T, Output = Self::Output>
    where
        Self: 'a;

    /// Creates a collector with an empty accumulator.
    fn to_collector(&self) -> Self::Collector<'_>;

    /// Reduces `items` with a fresh collector and returns its output.
    ///
    /// This is the one-shot form of
    /// [`to_collector()`](ToCollector::to_collector) followed by
    /// [`collect_then_finish()`](Collector::collect_then_finish).
    #[inline]
    fn collect_from(&self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.to_collector().collect_then_finish(items)
    }
}

impl<T, S> ToCollector<T> for &S
where
    S: ToCollector<T> + ?Sized,
{
    type Output = S::Output;

    type Collector<'a>
        = S::Collector<'a>
    where
        Self: 'a;

    #[inline]
    fn to_collector(&self) -> Self::Collector<'_> {
        (**self).to_collector()
    }
}
