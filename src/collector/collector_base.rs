use std::ops::ControlFlow;

/// The item-independent half of a collector: its output and how to produce it.
///
/// See [`Collector`](crate::collector::Collector) for the half that accepts items.
pub trait CollectorBase {
    /// The result this collector yields, via the [`finish()`](CollectorBase::finish) method.
    type Output;

    /// Consumes the collector and returns the accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_collect::{prelude::*, vec::ToList};
    ///
    /// let mut collector = ToList::new().to_collector();
    /// let _ = collector.collect_many([1, 2, 3]);
    ///
    /// assert_eq!(collector.finish(), [1, 2, 3]);
    /// ```
    fn finish(self) -> Self::Output;

    /// Returns a hint whether the collector has stopped accumulating.
    ///
    /// [`Break(())`] is a guarantee that the collector will not accept any further
    /// item; [`Continue(())`] guarantees nothing.
    ///
    /// It is meant to be checked once before feeding items in a loop, so that no
    /// item is pulled out of the source for a collector that would drop it anyway.
    /// For the fallible collectors of this crate it turns into [`Break(())`]
    /// once a failure has been recorded.
    ///
    /// The default implementation always returns [`Continue(())`].
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
