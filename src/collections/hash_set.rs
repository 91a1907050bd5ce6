//! The deduplicating set strategy.
//!
//! This module corresponds to [`std::collections::hash_set`].

use std::{collections::HashSet, fmt, hash::Hash, marker::PhantomData, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, ToCollector, assert_collector};

/// A strategy that collects items into a [`HashSet`], dropping duplicates.
///
/// Equal items are kept once; iteration order of the output is unspecified.
/// The optional capacity only pre-allocates; it never changes the output.
///
/// # Examples
///
/// ```
/// use strict_collect::{prelude::*, collections::ToSet};
///
/// let releases = ToSet::new().collect_from(["java", "python", "java"]);
///
/// assert_eq!(releases.len(), 2);
/// assert!(releases.contains("java"));
/// ```
pub struct ToSet<T> {
    capacity: Option<usize>,
    _marker: PhantomData<fn(T)>,
}

/// The [`Collector`] created by [`ToSet`].
/// Its [`Output`] is [`HashSet`].
///
/// [`Output`]: CollectorBase::Output
#[derive(Debug, Clone)]
pub struct SetCollector<T>(HashSet<T>);

impl<T> ToSet<T> {
    /// Creates a strategy without a capacity hint.
    #[inline]
    pub const fn new() -> Self {
        Self {
            capacity: None,
            _marker: PhantomData,
        }
    }

    /// Creates a strategy whose sets start with room for `capacity` items.
    #[inline]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            _marker: PhantomData,
        }
    }

    /// Returns the capacity hint, if any.
    #[inline]
    pub const fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl<T> ToCollector<T> for ToSet<T>
where
    T: Eq + Hash,
{
    type Output = HashSet<T>;

    type Collector<'a>
        = SetCollector<T>
    where
        Self: 'a;

    fn to_collector(&self) -> Self::Collector<'_> {
        let set = match self.capacity {
            Some(capacity) => HashSet::with_capacity(capacity),
            None => HashSet::new(),
        };

        assert_collector::<_, T>(SetCollector(set))
    }
}

impl<T> CollectorBase for SetCollector<T> {
    type Output = HashSet<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.0
    }
}

impl<T> Collector<T> for SetCollector<T>
where
    T: Eq + Hash,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        // `false` only means the item was already there.
        self.0.insert(item);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.0.extend(items);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.0.extend(items);
        self.0
    }
}

impl<T> Default for ToSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ToSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for ToSet<T> {}

impl<T> fmt::Debug for ToSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToSet")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::prelude::*;

    use super::ToSet;

    #[test]
    fn builds_a_set() {
        let set = ToSet::new().collect_from([1, 2, 3, 4, 5]);
        assert_eq!(set, HashSet::from([1, 2, 3, 4, 5]));

        let set = ToSet::with_capacity(30).collect_from([1, 2, 3, 4, 5]);
        assert_eq!(set, HashSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn drops_duplicates() {
        let set = ToSet::new().collect_from(["a", "b", "a", "a"]);
        assert_eq!(set, HashSet::from(["a", "b"]));
    }

    #[test]
    fn empty_input() {
        assert!(ToSet::<u8>::with_capacity(4).collect_from([]).is_empty());
    }
}
