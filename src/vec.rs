//! The ordered-list strategy.
//!
//! This module corresponds to [`mod@std::vec`].

use std::{fmt, marker::PhantomData, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, ToCollector, assert_collector};

/// A strategy that collects items into a [`Vec`], keeping their order and multiplicity.
///
/// The optional capacity only pre-allocates; it never changes the output.
///
/// # Examples
///
/// ```
/// use strict_collect::{prelude::*, vec::ToList};
///
/// let list = ToList::with_capacity(30).collect_from([3, 1, 3, 2]);
///
/// assert_eq!(list, [3, 1, 3, 2]);
/// ```
pub struct ToList<T> {
    capacity: Option<usize>,
    _marker: PhantomData<fn(T)>,
}

/// The [`Collector`] created by [`ToList`].
/// Its [`Output`] is [`Vec`].
///
/// [`Output`]: CollectorBase::Output
#[derive(Debug, Clone)]
pub struct ListCollector<T>(Vec<T>);

impl<T> ToList<T> {
    /// Creates a strategy without a capacity hint.
    #[inline]
    pub const fn new() -> Self {
        Self {
            capacity: None,
            _marker: PhantomData,
        }
    }

    /// Creates a strategy whose lists start with room for `capacity` items.
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

impl<T> ToCollector<T> for ToList<T> {
    type Output = Vec<T>;

    type Collector<'a>
        = ListCollector<T>
    where
        Self: 'a;

    fn to_collector(&self) -> Self::Collector<'_> {
        let list = match self.capacity {
            Some(capacity) => Vec::with_capacity(capacity),
            None => Vec::new(),
        };

        assert_collector::<_, T>(ListCollector(list))
    }
}

impl<T> CollectorBase for ListCollector<T> {
    type Output = Vec<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.0
    }
}

impl<T> Collector<T> for ListCollector<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.0.push(item);
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

impl<T> Default for ToList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls so that `T` does not need to be `Clone`/`Debug`.
impl<T> Clone for ToList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for ToList<T> {}

impl<T> fmt::Debug for ToList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToList")
            .field("capacity", &self.capacity)
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::ToList;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..8),
            capacity in proptest::option::of(..16_usize),
        ) {
            all_collect_methods_impl(nums, capacity)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>, capacity: Option<usize>) -> TestCaseResult {
        let strategy = match capacity {
            Some(capacity) => ToList::<i32>::with_capacity(capacity),
            None => ToList::<i32>::new(),
        };

        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            strategy: &strategy,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if !output.iter().copied().eq(iter) {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
