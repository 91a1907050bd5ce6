use std::{fmt, hash::Hash, marker::PhantomData, ops::ControlFlow};

use crate::{
    collections::Multimap,
    collector::{Collector, CollectorBase, ToCollector, assert_collector},
    error::Result,
    extract::{Identity, KeyFn, ValueFn},
};

use super::{extract, require_fns};

/// A strategy that groups elements under their key.
/// Its output is `Result<Multimap<K, V>, CollectError>`.
///
/// Any number of elements may share a key. Their values are kept in the order
/// the elements came in. A null key or value fails the whole collection with
/// [`NullProduced`](crate::error::CollectError::NullProduced).
///
/// # Examples
///
/// ```
/// use strict_collect::{prelude::*, index::Index};
///
/// let by_id = Index::with_values(
///     |obj: &(i32, &str)| obj.0,
///     |obj: (i32, &'static str)| obj.1,
/// );
///
/// let map = by_id.collect_from([(1, "A"), (2, "B"), (1, "C")]).unwrap();
///
/// assert_eq!(map.get_all(&1), ["A", "C"]);
/// assert_eq!(map.get_all(&2), ["B"]);
/// assert_eq!(map.len(), 3);
/// ```
pub struct Index<T, KF, VF = Identity> {
    key_fn: KF,
    value_fn: VF,
    expected_size: Option<usize>,
    _marker: PhantomData<fn(T)>,
}

/// The [`Collector`] created by [`Index`].
pub struct IndexCollector<'a, T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    strategy: &'a Index<T, KF, VF>,
    state: Result<Multimap<KF::Key, VF::Value>>,
}

impl<T, KF> Index<T, KF>
where
    KF: KeyFn<T>,
{
    /// Creates a strategy grouping each element under `key_fn(&element)`.
    #[inline]
    pub fn new(key_fn: KF) -> Self {
        Self::with_values(key_fn, Identity)
    }

    /// Same as [`new()`](Self::new), but the key function may be absent.
    ///
    /// # Errors
    ///
    /// [`Precondition(Argument::KeyFunction)`](crate::error::CollectError::Precondition)
    /// when `key_fn` is `None`.
    #[inline]
    pub fn try_new(key_fn: Option<KF>) -> Result<Self> {
        Self::try_with_values(key_fn, Some(Identity))
    }
}

impl<T, KF, VF> Index<T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    /// Creates a strategy grouping `value_fn(element)` under `key_fn(&element)`.
    #[inline]
    pub fn with_values(key_fn: KF, value_fn: VF) -> Self {
        Self {
            key_fn,
            value_fn,
            expected_size: None,
            _marker: PhantomData,
        }
    }

    /// Same as [`with_values()`](Self::with_values), but either function may be absent.
    ///
    /// # Errors
    ///
    /// [`Precondition`](crate::error::CollectError::Precondition) naming the key
    /// function if it is absent, otherwise naming the value function if that one is.
    ///
    /// ```
    /// use strict_collect::index::Index;
    ///
    /// let err = Index::try_with_values(Some(|n: &u8| *n), None::<fn(u8) -> u8>).unwrap_err();
    /// assert_eq!(err.to_string(), "Value function can't be null");
    /// ```
    #[inline]
    pub fn try_with_values(key_fn: Option<KF>, value_fn: Option<VF>) -> Result<Self> {
        let (key_fn, value_fn) = require_fns(key_fn, value_fn)?;
        Ok(Self::with_values(key_fn, value_fn))
    }

    /// Pre-sizes the key table of every multimap for `expected_size` distinct keys.
    ///
    /// This is only a hint. It never changes the output.
    #[inline]
    pub fn expected_size(mut self, expected_size: usize) -> Self {
        self.expected_size = Some(expected_size);
        self
    }
}

impl<T, KF, VF> ToCollector<T> for Index<T, KF, VF>
where
    KF: KeyFn<T>,
    KF::Key: Eq + Hash,
    VF: ValueFn<T>,
{
    type Output = Result<Multimap<KF::Key, VF::Value>>;

    type Collector<'a>
        = IndexCollector<'a, T, KF, VF>
    where
        Self: 'a;

    fn to_collector(&self) -> Self::Collector<'_> {
        let map = match self.expected_size {
            Some(expected_size) => {
                tracing::trace!(expected_size, "pre-sizing index");
                Multimap::with_capacity(expected_size)
            }
            None => Multimap::new(),
        };

        assert_collector::<_, T>(IndexCollector {
            strategy: self,
            state: Ok(map),
        })
    }
}

impl<T, KF, VF> CollectorBase for IndexCollector<'_, T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    type Output = Result<Multimap<KF::Key, VF::Value>>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.state
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.state.is_err() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, KF, VF> Collector<T> for IndexCollector<'_, T, KF, VF>
where
    KF: KeyFn<T>,
    KF::Key: Eq + Hash,
    VF: ValueFn<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let Ok(map) = &mut self.state else {
            return ControlFlow::Break(());
        };

        let strategy = self.strategy;
        match extract(&strategy.key_fn, &strategy.value_fn, item) {
            Ok((key, value)) => {
                map.insert(key, value);
                ControlFlow::Continue(())
            }
            Err(err) => {
                tracing::debug!(error = %err, grouped = map.len(), "index aborted");
                self.state = Err(err);
                ControlFlow::Break(())
            }
        }
    }
}

impl<T, KF: Clone, VF: Clone> Clone for Index<T, KF, VF> {
    fn clone(&self) -> Self {
        Self {
            key_fn: self.key_fn.clone(),
            value_fn: self.value_fn.clone(),
            expected_size: self.expected_size,
            _marker: PhantomData,
        }
    }
}

impl<T, KF, VF> fmt::Debug for Index<T, KF, VF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("expected_size", &self.expected_size)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::collections::Multimap;
    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::Index;

    proptest! {
        #[test]
        fn all_collect_methods(
            pairs in propvec((0..6_u8, any::<i32>()), ..8),
            expected_size in proptest::option::of(..16_usize),
        ) {
            all_collect_methods_impl(pairs, expected_size)?;
        }
    }

    fn all_collect_methods_impl(
        pairs: Vec<(u8, i32)>,
        expected_size: Option<usize>,
    ) -> TestCaseResult {
        let mut strategy = Index::with_values(
            |&(key, _): &(u8, i32)| key,
            |(_, value): (u8, i32)| value,
        );
        if let Some(expected_size) = expected_size {
            strategy = strategy.expected_size(expected_size);
        }

        BasicCollectorTester {
            iter_factory: || pairs.iter().copied(),
            strategy: &strategy,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let expected: Multimap<_, _> = iter.collect();
                if output != Ok(expected) {
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
