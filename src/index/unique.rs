use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::ControlFlow,
};

use crate::{
    collector::{Collector, CollectorBase, ToCollector, assert_collector},
    error::{CollectError, Result},
    extract::{Identity, KeyFn, ValueFn},
};

use super::{extract, require_fns};

/// A strategy that indexes every element under a key that must be unique.
/// Its output is `Result<HashMap<K, V>, CollectError>`.
///
/// The collection fails, and stops pulling elements, on the first of:
///
/// - a null key: [`NullProduced(Function::Key)`](CollectError::NullProduced);
/// - a null value: [`NullProduced(Function::Value)`](CollectError::NullProduced);
/// - a key that was already indexed: [`DuplicateKey`](CollectError::DuplicateKey),
///   whose message shows the key.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use strict_collect::{prelude::*, index::UniqueIndex};
///
/// let by_id = UniqueIndex::with_values(
///     |obj: &(i32, &str)| obj.0,
///     |obj: (i32, &'static str)| obj.1,
/// );
///
/// let map = by_id.collect_from([(1, "A"), (2, "B"), (3, "C")]).unwrap();
/// assert_eq!(map, HashMap::from([(1, "A"), (2, "B"), (3, "C")]));
///
/// let err = by_id.collect_from([(1, "A"), (2, "B"), (1, "C")]).unwrap_err();
/// assert_eq!(err.to_string(), "Duplicate key 1");
/// ```
pub struct UniqueIndex<T, KF, VF = Identity> {
    key_fn: KF,
    value_fn: VF,
    expected_size: Option<usize>,
    _marker: PhantomData<fn(T)>,
}

/// The [`Collector`] created by [`UniqueIndex`].
///
/// After a failure it drops everything indexed so far, and every further
/// item is refused.
pub struct UniqueIndexCollector<'a, T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    strategy: &'a UniqueIndex<T, KF, VF>,
    state: Result<HashMap<KF::Key, VF::Value>>,
}

impl<T, KF> UniqueIndex<T, KF>
where
    KF: KeyFn<T>,
{
    /// Creates a strategy indexing each element by `key_fn(&element)`.
    #[inline]
    pub fn new(key_fn: KF) -> Self {
        Self::with_values(key_fn, Identity)
    }

    /// Same as [`new()`](Self::new), but the key function may be absent.
    ///
    /// # Errors
    ///
    /// [`Precondition(Argument::KeyFunction)`](CollectError::Precondition)
    /// when `key_fn` is `None`.
    ///
    /// ```
    /// use strict_collect::index::UniqueIndex;
    ///
    /// let err = UniqueIndex::try_new(None::<fn(&u32) -> u32>).unwrap_err();
    /// assert_eq!(err.to_string(), "Key function can't be null");
    /// ```
    #[inline]
    pub fn try_new(key_fn: Option<KF>) -> Result<Self> {
        Self::try_with_values(key_fn, Some(Identity))
    }
}

impl<T, KF, VF> UniqueIndex<T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    /// Creates a strategy mapping `key_fn(&element)` to `value_fn(element)`.
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
    /// [`Precondition`](CollectError::Precondition) naming the key function if it is
    /// absent, otherwise naming the value function if that one is.
    #[inline]
    pub fn try_with_values(key_fn: Option<KF>, value_fn: Option<VF>) -> Result<Self> {
        let (key_fn, value_fn) = require_fns(key_fn, value_fn)?;
        Ok(Self::with_values(key_fn, value_fn))
    }

    /// Pre-sizes every map for `expected_size` entries.
    ///
    /// This is only a hint. It never changes the output.
    #[inline]
    pub fn expected_size(mut self, expected_size: usize) -> Self {
        self.expected_size = Some(expected_size);
        self
    }
}

impl<T, KF, VF> ToCollector<T> for UniqueIndex<T, KF, VF>
where
    KF: KeyFn<T>,
    KF::Key: Eq + Hash + fmt::Debug,
    VF: ValueFn<T>,
{
    type Output = Result<HashMap<KF::Key, VF::Value>>;

    type Collector<'a>
        = UniqueIndexCollector<'a, T, KF, VF>
    where
        Self: 'a;

    fn to_collector(&self) -> Self::Collector<'_> {
        let map = match self.expected_size {
            Some(expected_size) => {
                tracing::trace!(expected_size, "pre-sizing unique index");
                HashMap::with_capacity(expected_size)
            }
            None => HashMap::new(),
        };

        assert_collector::<_, T>(UniqueIndexCollector {
            strategy: self,
            state: Ok(map),
        })
    }
}

impl<T, KF, VF> CollectorBase for UniqueIndexCollector<'_, T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    type Output = Result<HashMap<KF::Key, VF::Value>>;

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

impl<T, KF, VF> Collector<T> for UniqueIndexCollector<'_, T, KF, VF>
where
    KF: KeyFn<T>,
    KF::Key: Eq + Hash + fmt::Debug,
    VF: ValueFn<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let Ok(map) = &mut self.state else {
            return ControlFlow::Break(());
        };

        let strategy = self.strategy;
        let inserted = extract(&strategy.key_fn, &strategy.value_fn, item).and_then(
            |(key, value)| match map.entry(key) {
                Entry::Occupied(entry) => Err(CollectError::duplicate_key(entry.key())),
                Entry::Vacant(entry) => {
                    entry.insert(value);
                    Ok(())
                }
            },
        );

        match inserted {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                tracing::debug!(error = %err, indexed = map.len(), "unique index aborted");
                self.state = Err(err);
                ControlFlow::Break(())
            }
        }
    }
}

impl<T, KF: Clone, VF: Clone> Clone for UniqueIndex<T, KF, VF> {
    fn clone(&self) -> Self {
        Self {
            key_fn: self.key_fn.clone(),
            value_fn: self.value_fn.clone(),
            expected_size: self.expected_size,
            _marker: PhantomData,
        }
    }
}

impl<T, KF, VF> fmt::Debug for UniqueIndex<T, KF, VF> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueIndex")
            .field("expected_size", &self.expected_size)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::{HashMap, hash_map::Entry};

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::error::CollectError;
    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::UniqueIndex;

    proptest! {
        #[test]
        fn all_collect_methods(
            // Small key domain so that duplicates show up often.
            pairs in propvec((0..6_u8, any::<i32>()), ..8),
            expected_size in proptest::option::of(..16_usize),
        ) {
            all_collect_methods_impl(pairs, expected_size)?;
        }
    }

    /// Indexes by hand, returning the result and how many pairs were consumed.
    fn index_by_hand(
        pairs: impl Iterator<Item = (u8, i32)>,
    ) -> (Result<HashMap<u8, i32>, CollectError>, usize) {
        let mut map = HashMap::new();
        let mut consumed = 0;

        for (key, value) in pairs {
            consumed += 1;
            match map.entry(key) {
                Entry::Occupied(_) => {
                    return (Err(CollectError::duplicate_key(&key)), consumed);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }

        (Ok(map), consumed)
    }

    fn all_collect_methods_impl(
        pairs: Vec<(u8, i32)>,
        expected_size: Option<usize>,
    ) -> TestCaseResult {
        let mut strategy = UniqueIndex::with_values(
            |&(key, _): &(u8, i32)| key,
            |(_, value): (u8, i32)| value,
        );
        if let Some(expected_size) = expected_size {
            strategy = strategy.expected_size(expected_size);
        }

        BasicCollectorTester {
            iter_factory: || pairs.iter().copied(),
            strategy: &strategy,
            should_break_pred: |iter| index_by_hand(iter).0.is_err(),
            pred: |iter, output, remaining| {
                let total = iter.len();
                let (expected, consumed) = index_by_hand(iter);
                if output != expected {
                    Err(PredError::IncorrectOutput)
                } else if remaining.count() != total - consumed {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
