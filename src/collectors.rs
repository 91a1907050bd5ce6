//! Shorthand constructors for every strategy of this crate.
//!
//! Each function is a plain alias for a constructor, so
//! `collectors::unique_index(f)` is [`UniqueIndex::new(f)`](UniqueIndex::new).
//! Use them when reading `collectors::join(...)` reads better than the type name.
//!
//! ```
//! use strict_collect::{collectors, prelude::*, string::Delimited};
//!
//! let words = ["kiwi", "fig", "lime", "fig"];
//!
//! assert_eq!(collectors::to_list().collect_from(words), words);
//! assert_eq!(collectors::to_set().collect_from(words).len(), 3);
//!
//! let by_len = collectors::index(|w: &&str| w.len()).collect_from(words).unwrap();
//! assert_eq!(by_len.get_all(&4), ["kiwi", "lime"]);
//!
//! let line = collectors::join(Delimited::new(" ")).collect_from(words).unwrap();
//! assert_eq!(line, "kiwi fig lime fig");
//! ```

use crate::{
    collections::ToSet,
    extract::{Identity, KeyFn, ValueFn},
    index::{Index, UniqueIndex},
    string::Join,
    vec::ToList,
};

/// Collects into a [`Vec`]. See [`ToList`].
#[inline]
pub const fn to_list<T>() -> ToList<T> {
    ToList::new()
}

/// Collects into a [`Vec`] that starts with room for `capacity` items.
#[inline]
pub const fn to_list_with_capacity<T>(capacity: usize) -> ToList<T> {
    ToList::with_capacity(capacity)
}

/// Collects into a [`HashSet`](std::collections::HashSet). See [`ToSet`].
#[inline]
pub const fn to_set<T>() -> ToSet<T> {
    ToSet::new()
}

/// Collects into a [`HashSet`](std::collections::HashSet) pre-sized for `capacity` items.
#[inline]
pub const fn to_set_with_capacity<T>(capacity: usize) -> ToSet<T> {
    ToSet::with_capacity(capacity)
}

/// Indexes elements under unique keys. See [`UniqueIndex`].
#[inline]
pub fn unique_index<T, KF>(key_fn: KF) -> UniqueIndex<T, KF, Identity>
where
    KF: KeyFn<T>,
{
    UniqueIndex::new(key_fn)
}

/// Maps unique keys to values. See [`UniqueIndex::with_values()`].
#[inline]
pub fn unique_index_with_values<T, KF, VF>(key_fn: KF, value_fn: VF) -> UniqueIndex<T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    UniqueIndex::with_values(key_fn, value_fn)
}

/// Groups elements under their key. See [`Index`].
#[inline]
pub fn index<T, KF>(key_fn: KF) -> Index<T, KF, Identity>
where
    KF: KeyFn<T>,
{
    Index::new(key_fn)
}

/// Groups values under their key. See [`Index::with_values()`].
#[inline]
pub fn index_with_values<T, KF, VF>(key_fn: KF, value_fn: VF) -> Index<T, KF, VF>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    Index::with_values(key_fn, value_fn)
}

/// Joins elements with `joiner`. See [`Join`].
#[inline]
pub const fn join<J>(joiner: J) -> Join<J> {
    Join::new(joiner)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use crate::error::CollectError;
    use crate::prelude::*;
    use crate::string::Delimited;

    use super::*;

    #[test]
    fn shorthands_build_the_same_strategies() {
        let nums = [3, 1, 3];

        assert_eq!(to_list().collect_from(nums), [3, 1, 3]);
        assert_eq!(to_list_with_capacity(8).collect_from(nums), [3, 1, 3]);
        assert_eq!(to_set().collect_from(nums), HashSet::from([1, 3]));
        assert_eq!(to_set_with_capacity(1).collect_from(nums), HashSet::from([1, 3]));
        assert_eq!(
            join(Delimited::new("-")).collect_from(nums.map(|n| n.to_string())),
            Ok("3-1-3".to_owned())
        );
    }

    #[test]
    fn index_shorthands() {
        let nums = [3, 1, 3];

        assert_eq!(
            unique_index(|n: &i32| *n).collect_from(nums),
            Err(CollectError::duplicate_key(&3))
        );
        assert_eq!(
            unique_index_with_values(|n: &i32| *n, |n: i32| n * 2).collect_from([1, 2]),
            Ok(HashMap::from([(1, 2), (2, 4)]))
        );
        assert_eq!(index(|n: &i32| *n).collect_from(nums).unwrap().get_all(&3), [3, 3]);
        assert_eq!(
            index_with_values(|n: &i32| n % 2, |n: i32| n * 2)
                .collect_from(nums)
                .unwrap()
                .get_all(&1),
            [6, 2, 6]
        );
    }
}
