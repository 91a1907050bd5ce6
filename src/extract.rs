//! Key and value extraction for the indexing collectors.
//!
//! Any closure `Fn(&T) -> K` is a [`KeyFn`] and any closure `Fn(T) -> V` is a
//! [`ValueFn`]. Both are *total*: they always produce something.
//!
//! Wrap a closure returning [`Option`] in [`Nullable`] when "no key" or
//! "no value" is a possible answer. A [`None`] coming out of a `Nullable`
//! function is a null key or value, which the indexing collectors reject with
//! [`NullProduced`](crate::error::CollectError::NullProduced).
//!
//! ```
//! use strict_collect::{prelude::*, extract::Nullable, index::UniqueIndex};
//! use strict_collect::error::{CollectError, Function};
//!
//! let by_manager = UniqueIndex::new(Nullable(|name: &(&str, Option<u32>)| name.1));
//!
//! let err = by_manager
//!     .collect_from([("ana", Some(1)), ("bob", None)])
//!     .unwrap_err();
//!
//! assert_eq!(err, CollectError::NullProduced(Function::Key));
//! ```

/// Extracts the key of an element by reference.
pub trait KeyFn<T> {
    /// The extracted key.
    type Key;

    /// Returns the key of `item`, or [`None`] for a null key.
    fn key_of(&self, item: &T) -> Option<Self::Key>;
}

/// Extracts the value of an element by ownership.
pub trait ValueFn<T> {
    /// The extracted value.
    type Value;

    /// Returns the value of `item`, or [`None`] for a null value.
    fn value_of(&self, item: T) -> Option<Self::Value>;
}

/// The value function that keeps the element itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Marks an `Option`-returning closure as a key or value function that may
/// produce nulls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<F>(pub F);

impl<F, T, K> KeyFn<T> for F
where
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn key_of(&self, item: &T) -> Option<K> {
        Some(self(item))
    }
}

impl<F, T, V> ValueFn<T> for F
where
    F: Fn(T) -> V,
{
    type Value = V;

    #[inline]
    fn value_of(&self, item: T) -> Option<V> {
        Some(self(item))
    }
}

impl<T> ValueFn<T> for Identity {
    type Value = T;

    #[inline]
    fn value_of(&self, item: T) -> Option<T> {
        Some(item)
    }
}

impl<F, T, K> KeyFn<T> for Nullable<F>
where
    F: Fn(&T) -> Option<K>,
{
    type Key = K;

    #[inline]
    fn key_of(&self, item: &T) -> Option<K> {
        (self.0)(item)
    }
}

impl<F, T, V> ValueFn<T> for Nullable<F>
where
    F: Fn(T) -> Option<V>,
{
    type Value = V;

    #[inline]
    fn value_of(&self, item: T) -> Option<V> {
        (self.0)(item)
    }
}
