//! A map from keys to every value collected under them.

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map},
    fmt,
    hash::Hash,
    iter::FusedIterator,
    slice,
};

/// A map whose keys may carry several values.
///
/// Values under one key keep the order they were inserted in. The order of the
/// keys themselves is unspecified.
///
/// This is the output of [`Index`](crate::index::Index).
///
/// # Examples
///
/// ```
/// use strict_collect::collections::Multimap;
///
/// let mut map = Multimap::new();
/// map.insert(1, "A");
/// map.insert(2, "B");
/// map.insert(1, "C");
///
/// assert_eq!(map.get_all(&1), ["A", "C"]);
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.key_count(), 2);
/// ```
#[derive(Clone)]
pub struct Multimap<K, V> {
    buckets: HashMap<K, Vec<V>>,
    len: usize,
}

impl<K, V> Multimap<K, V> {
    /// Creates an empty multimap.
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Creates an empty multimap with room for at least `keys` distinct keys.
    #[inline]
    pub fn with_capacity(keys: usize) -> Self {
        Self {
            buckets: HashMap::with_capacity(keys),
            len: 0,
        }
    }

    /// Number of key-value pairs, counting every value of every key.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct keys.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the distinct keys, in unspecified order.
    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, Vec<V>> {
        self.buckets.keys()
    }

    /// Iterates over every key with all its values.
    #[inline]
    pub fn buckets(&self) -> hash_map::Iter<'_, K, Vec<V>> {
        self.buckets.iter()
    }

    /// Iterates over every key-value pair.
    ///
    /// Pairs sharing a key are yielded together, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Unwraps the underlying `HashMap` of buckets. No bucket is empty.
    #[inline]
    pub fn into_inner(self) -> HashMap<K, Vec<V>> {
        self.buckets
    }
}

impl<K, V> Multimap<K, V>
where
    K: Eq + Hash,
{
    /// Appends `value` to the values of `key`.
    pub fn insert(&mut self, key: K, value: V) {
        self.buckets.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Returns the values of `key`, or [`None`] if it has none.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Returns the values of `key`, empty if it has none.
    #[inline]
    pub fn get_all<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.get(key).unwrap_or_default()
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.buckets.contains_key(key)
    }
}

impl<K, V> Default for Multimap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for Multimap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.buckets == other.buckets
    }
}

impl<K, V> Eq for Multimap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Multimap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for Multimap<K, V>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Multimap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> IntoIterator for Multimap<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = hash_map::IntoIter<K, Vec<V>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Multimap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the key-value pairs of a [`Multimap`].
///
/// This `struct` is created by [`Multimap::iter()`].
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    buckets: hash_map::Iter<'a, K, Vec<V>>,
    current: Option<(&'a K, slice::Iter<'a, V>)>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.current
                && let Some(value) = values.next()
            {
                self.remaining -= 1;
                return Some((*key, value));
            }

            let (key, values) = self.buckets.next()?;
            self.current = Some((key, values.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
