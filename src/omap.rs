//! Module provide ordered-map implemented by [OMap] type.
//!
//! OMap is a thin layer over [RbTree], for keys that implement `Ord`.
//!
//! - Each entry in OMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - CRUD operations, via set(), update(), get(), remove() api.
//! - Full table scan, to iterate over all entries.
//! - Range scan, to iterate between a ``low`` and ``high``.
//! - Reverse iteration.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! CRUD operations on [OMap] instance:
//! ```
//! use rbdict::OMap;
//!
//! let mut index: OMap<String,String> = OMap::new();
//!
//! index.set("key1".to_string(), "value1".to_string());
//! index.set("key2".to_string(), "value2".to_string());
//! index.set("key2".to_string(), "value3".to_string());
//!
//! let n = index.len();
//! assert_eq!(n, 2);
//!
//! let value = index.get(&"key1".to_string()).unwrap();
//! assert_eq!(value, "value1".to_string());
//! let value = index.get(&"key2".to_string()).unwrap();
//! assert_eq!(value, "value3".to_string());
//!
//! let old_value = index.remove(&"key1".to_string()).unwrap();
//! assert_eq!(old_value, "value1".to_string());
//! ```
//!
//! Reverse scan:
//! ```
//! use std::ops::Bound;
//! use rbdict::OMap;
//!
//! let mut index: OMap<String,String> = OMap::new();
//!
//! index.set("key1".to_string(), "value1".to_string());
//! index.set("key2".to_string(), "value2".to_string());
//! index.set("key3".to_string(), "value3".to_string());
//!
//! let low = Bound::Included("key1".to_string());
//! let high = Bound::Included("key3".to_string());
//! let mut iter = index.reverse((low, high));
//! let item = iter.next();
//! assert_eq!(item, Some((&"key3".to_string(), &"value3".to_string())));
//! let item = iter.last();
//! assert_eq!(item, Some((&"key1".to_string(), &"value1".to_string())));
//! ```

use std::{fmt, iter::FromIterator, ops::RangeBounds};

use crate::{Iter, Range, RbTree, Result, Reverse};

/// OMap manage a single instance of in-memory ordered-map using
/// [red-black][rbt] tree.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct OMap<K, V> {
    tree: RbTree<K, V>,
}

impl<K, V> Default for OMap<K, V>
where
    K: Ord,
{
    fn default() -> OMap<K, V> {
        OMap::new()
    }
}

impl<K, V> OMap<K, V>
where
    K: Ord,
{
    /// Create an empty instance of OMap.
    pub fn new() -> OMap<K, V> {
        OMap {
            tree: RbTree::default(),
        }
    }
}

/// Maintenance API.
impl<K, V> OMap<K, V> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.tree.clear()
    }
}

impl<K, V> OMap<K, V>
where
    K: Ord,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }

    /// Overwrite value only if key is already present, return the old
    /// value. Otherwise the map is left untouched.
    pub fn update(&mut self, key: &K, value: V) -> Option<V> {
        self.tree.update(key, value)
    }

    /// Remove key from this instance and return its value. If key is
    /// not present, then remove is effectively a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.delete(key)
    }

    /// Get the value for key.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.tree.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.search(key)
    }

    /// Return an iterator over all entries in this instance.
    pub fn iter(&self) -> Iter<K, V> {
        self.tree.iter()
    }

    /// Range over all entries from low to high.
    pub fn range<R>(&self, range: R) -> Range<K, V, fn(&K, &K) -> bool, R>
    where
        R: RangeBounds<K>,
    {
        self.tree.range(range)
    }

    /// Reverse range over all entries from high to low.
    pub fn reverse<R>(&self, range: R) -> Reverse<K, V, fn(&K, &K) -> bool, R>
    where
        R: RangeBounds<K>,
    {
        self.tree.reverse(range)
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.tree.keys()
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.tree.values()
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    /// Validate the underlying tree, refer to [RbTree::validate].
    pub fn validate(&self) -> Result<()>
    where
        K: fmt::Debug,
    {
        self.tree.validate()
    }
}

impl<K, V> Extend<(K, V)> for OMap<K, V>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.tree.extend(iter)
    }
}

impl<K, V> FromIterator<(K, V)> for OMap<K, V>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> OMap<K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut index = OMap::new();
        index.extend(iter);
        index
    }
}

impl<'a, K, V> IntoIterator for &'a OMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.tree.iter()
    }
}

impl<K, V> fmt::Debug for OMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

#[cfg(test)]
#[path = "omap_test.rs"]
mod omap_test;
