//! Module provide ordered-set implemented by [OSet] type.
//!
//! OSet keeps its members as keys of an [RbTree] with unit values.
//!
//! ```
//! use rbdict::OSet;
//!
//! let mut set: OSet<u32> = OSet::new();
//! assert_eq!(set.insert(3), true);
//! assert_eq!(set.insert(1), true);
//! assert_eq!(set.insert(3), false);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.contains(&1), true);
//! assert_eq!(set.to_vec(), vec![1, 3]);
//!
//! assert_eq!(set.remove(&1), true);
//! assert_eq!(set.remove(&1), false);
//! ```

use std::{fmt, iter::FromIterator, ops::RangeBounds};

use crate::{RbTree, Result};

/// OSet manage a single instance of in-memory ordered-set using
/// [red-black][rbt] tree.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct OSet<K> {
    tree: RbTree<K, ()>,
}

impl<K> Default for OSet<K>
where
    K: Ord,
{
    fn default() -> OSet<K> {
        OSet::new()
    }
}

impl<K> OSet<K>
where
    K: Ord,
{
    /// Create an empty instance of OSet.
    pub fn new() -> OSet<K> {
        OSet {
            tree: RbTree::default(),
        }
    }
}

/// Maintenance API.
impl<K> OSet<K> {
    /// Return number of members in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether this set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Drop all members.
    pub fn clear(&mut self) {
        self.tree.clear()
    }
}

impl<K> OSet<K>
where
    K: Ord,
{
    /// Add key to this set, return true if it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.tree.insert(key, ()).is_none()
    }

    /// Remove key from this set, return true if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.delete(key).is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.search(key)
    }

    /// Return an iterator over members in sort order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.tree.iter().map(|(key, _)| key)
    }

    /// Return an iterator over members between low and high.
    pub fn range<R>(&self, range: R) -> impl Iterator<Item = &K>
    where
        R: RangeBounds<K>,
    {
        self.tree.range(range).map(|(key, _)| key)
    }

    /// Return all members in sort order.
    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.tree.keys()
    }

    pub fn first(&self) -> Option<&K> {
        self.tree.first().map(|(key, _)| key)
    }

    pub fn last(&self) -> Option<&K> {
        self.tree.last().map(|(key, _)| key)
    }

    /// Validate the underlying tree, refer to [RbTree::validate].
    pub fn validate(&self) -> Result<()>
    where
        K: fmt::Debug,
    {
        self.tree.validate()
    }
}

impl<K> Extend<K> for OSet<K>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.tree.extend(iter.into_iter().map(|key| (key, ())))
    }
}

impl<K> FromIterator<K> for OSet<K>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> OSet<K>
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = OSet::new();
        set.extend(iter);
        set
    }
}

impl<K> fmt::Debug for OSet<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.tree.iter().map(|(key, _)| key)).finish()
    }
}

#[cfg(test)]
#[path = "oset_test.rs"]
mod oset_test;
