//! Module implement ordered traversal over [RbTree].
//!
//! Iterators keep an explicit stack of pending nodes, instead of
//! recursing, and yield entries in `less_than` order. Collection
//! methods, range extraction and printing are all built on top of it.
//!
//! Full table scan:
//! ```
//! use rbdict::RbTree;
//!
//! let mut index: RbTree<String, String> = RbTree::default();
//! index.insert("key1".to_string(), "value1".to_string());
//! index.insert("key2".to_string(), "value2".to_string());
//!
//! for (i, (key, value)) in index.iter().enumerate() {
//!     let refkey = format!("key{}", i+1);
//!     let refval = format!("value{}", i+1);
//!     assert_eq!(&refkey, key);
//!     assert_eq!(&refval, value);
//! }
//! ```
//!
//! Range scan:
//! ```
//! use std::ops::Bound;
//! use rbdict::RbTree;
//!
//! let mut index: RbTree<u32, u32> = RbTree::default();
//! index.extend(vec![(1, 10), (2, 20), (3, 30)]);
//!
//! let r = (Bound::Excluded(1), Bound::Excluded(2));
//! assert_eq!(index.range(r).next(), None);
//!
//! let items: Vec<(&u32, &u32)> = index.range(2..).collect();
//! assert_eq!(items, vec![(&2, &20), (&3, &30)]);
//!
//! let items: Vec<(&u32, &u32)> = index.reverse(..=2).collect();
//! assert_eq!(items, vec![(&2, &20), (&1, &10)]);
//! ```
//!
//! Sub tree extraction:
//! ```
//! use rbdict::RbTree;
//!
//! let mut index: RbTree<u32, u32> = RbTree::default();
//! index.extend((0..10).map(|i| (i, i * 10)));
//!
//! let sub = index.sub_tree(&3, true, &6, false);
//! assert_eq!(sub.keys(), vec![3, 4, 5]);
//! assert_eq!(index.left_sub_tree(&2, true).keys(), vec![0, 1, 2]);
//! assert_eq!(index.right_sub_tree(&7, false).keys(), vec![8, 9]);
//! ```

use log::debug;

use std::{
    cmp::Ordering,
    fmt,
    ops::{Bound, RangeBounds},
};

use crate::{
    arena::Arena,
    node::Handle,
    rbtree::{compare, RbTree},
    Error, Result,
};

/// Scan API.
impl<K, V, F> RbTree<K, V, F> {
    /// Return an iterator over all entries in this instance.
    pub fn iter(&self) -> Iter<K, V> {
        let mut iter = Iter {
            arena: &self.arena,
            paths: Vec::default(),
            rev: false,
        };
        iter.build(self.root);
        iter
    }

    /// Return all keys in sort order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());
        keys.extend(self.iter().map(|(key, _)| key.clone()));
        keys
    }

    /// Return all values, in the sort order of their keys.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.iter().map(|(_, value)| value.clone()));
        values
    }

    /// Return all entries in sort order.
    pub fn nodes(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let mut nodes = Vec::with_capacity(self.len());
        nodes.extend(self.iter().map(|(k, v)| (k.clone(), v.clone())));
        nodes
    }

    /// Render values in sort order, separated by single space.
    pub fn in_order_traversal(&self) -> String
    where
        V: fmt::Display,
    {
        let values: Vec<String> = self.iter().map(|(_, v)| v.to_string()).collect();
        values.join(" ")
    }

    /// Return values whose key satisfies `predicate`. This is a full
    /// table scan.
    pub fn get_if<P>(&self, predicate: P) -> Vec<V>
    where
        V: Clone,
        P: Fn(&K) -> bool,
    {
        self.iter()
            .filter(|(key, _)| predicate(key))
            .map(|(_, value)| value.clone())
            .collect()
    }
}

/// Range API.
impl<K, V, F> RbTree<K, V, F>
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
{
    /// Range over all entries from low to high.
    pub fn range<R>(&self, range: R) -> Range<K, V, F, R>
    where
        R: RangeBounds<K>,
    {
        let mut iter = Iter {
            arena: &self.arena,
            paths: Vec::default(),
            rev: false,
        };
        match range.start_bound() {
            Bound::Unbounded => iter.build(self.root),
            Bound::Included(low) => self.find_start(low, true, &mut iter.paths),
            Bound::Excluded(low) => self.find_start(low, false, &mut iter.paths),
        };

        Range {
            range,
            iter,
            less_than: &self.less_than,
            fin: false,
        }
    }

    /// Reverse range over all entries from high to low.
    pub fn reverse<R>(&self, range: R) -> Reverse<K, V, F, R>
    where
        R: RangeBounds<K>,
    {
        let mut iter = Iter {
            arena: &self.arena,
            paths: Vec::default(),
            rev: true,
        };
        match range.end_bound() {
            Bound::Unbounded => iter.build(self.root),
            Bound::Included(high) => self.find_end(high, true, &mut iter.paths),
            Bound::Excluded(high) => self.find_end(high, false, &mut iter.paths),
        };

        Reverse {
            range,
            iter,
            less_than: &self.less_than,
            fin: false,
        }
    }

    /// Build a new instance, sharing the same `less_than`, with entries
    /// between `from` and `to`. Bounds are included as per `from_incl`
    /// and `to_incl`. Panics if `to` orders before `from`, refer to
    /// [RbTree::try_sub_tree] for the fallible version.
    pub fn sub_tree(&self, from: &K, from_incl: bool, to: &K, to_incl: bool) -> Self
    where
        K: Clone,
        V: Clone,
        F: Clone,
    {
        match self.try_sub_tree(from, from_incl, to, to_incl) {
            Ok(tree) => tree,
            Err(err) => panic!("sub_tree(): {}", err),
        }
    }

    /// Same as [RbTree::sub_tree], but return [Error::InvalidRange] if
    /// `to` orders before `from`.
    pub fn try_sub_tree(&self, from: &K, from_incl: bool, to: &K, to_incl: bool) -> Result<Self>
    where
        K: Clone,
        V: Clone,
        F: Clone,
    {
        if (self.less_than)(to, from) {
            return err_at!(InvalidRange, msg: "upper bound orders before lower bound");
        }

        let lt = &self.less_than;
        Ok(self.filter_into(|key| {
            let low = lt(from, key) || (from_incl && key == from);
            let high = lt(key, to) || (to_incl && key == to);
            low && high
        }))
    }

    /// Build a new instance with entries whose key orders before `key`,
    /// and `key` itself if `incl` is true.
    pub fn left_sub_tree(&self, key: &K, incl: bool) -> Self
    where
        K: Clone,
        V: Clone,
        F: Clone,
    {
        let lt = &self.less_than;
        self.filter_into(|k| lt(k, key) || (incl && k == key))
    }

    /// Build a new instance with entries whose key orders after `key`,
    /// and `key` itself if `incl` is true.
    pub fn right_sub_tree(&self, key: &K, incl: bool) -> Self
    where
        K: Clone,
        V: Clone,
        F: Clone,
    {
        let lt = &self.less_than;
        self.filter_into(|k| lt(key, k) || (incl && k == key))
    }

    fn filter_into<P>(&self, predicate: P) -> Self
    where
        K: Clone,
        V: Clone,
        F: Clone,
        P: Fn(&K) -> bool,
    {
        let mut tree = RbTree::new(self.less_than.clone());
        for (key, value) in self.iter().filter(|(key, _)| predicate(key)) {
            tree.insert(key.clone(), value.clone());
        }
        debug!("rbtree sub tree, picked {}/{} entries", tree.len(), self.len());
        tree
    }

    fn find_start(&self, low: &K, incl: bool, paths: &mut Vec<Handle>) {
        let mut node = self.root;
        while !node.is_nil() {
            let n = &self.arena[node];
            node = match compare(&self.less_than, &n.as_entry().key, low) {
                Ordering::Less => n.right,
                Ordering::Equal if incl => {
                    paths.push(node);
                    break;
                }
                Ordering::Equal => n.right,
                Ordering::Greater => {
                    paths.push(node);
                    n.left
                }
            };
        }
    }

    fn find_end(&self, high: &K, incl: bool, paths: &mut Vec<Handle>) {
        let mut node = self.root;
        while !node.is_nil() {
            let n = &self.arena[node];
            node = match compare(&self.less_than, &n.as_entry().key, high) {
                Ordering::Greater => n.left,
                Ordering::Equal if incl => {
                    paths.push(node);
                    break;
                }
                Ordering::Equal => n.left,
                Ordering::Less => {
                    paths.push(node);
                    n.right
                }
            };
        }
    }
}

/// In-order iterator over [RbTree] entries.
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    paths: Vec<Handle>,
    rev: bool,
}

impl<'a, K, V> Iter<'a, K, V> {
    // push `node` and its chain of near children, left for forward
    // iteration and right for reverse iteration.
    fn build(&mut self, mut node: Handle) {
        while !node.is_nil() {
            self.paths.push(node);
            node = match self.rev {
                false => self.arena[node].left,
                true => self.arena[node].right,
            };
        }
    }

    fn next_node(&mut self) -> Option<Handle> {
        let node = self.paths.pop()?;
        match self.rev {
            false => self.build(self.arena[node].right),
            true => self.build(self.arena[node].left),
        }
        Some(node)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next_node()?;
        let arena: &'a Arena<K, V> = self.arena;
        let entry = arena[node].as_entry();
        Some((&entry.key, &entry.value))
    }
}

/// Iterator over [RbTree] entries from a low bound to a high bound.
pub struct Range<'a, K, V, F, R> {
    range: R,
    iter: Iter<'a, K, V>,
    less_than: &'a F,
    fin: bool,
}

impl<'a, K, V, F, R> Iterator for Range<'a, K, V, F, R>
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
    R: RangeBounds<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                let less_than = self.less_than;
                match self.range.end_bound() {
                    Bound::Included(high) if compare(less_than, key, high) != Ordering::Greater => {
                        Some((key, val))
                    }
                    Bound::Excluded(high) if compare(less_than, key, high) == Ordering::Less => {
                        Some((key, val))
                    }
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

/// Iterator over [RbTree] entries from a high bound down to a low bound.
pub struct Reverse<'a, K, V, F, R> {
    range: R,
    iter: Iter<'a, K, V>,
    less_than: &'a F,
    fin: bool,
}

impl<'a, K, V, F, R> Iterator for Reverse<'a, K, V, F, R>
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
    R: RangeBounds<K>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.fin {
            false => {
                let (key, val) = self.iter.next()?;
                let less_than = self.less_than;
                match self.range.start_bound() {
                    Bound::Included(low) if compare(less_than, key, low) != Ordering::Less => {
                        Some((key, val))
                    }
                    Bound::Excluded(low) if compare(less_than, key, low) == Ordering::Greater => {
                        Some((key, val))
                    }
                    Bound::Unbounded => Some((key, val)),
                    Bound::Included(_) | Bound::Excluded(_) => {
                        self.fin = true;
                        None
                    }
                }
            }
            true => None,
        }
    }
}

impl<'a, K, V, F> IntoIterator for &'a RbTree<K, V, F> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Render entries in sort order as `{(key,value,color) ...}`, color is
/// `B` for black and `R` for red.
impl<K, V, F> fmt::Display for RbTree<K, V, F>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = Iter {
            arena: &self.arena,
            paths: Vec::default(),
            rev: false,
        };
        iter.build(self.root);

        write!(f, "{{")?;
        let mut sep = "";
        while let Some(node) = iter.next_node() {
            let n = &self.arena[node];
            let entry = n.as_entry();
            write!(f, "{}({},{},{})", sep, entry.key, entry.value, n.color)?;
            sep = " ";
        }
        write!(f, "}}")
    }
}

impl<K, V, F> fmt::Debug for RbTree<K, V, F>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;
