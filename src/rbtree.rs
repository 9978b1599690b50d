//! Module provide the ordered dictionary implemented by [RbTree] type.
//!
//! RbTree is a textbook [red-black tree][wiki-rbt], with parent links
//! and a single shared sentinel terminating every leaf. Nodes live in
//! an arena and refer to each other by handle, sentinel is handle ZERO.
//!
//! Invariants maintained after every mutation:
//!
//! * For every node, keys under its left child order before its key
//!   and keys under its right child order after its key.
//! * Sentinel and root are black.
//! * A red node never has a red child.
//! * Every path from a node to a descendant sentinel passes through the
//!   same number of black nodes.
//! * Keys are unique, inserting an existing key replaces its value.
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use log::{debug, trace};

use std::{cmp::Ordering, fmt, mem};

use crate::{
    arena::Arena,
    node::{Color, Handle, Node},
    Error, Result,
};

/// RbTree manage a single instance of in-memory ordered dictionary
/// using [red-black][rbt] tree.
///
/// Keys are ordered by the `less_than` predicate supplied at
/// construction time, [Default] is available for `Ord` keys.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<K, V, F = fn(&K, &K) -> bool> {
    pub(crate) arena: Arena<K, V>,
    pub(crate) root: Handle,
    n_count: usize, // number of entries in the tree.
    pub(crate) less_than: F,
}

fn natural_less<K: Ord>(a: &K, b: &K) -> bool {
    a < b
}

impl<K, V> Default for RbTree<K, V>
where
    K: Ord,
{
    fn default() -> RbTree<K, V> {
        RbTree::new(natural_less::<K> as fn(&K, &K) -> bool)
    }
}

impl<K, V, F> RbTree<K, V, F> {
    /// Create an empty instance of RbTree, ordered by `less_than`.
    pub fn new(less_than: F) -> RbTree<K, V, F>
    where
        F: Fn(&K, &K) -> bool,
    {
        RbTree {
            arena: Arena::new(),
            root: Handle::NIL,
            n_count: Default::default(),
            less_than,
        }
    }
}

/// Maintenance API.
impl<K, V, F> RbTree<K, V, F> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Drop all entries. Old arena, along with its sentinel, is
    /// replaced as a whole by a fresh one.
    pub fn clear(&mut self) {
        debug!("rbtree clear, dropping {} entries", self.n_count);
        self.arena = Arena::new();
        self.root = Handle::NIL;
        self.n_count = 0;
    }

    /// Return the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        match self.root {
            root if root.is_nil() => None,
            root => {
                let entry = self.arena[minimum(&self.arena, root)].as_entry();
                Some((&entry.key, &entry.value))
            }
        }
    }

    /// Return the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        match self.root {
            root if root.is_nil() => None,
            root => {
                let entry = self.arena[maximum(&self.arena, root)].as_entry();
                Some((&entry.key, &entry.value))
            }
        }
    }

    #[inline]
    pub(crate) fn key_of(&self, node: Handle) -> &K {
        &self.arena[node].as_entry().key
    }

    #[inline]
    fn parent(&self, node: Handle) -> Handle {
        self.arena[node].parent
    }

    #[inline]
    fn left(&self, node: Handle) -> Handle {
        self.arena[node].left
    }

    #[inline]
    fn right(&self, node: Handle) -> Handle {
        self.arena[node].right
    }

    #[inline]
    fn is_red(&self, node: Handle) -> bool {
        self.arena[node].is_red()
    }

    #[inline]
    fn is_black(&self, node: Handle) -> bool {
        self.arena[node].is_black()
    }
}

/// Three way comparison of `a` with `b`, using `PartialEq` for equality
/// and `less_than` for order.
pub(crate) fn compare<K, F>(less_than: &F, a: &K, b: &K) -> Ordering
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
{
    if a == b {
        Ordering::Equal
    } else if less_than(a, b) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl<K, V, F> RbTree<K, V, F>
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut parent, mut x) = (Handle::NIL, self.root);
        let mut side = Ordering::Equal;
        while !x.is_nil() {
            parent = x;
            side = compare(&self.less_than, &key, self.key_of(x));
            x = match side {
                Ordering::Less => self.left(x),
                Ordering::Greater => self.right(x),
                Ordering::Equal => {
                    let entry = self.arena[x].as_mut_entry();
                    return Some(mem::replace(&mut entry.value, value));
                }
            };
        }

        let z = self.arena.alloc(Node::new(key, value, parent));
        match side {
            _ if parent.is_nil() => self.root = z,
            Ordering::Less => self.arena[parent].left = z,
            _ => self.arena[parent].right = z,
        }
        self.insert_fixup(z);
        self.n_count += 1;
        None
    }

    /// Replace the value for an existing key and return the old value.
    /// If key is not present, the tree is left untouched and None is
    /// returned.
    pub fn update(&mut self, key: &K, value: V) -> Option<V> {
        match self.find(key) {
            node if node.is_nil() => None,
            node => {
                let entry = self.arena[node].as_mut_entry();
                Some(mem::replace(&mut entry.value, value))
            }
        }
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let z = self.find(key);
        if z.is_nil() {
            return None;
        }

        let (x, removed_color) = if self.left(z).is_nil() {
            let x = self.right(z);
            transplant(&mut self.arena, &mut self.root, z, x);
            (x, self.arena[z].color)
        } else if self.right(z).is_nil() {
            let x = self.left(z);
            transplant(&mut self.arena, &mut self.root, z, x);
            (x, self.arena[z].color)
        } else {
            // z has two children, its successor takes its place.
            let y = minimum(&self.arena, self.right(z));
            let removed_color = self.arena[y].color;
            let x = self.right(y);
            if self.parent(y) == z {
                self.arena[x].parent = y;
            } else {
                transplant(&mut self.arena, &mut self.root, y, x);
                let zr = self.right(z);
                self.arena[y].right = zr;
                self.arena[zr].parent = y;
            }
            transplant(&mut self.arena, &mut self.root, z, y);
            let zl = self.left(z);
            self.arena[y].left = zl;
            self.arena[zl].parent = y;
            self.arena[y].color = self.arena[z].color;
            (x, removed_color)
        };

        if removed_color == Color::Black {
            self.delete_fixup(x);
        }
        self.arena[Handle::NIL].parent = Handle::NIL;

        self.n_count = match self.n_count.checked_sub(1) {
            Some(n_count) => n_count,
            None => panic!("delete(): node count underflow, call the programmer"),
        };
        Some(self.arena.free(z).value)
    }

    /// Check whether key is present in this instance.
    pub fn search(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    /// Get the value for key.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        match self.find(key) {
            node if node.is_nil() => None,
            node => Some(self.arena[node].as_entry().value.clone()),
        }
    }

    /// Get a mutable reference to the value for key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.find(key) {
            node if node.is_nil() => None,
            node => Some(&mut self.arena[node].as_mut_entry().value),
        }
    }

    pub(crate) fn find(&self, key: &K) -> Handle {
        let mut x = self.root;
        while !x.is_nil() {
            x = match compare(&self.less_than, key, self.key_of(x)) {
                Ordering::Less => self.left(x),
                Ordering::Greater => self.right(x),
                Ordering::Equal => return x,
            };
        }
        Handle::NIL
    }

    fn insert_fixup(&mut self, mut z: Handle) {
        while self.is_red(self.parent(z)) {
            let p = self.parent(z);
            let g = self.parent(p);
            if p == self.left(g) {
                let uncle = self.right(g);
                if self.is_red(uncle) {
                    self.arena[p].set_black();
                    self.arena[uncle].set_black();
                    self.arena[g].set_red();
                    z = g;
                } else {
                    if z == self.right(p) {
                        z = p;
                        rotate_left(&mut self.arena, &mut self.root, z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.arena[p].set_black();
                    self.arena[g].set_red();
                    rotate_right(&mut self.arena, &mut self.root, g);
                }
            } else {
                let uncle = self.left(g);
                if self.is_red(uncle) {
                    self.arena[p].set_black();
                    self.arena[uncle].set_black();
                    self.arena[g].set_red();
                    z = g;
                } else {
                    if z == self.left(p) {
                        z = p;
                        rotate_right(&mut self.arena, &mut self.root, z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.arena[p].set_black();
                    self.arena[g].set_red();
                    rotate_left(&mut self.arena, &mut self.root, g);
                }
            }
        }
        let root = self.root;
        self.arena[root].set_black();
    }

    // `x` may be the sentinel, in which case its parent link was set by
    // transplant and identifies the slot that lost a black node.
    fn delete_fixup(&mut self, mut x: Handle) {
        trace!("rbtree delete fixup from {:?}", x);

        while x != self.root && self.is_black(x) {
            let p = self.parent(x);
            if x == self.left(p) {
                let mut w = self.right(p);
                if self.is_red(w) {
                    self.arena[w].set_black();
                    self.arena[p].set_red();
                    rotate_left(&mut self.arena, &mut self.root, p);
                    w = self.right(self.parent(x));
                }
                if self.is_black(self.left(w)) && self.is_black(self.right(w)) {
                    self.arena[w].set_red();
                    x = self.parent(x);
                } else {
                    if self.is_black(self.right(w)) {
                        let wl = self.left(w);
                        self.arena[wl].set_black();
                        self.arena[w].set_red();
                        rotate_right(&mut self.arena, &mut self.root, w);
                        w = self.right(self.parent(x));
                    }
                    let p = self.parent(x);
                    let wr = self.right(w);
                    self.arena[w].color = self.arena[p].color;
                    self.arena[p].set_black();
                    self.arena[wr].set_black();
                    rotate_left(&mut self.arena, &mut self.root, p);
                    x = self.root;
                }
            } else {
                let mut w = self.left(p);
                if self.is_red(w) {
                    self.arena[w].set_black();
                    self.arena[p].set_red();
                    rotate_right(&mut self.arena, &mut self.root, p);
                    w = self.left(self.parent(x));
                }
                if self.is_black(self.right(w)) && self.is_black(self.left(w)) {
                    self.arena[w].set_red();
                    x = self.parent(x);
                } else {
                    if self.is_black(self.left(w)) {
                        let wr = self.right(w);
                        self.arena[wr].set_black();
                        self.arena[w].set_red();
                        rotate_left(&mut self.arena, &mut self.root, w);
                        w = self.left(self.parent(x));
                    }
                    let p = self.parent(x);
                    let wl = self.left(w);
                    self.arena[w].color = self.arena[p].color;
                    self.arena[p].set_black();
                    self.arena[wl].set_black();
                    rotate_right(&mut self.arena, &mut self.root, p);
                    x = self.root;
                }
            }
        }
        self.arena[x].set_black();
    }
}

impl<K, V, F> RbTree<K, V, F>
where
    K: PartialEq + fmt::Debug,
    F: Fn(&K, &K) -> bool,
{
    /// Validate red-black tree with following rules:
    ///
    /// * Sentinel and root are black, root has no parent.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Every child points back to its parent.
    /// * Entry count matches the number of reachable nodes.
    pub fn validate(&self) -> Result<()> {
        if self.is_red(Handle::NIL) {
            return err_at!(Fatal, msg: "red sentinel");
        }
        if self.is_red(self.root) {
            return err_at!(Fatal, msg: "red root");
        }
        if !self.parent(self.root).is_nil() {
            return err_at!(Fatal, msg: "root has parent {:?}", self.parent(self.root));
        }

        let mut n_nodes = 0;
        let (fromred, n_blacks) = (false, 0);
        let (low, high) = (Handle::NIL, Handle::NIL);
        self.validate_tree(self.root, fromred, n_blacks, low, high, &mut n_nodes)?;
        if n_nodes != self.n_count {
            return err_at!(Fatal, msg: "n_count {} reachable {}", self.n_count, n_nodes);
        }
        if self.arena.len() != self.n_count {
            return err_at!(Fatal, msg: "n_count {} arena {}", self.n_count, self.arena.len());
        }
        Ok(())
    }

    // `low` and `high` are the nearest ancestors bounding `node` on its
    // left and right, NIL when unbounded. Every key in the subtree must
    // order strictly between them.
    fn validate_tree(
        &self,
        node: Handle,
        fromred: bool,
        mut n_blacks: usize,
        low: Handle,
        high: Handle,
        n_nodes: &mut usize,
    ) -> Result<usize> {
        if node.is_nil() {
            return Ok(n_blacks);
        }
        *n_nodes += 1;

        let key = self.key_of(node);
        if !low.is_nil() {
            let lkey = self.key_of(low);
            if compare(&self.less_than, lkey, key) != Ordering::Less {
                return err_at!(Fatal, msg: "sort key:{:?} not after {:?}", key, lkey);
            }
        }
        if !high.is_nil() {
            let hkey = self.key_of(high);
            if compare(&self.less_than, key, hkey) != Ordering::Less {
                return err_at!(Fatal, msg: "sort key:{:?} not before {:?}", key, hkey);
            }
        }

        let red = self.is_red(node);
        if fromred && red {
            return err_at!(Fatal, msg: "consecutive reds at {:?}", key);
        }

        if !red {
            n_blacks += 1;
        }

        let (left, right) = (self.left(node), self.right(node));
        if !left.is_nil() && self.parent(left) != node {
            return err_at!(Fatal, msg: "broken parent link at {:?}", self.key_of(left));
        }
        if !right.is_nil() && self.parent(right) != node {
            return err_at!(Fatal, msg: "broken parent link at {:?}", self.key_of(right));
        }

        let lblacks = self.validate_tree(left, red, n_blacks, low, node, n_nodes)?;
        let rblacks = self.validate_tree(right, red, n_blacks, node, high, n_nodes)?;
        if lblacks != rblacks {
            return err_at!(Fatal, msg: "unbalanced blacks {} {}", lblacks, rblacks);
        }

        Ok(lblacks)
    }
}

impl<K, V, F> Extend<(K, V)> for RbTree<K, V, F>
where
    K: PartialEq,
    F: Fn(&K, &K) -> bool,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        iter.into_iter().for_each(|(key, value)| {
            self.insert(key, value);
        });
    }
}

fn minimum<K, V>(arena: &Arena<K, V>, mut node: Handle) -> Handle {
    while !arena[node].left.is_nil() {
        node = arena[node].left;
    }
    node
}

fn maximum<K, V>(arena: &Arena<K, V>, mut node: Handle) -> Handle {
    while !arena[node].right.is_nil() {
        node = arena[node].right;
    }
    node
}

// Replace subtree at `u` with subtree at `v` in u's parent. `v` can be
// the sentinel, its parent link is updated all the same.
fn transplant<K, V>(arena: &mut Arena<K, V>, root: &mut Handle, u: Handle, v: Handle) {
    let up = arena[u].parent;
    if up.is_nil() {
        *root = v;
    } else if u == arena[up].left {
        arena[up].left = v;
    } else {
        arena[up].right = v;
    }
    arena[v].parent = up;
}

//--------- rotation routines, colors are left untouched ----------------

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             /   \                     /   \
//            /     \                   /     \
//          xl       y                 x       yr
//                  / \               / \
//                yl   yr           xl   yl
//
fn rotate_left<K, V>(arena: &mut Arena<K, V>, root: &mut Handle, x: Handle) {
    let y = arena[x].right;
    if y.is_nil() {
        panic!("rotate_left(): rotating into sentinel ? Call the programmer");
    }

    let yl = arena[y].left;
    arena[x].right = yl;
    if !yl.is_nil() {
        arena[yl].parent = x;
    }

    let xp = arena[x].parent;
    arena[y].parent = xp;
    if xp.is_nil() {
        *root = y;
    } else if x == arena[xp].left {
        arena[xp].left = y;
    } else {
        arena[xp].right = y;
    }

    arena[y].left = x;
    arena[x].parent = y;
}

//              (p)                       (p)
//               |                         |
//               x                         y
//              / \                       / \
//             /   \                     /   \
//            /     \                   /     \
//           y       xr               yl       x
//          / \                               / \
//        yl   yr                           yr   xr
//
fn rotate_right<K, V>(arena: &mut Arena<K, V>, root: &mut Handle, x: Handle) {
    let y = arena[x].left;
    if y.is_nil() {
        panic!("rotate_right(): rotating into sentinel ? Call the programmer");
    }

    let yr = arena[y].right;
    arena[x].left = yr;
    if !yr.is_nil() {
        arena[yr].parent = x;
    }

    let xp = arena[x].parent;
    arena[y].parent = xp;
    if xp.is_nil() {
        *root = y;
    } else if x == arena[xp].right {
        arena[xp].right = y;
    } else {
        arena[xp].left = y;
    }

    arena[y].right = x;
    arena[x].parent = y;
}

#[cfg(test)]
#[path = "rbtree_test.rs"]
mod rbtree_test;
