//! Node storage for [RbTree][crate::RbTree].
//!
//! Slot ZERO is the shared sentinel. Freed slots are recycled through
//! a free list, so handles of live nodes stay stable across mutations.
//! Slots are not compacted while nodes are live, the arena keeps its
//! peak size until the last node is freed, at which point storage is
//! released back to the allocator.

use std::ops::{Index, IndexMut};

use crate::node::{Entry, Handle, Node};

#[derive(Clone)]
pub struct Arena<K, V> {
    slots: Vec<Node<K, V>>,
    free: Vec<Handle>,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Arena<K, V> {
        Arena {
            slots: vec![Node::sentinel()],
            free: Vec::default(),
        }
    }

    /// Number of live nodes, sentinel excluded.
    pub fn len(&self) -> usize {
        self.slots.len() - 1 - self.free.len()
    }

    pub fn alloc(&mut self, node: Node<K, V>) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.to_index()] = node;
                handle
            }
            None => {
                self.slots.push(node);
                Handle::from_index(self.slots.len() - 1)
            }
        }
    }

    /// Release the slot, returning the entry it held. Links are reset
    /// to sentinel so that stale handles never reach live nodes.
    pub fn free(&mut self, handle: Handle) -> Entry<K, V> {
        if handle.is_nil() {
            panic!("Arena::free(): freeing sentinel, call the programmer");
        }
        let node = &mut self.slots[handle.to_index()];
        let entry = match node.entry.take() {
            Some(entry) => entry,
            None => panic!("Arena::free(): double free, call the programmer"),
        };
        *node = Node::sentinel();
        self.free.push(handle);
        if self.len() == 0 {
            self.release();
        }
        entry
    }

    /// Number of slots held, sentinel included.
    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn release(&mut self) {
        self.slots.truncate(1);
        self.slots.shrink_to_fit();
        self.free = Vec::default();
    }
}

impl<K, V> Index<Handle> for Arena<K, V> {
    type Output = Node<K, V>;

    #[inline]
    fn index(&self, handle: Handle) -> &Node<K, V> {
        &self.slots[handle.to_index()]
    }
}

impl<K, V> IndexMut<Handle> for Arena<K, V> {
    #[inline]
    fn index_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        &mut self.slots[handle.to_index()]
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;
