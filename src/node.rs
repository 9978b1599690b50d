use std::fmt;

/// Color tag carried by every node, the sentinel is always Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "R"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// Index of a node inside the tree's arena. Handle ZERO is the shared
/// sentinel, standing in for every absent child and the root's parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Handle(usize);

impl Handle {
    pub const NIL: Handle = Handle(0);

    #[inline]
    pub fn from_index(index: usize) -> Handle {
        Handle(index)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_nil(self) -> bool {
        self.0 == 0
    }
}

/// Key, value pair owned by a live node.
#[derive(Clone)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

// Node corresponds to a single slot in the tree's arena. Sentinel and
// freed slots don't carry an entry.
#[derive(Clone)]
pub struct Node<K, V> {
    pub entry: Option<Entry<K, V>>,
    pub color: Color,
    pub parent: Handle, // store: parent, non-owning back link
    pub left: Handle,   // store: left child
    pub right: Handle,  // store: right child
}

impl<K, V> Node<K, V> {
    pub fn sentinel() -> Node<K, V> {
        Node {
            entry: None,
            color: Color::Black,
            parent: Handle::NIL,
            left: Handle::NIL,
            right: Handle::NIL,
        }
    }

    /// New nodes always start out red, with both children at sentinel.
    pub fn new(key: K, value: V, parent: Handle) -> Node<K, V> {
        Node {
            entry: Some(Entry { key, value }),
            color: Color::Red,
            parent,
            left: Handle::NIL,
            right: Handle::NIL,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn as_entry(&self) -> &Entry<K, V> {
        match self.entry.as_ref() {
            Some(entry) => entry,
            None => panic!("as_entry(): sentinel has no entry, call the programmer"),
        }
    }

    pub fn as_mut_entry(&mut self) -> &mut Entry<K, V> {
        match self.entry.as_mut() {
            Some(entry) => entry,
            None => panic!("as_mut_entry(): sentinel has no entry, call the programmer"),
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
