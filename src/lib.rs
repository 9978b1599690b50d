//! Package implement an in-memory Ordered Dictionary using
//! [red-black tree][wiki-rbt].
//!
//! Following types are exported by this package:
//!
//! * [RbTree] implements the ordered dictionary, parametrised over
//!   `key-type`, `value-type` and a user supplied `less_than` predicate.
//! * [OMap] implements an ordered-map, for `Ord` keys, on top of [RbTree].
//! * [OSet] implements an ordered-set, for `Ord` keys, on top of [RbTree].
//!
//! Ordered dictionary for single threaded use case
//! -----------------------------------------------
//!
//! - Each entry in RbTree instance correspond to a {Key, Value} pair.
//! - Keys are ordered by `less_than` and matched by `PartialEq`, the two
//!   must agree: for any pair of keys exactly one of `less_than(a, b)`,
//!   `less_than(b, a)` or `a == b` holds.
//! - CRUD operations, via insert(), update(), get(), delete() api.
//! - Full table scan, to iterate over all entries in key order.
//! - Range scan, to iterate between a ``low`` and ``high``.
//! - Sub-tree extraction into a fresh instance.
//! - Nodes are kept in an arena, parent/child links are arena handles.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Constructing a new [RbTree] instance and CRUD operations:
//!
//! ```
//! use rbdict::RbTree;
//!
//! let mut index = RbTree::new(|a: &i64, b: &i64| a < b);
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! index.insert(20, "twenty".to_string());
//! index.insert(10, "ten".to_string());
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.get(&10), Some("ten".to_string()));
//! assert_eq!(index.keys(), vec![10, 20]);
//!
//! let old_value = index.delete(&10).unwrap();
//! assert_eq!(old_value, "ten".to_string());
//! assert_eq!(index.search(&10), false);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values, prefixed with file and line.
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: "bad argument {}", arg);
// ```
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod arena;
mod node;
mod omap;
mod oset;
mod rbtree;
mod scan;

pub use omap::OMap;
pub use oset::OSet;
pub use rbtree::RbTree;
pub use scan::{Iter, Range, Reverse};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
    InvalidRange(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            InvalidRange(p, msg) => write!(f, "{} InvalidRange: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
