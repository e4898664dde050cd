//! Intrusive red-black tree over caller-owned nodes.
//!
//! Nodes live in a slice the caller owns; links are `Option<u32>` indices
//! into it. The tree never allocates, frees or moves a node. It only links
//! and unlinks them, keeping insert, lookup and delete at O(log n).
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Link`], [`Node`] and [`KeyedNode`] embedding contract, [`Color`] |
//! [`util`] | `first`, `last`, `next`, `prev`, `find`, `size`, `height` |
//! [`red_black::util`] | rotations, insert/delete with fixups, validation |
//! [`red_black::tree`] | [`RbTree`] handle: root plus comparator |
//! [`red_black::map`] | [`RbMap`], a map that owns its arena |
//! [`traverse`] | preorder, inorder, postorder and display-order visitors |
//!
//! # Embedding
//!
//! ```
//! use intrusive_rbtree::{KeyedNode, Link, Node, RbTree};
//!
//! struct Timer {
//!     link: Link,
//!     deadline: u64,
//!     name: &'static str,
//! }
//!
//! impl Node for Timer {
//!     fn link(&self) -> &Link { &self.link }
//!     fn link_mut(&mut self) -> &mut Link { &mut self.link }
//! }
//!
//! impl KeyedNode for Timer {
//!     type Key = u64;
//!     fn key(&self) -> &u64 { &self.deadline }
//! }
//!
//! let mut timers = vec![
//!     Timer { link: Link::new(), deadline: 30, name: "c" },
//!     Timer { link: Link::new(), deadline: 10, name: "a" },
//!     Timer { link: Link::new(), deadline: 20, name: "b" },
//! ];
//! let mut tree = RbTree::new();
//! for i in 0..timers.len() as u32 {
//!     tree.insert(&mut timers, i).unwrap();
//! }
//! let names: Vec<_> = tree.iter(&timers).map(|i| timers[i as usize].name).collect();
//! assert_eq!(names, ["a", "b", "c"]);
//!
//! let b = tree.lookup(&timers, &20).unwrap();
//! tree.delete(&mut timers, b);
//! assert_eq!(tree.lookup(&timers, &20), None);
//! ```

pub mod error;
pub mod red_black;
pub mod traverse;
pub mod types;
pub mod util;

pub use error::{RbError, Violation};
pub use red_black::{RbMap, RbNode, RbTree};
pub use types::{default_comparator, Color, KeyedNode, Link, Node};
