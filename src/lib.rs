//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes live in an arena,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key (or equal, when duplicates are kept).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the root
//! `Node` to a leaf `Node`. This tree does no balancing, so inserting keys in
//! sorted order gives a height of `N`. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Arena
//!
//! Removing a node means rewriting its parent's child slot, so every node keeps a
//! link to its parent. Instead of reference counting that cycle, all nodes live in
//! one `Vec` owned by the [`Tree`] and link to each other by [`NodeId`].
//!
//! ```
//! use arena_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for key in [3, 1, 4, 6, 9, 2, 5, 7] {
//!     tree.insert(key, key);
//! }
//!
//! assert_eq!(tree.find(&9), Ok(&9));
//! assert_eq!(tree.remove(&3), Ok(3));
//! assert_eq!(tree.find(&3), Err(Error::KeyNotFound));
//! assert!(tree.is_bst());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod arena;
pub mod config;
pub mod error;
pub mod shared;
pub mod traverse;
mod util;
mod validate;


pub use arena::{NodeId, Tree};
pub use config::{Config, Duplicates};
pub use error::{Error, Result};
pub use shared::SharedTree;
pub use traverse::Iter;
