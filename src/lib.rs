//! This crate exposes an ordered set backed by a plain, unbalanced Binary Search Tree (BST)
//! with order-statistic queries and lazy traversals.
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
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that both are strict: an [`OrderedTree`] never holds two equal values.
//!
//! Searching for a value takes `O(height)`, where `height` is the number of `Node`s on the
//! longest path from the root `Node` down to a leaf `Node`. [`OrderedTree`] never rebalances, so
//! its height depends on the order values were added in. Adding values in ascending order
//! produces a tree as tall as it is large, while [`OrderedTree::from_collection`] builds a tree
//! of height `⌈lg (N + 1)⌉`.
//!
//! Visiting the left subtree, then the subtree root, then the right subtree yields values in
//! sorted order. That's what [`OrderedTree::iter`] does, one step at a time. Pre-order and
//! post-order traversals are available too.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Error, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! assert_eq!(tree.first(), Err(Error::EmptyCollection));
//!
//! for x in [50, 30, 70, 20, 40] {
//!     tree.add(x);
//! }
//!
//! assert_eq!(tree.first(), Ok(&20));
//! assert_eq!(tree.floor(&45), Some(&40));
//! assert_eq!(tree.higher(&50), Some(&70));
//! assert_eq!(tree.get(1), Ok(&30));
//! assert_eq!(tree.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
mod node;
pub mod order;
mod tree;
mod util;

pub use error::{Error, Result};
pub use iter::{InOrder, PostOrder, PreOrder};
pub use order::{Natural, TotalOrder};
pub use tree::OrderedTree;
