//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances itself, so its shape
//! (and therefore its height) is decided entirely by the order values were inserted in. Inserting
//! values in ascending order produces a chain with a height of `N - 1`.
//! BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert(10).insert(5).insert(15).insert(3).insert(7);
//!
//! assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
//! assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
//! assert_eq!(tree.find_second_highest(), Some(&10));
//!
//! assert_eq!(tree.remove(&10), Some(10));
//! assert!(tree.find(&10).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod tree;

pub use error::InvariantError;
pub use tree::{BinarySearchTree, Node};
