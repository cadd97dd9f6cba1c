//! Depth-first and breadth-first walks. Every walk visits each node exactly once and returns the
//! visited values, so an empty tree yields an empty `Vec`.
//!
//! The depth-first walks keep an explicit stack instead of recursing, so a tree that degenerated
//! into a chain is walked without growing the call stack.

use std::collections::VecDeque;

use super::{BinarySearchTree, Node};

impl<V> BinarySearchTree<V> {
    /// Visits each node before its left subtree and then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(15).insert(20).insert(10).insert(12).insert(1).insert(50);
    ///
    /// assert_eq!(tree.dfs_pre_order(), [&15, &10, &1, &12, &20, &50]);
    /// ```
    pub fn dfs_pre_order(&self) -> Vec<&V> {
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            // Right goes on first so the left subtree is popped first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        visited
    }

    /// Visits the left subtree, then the node, then the right subtree. For a valid tree the
    /// values come out in strictly ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(15).insert(20).insert(10).insert(12).insert(1).insert(50);
    ///
    /// assert_eq!(tree.dfs_in_order(), [&1, &10, &12, &15, &20, &50]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&V> {
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visited.push(&node.value);
            current = node.right();
        }
        visited
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(15).insert(20).insert(10).insert(12).insert(1).insert(50);
    ///
    /// assert_eq!(tree.dfs_post_order(), [&1, &12, &10, &50, &20, &15]);
    /// ```
    pub fn dfs_post_order(&self) -> Vec<&V> {
        // Node, right, left is exactly post-order reversed.
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        visited.reverse();
        visited
    }

    /// Visits the tree level by level, left to right within each level.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.bfs().is_empty());
    ///
    /// tree.insert(15).insert(20).insert(10).insert(12).insert(1).insert(50);
    /// assert_eq!(tree.bfs(), [&15, &10, &20, &1, &12, &50]);
    /// ```
    pub fn bfs(&self) -> Vec<&V> {
        let mut visited = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<V>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visited.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        visited
    }
}
