//! Questions about the shape of the tree: height, balance, and the second-highest value.
//!
//! These recurse once per level, so on a tree that degenerated into a chain they use stack space
//! proportional to the number of nodes.

use super::{BinarySearchTree, Link, Node};

/// Height of a possibly-empty subtree. An empty subtree is `-1` so that a leaf is `0`.
fn height_of<V>(link: &Link<V>) -> isize {
    match link {
        None => -1,
        Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
    }
}

/// Height of the subtree, or `None` as soon as any node in it has children whose heights differ
/// by more than one.
fn balanced_height<V>(link: &Link<V>) -> Option<isize> {
    match link {
        None => Some(-1),
        Some(node) => {
            let left = balanced_height(&node.left)?;
            let right = balanced_height(&node.right)?;
            if (left - right).abs() > 1 {
                None
            } else {
                Some(1 + left.max(right))
            }
        }
    }
}

impl<V> Node<V> {
    /// The number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of 0.
    pub fn height(&self) -> usize {
        let height = 1 + height_of(&self.left).max(height_of(&self.right));
        // Always >= 0 since both children are >= -1.
        height as usize
    }
}

impl<V> BinarySearchTree<V> {
    /// The height of the root node, or `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// tree.insert(1).insert(3).insert(4);
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Returns `true` if, at every node, the heights of the left and right subtrees differ by at
    /// most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2).insert(1).insert(3);
    /// assert!(tree.is_balanced());
    ///
    /// let mut chain = BinarySearchTree::new();
    /// chain.insert(1).insert(2).insert(3).insert(4);
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(&self.root).is_some()
    }

    /// The second largest value in the tree, or `None` if there are fewer than two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(10);
    /// assert_eq!(tree.find_second_highest(), None);
    ///
    /// tree.insert(5).insert(15).insert(3).insert(7);
    /// assert_eq!(tree.find_second_highest(), Some(&10));
    /// ```
    pub fn find_second_highest(&self) -> Option<&V> {
        let mut node = self.root()?;
        loop {
            match (node.left(), node.right()) {
                // No larger branch below, so the runner-up is the largest value on the left.
                (Some(left), None) => return Some(left.max()),
                // The right child is the maximum, which makes this node the runner-up.
                (_, Some(right)) if right.is_leaf() => return Some(&node.value),
                (_, Some(right)) => node = right,
                (None, None) => return None,
            }
        }
    }
}
