//! A plain (non self-balancing) Binary Search Tree. The tree owns its root
//! [`Node`] and every `Node` owns its children, so there are no parent pointers
//! and no shared nodes. All operations walk the tree top-down.
//!
//! # Examples
//!
//! ```
//! use binary_search_tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(2).insert(1).insert(3);
//! assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
//!
//! // Inserting a duplicate leaves the tree alone.
//! tree.insert(2);
//! assert_eq!(tree.len(), 3);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert!(tree.find(&2).is_none());
//! assert_eq!(tree.dfs_in_order(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::InvariantError;

mod shape;
mod traversal;

/// An ownership edge to a child (or to the root). `None` is an empty slot.
type Link<V> = Option<Box<Node<V>>>;

/// A Binary Search Tree. Values are ordered by `V: Ord` and each value is stored at most once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySearchTree<V> {
    root: Link<V>,
    len: usize,
}

impl<V> Default for BinarySearchTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for BinarySearchTree<V> {
    // The default drop glue recurses once per level, which a tree built from sorted input would
    // turn into one frame per node.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<V> BinarySearchTree<V> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// Inserts `value` by walking down from the root until an empty slot is found. Inserting a
    /// value that is already present does nothing. Returns the tree so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(15).insert(20).insert(10).insert(12);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &15);
    /// assert_eq!(root.left().unwrap().right().unwrap().value(), &12);
    /// ```
    pub fn insert(&mut self, value: V) -> &mut Self
    where
        V: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0;
        while let Some(node) = slot {
            match value.cmp(&node.value) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    tracing::trace!(depth, "ignored duplicate insert");
                    return self;
                }
            }
            depth += 1;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        tracing::trace!(depth, len = self.len, "attached new node");
        self
    }

    /// Inserts `value` the same way as [`insert`][Self::insert] but recursing into each
    /// subtree instead of looping. Both build identical trees from identical input.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut looped = BinarySearchTree::new();
    /// looped.insert(2).insert(1).insert(3);
    ///
    /// let mut recursed = BinarySearchTree::new();
    /// recursed.insert_recursively(2).insert_recursively(1).insert_recursively(3);
    ///
    /// assert_eq!(looped, recursed);
    /// ```
    pub fn insert_recursively(&mut self, value: V) -> &mut Self
    where
        V: Ord,
    {
        if Node::insert_into(&mut self.root, value, 0) {
            self.len += 1;
        }
        self
    }

    /// Potentially finds the node holding `value`. If no node holds it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.value()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// The recursive counterpart of [`find`][Self::find].
    pub fn find_recursively(&self, value: &V) -> Option<&Node<V>>
    where
        V: Ord,
    {
        self.root().and_then(|n| n.find(value))
    }

    /// Returns `true` if `value` is stored in the tree.
    pub fn contains(&self, value: &V) -> bool
    where
        V: Ord,
    {
        self.find(value).is_some()
    }

    /// Deletes the node holding `value` from the tree and returns the value. If the tree does not
    /// hold `value`, nothing happens.
    ///
    /// A node with two children is not unlinked itself. It takes the value of its in-order
    /// successor (the smallest value in its right subtree) and the successor's node is unlinked
    /// instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_search_tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(5).insert(3).insert(8).insert(7);
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.root().unwrap().value(), &7);
    /// assert_eq!(tree.remove(&42), None);
    /// ```
    pub fn remove(&mut self, value: &V) -> Option<V>
    where
        V: Ord,
    {
        let removed = Node::remove_from(&mut self.root, value, 0);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&V> {
        self.root().map(Node::min)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&V> {
        self.root().map(Node::max)
    }

    /// Re-checks the tree's invariants: an in-order walk must be strictly ascending (which rules
    /// out both misplaced and duplicate values) and must visit exactly [`len`][Self::len] nodes.
    pub fn validate(&self) -> Result<(), InvariantError>
    where
        V: Ord,
    {
        let in_order = self.dfs_in_order();
        if let Some(position) = in_order.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(InvariantError::OutOfOrder {
                position: position + 1,
            });
        }
        if in_order.len() != self.len {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                counted: in_order.len(),
            });
        }
        Ok(())
    }
}

/// A `Node` holds a value and exclusively owns up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Node<V> {
    fn new_boxed(value: V) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// The root of the left subtree, whose values are all smaller than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all larger than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn min(&self) -> &V {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    fn max(&self) -> &V {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }

    fn find(&self, value: &V) -> Option<&Self>
    where
        V: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().and_then(|n| n.find(value)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(value)),
        }
    }

    /// Inserts `value` into the subtree owned by `slot`. Returns `false` if it was a duplicate.
    fn insert_into(slot: &mut Link<V>, value: V, depth: usize) -> bool
    where
        V: Ord,
    {
        match slot {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value, depth + 1),
                Ordering::Greater => Self::insert_into(&mut node.right, value, depth + 1),
                Ordering::Equal => {
                    tracing::trace!(depth, "ignored duplicate insert");
                    false
                }
            },
            None => {
                *slot = Some(Self::new_boxed(value));
                tracing::trace!(depth, "attached new node");
                true
            }
        }
    }

    /// Removes `value` from the subtree owned by `slot`, rewriting `slot` to hold whatever
    /// should take the removed node's place.
    fn remove_from(slot: &mut Link<V>, value: &V, depth: usize) -> Option<V>
    where
        V: Ord,
    {
        let node = slot.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => return Self::remove_from(&mut node.left, value, depth + 1),
            Ordering::Greater => return Self::remove_from(&mut node.right, value, depth + 1),
            Ordering::Equal => {}
        }

        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => {
                tracing::trace!(depth, "detached leaf");
                Some(node.value)
            }
            (Some(child), None) | (None, Some(child)) => {
                tracing::trace!(depth, "promoted only child");
                *slot = Some(child);
                Some(node.value)
            }
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                // A node with a right child always has a minimum in that subtree.
                let successor = Self::take_min(&mut right)?;
                tracing::trace!(depth, "promoted in-order successor");
                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                *slot = Some(node);
                Some(removed)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree owned by `slot` and returns its value. That node
    /// has no left child, so its right child (if any) is promoted into its place.
    fn take_min(slot: &mut Link<V>) -> Option<V> {
        let node = slot.as_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }

        let mut node = slot.take()?;
        *slot = node.right.take();
        Some(node.value)
    }
}
