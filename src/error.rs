use thiserror::Error;

/// A broken structural invariant reported by
/// [`BinarySearchTree::validate`][crate::BinarySearchTree::validate].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// In-order traversal produced a value that is not strictly greater than the one before it.
    /// Either the ordering invariant is broken or a duplicate value is present.
    #[error("value at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// Zero-based index into the in-order sequence.
        position: usize,
    },

    /// The tree's recorded length disagrees with the number of reachable nodes.
    #[error("tree records {recorded} nodes but {counted} are reachable from the root")]
    LengthMismatch {
        /// The length the tree was tracking.
        recorded: usize,
        /// The number of nodes actually visited.
        counted: usize,
    },
}
