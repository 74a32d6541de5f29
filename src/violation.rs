use thiserror::Error;

use crate::Key;

/// A broken structural invariant, as reported by [`Inspect::validate`][crate::Inspect::validate].
///
/// None of these can be produced through the public API of a correct tree; seeing one means a
/// bug in the tree that returned it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// An in-order traversal saw `prev` immediately before the smaller key `next`.
    #[error("keys out of order: {prev} comes before {next}")]
    OutOfOrder {
        /// The earlier key.
        prev: Key,
        /// The later, smaller, key.
        next: Key,
    },
    /// The key is stored twice in a tree that ignores repeated inserts.
    #[error("key {0} is stored more than once")]
    Duplicate(Key),
    /// The height recorded on a node doesn't match its children.
    #[error("node {key} records height {recorded} but its children give {actual}")]
    StaleHeight {
        /// The node's key.
        key: Key,
        /// The height stored on the node.
        recorded: usize,
        /// `1 + max(height(left), height(right))`.
        actual: usize,
    },
    /// A node's balance factor left the range `-1..=1`.
    #[error("node {key} has balance factor {factor}")]
    Unbalanced {
        /// The node's key.
        key: Key,
        /// `height(left) - height(right)`.
        factor: isize,
    },
    /// The root of a red/black tree is red.
    #[error("root {0} is red")]
    RedRoot(Key),
    /// A red node has a red child.
    #[error("red node {parent} has red child {child}")]
    RedRed {
        /// The red parent's key.
        parent: Key,
        /// The red child's key.
        child: Key,
    },
    /// The two subtrees of a node have different black-heights.
    #[error("black height below {key} is {left} on the left but {right} on the right")]
    BlackHeight {
        /// The node's key.
        key: Key,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// A child's parent back-reference doesn't point at the node that owns it.
    #[error("node {child} does not point back at its parent {parent}")]
    BrokenParent {
        /// The owning node's key.
        parent: Key,
        /// The child's key.
        child: Key,
    },
    /// The red/black sentinel leaf was recolored or linked into the tree.
    #[error("sentinel leaf was modified")]
    SentinelTouched,
    /// The tree's node count disagrees with what is reachable from the root.
    #[error("tree reports {recorded} nodes but {actual} are reachable")]
    LengthMismatch {
        /// The count the tree keeps.
        recorded: usize,
        /// Nodes actually reachable from the root.
        actual: usize,
    },
}
