//! This crate exposes four Binary Search Trees (BSTs) over `i64` keys which share one small
//! interface, [`SearchTree`], but differ in what they do to keep operations cheap.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored keys. BSTs are defined recursively using the notion of a `Node`. A `Node` stores a key
//! and has up to two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Trees that keep repeated keys relax these to "not greater" and "not less" respectively.
//!
//! Searching takes `O(height)` so everything comes down to how each tree bounds its height:
//!
//! - [`unbalanced::Tree`] doesn't. Inserting sorted keys produces a chain as tall as the tree is
//!   large. It is here as the baseline.
//! - [`avl::Tree`] stores a height in every node and rotates whenever the two subtrees of a node
//!   differ in height by more than one.
//! - [`red_black::Tree`] colors every node red or black and restores the red/black properties
//!   with a fixup walk after every insert and delete.
//! - [`splay::Tree`] keeps no invariant at all. Every access rotates the touched node up to the
//!   root, which makes a sequence of operations cheap on average.
//!
//! # Examples
//!
//! ```
//! use search_trees::{avl, splay, Inspect, SearchTree};
//!
//! fn fill(tree: &mut dyn SearchTree) {
//!     for key in [40, 20, 10, 30, 60, 50, 70] {
//!         tree.insert(key);
//!     }
//! }
//!
//! let mut avl = avl::Tree::new();
//! fill(&mut avl);
//! assert!(avl.search(30));
//! assert!(!avl.search(99));
//! assert_eq!(avl.height(), 3);
//!
//! let mut splay = splay::Tree::new();
//! fill(&mut splay);
//! splay.search(10);
//! assert_eq!(splay.root_key(), Some(10));
//!
//! // Deleting a missing key is not an error.
//! assert!(!splay.delete(99));
//! assert!(splay.delete(10));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub(crate) mod node;
pub mod red_black;
pub mod splay;
pub mod unbalanced;
mod violation;


pub use violation::Violation;

/// The key type every tree is ordered by.
pub type Key = i64;

/// The operations every tree in this crate supports.
pub trait SearchTree {
    /// Makes sure a node holding `key` exists. Whether inserting a key that is already present
    /// adds a second node depends on the tree; see [`Inspect::KEEPS_DUPLICATES`].
    fn insert(&mut self, key: Key);

    /// Reports whether a node holding `key` is present. This takes `&mut self` because
    /// [`splay::Tree`] restructures itself on every lookup.
    fn search(&mut self, key: Key) -> bool;

    /// Removes one node holding `key`. Returns `false`, and does nothing, if there is none.
    fn delete(&mut self, key: Key) -> bool;
}

/// Read-only views of a tree's shape, for tests and benchmarks.
pub trait Inspect {
    /// Whether inserting a key that is already present stores it again.
    const KEEPS_DUPLICATES: bool;

    /// Number of nodes in the tree, counting repeated keys.
    fn len(&self) -> usize;

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes on the longest path from the root to a leaf. The empty tree has height 0.
    fn height(&self) -> usize;

    /// The key stored at the root, if any.
    fn root_key(&self) -> Option<Key>;

    /// Every stored key, in order.
    fn keys(&self) -> Vec<Key>;

    /// Walks the whole tree checking its structural invariants.
    fn validate(&self) -> Result<(), Violation>;
}
