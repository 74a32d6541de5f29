//! A self-balancing BST (specifically, an AVL tree). Every node records the height of its
//! subtree and, after every insert and delete, each node on the way back up to the root is
//! rotated if its two subtrees differ in height by more than one.
//!
//! Inserting a key that is already present changes nothing.
//!
//! # Examples
//!
//! ```
//! use search_trees::avl::Tree;
//! use search_trees::{Inspect, SearchTree};
//!
//! let mut tree = Tree::new();
//!
//! // Sorted keys don't make a chain here.
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.root_key(), Some(4));
//! assert_eq!(tree.height(), 3);
//!
//! assert!(tree.delete(4));
//! assert!(!tree.search(4));
//! assert_eq!(tree.validate(), Ok(()));
//! ```

use std::cmp::Ordering;

use crate::node::{self, Augment, Dir, Link, Node};
use crate::{Inspect, Key, SearchTree, Violation};

/// How many levels are in the subtree rooted at a node. A node with no children has a height
/// of 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Height(usize);

impl Augment for Height {
    fn refresh(node: &mut Node<Self>) {
        node.meta = Height(node.left.height_field().max(node.right.height_field()) + 1);
    }
}

/// A height-balanced Binary Search Tree.
#[derive(Debug)]
pub struct Tree {
    root: Link<Height>,
    len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::empty(),
            len: 0,
        }
    }

    /// Whether a node holding `key` is present.
    pub fn contains(&self, key: Key) -> bool {
        self.root.find(key).is_some()
    }
}

impl SearchTree for Tree {
    fn insert(&mut self, key: Key) {
        if self.root.insert(key) {
            self.len += 1;
        }
    }

    fn search(&mut self, key: Key) -> bool {
        self.contains(key)
    }

    fn delete(&mut self, key: Key) -> bool {
        let removed = self.root.delete(key);
        if removed {
            self.len -= 1;
        }
        removed
    }
}

impl Inspect for Tree {
    const KEEPS_DUPLICATES: bool = false;

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        self.root.height_field()
    }

    fn root_key(&self) -> Option<Key> {
        self.root.key()
    }

    fn keys(&self) -> Vec<Key> {
        self.root.keys()
    }

    fn validate(&self) -> Result<(), Violation> {
        node::check_order(&self.keys(), Self::KEEPS_DUPLICATES)?;
        self.root.check_heights()?;
        let actual = self.root.count();
        if actual != self.len {
            return Err(Violation::LengthMismatch {
                recorded: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl Link<Height> {
    /// The height recorded on this link's node, or 0 when empty.
    fn height_field(&self) -> usize {
        self.node().map_or(0, |n| n.meta.0)
    }

    /// `height(left) - height(right)`. See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    fn balance_factor(&self) -> isize {
        self.node().map_or(0, |n| {
            n.left.height_field() as isize - n.right.height_field() as isize
        })
    }

    /// Inserts `key` under this link, returning whether a node was added.
    fn insert(&mut self, key: Key) -> bool {
        let inserted = match self.0 {
            None => {
                self.0 = Some(Node::new_boxed(key, Height(1)));
                return true;
            }
            Some(ref mut node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key),
                Ordering::Equal => false,
                Ordering::Greater => node.right.insert(key),
            },
        };

        if inserted {
            self.balance();
        }
        inserted
    }

    /// Deletes the node holding `key` from this subtree, returning whether there was one.
    ///
    /// A node with two children takes its in-order successor's key, and the successor is then
    /// deleted from the right subtree instead. Every node on the path back up is rebalanced since
    /// deleting, unlike inserting, can unbalance every level.
    fn delete(&mut self, key: Key) -> bool {
        let Some(ordering) = self.key().map(|k| key.cmp(&k)) else {
            return false;
        };
        let removed = match ordering {
            Ordering::Less => self.below_mut(Dir::Left).delete(key),
            Ordering::Equal => self.delete_here(),
            Ordering::Greater => self.below_mut(Dir::Right).delete(key),
        };

        if removed {
            self.balance();
        }
        removed
    }

    /// Deletes this link's own node.
    fn delete_here(&mut self) -> bool {
        if self.splice() {
            return true;
        }
        let Some(node) = self.node_mut() else {
            return false;
        };
        match node.right.min_key() {
            Some(successor) => {
                node.key = successor;
                node.right.delete(successor)
            }
            None => false,
        }
    }

    /// Restores the height of this link's node and, if it is out of balance, rotates it back
    /// into balance.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn balance(&mut self) {
        let Some(root) = self.node_mut() else {
            return;
        };
        Height::refresh(root);

        let factor = self.balance_factor();
        if factor > 1 {
            // Left-left or left-right.
            if let Some(root) = self.node_mut() {
                if root.left.balance_factor() < 0 {
                    root.left.rotate(Dir::Left);
                }
            }
            self.rotate(Dir::Right);
        } else if factor < -1 {
            // Right-right or right-left.
            if let Some(root) = self.node_mut() {
                if root.right.balance_factor() > 0 {
                    root.right.rotate(Dir::Right);
                }
            }
            self.rotate(Dir::Left);
        }

        if cfg!(debug_assertions) {
            if let Some(root) = self.node() {
                let left_height = root.left.height_field();
                let right_height = root.right.height_field();
                assert_eq!(root.meta.0, left_height.max(right_height) + 1);
                assert!(left_height.abs_diff(right_height) <= 1);
            }
        }
    }

    /// Checks every recorded height and balance factor in this subtree, returning the subtree's
    /// true height. Recursion is bounded by the height, which is logarithmic while the tree is
    /// balanced and is checked on the way back up.
    fn check_heights(&self) -> Result<usize, Violation> {
        let Some(node) = self.node() else {
            return Ok(0);
        };
        let left = node.left.check_heights()?;
        let right = node.right.check_heights()?;

        let actual = left.max(right) + 1;
        if node.meta.0 != actual {
            return Err(Violation::StaleHeight {
                key: node.key,
                recorded: node.meta.0,
                actual,
            });
        }
        let factor = left as isize - right as isize;
        if factor.abs() > 1 {
            return Err(Violation::Unbalanced {
                key: node.key,
                factor,
            });
        }
        Ok(actual)
    }
}
