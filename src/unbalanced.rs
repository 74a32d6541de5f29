//! A plain BST that never rebalances. This is the control for measuring what the other trees'
//! bookkeeping buys: inserting keys in sorted order turns it into a linked list.
//!
//! Inserting a key that is already present changes nothing.
//!
//! # Examples
//!
//! ```
//! use search_trees::unbalanced::Tree;
//! use search_trees::{Inspect, SearchTree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(1));
//!
//! tree.insert(1);
//! tree.insert(1);
//! assert!(tree.search(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Sorted keys make a chain.
//! for key in 2..=10 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 10);
//!
//! assert!(tree.delete(1));
//! assert!(!tree.delete(1));
//! assert!(!tree.search(1));
//! ```

use std::cmp::Ordering;

use crate::node::{self, Dir, Link, Node};
use crate::{Inspect, Key, SearchTree, Violation};

/// An unbalanced Binary Search Tree.
#[derive(Debug)]
pub struct Tree {
    root: Link<()>,
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
        let mut slot = &mut self.root;
        loop {
            let dir = match slot.0 {
                None => break,
                Some(ref node) => match key.cmp(&node.key) {
                    Ordering::Less => Dir::Left,
                    Ordering::Equal => return,
                    Ordering::Greater => Dir::Right,
                },
            };
            slot = slot.below_mut(dir);
        }

        slot.0 = Some(Node::new_boxed(key, ()));
        self.len += 1;
    }

    fn search(&mut self, key: Key) -> bool {
        self.contains(key)
    }

    fn delete(&mut self, key: Key) -> bool {
        let mut slot = &mut self.root;
        loop {
            let dir = match slot.0 {
                None => return false,
                Some(ref node) => match key.cmp(&node.key) {
                    Ordering::Less => Dir::Left,
                    Ordering::Equal => break,
                    Ordering::Greater => Dir::Right,
                },
            };
            slot = slot.below_mut(dir);
        }

        if !slot.splice() {
            // Two children: the successor's key moves up and its node goes instead.
            if let Some(node) = slot.node_mut() {
                if let Some(successor) = node.right.pop_min() {
                    node.key = successor;
                }
            }
        }
        self.len -= 1;
        true
    }
}

impl Inspect for Tree {
    const KEEPS_DUPLICATES: bool = false;

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        self.root.height()
    }

    fn root_key(&self) -> Option<Key> {
        self.root.key()
    }

    fn keys(&self) -> Vec<Key> {
        self.root.keys()
    }

    fn validate(&self) -> Result<(), Violation> {
        node::check_order(&self.keys(), Self::KEEPS_DUPLICATES)?;
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
