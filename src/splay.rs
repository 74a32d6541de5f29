//! A splay tree. It keeps no balance information at all: instead, every operation moves the node
//! it touched to the root with a sequence of rotations (a "splay"). Any single operation can cost
//! `O(n)` but a sequence of `m` operations costs `O(m lg n)`, and recently used keys stay cheap to
//! reach.
//!
//! Searching splays too, hit or miss. On a miss the last node looked at becomes the root.
//!
//! Inserting a key that is already present stores a second node, to the right of the existing
//! one.
//!
//! # Examples
//!
//! ```
//! use search_trees::splay::Tree;
//! use search_trees::{Inspect, SearchTree};
//!
//! let mut tree = Tree::new();
//! for key in [40, 20, 10, 30, 60, 50, 70] {
//!     tree.insert(key);
//!     assert_eq!(tree.root_key(), Some(key));
//! }
//!
//! assert!(tree.search(30));
//! assert_eq!(tree.root_key(), Some(30));
//!
//! // 35 isn't there; one of its neighbours is now the root.
//! assert!(!tree.search(35));
//! assert!(matches!(tree.root_key(), Some(30) | Some(40)));
//! ```

use std::cmp::Ordering;

use crate::node::{self, Dir, Link, Node};
use crate::{Inspect, Key, SearchTree, Violation};

/// A self-adjusting Binary Search Tree.
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

    /// Whether a node holding `key` is present, without splaying.
    pub fn contains(&self, key: Key) -> bool {
        self.root.find(key).is_some()
    }
}

impl SearchTree for Tree {
    /// Attaches a new leaf as an unbalanced tree would, then splays it to the root.
    fn insert(&mut self, key: Key) {
        let mut slot = &mut self.root;
        loop {
            let dir = match slot.0 {
                None => break,
                Some(ref node) if key < node.key => Dir::Left,
                Some(_) => Dir::Right,
            };
            slot = slot.below_mut(dir);
        }
        slot.0 = Some(Node::new_boxed(key, ()));
        self.len += 1;

        self.root.splay(key);
    }

    fn search(&mut self, key: Key) -> bool {
        self.root.splay(key);
        self.root.key() == Some(key)
    }

    /// Splays `key` to the root and, if it is there, joins the root's two subtrees: the largest
    /// key on the left is splayed to the top of the left subtree, leaving it no right child, and
    /// the right subtree hangs off it.
    fn delete(&mut self, key: Key) -> bool {
        self.root.splay(key);
        if self.root.key() != Some(key) {
            return false;
        }
        let Some(mut old_root) = self.root.0.take() else {
            return false;
        };

        let right = old_root.right.take();
        let mut left = old_root.left.take();
        if left.is_empty() {
            self.root = right;
        } else {
            left.splay_by(|_| Ordering::Greater);
            if let Some(new_root) = left.node_mut() {
                new_root.right = right;
            }
            self.root = left;
        }
        self.len -= 1;
        true
    }
}

impl Inspect for Tree {
    const KEEPS_DUPLICATES: bool = true;

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

impl Link<()> {
    fn splay(&mut self, key: Key) {
        self.splay_by(|node_key| key.cmp(&node_key));
    }

    /// Moves a node to the root of this subtree. The path is found by descending from the root,
    /// asking `probe` at each node whether the target is to its left, is this node, or is to its
    /// right. Descent stops at the target or at the last node before falling off the tree, and
    /// that node is splayed.
    ///
    /// The path is detached on the way down and reassembled bottom-up, two levels at a time:
    ///
    /// ```text
    ///  zig-zig:        g            x        zig-zag:      g             x
    ///                 /              \                    /             / \
    ///                p       ->       p                  p      ->     p   g
    ///               /                  \                  \
    ///              x                    g                  x
    /// ```
    ///
    /// with a single rotation (zig) at the top when the path has odd length.
    pub(crate) fn splay_by(&mut self, mut probe: impl FnMut(Key) -> Ordering) {
        let Some(mut cur) = self.0.take() else {
            return;
        };

        // Each ancestor with the child on the path removed, and the side that child was on.
        let mut path: Vec<(Box<Node<()>>, Dir)> = Vec::new();
        loop {
            let dir = match probe(cur.key) {
                Ordering::Less => Dir::Left,
                Ordering::Equal => break,
                Ordering::Greater => Dir::Right,
            };
            match cur.child_mut(dir).0.take() {
                Some(next) => {
                    path.push((cur, dir));
                    cur = next;
                }
                None => break,
            }
        }

        while let Some((mut parent, up)) = path.pop() {
            match path.pop() {
                Some((mut grandparent, grand_up)) if grand_up == up => {
                    *grandparent.child_mut(up) = parent.child_mut(!up).take();
                    parent.child_mut(!up).0 = Some(grandparent);
                    *parent.child_mut(up) = cur.child_mut(!up).take();
                    cur.child_mut(!up).0 = Some(parent);
                }
                Some((mut grandparent, grand_up)) => {
                    *parent.child_mut(up) = cur.child_mut(grand_up).take();
                    *grandparent.child_mut(grand_up) = cur.child_mut(up).take();
                    cur.child_mut(grand_up).0 = Some(parent);
                    cur.child_mut(up).0 = Some(grandparent);
                }
                None => {
                    *parent.child_mut(up) = cur.child_mut(!up).take();
                    cur.child_mut(!up).0 = Some(parent);
                }
            }
        }

        self.0 = Some(cur);
    }
}
