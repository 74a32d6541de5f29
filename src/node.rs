//! The boxed node shared by the pointer-based trees ([`unbalanced`], [`avl`] and [`splay`]).
//!
//! A [`Node`] owns its key and both of its children. What a variant stores on top of that (an
//! AVL height, or nothing at all) lives in the `meta` field and is kept up to date through
//! [`Augment::refresh`].
//!
//! Everything that walks a whole tree in here is iterative. The unbalanced and splay trees can
//! degrade into a chain as long as the tree itself, so recursion over the full height is not an
//! option for them.
//!
//! [`unbalanced`]: crate::unbalanced
//! [`avl`]: crate::avl
//! [`splay`]: crate::splay

use std::cmp::Ordering;
use std::ops::Not;

use crate::{Key, Violation};

/// Which child of a node to follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Self::Output {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

/// Per-node data a variant derives from the node's children.
pub(crate) trait Augment: Sized {
    /// Recomputes `node.meta` from its (already correct) children.
    fn refresh(_node: &mut Node<Self>) {}
}

impl Augment for () {}

#[derive(Debug)]
pub(crate) struct Node<M> {
    pub(crate) key: Key,
    pub(crate) meta: M,
    pub(crate) left: Link<M>,
    pub(crate) right: Link<M>,
}

impl<M> Node<M> {
    pub(crate) fn new_boxed(key: Key, meta: M) -> Box<Self> {
        Box::new(Node {
            key,
            meta,
            left: Link::empty(),
            right: Link::empty(),
        })
    }

    pub(crate) fn child_mut(&mut self, dir: Dir) -> &mut Link<M> {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
        }
    }
}

/// An owning, possibly empty, child slot. The tree's root is a `Link` too, so every structural
/// change is "replace what this slot holds".
#[derive(Debug)]
pub(crate) struct Link<M>(pub(crate) Option<Box<Node<M>>>);

impl<M> Drop for Link<M> {
    fn drop(&mut self) {
        // Unlink children before each node is freed so dropping a chain doesn't recurse.
        let mut stack: Vec<Box<Node<M>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<M> Link<M> {
    pub(crate) const fn empty() -> Self {
        Link(None)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn node(&self) -> Option<&Node<M>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<M>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    pub(crate) fn key(&self) -> Option<Key> {
        self.node().map(|n| n.key)
    }

    /// The link hanging below this one's node in direction `dir`. An empty link has no children,
    /// so it is returned unchanged; callers only step downward after seeing a node.
    pub(crate) fn below_mut(&mut self, dir: Dir) -> &mut Link<M> {
        match self.0 {
            Some(ref mut node) => node.child_mut(dir),
            None => self,
        }
    }

    /// Finds the node holding `key` by plain BST descent.
    pub(crate) fn find(&self, key: Key) -> Option<&Node<M>> {
        let mut cur = self.node();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.node(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.node(),
            };
        }
        None
    }

    pub(crate) fn min_key(&self) -> Option<Key> {
        let mut node = self.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(node.key)
    }

    /// Unlinks the leftmost node of this subtree, splicing its right child into its place, and
    /// returns its key.
    pub(crate) fn pop_min(&mut self) -> Option<Key> {
        let mut slot = self;
        loop {
            let has_left = match slot.0 {
                None => return None,
                Some(ref node) => !node.left.is_empty(),
            };
            if !has_left {
                break;
            }
            slot = slot.below_mut(Dir::Left);
        }

        let mut min = slot.0.take()?;
        *slot = min.right.take();
        Some(min.key)
    }

    /// Splices this link's node out when it has at most one child, lifting that child into the
    /// slot. Returns `false`, leaving the tree untouched, when the node has two children.
    pub(crate) fn splice(&mut self) -> bool {
        let Some(node) = self.node_mut() else {
            return false;
        };
        let lifted = if node.left.is_empty() {
            node.right.take()
        } else if node.right.is_empty() {
            node.left.take()
        } else {
            return false;
        };
        *self = lifted;
        true
    }

    /// Number of nodes in this subtree.
    pub(crate) fn count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<M>> = self.node().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.node());
            stack.extend(node.right.node());
        }
        count
    }

    /// Number of nodes on the longest path from this link down to a leaf.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<M>, usize)> = self.node().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.node().map(|n| (n, depth + 1)));
            stack.extend(node.right.node().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Keys of this subtree in order.
    pub(crate) fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut stack = Vec::new();
        let mut cur = self.node();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.node();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(node.key);
            cur = node.right.node();
        }
        keys
    }
}

impl<M: Augment> Link<M> {
    /// Rotates this subtree so its root moves down in direction `dir` and the child on the other
    /// side takes its place. Does nothing if that child is missing.
    ///
    /// For `dir == Dir::Right` (a right rotation):
    ///
    /// ```text
    ///       y                x
    ///      / \              / \
    ///     x   c    ->      a   y
    ///    / \                  / \
    ///   a   b                b   c
    /// ```
    ///
    /// `y` is refreshed before `x` since `y` ends up below it.
    pub(crate) fn rotate(&mut self, dir: Dir) {
        let Some(mut old_root) = self.0.take() else {
            return;
        };
        let Some(mut new_root) = old_root.child_mut(!dir).0.take() else {
            self.0 = Some(old_root);
            return;
        };

        *old_root.child_mut(!dir) = new_root.child_mut(dir).take();
        M::refresh(&mut old_root);

        new_root.child_mut(dir).0 = Some(old_root);
        M::refresh(&mut new_root);

        self.0 = Some(new_root);
    }
}

/// Checks that `keys` is ascending. Equal neighbours are allowed only when `duplicates` is set.
pub(crate) fn check_order(keys: &[Key], duplicates: bool) -> Result<(), Violation> {
    for pair in keys.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev > next {
            return Err(Violation::OutOfOrder { prev, next });
        }
        if prev == next && !duplicates {
            return Err(Violation::Duplicate(prev));
        }
    }
    Ok(())
}
