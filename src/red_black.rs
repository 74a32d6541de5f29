//! A red/black tree. Every node is colored red or black and the tree keeps these properties:
//!
//! 1. The root is black.
//! 2. A red node has no red child.
//! 3. Every path from a node down to a missing child passes through the same number of black
//!    nodes (its black-height).
//!
//! Together they bound the height by `2 lg(n + 1)`. Inserts and deletes break at most one
//! property locally and then walk up the tree recoloring and rotating until it holds again.
//!
//! Nodes live in a `Vec` and refer to each other by index, which lets every node keep a
//! back-reference to its parent for those walks. Slot 0 of each tree is a black,
//! keyless sentinel that stands in for every missing child and for the root's parent. It is
//! never written to after the tree is built.
//!
//! Inserting a key that is already present stores a second node, to the right of the existing
//! one.
//!
//! # Examples
//!
//! ```
//! use search_trees::red_black::Tree;
//! use search_trees::{Inspect, SearchTree};
//!
//! let mut tree = Tree::new();
//! for key in 1..=1000 {
//!     tree.insert(key);
//! }
//! assert!(tree.height() <= 2 * 10);
//! assert_eq!(tree.validate(), Ok(()));
//!
//! // Repeated keys are kept, and deleted one at a time.
//! tree.insert(500);
//! assert!(tree.delete(500));
//! assert!(tree.search(500));
//! assert!(tree.delete(500));
//! assert!(!tree.search(500));
//! ```

use std::cmp::Ordering;

use crate::node::Dir;
use crate::{Inspect, Key, SearchTree, Violation};

type NodeId = usize;

/// Index of the sentinel leaf.
const NIL: NodeId = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Debug)]
struct Node {
    /// Meaningless on the sentinel.
    key: Key,
    color: Color,
    parent: NodeId,
    children: [NodeId; 2],
}

impl Node {
    const SENTINEL: Node = Node {
        key: 0,
        color: Color::Black,
        parent: NIL,
        children: [NIL, NIL],
    };

    fn child(&self, dir: Dir) -> NodeId {
        self.children[dir as usize]
    }

    fn set_child(&mut self, dir: Dir, child: NodeId) {
        self.children[dir as usize] = child;
    }
}

/// A red/black Binary Search Tree.
#[derive(Debug)]
pub struct Tree {
    /// Slot `NIL` is the sentinel.
    nodes: Vec<Node>,
    /// Slots of deleted nodes, reused by later inserts.
    free: Vec<NodeId>,
    root: NodeId,
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
            nodes: vec![Node::SENTINEL],
            free: Vec::new(),
            root: NIL,
            len: 0,
        }
    }

    /// Whether a node holding `key` is present.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key) != NIL
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// All writes go through here so the sentinel stays untouched.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        debug_assert_ne!(id, NIL, "the sentinel is never written");
        &mut self.nodes[id]
    }

    fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    fn child(&self, id: NodeId, dir: Dir) -> NodeId {
        self.node(id).child(dir)
    }

    /// Which child of `parent` `id` is. `id` may be the sentinel as long as `parent`'s other
    /// child is a real node.
    fn side(&self, parent: NodeId, id: NodeId) -> Dir {
        if self.child(parent, Dir::Left) == id {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    fn find(&self, key: Key) -> NodeId {
        let mut cur = self.root;
        while cur != NIL {
            let node = self.node(cur);
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.child(Dir::Left),
                Ordering::Equal => return cur,
                Ordering::Greater => node.child(Dir::Right),
            };
        }
        NIL
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        loop {
            let left = self.child(id, Dir::Left);
            if left == NIL {
                return id;
            }
            id = left;
        }
    }

    fn alloc(&mut self, key: Key, parent: NodeId) -> NodeId {
        let node = Node {
            key,
            color: Color::Red,
            parent,
            children: [NIL, NIL],
        };
        match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        *self.node_mut(id) = Node::SENTINEL;
        self.free.push(id);
    }

    /// Makes `new` take `old`'s place under `parent` (or as the root).
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            self.root = new;
        } else {
            let dir = self.side(parent, old);
            self.node_mut(parent).set_child(dir, new);
        }
    }

    /// Puts the subtree rooted at `new` where the subtree rooted at `old` was. `old` keeps its
    /// own links.
    fn transplant(&mut self, old: NodeId, new: NodeId) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        if new != NIL {
            self.node_mut(new).parent = parent;
        }
    }

    /// Rotates the subtree rooted at `id` so that `id` moves down in direction `dir` and its
    /// child on the other side takes its place.
    ///
    /// ```text
    ///      id                 up
    ///     /  \               /  \
    ///    a    up     ->    id    c       (dir == Left)
    ///        /  \         /  \
    ///       b    c       a    b
    /// ```
    fn rotate(&mut self, id: NodeId, dir: Dir) {
        let up = self.child(id, !dir);
        debug_assert_ne!(up, NIL, "rotating towards a missing child");
        let middle = self.child(up, dir);

        self.node_mut(id).set_child(!dir, middle);
        if middle != NIL {
            self.node_mut(middle).parent = id;
        }

        let parent = self.parent(id);
        self.node_mut(up).parent = parent;
        self.replace_child(parent, id, up);

        self.node_mut(up).set_child(dir, id);
        self.node_mut(id).parent = up;
    }

    /// Restores the red/black properties after `id` was inserted red at a leaf position.
    ///
    /// While `id`'s parent is red, `id` and its parent break property 2. The parent is red so it
    /// isn't the root and there is a grandparent:
    ///
    /// - If the uncle is red, the grandparent's blackness is pushed down onto both of its
    ///   children and the check continues from the (now red) grandparent.
    /// - Otherwise, if `id` is an inner grandchild it is rotated into the outer position, and then
    ///   the grandparent is rotated towards the uncle with the parent taking its place and color.
    fn insert_fixup(&mut self, mut id: NodeId) {
        while self.color(self.parent(id)) == Color::Red {
            let parent = self.parent(id);
            let grandparent = self.parent(parent);
            let side = self.side(grandparent, parent);
            let uncle = self.child(grandparent, !side);

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                id = grandparent;
                continue;
            }

            if id == self.child(parent, !side) {
                id = parent;
                self.rotate(id, side);
            }
            let parent = self.parent(id);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, !side);
        }

        let root = self.root;
        self.set_color(root, Color::Black);

        if cfg!(debug_assertions) {
            assert_eq!(self.color(self.root), Color::Black);
            assert_eq!(self.color(NIL), Color::Black);
        }
    }

    /// Restores the red/black properties after a black node was removed from the position `id`
    /// (possibly the sentinel) now occupies under `parent`.
    ///
    /// `id` carries an extra black. While it isn't the root and is black itself, with `sibling`
    /// the other child of `parent`:
    ///
    /// - A red sibling is rotated above `parent`, which gives `id` a black sibling.
    /// - A black sibling with two black children is recolored red and the extra black moves up to
    ///   `parent`.
    /// - A black sibling whose far child is black (so its near child is red) is rotated away from
    ///   `id` so the red child becomes the far one.
    /// - A black sibling with a red far child is rotated above `parent`, taking `parent`'s color,
    ///   with `parent` and the far child turned black. This absorbs the extra black.
    fn delete_fixup(&mut self, mut id: NodeId, mut parent: NodeId) {
        while id != self.root && self.color(id) == Color::Black {
            let side = self.side(parent, id);
            let mut sibling = self.child(parent, !side);

            if self.color(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, !side);
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, !side);
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                self.set_color(sibling, Color::Red);
                id = parent;
                parent = self.parent(id);
                continue;
            }

            if self.color(far) == Color::Black {
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, !side);
                sibling = self.child(parent, !side);
            }

            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.child(sibling, !side);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            id = self.root;
        }

        if id != NIL {
            self.set_color(id, Color::Black);
        }

        if cfg!(debug_assertions) {
            assert_eq!(self.color(self.root), Color::Black);
            assert_eq!(self.color(NIL), Color::Black);
        }
    }

    /// Black-height of the subtree at `id`, checking colors and parent links along the way.
    /// Recursion is bounded by the tree's height, which the properties keep logarithmic.
    fn check_subtree(&self, id: NodeId) -> Result<usize, Violation> {
        if id == NIL {
            return Ok(0);
        }
        let node = self.node(id);

        let mut heights = [0; 2];
        for dir in [Dir::Left, Dir::Right] {
            let child = node.child(dir);
            if child == NIL {
                continue;
            }
            let child_node = self.node(child);
            if child_node.parent != id {
                return Err(Violation::BrokenParent {
                    parent: node.key,
                    child: child_node.key,
                });
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(Violation::RedRed {
                    parent: node.key,
                    child: child_node.key,
                });
            }
            heights[dir as usize] = self.check_subtree(child)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(Violation::BlackHeight {
                key: node.key,
                left,
                right,
            });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl SearchTree for Tree {
    fn insert(&mut self, key: Key) {
        let mut parent = NIL;
        let mut cur = self.root;
        let mut dir = Dir::Left;
        while cur != NIL {
            parent = cur;
            dir = if key < self.node(cur).key {
                Dir::Left
            } else {
                Dir::Right
            };
            cur = self.child(cur, dir);
        }

        let id = self.alloc(key, parent);
        if parent == NIL {
            self.root = id;
        } else {
            self.node_mut(parent).set_child(dir, id);
        }
        self.len += 1;

        self.insert_fixup(id);
    }

    fn search(&mut self, key: Key) -> bool {
        self.contains(key)
    }

    /// The node holding `key` is spliced out if it has at most one child. Otherwise its in-order
    /// successor is moved into its position and color, and it is the successor's old position
    /// that loses a node. Either way, if the node that physically left its position was black,
    /// the path through that position is one black short and the deletion fixup repairs it.
    fn delete(&mut self, key: Key) -> bool {
        let target = self.find(key);
        if target == NIL {
            return false;
        }

        let left = self.child(target, Dir::Left);
        let right = self.child(target, Dir::Right);
        let mut removed_color = self.color(target);
        // The node moving into the emptied position, and that position's parent. The sentinel
        // never records a parent, so the parent is tracked here instead.
        let (moved, moved_parent);

        if left == NIL || right == NIL {
            moved = if left == NIL { right } else { left };
            moved_parent = self.parent(target);
            self.transplant(target, moved);
        } else {
            let successor = self.minimum(right);
            removed_color = self.color(successor);
            moved = self.child(successor, Dir::Right);

            if self.parent(successor) == target {
                moved_parent = successor;
            } else {
                moved_parent = self.parent(successor);
                self.transplant(successor, moved);
                self.node_mut(successor).set_child(Dir::Right, right);
                self.node_mut(right).parent = successor;
            }

            self.transplant(target, successor);
            self.node_mut(successor).set_child(Dir::Left, left);
            self.node_mut(left).parent = successor;
            let target_color = self.color(target);
            self.set_color(successor, target_color);
        }

        self.release(target);
        self.len -= 1;

        if removed_color == Color::Black {
            self.delete_fixup(moved, moved_parent);
        }
        true
    }
}

impl Inspect for Tree {
    const KEEPS_DUPLICATES: bool = true;

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((id, depth)) = stack.pop() {
            if id == NIL {
                continue;
            }
            height = height.max(depth);
            let node = self.node(id);
            stack.push((node.child(Dir::Left), depth + 1));
            stack.push((node.child(Dir::Right), depth + 1));
        }
        height
    }

    fn root_key(&self) -> Option<Key> {
        (self.root != NIL).then(|| self.node(self.root).key)
    }

    fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cur = self.root;
        loop {
            while cur != NIL {
                stack.push(cur);
                cur = self.child(cur, Dir::Left);
            }
            let Some(id) = stack.pop() else {
                break;
            };
            keys.push(self.node(id).key);
            cur = self.child(id, Dir::Right);
        }
        keys
    }

    fn validate(&self) -> Result<(), Violation> {
        let sentinel = self.node(NIL);
        if sentinel.color != Color::Black || sentinel.parent != NIL || sentinel.children != [NIL; 2]
        {
            return Err(Violation::SentinelTouched);
        }

        let keys = self.keys();
        crate::node::check_order(&keys, Self::KEEPS_DUPLICATES)?;
        if keys.len() != self.len {
            return Err(Violation::LengthMismatch {
                recorded: self.len,
                actual: keys.len(),
            });
        }

        if self.root == NIL {
            return Ok(());
        }
        let root = self.node(self.root);
        if root.color == Color::Red {
            return Err(Violation::RedRoot(root.key));
        }
        if root.parent != NIL {
            return Err(Violation::BrokenParent {
                parent: self.node(root.parent).key,
                child: root.key,
            });
        }
        self.check_subtree(self.root).map(|_| ())
    }
}
