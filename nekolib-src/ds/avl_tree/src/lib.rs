//! AVL 木による順序付き連想配列。
//!
//! Keys are kept in a binary search tree whose subtrees differ in height by
//! at most one, so [`search`], [`insert`] and [`erase`] touch
//! $`O(\log n)`$ nodes.
//!
//! Nodes live in a [`Slab`] and refer to each other by slot. Each node owns
//! its children; the parent link is a plain slot used to walk back up after
//! an update.
//!
//! Unlike [`BTreeMap`], inserting a key that is already present keeps the
//! old value, and erasing a missing key does nothing.
//!
//! ```
//! use avl_tree::{AvlTree, Error};
//!
//! let mut tree = AvlTree::new();
//! tree.insert(10, "a");
//! tree.insert(20, "b");
//! tree.insert(30, "c");
//! assert_eq!(format!("{tree:?}"), r#"{20: "b", 10: "a", 30: "c"}"#);
//!
//! assert!(!tree.insert(30, "x"));
//! assert_eq!(tree.search(&30), Ok(&"c"));
//!
//! tree.erase(&20);
//! assert_eq!(tree.search(&20), Err(Error::NotFound));
//! ```
//!
//! [`search`]: AvlTree::search
//! [`insert`]: AvlTree::insert
//! [`erase`]: AvlTree::erase
//! [`BTreeMap`]: std::collections::BTreeMap

use std::{borrow::Borrow, cmp::Ordering, collections::VecDeque, fmt};

use slab::Slab;
use tracing::trace;

mod balance;
mod debug;
mod error;
mod node;

pub use debug::Visualize;
pub use error::{Error, Result};

use node::{Node, NodeId, Side};

pub struct AvlTree<K, V> {
    nodes: Slab<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K, V> AvlTree<K, V> {
    pub fn new() -> Self { Self { nodes: Slab::new(), root: None } }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Height of the whole tree; `0` if empty.
    pub fn height(&self) -> u32 { self.height_of(self.root) }

    /// Calls `visit` on every entry in level order: the root first, then
    /// each depth from left to right.
    pub fn traverse<F: FnMut(&K, &V)>(&self, mut visit: F) {
        let Some(root) = self.root else { return };
        let mut queue = VecDeque::from([root]);
        while let Some(x) = queue.pop_front() {
            let node = &self.nodes[x];
            queue.extend(node.children());
            visit(&node.key, &node.value);
        }
    }

    /// Moves every entry out into the returned tree, leaving `self` empty.
    pub fn take(&mut self) -> Self { std::mem::take(self) }

    pub fn visualize(&self) -> Visualize<'_, K, V> { Visualize(self) }
}

impl<K: Ord, V> AvlTree<K, V> {
    fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        while let Some(x) = cur {
            let node = &self.nodes[x];
            cur = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(x),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// # Errors
    /// [`Error::NotFound`] if `key` is not stored.
    pub fn search<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let x = self.find(key).ok_or(Error::NotFound)?;
        Ok(&self.nodes[x].value)
    }

    /// # Errors
    /// [`Error::NotFound`] if `key` is not stored.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let x = self.find(key).ok_or(Error::NotFound)?;
        Ok(&mut self.nodes[x].value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).ok()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Adds `key` as a new leaf and rebalances. Returns `false` and drops
    /// the arguments if `key` is already present; the stored value is not
    /// replaced.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;
        while let Some(x) = cur {
            let node = &self.nodes[x];
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return false,
                Ordering::Greater => Side::Right,
            };
            parent = Some(x);
            cur = node.child(side);
        }

        let leaf = self.nodes.insert(Node::leaf(key, value, parent));
        match parent {
            Some(parent) => {
                *self.nodes[parent].child_mut(side) = Some(leaf);
                self.fix_up(leaf);
            }
            None => self.root = Some(leaf),
        }
        true
    }

    /// Removes `key` and rebalances. Returns `false` if `key` is not
    /// present.
    ///
    /// A node with two children is not unlinked itself: it takes over the
    /// key and value of its in-order predecessor, and the predecessor's
    /// node is spliced out instead.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(x) = self.find(key) else { return false };
        if self.root == Some(x) && self.nodes[x].is_leaf() {
            self.nodes.remove(x);
            self.root = None;
            return true;
        }

        let target = match (self.nodes[x].left, self.nodes[x].right) {
            (Some(left), Some(_)) => self.rightmost(left),
            _ => x,
        };
        let Node { key, value, parent, left, right, .. } =
            self.nodes.remove(target);
        if target != x {
            trace!(node = x, predecessor = target, "splice");
            let node = &mut self.nodes[x];
            node.key = key;
            node.value = value;
        }

        let child = left.or(right);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, target, child);
        if let Some(start) = child.or(parent) {
            self.fix_up(start);
        }
        true
    }

    /// The rightmost node of the subtree rooted at `x`.
    fn rightmost(&self, mut x: NodeId) -> NodeId {
        while let Some(right) = self.nodes[x].right {
            x = right;
        }
        x
    }
}

impl<K: Ord + Clone, V> AvlTree<K, V> {
    /// Erases every entry, one key at a time. The keys are collected before
    /// the first erase, so each node is released exactly once.
    pub fn clear(&mut self) {
        let mut keys = Vec::with_capacity(self.len());
        self.traverse(|key, _| keys.push(key.clone()));
        trace!(len = keys.len(), "clear");
        for key in &keys {
            self.erase(key);
        }
        debug_assert!(self.nodes.is_empty());
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self { Self::new() }
}

/// Rebuilds the tree by inserting the source's entries in level order. The
/// contents are the same; the shape may differ.
impl<K: Ord + Clone, V: Clone> Clone for AvlTree<K, V> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        self.traverse(|key, value| {
            tree.insert(key.clone(), value.clone());
        });
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        source.traverse(|key, value| {
            self.insert(key.clone(), value.clone());
        });
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for AvlTree<K, V> {
    fn from(arr: [(K, V); N]) -> Self { arr.into_iter().collect() }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTree<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = fmt.debug_map();
        self.traverse(|key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}
