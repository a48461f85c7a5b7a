//! An unbalanced BST whose nodes live in an arena. Every node is stored in a `Vec` slot and
//! refers to its children and its parent by [`NodeId`] so a node can point back up the tree
//! without reference counting or raw pointers.
//!
//! # Examples
//!
//! ```
//! use arena_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // By default an equal key gets its own node to the right. The first one is still found first.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Removing a node returns its value and uncovers the duplicate.
//! assert_eq!(tree.remove(&1), Ok(2));
//! assert_eq!(tree.find(&1), Ok(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::config::{Config, Duplicates};
use crate::error::{Error, Result};
use crate::util::{Position, Side};

/// Handle to a node in a [`Tree`]. A handle is only meaningful for the tree that produced it and
/// stops being valid once that node's key is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Only used to splice this node out during removal.
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A Binary Search Tree. This can be used for inserting, finding, and removing keys and values.
/// It does no balancing so its height depends entirely on insertion order.
#[derive(Clone)]
pub struct Tree<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    /// Vacant slots in `nodes`, reused before the arena grows.
    free: Vec<NodeId>,
    /// `None` is the empty tree.
    root: Option<NodeId>,
    len: usize,
    config: Config,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree` with the default [`Config`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Generate a new, empty `Tree` with the given options.
    pub fn with_config(config: Config) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            config,
        }
    }

    /// The options this tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The number of nodes in the tree. Duplicate keys each count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree is not empty. Removal never moves the root to another slot so
    /// this stays the same until the tree is emptied.
    pub fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Inserts the given value into the tree stored at the given key.
    ///
    /// What happens to an existing key depends on the tree's [`Duplicates`] policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 4, 6, 9, 2, 5, 7] {
    ///     tree.insert(key, key);
    /// }
    ///
    /// let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, [1, 2, 3, 4, 5, 6, 7, 9]);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        match self.root {
            Some(root) => self.insert_below(root, key, value),
            None => {
                let root = self.alloc(Node::new(key, value, None));
                self.root = Some(root);
            }
        }
    }

    fn insert_below(&mut self, id: NodeId, key: K, value: V)
    where
        K: Ord,
    {
        let side = match key.cmp(&self.node(id).key) {
            Ordering::Less => Side::Left,
            Ordering::Equal if self.config.duplicates == Duplicates::Replace => {
                self.node_mut(id).value = value;
                return;
            }
            Ordering::Equal | Ordering::Greater => Side::Right,
        };

        match self.node(id).child(side) {
            Some(child) => self.insert_below(child, key, value),
            None => {
                let leaf = self.alloc(Node::new(key, value, Some(id)));
                self.node_mut(id).set_child(side, Some(leaf));
            }
        }
    }

    /// Finds the value associated with the given key. If no node has the corresponding key,
    /// [`Error::KeyNotFound`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.locate(key)
            .map(|id| &self.node(id).value)
            .ok_or(Error::KeyNotFound)
    }

    /// Like [`find`][Tree::find] but the value can be changed in place.
    pub fn find_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: Ord,
    {
        let id = self.locate(key).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.node_mut(id).value)
    }

    /// Whether some node holds the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).is_some()
    }

    /// Returns the node that [`find`][Tree::find] would read the value from.
    pub fn locate(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        self.root.and_then(|root| self.locate_from(root, key))
    }

    fn locate_from(&self, id: NodeId, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let node = self.node(id);
        match key.cmp(&node.key) {
            Ordering::Less => node.left.and_then(|left| self.locate_from(left, key)),
            Ordering::Equal => Some(id),
            Ordering::Greater => node.right.and_then(|right| self.locate_from(right, key)),
        }
    }

    /// Removes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, [`Error::KeyNotFound`] is returned and the tree is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let target = self.locate(key).ok_or(Error::KeyNotFound)?;
        let (_, value) = self.remove_node(target);

        if cfg!(debug_assertions) {
            assert_eq!(self.root.is_none(), self.len == 0);
            if let Some(root) = self.root {
                assert!(self.node(root).parent.is_none());
            }
        }
        Ok(value)
    }

    /// Takes the node's key and value out of the tree and restores the ordering around the hole.
    fn remove_node(&mut self, id: NodeId) -> (K, V) {
        let node = self.node(id);
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                // The successor has no left child so removing it never gets back here.
                let successor = self.leftmost(right);
                debug!(
                    slot = id.0,
                    successor = successor.0,
                    "promoting successor into node with two children"
                );
                let (key, value) = self.remove_node(successor);

                let node = self.node_mut(id);
                (
                    mem::replace(&mut node.key, key),
                    mem::replace(&mut node.value, value),
                )
            }
            (Some(child), None) | (None, Some(child)) => {
                debug!(slot = id.0, child = child.0, "splicing out node with one child");
                self.replace_with(id, Some(child))
            }
            (None, None) => {
                debug!(slot = id.0, "removing leaf");
                self.replace_with(id, None)
            }
        }
    }

    /// Puts `replacement` (which must be a child of `id`, or nothing) where `id` used to be.
    fn replace_with(&mut self, id: NodeId, replacement: Option<NodeId>) -> (K, V) {
        match self.position(id) {
            Position::Child { parent, side } => {
                self.node_mut(parent).set_child(side, replacement);
                if let Some(child) = replacement {
                    self.node_mut(child).parent = Some(parent);
                }
                let removed = self.release(id);
                (removed.key, removed.value)
            }
            // There's no parent slot to rewrite so the root slot takes over the child's contents.
            Position::Root => match replacement {
                Some(child) => {
                    let promoted = self.release(child);
                    for grandchild in [promoted.left, promoted.right].into_iter().flatten() {
                        self.node_mut(grandchild).parent = Some(id);
                    }

                    let root = self.node_mut(id);
                    root.left = promoted.left;
                    root.right = promoted.right;
                    (
                        mem::replace(&mut root.key, promoted.key),
                        mem::replace(&mut root.value, promoted.value),
                    )
                }
                None => {
                    let removed = self.release(id);
                    self.root = None;
                    self.nodes.clear();
                    self.free.clear();
                    trace!("tree is empty");
                    (removed.key, removed.value)
                }
            },
        }
    }

    fn position(&self, id: NodeId) -> Position {
        match self.node(id).parent {
            None => Position::Root,
            Some(parent) => {
                let side = if self.node(parent).left == Some(id) {
                    Side::Left
                } else {
                    Side::Right
                };
                Position::Child { parent, side }
            }
        }
    }

    fn leftmost(&self, id: NodeId) -> NodeId {
        match self.node(id).left {
            Some(left) => self.leftmost(left),
            None => id,
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(id) => {
                trace!(slot = id.0, "reusing vacant slot");
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                trace!(slot = id.0, "growing arena");
                self.nodes.push(Some(node));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("{id:?} released twice"));
        self.len -= 1;
        self.free.push(id);
        node
    }

    /// # Panics
    ///
    /// When `id` does not refer to a live node of this tree.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("{id:?} does not refer to a live node"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("{id:?} does not refer to a live node"),
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.map(|id| Subtree { tree: self, id }))
            .finish()
    }
}

/// Borrowed view of a node for `Debug` output, so the nested structure prints the way a boxed
/// tree would.
struct Subtree<'a, K, V> {
    tree: &'a Tree<K, V>,
    id: NodeId,
}

impl<K, V> fmt::Debug for Subtree<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.id);
        let child = |id: Option<NodeId>| {
            id.map(|id| Subtree {
                tree: self.tree,
                id,
            })
        };
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("value", &node.value)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

#[cfg(test)]
impl<K, V> Tree<K, V> {
    /// Every child points back at its parent, the root has no parent, and every live slot is
    /// reachable from the root.
    pub(crate) fn links_are_consistent(&self) -> bool {
        match self.root {
            None => self.len == 0 && self.nodes.iter().all(Option::is_none),
            Some(root) => {
                self.node(root).parent.is_none() && self.count_linked(root) == Some(self.len)
            }
        }
    }

    fn count_linked(&self, id: NodeId) -> Option<usize> {
        let node = self.node(id);
        let mut count = 1;
        for child in [node.left, node.right].into_iter().flatten() {
            if self.node(child).parent != Some(id) {
                return None;
            }
            count += self.count_linked(child)?;
        }
        Some(count)
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    fn do_ops<K, V>(ops: &[Op<K, V>], tree: &mut Tree<K, V>)
    where
        K: Ord + Clone,
        V: Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k, v) => tree.insert(k.clone(), v.clone()),
                Op::Remove(k) => {
                    let _ = tree.remove(k);
                }
                Op::Find(k) => {
                    let _ = tree.find(k);
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn links_stay_consistent(ops: Vec<Op<i8, i8>>) -> bool {
            let mut tree = Tree::new();

            do_ops(&ops, &mut tree);
            tree.links_are_consistent() && tree.is_bst()
        }
    }

    quickcheck::quickcheck! {
        fn links_stay_consistent_when_replacing(ops: Vec<Op<i8, i8>>) -> bool {
            let mut tree = Tree::with_config(Config::default().duplicates(Duplicates::Replace));

            do_ops(&ops, &mut tree);
            tree.links_are_consistent() && tree.is_bst()
        }
    }
}
