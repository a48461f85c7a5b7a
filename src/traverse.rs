//! Walking a tree: in-order iteration, height and order statistics.

use std::iter::FusedIterator;

use crate::arena::{NodeId, Tree};

impl<K, V> Tree<K, V> {
    /// Iterates over the keys and values in ascending key order. Equal keys come out in the order
    /// they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, 'b');
    /// tree.insert(1, 'a');
    /// tree.insert(3, 'c');
    ///
    /// let pairs: Vec<_> = tree.iter().collect();
    /// assert_eq!(pairs, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.root_id().map_or(0, |root| self.height_from(root))
    }

    fn height_from(&self, id: NodeId) -> usize {
        let node = self.node(id);
        let left = node.left.map_or(0, |left| self.height_from(left));
        let right = node.right.map_or(0, |right| self.height_from(right));
        left.max(right) + 1
    }

    /// The `n`th largest entry, counting from zero. `nth_largest(0)` is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 4, 6, 9, 2, 5, 7] {
    ///     tree.insert(key, key * 10);
    /// }
    ///
    /// assert_eq!(tree.nth_largest(2), Some((&6, &60)));
    /// assert_eq!(tree.nth_largest(8), None);
    /// ```
    pub fn nth_largest(&self, n: usize) -> Option<(&K, &V)> {
        let mut remaining = n;
        self.root_id()
            .and_then(|root| self.nth_largest_from(root, &mut remaining))
    }

    /// Reverse in-order walk that counts `remaining` down to zero.
    fn nth_largest_from(&self, id: NodeId, remaining: &mut usize) -> Option<(&K, &V)> {
        let node = self.node(id);
        if let Some(found) = node
            .right
            .and_then(|right| self.nth_largest_from(right, remaining))
        {
            return Some(found);
        }
        if *remaining == 0 {
            return Some((&node.key, &node.value));
        }
        *remaining -= 1;
        node.left
            .and_then(|left| self.nth_largest_from(left, remaining))
    }
}

/// In-order iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K, V> {
    tree: &'a Tree<K, V>,
    /// Nodes whose left subtree has been pushed but who haven't been yielded yet.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(tree: &'a Tree<K, V>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root_id());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.tree.node(id).left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
