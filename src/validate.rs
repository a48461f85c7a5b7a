//! Checking the ordering invariant of a tree.

use std::ops::{Bound, RangeBounds};

use crate::arena::{NodeId, Tree};
use crate::config::Duplicates;

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    /// Whether the whole tree satisfies the BST ordering invariant. An empty tree does.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 4, 6, 9, 2, 5, 7] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert!(tree.is_bst());
    /// ```
    pub fn is_bst(&self) -> bool {
        self.root_id().map_or(true, |root| self.subtree_is_bst(root))
    }

    /// Whether the subtree rooted at `id` satisfies the ordering invariant on its own.
    ///
    /// Every key is checked against the open interval its ancestors allow, not just against its
    /// parent. Keys equal to an ancestor are accepted in that ancestor's right subtree only when
    /// the tree keeps duplicates.
    ///
    /// # Panics
    ///
    /// When `id` does not refer to a live node of this tree.
    pub fn subtree_is_bst(&self, id: NodeId) -> bool {
        self.is_bst_within(id, Bound::Unbounded, Bound::Unbounded)
    }

    fn is_bst_within(&self, id: NodeId, lower: Bound<&K>, upper: Bound<&K>) -> bool {
        let node = self.node(id);
        if !(lower, upper).contains(&node.key) {
            return false;
        }

        let right_lower = match self.config().duplicates {
            Duplicates::KeepBoth => Bound::Included(&node.key),
            Duplicates::Replace => Bound::Excluded(&node.key),
        };
        node.left.map_or(true, |left| {
            self.is_bst_within(left, lower, Bound::Excluded(&node.key))
        }) && node
            .right
            .map_or(true, |right| self.is_bst_within(right, right_lower, upper))
    }
}
