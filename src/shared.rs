//! A [`Tree`] behind a single lock so it can be shared between threads.
//!
//! The tree has no natural way to split into independently lockable parts, so every operation
//! takes the one lock for its whole duration.
//!
//! # Examples
//!
//! ```
//! use arena_bst::SharedTree;
//!
//! let tree = SharedTree::new();
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| tree.insert(1, "one"));
//!     s.spawn(|| tree.insert(2, "two"));
//! });
//!
//! assert_eq!(tree.find(&1), Ok("one"));
//! assert_eq!(tree.len(), 2);
//! ```

use parking_lot::Mutex;

use crate::arena::Tree;
use crate::config::Config;
use crate::error::Result;

/// A tree guarded by one exclusive lock.
pub struct SharedTree<K, V> {
    inner: Mutex<Tree<K, V>>,
}

impl<K, V> Default for SharedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<Tree<K, V>> for SharedTree<K, V> {
    fn from(tree: Tree<K, V>) -> Self {
        Self {
            inner: Mutex::new(tree),
        }
    }
}

impl<K, V> SharedTree<K, V> {
    /// Generate a new, empty `SharedTree`.
    pub fn new() -> Self {
        Tree::new().into()
    }

    /// Generate a new, empty `SharedTree` with the given options.
    pub fn with_config(config: Config) -> Self {
        Tree::with_config(config).into()
    }

    /// See [`Tree::insert`].
    pub fn insert(&self, key: K, value: V)
    where
        K: Ord,
    {
        self.inner.lock().insert(key, value);
    }

    /// See [`Tree::find`]. The value is cloned because it can't outlive the lock.
    pub fn find(&self, key: &K) -> Result<V>
    where
        K: Ord,
        V: Clone,
    {
        self.inner.lock().find(key).cloned()
    }

    /// See [`Tree::remove`].
    pub fn remove(&self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        self.inner.lock().remove(key)
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`Tree::is_bst`].
    pub fn is_bst(&self) -> bool
    where
        K: Ord,
    {
        self.inner.lock().is_bst()
    }

    /// Runs `f` with the lock held, for anything that needs several steps to happen atomically.
    pub fn with<R>(&self, f: impl FnOnce(&mut Tree<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Gives back the tree.
    pub fn into_inner(self) -> Tree<K, V> {
        self.inner.into_inner()
    }
}
