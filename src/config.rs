//! Construction-time options for a [`Tree`][crate::Tree].

/// What `insert` does with a key that is already in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// Equal keys descend right and get their own node. Lookups and removals
    /// reach the earliest inserted node first.
    #[default]
    KeepBoth,
    /// An equal key overwrites the stored value in place.
    Replace,
}

/// Options for building a [`Tree`][crate::Tree].
///
/// # Examples
///
/// ```
/// use arena_bst::{Config, Duplicates, Tree};
///
/// let mut tree = Tree::with_config(Config::default().duplicates(Duplicates::Replace));
/// tree.insert(1, "a");
/// tree.insert(1, "b");
///
/// assert_eq!(tree.find(&1), Ok(&"b"));
/// assert_eq!(tree.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Policy for inserting a key that already exists.
    pub duplicates: Duplicates,
}

impl Config {
    /// Sets the duplicate-key policy.
    pub fn duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_both() {
        assert_eq!(Config::default().duplicates, Duplicates::KeepBoth);
    }

    #[test]
    fn builder_sets_policy() {
        let config = Config::default().duplicates(Duplicates::Replace);
        assert_eq!(config.duplicates, Duplicates::Replace);
    }
}
