use crate::arena::NodeId;

/// Which child slot of a node is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Where a node sits in the tree. The root has no parent slot to rewrite when it is removed so
/// removal handles it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    /// The node has no parent.
    Root,
    /// The node hangs off `parent` on the given side.
    Child { parent: NodeId, side: Side },
}
