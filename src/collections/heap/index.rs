//! Implicit binary tree layout over a flat slice.
//!
//! Node `n` has children `2n + 1` and `2n + 2`; every non-root node `n` has
//! parent `(n + 1) / 2 - 1`.

/// Parent of a non-root node.
#[inline]
pub(crate) const fn parent(node: usize) -> usize {
    debug_assert!(node > 0);
    (node + 1) / 2 - 1
}

/// Left child of `node`. May be out of bounds.
#[inline]
pub(crate) const fn left(node: usize) -> usize {
    2 * node + 1
}

/// Right child of `node`. May be out of bounds.
#[inline]
pub(crate) const fn right(node: usize) -> usize {
    2 * node + 2
}

/// Children of `node` that exist in a tree of `len` nodes.
#[inline]
pub(crate) fn children(node: usize, len: usize) -> impl Iterator<Item = usize> {
    [left(node), right(node)].into_iter().filter(move |&c| c < len)
}
