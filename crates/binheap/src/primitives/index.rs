//! Position arithmetic for the implicit binary tree.
//!
//! Positions are 1-based: position 0 is the reserved sentinel and never
//! holds a value. With that convention the parent of `i` is `i / 2` and its
//! children are `2i` and `2i + 1`, with no offset corrections.

/// Reserved, never-occupied position.
pub const SENTINEL: usize = 0;

/// Position of the root.
pub const ROOT: usize = 1;

// Parent of a non-root position.
#[inline]
pub fn parent(pos: usize) -> usize {
    debug_assert!(pos > ROOT, "parent: the root has no parent");
    pos / 2
}

// Left child position. May lie beyond the occupied range.
#[inline]
pub fn left(pos: usize) -> usize {
    pos * 2
}

// Right child position. May lie beyond the occupied range.
#[inline]
pub fn right(pos: usize) -> usize {
    pos * 2 + 1
}

// Last position with at least one child in a tree of `len` positions.
#[inline]
pub fn last_parent(len: usize) -> usize {
    len / 2
}

// Depth of a position, the root being at depth 0.
#[inline]
pub fn depth(pos: usize) -> usize {
    debug_assert!(pos >= ROOT, "depth: the sentinel has no depth");
    (usize::BITS - 1 - pos.leading_zeros()) as usize
}

// Whether `pos` addresses an occupied slot in a tree of `len` positions.
#[inline]
pub fn is_occupied(pos: usize, len: usize) -> bool {
    pos >= ROOT && pos <= len
}
