//! Heap-order restoration over position-addressed storage.
//!
//! ## Purpose
//!
//! This module implements the sift-up and sift-down procedures and the
//! restoration step that chooses between them after a single disturbance.
//! Bottom-up construction and in-place extraction (the heapsort pass) are
//! built from the same procedures.
//!
//! ## Design notes
//!
//! * **Strategy**: Every comparison goes through one [`Precedes`] function
//!   chosen when the heap was created.
//! * **Logical length**: Procedures take the logical length explicitly, so the
//!   heapsort pass can shrink the governed range while the storage keeps its
//!   full length.
//!
//! ## Key concepts
//!
//! * **Parent relation**: A position violates it when its value precedes the
//!   parent's value. The root never does.
//! * **Child relation**: A position violates it when its extremal child (the
//!   child that precedes the other, or the only child) precedes it. A child
//!   beyond the logical length is never a violation.
//!
//! ## Invariants
//!
//! * A restoration moves a value in one direction only.
//! * Positions outside `1..=len` are never read or written.

// Internal dependencies
use crate::primitives::index::{ROOT, last_parent, left, parent, right};
use crate::primitives::mode::Precedes;
use crate::primitives::slots::Slots;

// ============================================================================
// Restoration Outcome
// ============================================================================

/// Direction a restoration moved the disturbed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The value moved toward the root.
    Up,

    /// The value moved toward the leaves.
    Down,

    /// The value was already in order.
    InPlace,
}

// ============================================================================
// Relation Checks
// ============================================================================

/// Whether the value at `pos` must move above its parent.
#[inline]
pub fn violates_parent<T>(slots: &Slots<T>, pos: usize, precedes: Precedes<T>) -> bool {
    pos > ROOT && precedes(&slots[pos], &slots[parent(pos)])
}

/// The child that would replace `pos` if `pos` moved down, if any child exists.
///
/// With two children this is the one that precedes the other; on a tie the
/// left child is chosen.
#[inline]
pub fn extremal_child<T>(
    slots: &Slots<T>,
    pos: usize,
    len: usize,
    precedes: Precedes<T>,
) -> Option<usize> {
    let l = left(pos);
    if l > len {
        return None;
    }

    let r = right(pos);
    if r <= len && precedes(&slots[r], &slots[l]) {
        Some(r)
    } else {
        Some(l)
    }
}

/// The child `pos` must swap with to repair the child relation, if any.
#[inline]
pub fn violating_child<T>(
    slots: &Slots<T>,
    pos: usize,
    len: usize,
    precedes: Precedes<T>,
) -> Option<usize> {
    extremal_child(slots, pos, len, precedes).filter(|&c| precedes(&slots[c], &slots[pos]))
}

// ============================================================================
// Sift Procedures
// ============================================================================

/// Move the value at `pos` toward the root until its parent relation holds.
///
/// Returns the final position of the value.
pub fn sift_up<T>(slots: &mut Slots<T>, mut pos: usize, precedes: Precedes<T>) -> usize {
    while violates_parent(slots, pos, precedes) {
        let p = parent(pos);
        slots.swap(pos, p);
        pos = p;
    }
    pos
}

/// Move the value at `pos` toward the leaves until its child relation holds
/// within the first `len` positions.
///
/// Returns the final position of the value.
pub fn sift_down<T>(
    slots: &mut Slots<T>,
    mut pos: usize,
    len: usize,
    precedes: Precedes<T>,
) -> usize {
    while let Some(child) = violating_child(slots, pos, len, precedes) {
        slots.swap(pos, child);
        pos = child;
    }
    pos
}

/// Re-settle a single disturbed position, moving it up or down as required.
pub fn restore<T>(slots: &mut Slots<T>, pos: usize, len: usize, precedes: Precedes<T>) -> Settle {
    debug_assert!(pos >= ROOT && pos <= len, "restore: position out of range");

    if violates_parent(slots, pos, precedes) {
        sift_up(slots, pos, precedes);
        Settle::Up
    } else if violating_child(slots, pos, len, precedes).is_some() {
        sift_down(slots, pos, len, precedes);
        Settle::Down
    } else {
        Settle::InPlace
    }
}

// ============================================================================
// Whole-Tree Passes
// ============================================================================

/// Establish heap order over positions `1..=len` from arbitrary contents.
///
/// Sifts every parent down, from the last parent to the root, in O(n).
pub fn heapify<T>(slots: &mut Slots<T>, len: usize, precedes: Precedes<T>) {
    for pos in (ROOT..=last_parent(len)).rev() {
        sift_down(slots, pos, len, precedes);
    }
}

/// Repeatedly move the root to the end of a shrinking logical range.
///
/// Requires heap order over `1..=len`. Afterwards the storage holds the
/// values ordered so that no value precedes an earlier one: ascending for a
/// max strategy, descending for a min strategy.
pub fn extract_all<T>(slots: &mut Slots<T>, len: usize, precedes: Precedes<T>) {
    let mut end = len;
    while end > ROOT {
        slots.swap(ROOT, end);
        end -= 1;
        sift_down(slots, ROOT, end, precedes);
    }
}
