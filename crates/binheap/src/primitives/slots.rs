//! One-indexed slot storage backing the heap.
//!
//! ## Purpose
//!
//! This module provides [`Slots`], the contiguous storage of the implicit
//! tree. It is addressed by tree position: position 0 is the reserved
//! sentinel and the first value lives at position 1, so the position
//! arithmetic in [`crate::primitives::index`] needs no offset corrections.
//!
//! ## Design notes
//!
//! * **Sentinel without a value**: The sentinel slot is reserved in the address
//!   space rather than in memory, so `T` needs no placeholder value. The
//!   single position-to-offset translation lives in the `Index` impls.
//! * **Centralized Ownership**: Slots own their values; the heap never hands out
//!   mutable references into them.
//!
//! ## Invariants
//!
//! * Occupied positions are exactly `1..=len()`.
//! * Indexing the sentinel is a logic error and is caught in debug builds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};

// Internal dependencies
use crate::primitives::index::{ROOT, SENTINEL};

// ============================================================================
// Slots
// ============================================================================

/// Position-addressed storage for an implicit binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<T>(Vec<T>);

impl<T> Slots<T> {
    /// Create empty storage (sentinel only).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create empty storage with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of occupied positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no position is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of values the storage can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Value at `pos`, or `None` for the sentinel and unoccupied positions.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos == SENTINEL {
            return None;
        }
        self.0.get(pos - ROOT)
    }

    /// Occupy the next position and return it.
    #[inline]
    pub fn push(&mut self, value: T) -> usize {
        self.0.push(value);
        self.0.len()
    }

    /// Take the value at `pos` and fill the hole with the last value.
    ///
    /// `pos` must be occupied.
    #[inline]
    pub fn take_and_fill(&mut self, pos: usize) -> T {
        debug_assert!(pos != SENTINEL, "take_and_fill: sentinel position");
        self.0.swap_remove(pos - ROOT)
    }

    /// Exchange the values at two occupied positions.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        debug_assert!(a != SENTINEL && b != SENTINEL, "swap: sentinel position");
        self.0.swap(a - ROOT, b - ROOT);
    }

    /// Drop every value (capacity is preserved).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Occupied values in position order (position 1 first).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutable view of the occupied values in position order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Consume the storage, yielding values in position order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Slots<T> {
    /// Place `values` verbatim at positions `1..=values.len()`.
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> Extend<T> for Slots<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T> Index<usize> for Slots<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: usize) -> &T {
        debug_assert!(pos != SENTINEL, "index: sentinel position");
        &self.0[pos - ROOT]
    }
}

impl<T> IndexMut<usize> for Slots<T> {
    #[inline]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos != SENTINEL, "index_mut: sentinel position");
        &mut self.0[pos - ROOT]
    }
}
