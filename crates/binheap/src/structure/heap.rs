//! The binary heap container.
//!
//! ## Purpose
//!
//! This module provides [`BinaryHeap`], a min- or max-ordered heap stored as
//! an implicit binary tree in 1-indexed slots. It exposes construction from
//! arbitrary values, insertion, removal at any occupied position, peeking at
//! the root, and an in-place heapsort.
//!
//! ## Design notes
//!
//! * **Strategy**: The mode is resolved once into a [`Precedes`] function; the
//!   engine never inspects the mode itself.
//! * **Validation first**: Positional operations validate their argument before
//!   touching storage, so an error never leaves a half-applied mutation.
//! * **Derived size**: The size is always the number of occupied slots.
//!
//! ## Invariants
//!
//! * After every public operation except [`BinaryHeap::sort`], no value
//!   precedes its parent under the heap's strategy.
//! * The mode never changes after construction.
//!
//! ## Non-goals
//!
//! * No decrease-key or increase-key.
//! * No user-supplied ordering; values are compared by their own `PartialOrd`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Formatter, Result as FmtResult};
use core::slice::Iter;
use log::{debug, trace};

// Internal dependencies
use crate::engine::sift::{extract_all, heapify, restore};
use crate::engine::validator::Validator;
use crate::primitives::errors::HeapError;
use crate::primitives::index::ROOT;
use crate::primitives::mode::{HeapMode, Precedes};
use crate::primitives::slots::Slots;

// ============================================================================
// Binary Heap
// ============================================================================

/// A binary heap whose ordering direction is fixed at construction.
pub struct BinaryHeap<T> {
    /// Ordering direction.
    mode: HeapMode,

    /// Comparison strategy resolved from `mode`.
    precedes: Precedes<T>,

    /// Implicit tree, root at position 1.
    slots: Slots<T>,
}

impl<T: PartialOrd> BinaryHeap<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a heap, heapifying `values` when any are given.
    pub fn new(mode: HeapMode, values: Vec<T>) -> Self {
        let mut heap = Self::from_slots(mode, Slots::new());
        if !values.is_empty() {
            heap.build(values);
        }
        debug!("Instantiated a {} with {} values.", mode, heap.size());
        heap
    }

    /// Create an empty heap with room for `capacity` values.
    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        let heap = Self::from_slots(mode, Slots::with_capacity(capacity));
        debug!("Instantiated a {} with capacity {}.", mode, capacity);
        heap
    }

    fn from_slots(mode: HeapMode, slots: Slots<T>) -> Self {
        Self {
            mode,
            precedes: mode.comparator(),
            slots,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the contents with `values` and establish heap order bottom-up.
    ///
    /// Runs in O(n).
    pub fn build(&mut self, values: Vec<T>) {
        self.slots = Slots::from(values);
        let len = self.slots.len();
        heapify(&mut self.slots, len, self.precedes);
        debug!("Built a {} of {} values.", self.mode, self.size());
    }

    /// Insert a value, restoring heap order in O(log n).
    pub fn insert(&mut self, value: T) {
        let pos = self.slots.push(value);
        if pos > ROOT {
            restore(&mut self.slots, pos, pos, self.precedes);
        }
        trace!("Inserted value. New size={}", self.size());
    }

    /// Remove and return the value stored at position `index` (1-based).
    ///
    /// The last value takes the vacated position and is then moved up or
    /// down as required. Fails with [`HeapError::InvalidIndex`] unless
    /// `1 <= index <= size`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        Validator::validate_position(index, self.size())?;

        let removed = self.slots.take_and_fill(index);

        // Removing the last position leaves nothing to re-settle.
        let len = self.slots.len();
        if index <= len && len > ROOT {
            restore(&mut self.slots, index, len, self.precedes);
        }

        trace!("Removed position {}. New size={}", index, len);
        Ok(removed)
    }

    /// Remove and return the root value.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        Validator::validate_non_empty(self.size())?;
        self.remove(ROOT)
    }

    /// Sort the stored values in ascending order, in place.
    ///
    /// The result is ascending for both modes. Sorting consumes the heap
    /// order: afterwards the contents are a sorted sequence, not
    /// necessarily a valid heap of this mode. Call [`BinaryHeap::rebuild`]
    /// before using heap operations again.
    pub fn sort(&mut self) {
        let len = self.size();

        // Heap order may already be gone after an earlier sort.
        heapify(&mut self.slots, len, self.precedes);
        extract_all(&mut self.slots, len, self.precedes);

        // Extraction leaves a min strategy's values descending.
        if self.mode == HeapMode::Min {
            self.slots.as_mut_slice().reverse();
        }

        debug!("Sorted {} values in ascending order.", len);
    }

    /// Re-establish heap order over the current contents.
    pub fn rebuild(&mut self) {
        let len = self.slots.len();
        heapify(&mut self.slots, len, self.precedes);
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Consume the heap and return its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort();
        self.slots.into_vec()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The root value: the minimum of a min-heap or the maximum of a max-heap.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.slots.get(ROOT).ok_or(HeapError::EmptyHeap)
    }

    /// Whether the contents satisfy the heap-order property.
    pub fn is_heap(&self) -> bool {
        Validator::validate_heap_order(&self.slots, self.slots.len(), self.precedes)
    }
}

impl<T> BinaryHeap<T> {
    /// Number of stored values.
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The ordering direction chosen at construction.
    #[inline]
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Number of values the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stored values in position order: position 1 first.
    ///
    /// The sentinel position holds no value and is not part of the slice,
    /// so position `i` is found at `contents()[i - 1]`.
    #[inline]
    pub fn contents(&self) -> &[T] {
        self.slots.as_slice()
    }

    /// Iterate over the stored values in position order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.slots.as_slice().iter()
    }

    /// Consume the heap and return its values in position order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: PartialOrd> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new(HeapMode::default(), Vec::new())
    }
}

impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            precedes: self.precedes,
            slots: self.slots.clone(),
        }
    }
}

impl<T: Debug> Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BinaryHeap")
            .field("mode", &self.mode)
            .field("contents", &self.slots.as_slice())
            .finish()
    }
}

impl<T: PartialOrd> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
