//! Thread-safe handle around a heap.
//!
//! ## Purpose
//!
//! This module provides [`SharedHeap`], a cloneable handle that lets several
//! threads use one heap. Every operation, reads included, runs under a
//! single exclusive lock per heap; the heap's array is small and tightly
//! coupled, so no finer-grained locking is attempted.
//!
//! ## Invariants
//!
//! * At most one operation runs against the heap at any time.
//! * A lock poisoned by a panicking caller is recovered by rebuilding heap
//!   order before the next operation proceeds. Recovery always rebuilds, so
//!   contents left sorted by [`SharedHeap::sort`] come back in heap order.

// External dependencies
use std::sync::{Arc, Mutex, MutexGuard};
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::HeapError;
use crate::primitives::mode::HeapMode;
use crate::structure::heap::BinaryHeap;

// ============================================================================
// Shared Heap
// ============================================================================

/// Cloneable, lock-protected handle to a [`BinaryHeap`].
///
/// If a caller panics while holding the lock, the next operation rebuilds
/// heap order before running. A sorted sequence left by [`SharedHeap::sort`]
/// does not survive that recovery; it is reordered into a valid heap.
pub struct SharedHeap<T> {
    /// Copy of the heap's mode, readable without locking.
    mode: HeapMode,

    inner: Arc<Mutex<BinaryHeap<T>>>,
}

impl<T: PartialOrd> SharedHeap<T> {
    /// Create a shared heap, heapifying `values` when any are given.
    pub fn new(mode: HeapMode, values: Vec<T>) -> Self {
        Self::from_heap(BinaryHeap::new(mode, values))
    }

    /// Wrap an existing heap.
    pub fn from_heap(heap: BinaryHeap<T>) -> Self {
        Self {
            mode: heap.mode(),
            inner: Arc::new(Mutex::new(heap)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BinaryHeap<T>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                guard.rebuild();
                self.inner.clear_poison();
                guard
            }
        }
    }

    /// Insert a value.
    pub fn insert(&self, value: T) {
        self.lock().insert(value);
    }

    /// Remove and return the value at position `index` (1-based).
    pub fn remove(&self, index: usize) -> Result<T, HeapError> {
        self.lock().remove(index)
    }

    /// Remove and return the root value.
    pub fn pop(&self) -> Result<T, HeapError> {
        self.lock().pop()
    }

    /// Sort the stored values in ascending order, in place.
    ///
    /// See [`BinaryHeap::sort`]: heap order must be rebuilt afterwards.
    pub fn sort(&self) {
        self.lock().sort();
    }

    /// Re-establish heap order over the current contents.
    pub fn rebuild(&self) {
        self.lock().rebuild();
    }

    /// Number of stored values.
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    /// Whether the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The ordering direction chosen at construction.
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Run `f` with exclusive access to the heap.
    pub fn with_heap<R>(&self, f: impl FnOnce(&mut BinaryHeap<T>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }
}

impl<T: PartialOrd + Clone> SharedHeap<T> {
    /// A copy of the root value.
    pub fn peek(&self) -> Result<T, HeapError> {
        self.lock().peek().cloned()
    }

    /// A copy of the stored values in position order.
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().contents().to_vec()
    }
}

impl<T> Clone for SharedHeap<T> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode,
            inner: Arc::clone(&self.inner),
        }
    }
}
