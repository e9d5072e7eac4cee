//! High-level API for building heaps.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing the heap mode, seed values, and capacity, and
//! re-exports the public types of the lower layers.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration and seed values are validated when `.build()` is called.
//! * **Type-Safe**: Generic over any `PartialOrd` value type.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HeapBuilder`] via `Heap::new()`.
//! 2. Chain configuration methods (`.mode()`, `.values()`, `.capacity()`).
//! 3. Call `.build()` (or `.build_shared()` with `std`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::HeapError;
pub use crate::primitives::mode::HeapMode;
pub use crate::structure::heap::BinaryHeap;
#[cfg(feature = "std")]
pub use crate::structure::shared::SharedHeap;

/// Fluent builder for configuring and creating a heap.
#[derive(Debug, Clone)]
pub struct HeapBuilder<T> {
    /// Ordering direction (default: Min).
    pub mode: Option<HeapMode>,

    /// Seed values, heapified on build.
    pub values: Option<Vec<T>>,

    /// Storage to reserve up front.
    pub capacity: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: PartialOrd> Default for HeapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> HeapBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            values: None,
            capacity: None,
            duplicate_param: None,
        }
    }

    /// Set the ordering direction.
    pub fn mode(mut self, mode: HeapMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the seed values.
    pub fn values(mut self, values: Vec<T>) -> Self {
        if self.values.is_some() {
            self.duplicate_param = Some("values");
        }
        self.values = Some(values);
        self
    }

    /// Reserve storage for at least `capacity` values.
    pub fn capacity(mut self, capacity: usize) -> Self {
        if self.capacity.is_some() {
            self.duplicate_param = Some("capacity");
        }
        self.capacity = Some(capacity);
        self
    }

    /// Validate the configuration and create the heap.
    pub fn build(self) -> Result<BinaryHeap<T>, HeapError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mode = self.mode.unwrap_or_default();
        let capacity = self.capacity.unwrap_or(0);

        let Some(mut values) = self.values else {
            return Ok(BinaryHeap::with_capacity(mode, capacity));
        };

        // Validate seed values
        Validator::validate_comparable(&values)?;

        if values.is_empty() {
            return Ok(BinaryHeap::with_capacity(mode, capacity));
        }

        values.reserve(capacity.saturating_sub(values.len()));
        Ok(BinaryHeap::new(mode, values))
    }

    /// Validate the configuration and create a lock-protected shared heap.
    #[cfg(feature = "std")]
    pub fn build_shared(self) -> Result<SharedHeap<T>, HeapError> {
        self.build().map(SharedHeap::from_heap)
    }
}
