//! # binheap — a configurable binary heap for Rust
//!
//! A binary heap whose ordering direction (min-first or max-first) is fixed
//! when it is created. Values live in an implicit binary tree embedded in a
//! flat, 1-indexed array: position 0 is a reserved sentinel, so the parent of
//! position `i` is `i / 2` and its children are `2i` and `2i + 1`.
//!
//! The sentinel reserves position 0 in the address space only; no value is
//! stored for it. [`BinaryHeap::contents`](prelude::BinaryHeap::contents)
//! therefore starts at position 1, and the value at position `i` is
//! `contents()[i - 1]`:
//!
//! ```rust
//! use binheap::prelude::*;
//!
//! let heap = BinaryHeap::new(Min, vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.contents(), &[1, 3, 2, 5, 9, 8]);
//!
//! // Position 2 is the left child of the root
//! assert_eq!(heap.contents()[2 - 1], 3);
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use binheap::prelude::*;
//!
//! // Build a min-heap from unordered values
//! let mut heap = Heap::new()
//!     .mode(Min)
//!     .values(vec![5, 3, 8, 1, 9, 2])
//!     .build()?;
//!
//! assert_eq!(*heap.peek()?, 1);
//!
//! heap.insert(0);
//! assert_eq!(*heap.peek()?, 0);
//! assert_eq!(heap.size(), 7);
//!
//! // Positions are 1-based; the root is position 1
//! assert_eq!(heap.remove(1)?, 0);
//! # Result::<(), HeapError>::Ok(())
//! ```
//!
//! ## Heapsort
//!
//! [`BinaryHeap::sort`](prelude::BinaryHeap::sort) sorts in place and always
//! yields ascending order, whatever the mode. Sorting consumes the heap
//! order; call `rebuild` before using heap operations again.
//!
//! ```rust
//! use binheap::prelude::*;
//!
//! let mut heap = BinaryHeap::new(Max, vec![3, 1, 2]);
//! heap.sort();
//! assert_eq!(heap.contents(), &[1, 2, 3]);
//!
//! heap.rebuild();
//! assert_eq!(heap.peek(), Ok(&3));
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, HeapError>`:
//!
//! - **`HeapError::InvalidIndex`**: a position outside `1..=size` was given to `remove`.
//! - **`HeapError::EmptyHeap`**: `peek` or `pop` on an empty heap.
//! - **`HeapError::IncomparableValue`**: the builder was given a value that cannot be ordered (NaN).
//! - **`HeapError::DuplicateParameter`**: a builder parameter was set twice.
//!
//! ```rust
//! use binheap::prelude::*;
//!
//! let mut heap = BinaryHeap::new(Min, vec![2, 4, 6]);
//!
//! match heap.remove(99) {
//!     Ok(value) => println!("Removed {}", value),
//!     Err(e) => eprintln!("Removal failed: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate reports construction, builds, and sorts at `debug` level and
//! single insertions and removals at `trace` level through the [`log`]
//! facade. It never installs a logger itself.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency
//! (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! binheap = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, `HeapError` does not implement `std::error::Error` and
//! `SharedHeap` is unavailable.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, mode, position arithmetic, storage.
mod primitives;

// Layer 2: Engine - heap-order restoration and validation.
mod engine;

// Layer 3: Structure - the heap container.
mod structure;

// High-level fluent API for building heaps.
mod api;

// Standard heap prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::SharedHeap;
    pub use crate::api::{
        BinaryHeap, HeapBuilder as Heap, HeapError, HeapMode,
        HeapMode::{Max, Min},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod structure {
        pub use crate::structure::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
