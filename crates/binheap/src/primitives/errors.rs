//! Error types for heap operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a heap operation can report:
//! out-of-range positions, reads from an empty heap, values that cannot be
//! ordered, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the values needed for diagnosis (e.g., the rejected position and the heap size).
//! * **Recoverable**: Every variant describes a local condition; the heap is left untouched when one is returned.
//! * **No-std**: The type has no allocation and is usable without the standard library.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * An operation that returns an error has not mutated the heap.
//! * Positions in errors use the same 1-based convention as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A position outside `1..=size` was passed to a positional operation.
    InvalidIndex {
        /// The position provided by the caller.
        index: usize,
        /// Number of occupied positions at the time of the call.
        size: usize,
    },

    /// The heap holds no values.
    EmptyHeap,

    /// A value cannot be ordered against itself (e.g., floating-point NaN).
    IncomparableValue {
        /// Zero-based offset of the value in the input sequence.
        index: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for HeapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidIndex { index, size } => {
                if *size == 0 {
                    write!(f, "Invalid node index provided: {index} (heap is empty)")
                } else {
                    write!(
                        f,
                        "Invalid node index provided: {index} (must be between 1 and {size})"
                    )
                }
            }
            Self::EmptyHeap => write!(f, "Heap is empty"),
            Self::IncomparableValue { index } => {
                write!(f, "Value at input offset {index} cannot be ordered")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for HeapError {}
