//! Validation for heap arguments, builder configuration, and heap order.
//!
//! ## Purpose
//!
//! This module provides the checks run before a heap operation mutates
//! anything: positional arguments, reads from an empty heap, comparability
//! of seed values, and duplicate builder parameters. It also provides the
//! heap-order check used by `is_heap` and by the test suite.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reorder or repair values.

// Internal dependencies
use crate::primitives::errors::HeapError;
use crate::primitives::index::{ROOT, is_occupied, parent};
use crate::primitives::mode::Precedes;
use crate::primitives::slots::Slots;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for heap arguments and state.
///
/// All argument checks return `Result<(), HeapError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Argument Validation
    // ========================================================================

    /// Validate that `pos` addresses an occupied position of a heap of `size` values.
    pub fn validate_position(pos: usize, size: usize) -> Result<(), HeapError> {
        if !is_occupied(pos, size) {
            return Err(HeapError::InvalidIndex { index: pos, size });
        }
        Ok(())
    }

    /// Validate that a heap of `size` values has a root to read.
    pub fn validate_non_empty(size: usize) -> Result<(), HeapError> {
        if size == 0 {
            return Err(HeapError::EmptyHeap);
        }
        Ok(())
    }

    /// Validate that every value can be ordered against itself.
    ///
    /// # Notes
    ///
    /// * A value that is not comparable with itself (floating-point NaN)
    ///   would compare false in both directions and silently break heap order.
    pub fn validate_comparable<T: PartialOrd>(values: &[T]) -> Result<(), HeapError> {
        match values.iter().position(|v| v.partial_cmp(v).is_none()) {
            Some(index) => Err(HeapError::IncomparableValue { index }),
            None => Ok(()),
        }
    }

    /// Check for duplicate parameter configuration.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), HeapError> {
        if let Some(parameter) = duplicate_param {
            return Err(HeapError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // State Validation
    // ========================================================================

    /// Whether positions `1..=len` satisfy the heap-order property.
    pub fn validate_heap_order<T>(slots: &Slots<T>, len: usize, precedes: Precedes<T>) -> bool {
        (ROOT + 1..=len).all(|pos| !precedes(&slots[pos], &slots[parent(pos)]))
    }
}
