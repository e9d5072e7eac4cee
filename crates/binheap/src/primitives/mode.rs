//! Heap modes and the comparison strategy they resolve to.
//!
//! ## Purpose
//!
//! This module defines [`HeapMode`] and turns it into a single comparison
//! function, [`Precedes`], that every restoration step calls. The mode is
//! consulted once, when a heap is created; sift operations never branch on
//! it again.
//!
//! ## Key concepts
//!
//! * **Precedes**: `precedes(a, b)` is true when `a` must sit strictly above `b`.
//!   For `Min` this is `a < b`, for `Max` it is `a > b`.
//! * **Equal values** never precede each other, so ties never trigger a swap.
//!
//! ## Invariants
//!
//! * `precedes(a, a)` is false for every comparable `a`.
//! * For a fixed mode the strategy never changes over the life of a heap.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Comparison strategy: `true` when the first value must sit above the second.
pub type Precedes<T> = fn(&T, &T) -> bool;

// ============================================================================
// Heap Mode
// ============================================================================

/// Ordering direction of a heap, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapMode {
    /// Smallest value at the root.
    #[default]
    Min,

    /// Largest value at the root.
    Max,
}

impl HeapMode {
    /// Resolve the mode into its comparison strategy.
    #[inline]
    pub fn comparator<T: PartialOrd>(self) -> Precedes<T> {
        match self {
            Self::Min => less::<T>,
            Self::Max => greater::<T>,
        }
    }

    /// Human-readable name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl Display for HeapMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-heap", self.name())
    }
}

#[inline]
fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

#[inline]
fn greater<T: PartialOrd>(a: &T, b: &T) -> bool {
    a > b
}
