//! Human-readable rendering of a heap.
//!
//! Prints a short summary followed by the tree one level per line, so the
//! heap-order property can be checked by eye:
//!
//! ```text
//! Summary:
//!   Mode: min-heap
//!   Size: 6
//!
//! Levels:
//!     0: 1
//!     1: 3 2
//!     2: 5 9 8
//! ```

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::index::{ROOT, depth, last_parent};
use crate::structure::heap::BinaryHeap;

impl<T: Display> Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Mode: {}", self.mode())?;
        writeln!(f, "  Size: {}", self.size())?;
        writeln!(f)?;

        writeln!(f, "Levels:")?;

        let values = self.contents();
        if values.is_empty() {
            writeln!(f, "  (empty)")?;
            return Ok(());
        }

        // Level d spans positions 2^d ..= 2^(d+1) - 1.
        let mut first = ROOT;
        while first <= values.len() {
            let last = (first * 2 - 1).min(values.len());
            write!(f, "  {:>3}:", depth(first))?;
            for value in &values[first - ROOT..last] {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;

            if first > last_parent(values.len()) {
                break;
            }
            first *= 2;
        }

        Ok(())
    }
}
