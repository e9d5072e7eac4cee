//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! errors, the heap mode and its comparison strategy, tree position
//! arithmetic, and the position-addressed storage. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Structure
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Heap mode and comparison strategy.
pub mod mode;

/// Tree position arithmetic.
pub mod index;

/// Position-addressed storage.
pub mod slots;
