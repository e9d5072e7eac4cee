//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer restores and checks heap order. It operates on the
//! position-addressed storage from the primitives layer and knows nothing
//! about the heap type that owns it.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Structure
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sift-up, sift-down, and whole-tree passes.
pub mod sift;

/// Argument and heap-order validation.
pub mod validator;
