//! Layer 3: Structure
//!
//! # Purpose
//!
//! This layer provides the heap container and its companions: the
//! human-readable rendering and, with the standard library, a thread-safe
//! handle.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Structure ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// The heap container.
pub mod heap;

/// `Display` rendering.
pub mod display;

/// Lock-protected shared handle.
#[cfg(feature = "std")]
pub mod shared;
