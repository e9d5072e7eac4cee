#![cfg(feature = "dev")]
//! Tests for position-addressed slot storage.
//!
//! These tests verify that `Slots` behaves as a 1-indexed array:
//! - Positions returned on push
//! - Sentinel and out-of-range reads
//! - Fill-from-last removal and swaps
//!
//! ## Test Organization
//!
//! 1. **Addressing** - Push, get, index
//! 2. **Mutation** - Swap, take_and_fill, clear
//! 3. **Conversion** - From and into vectors

use binheap::internals::primitives::slots::Slots;

// ============================================================================
// Addressing Tests
// ============================================================================

/// Test that push returns the newly occupied position.
#[test]
fn test_push_returns_position() {
    let mut slots = Slots::new();

    assert_eq!(slots.push(10), 1);
    assert_eq!(slots.push(20), 2);
    assert_eq!(slots.push(30), 3);
    assert_eq!(slots.len(), 3);
}

/// Test reads at the sentinel and beyond the last position.
#[test]
fn test_get_bounds() {
    let slots = Slots::from(vec![10, 20]);

    assert_eq!(slots.get(0), None, "Sentinel holds no value");
    assert_eq!(slots.get(1), Some(&10));
    assert_eq!(slots.get(2), Some(&20));
    assert_eq!(slots.get(3), None);
}

/// Test 1-based indexing.
#[test]
fn test_index_is_one_based() {
    let mut slots = Slots::from(vec!['a', 'b', 'c']);

    assert_eq!(slots[1], 'a');
    assert_eq!(slots[3], 'c');

    slots[2] = 'z';
    assert_eq!(slots.as_slice(), &['a', 'z', 'c']);
}

// ============================================================================
// Mutation Tests
// ============================================================================

/// Test swapping two positions.
#[test]
fn test_swap() {
    let mut slots = Slots::from(vec![1, 2, 3]);
    slots.swap(1, 3);

    assert_eq!(slots.as_slice(), &[3, 2, 1]);
}

/// Test removal that fills the hole with the last value.
#[test]
fn test_take_and_fill() {
    let mut slots = Slots::from(vec![1, 2, 3, 4]);

    assert_eq!(slots.take_and_fill(2), 2);
    assert_eq!(slots.as_slice(), &[1, 4, 3]);

    // Taking the last position just detaches it
    assert_eq!(slots.take_and_fill(3), 3);
    assert_eq!(slots.as_slice(), &[1, 4]);
}

/// Test clear.
#[test]
fn test_clear() {
    let mut slots = Slots::from(vec![1, 2]);

    slots.clear();
    assert!(slots.is_empty());
    assert_eq!(slots.get(1), None);
}

/// Test that capacity is reserved up front.
#[test]
fn test_with_capacity() {
    let slots: Slots<u8> = Slots::with_capacity(16);

    assert!(slots.is_empty());
    assert!(slots.capacity() >= 16);
}

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test that values keep their order through conversion.
#[test]
fn test_vec_roundtrip() {
    let mut slots = Slots::from(vec![5, 6]);
    slots.extend([7, 8]);

    assert_eq!(slots.as_slice(), &[5, 6, 7, 8]);
    assert_eq!(slots.into_vec(), vec![5, 6, 7, 8]);
}
