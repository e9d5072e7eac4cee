#![cfg(feature = "dev")]
//! Tests for heap-order restoration.
//!
//! These tests verify the sift procedures used by every heap mutation:
//! - Child selection with one child, two children, and ties
//! - Single-direction restoration after a disturbance
//! - Bottom-up construction and the heapsort extraction pass
//!
//! ## Test Organization
//!
//! 1. **Relation Checks** - Parent and child violations
//! 2. **Sift Procedures** - Sift up, sift down, restore
//! 3. **Whole-Tree Passes** - Heapify and extraction

use binheap::internals::engine::sift::{
    Settle, extract_all, extremal_child, heapify, restore, sift_down, sift_up,
    violates_parent, violating_child,
};
use binheap::internals::engine::validator::Validator;
use binheap::internals::primitives::mode::{HeapMode, Precedes};
use binheap::internals::primitives::slots::Slots;

// ============================================================================
// Helper Functions
// ============================================================================

fn min() -> Precedes<i32> {
    HeapMode::Min.comparator()
}

fn max() -> Precedes<i32> {
    HeapMode::Max.comparator()
}

// ============================================================================
// Relation Check Tests
// ============================================================================

/// Test child selection when only a left child exists.
///
/// A missing right child is never a violation.
#[test]
fn test_extremal_child_left_only() {
    let slots = Slots::from(vec![5, 3]);

    assert_eq!(extremal_child(&slots, 1, 2, min()), Some(2));
    assert_eq!(violating_child(&slots, 1, 2, min()), Some(2));
    assert_eq!(violating_child(&slots, 1, 2, max()), None);
}

/// Test that the extremal child is chosen, not the first out-of-order one.
#[test]
fn test_extremal_child_both_children() {
    // Both children are smaller than the root; the smaller one must win
    let slots = Slots::from(vec![5, 3, 1]);
    assert_eq!(violating_child(&slots, 1, 3, min()), Some(3));

    // Both children are larger than the root; the larger one must win
    let slots = Slots::from(vec![1, 3, 5]);
    assert_eq!(violating_child(&slots, 1, 3, max()), Some(3));

    let slots = Slots::from(vec![1, 5, 3]);
    assert_eq!(violating_child(&slots, 1, 3, max()), Some(2));
}

/// Test that equal children resolve to the left child.
#[test]
fn test_extremal_child_tie() {
    let slots = Slots::from(vec![5, 2, 2]);

    assert_eq!(extremal_child(&slots, 1, 3, min()), Some(2));
}

/// Test that leaves and positions beyond the logical length have no child.
#[test]
fn test_extremal_child_none() {
    let slots = Slots::from(vec![1, 2, 3]);
    assert_eq!(extremal_child(&slots, 2, 3, min()), None);

    // Storage holds three values but only the root is governed
    let slots = Slots::from(vec![9, 1, 2]);
    assert_eq!(extremal_child(&slots, 1, 1, min()), None);
}

/// Test the parent relation.
#[test]
fn test_violates_parent() {
    let slots = Slots::from(vec![3, 1]);

    assert!(violates_parent(&slots, 2, min()));
    assert!(!violates_parent(&slots, 2, max()));
    assert!(!violates_parent(&slots, 1, min()), "The root has no parent");
}

/// Test that equal values are never out of order.
#[test]
fn test_equal_values_in_order() {
    let slots = Slots::from(vec![4, 4, 4]);

    assert!(!violates_parent(&slots, 2, min()));
    assert_eq!(violating_child(&slots, 1, 3, min()), None);
    assert_eq!(violating_child(&slots, 1, 3, max()), None);
}

// ============================================================================
// Sift Procedure Tests
// ============================================================================

/// Test sifting a new minimum from a leaf to the root.
#[test]
fn test_sift_up_to_root() {
    let mut slots = Slots::from(vec![1, 4, 6, 5, 8, 7, 0]);

    let pos = sift_up(&mut slots, 7, min());

    assert_eq!(pos, 1);
    assert_eq!(slots.as_slice(), &[0, 4, 1, 5, 8, 7, 6]);
}

/// Test sifting a large root down to a leaf.
#[test]
fn test_sift_down_to_leaf() {
    let mut slots = Slots::from(vec![9, 2, 3, 4, 5]);

    let pos = sift_down(&mut slots, 1, 5, min());

    assert_eq!(pos, 4);
    assert_eq!(slots.as_slice(), &[2, 4, 3, 9, 5]);
}

/// Test that sift down respects the logical length.
#[test]
fn test_sift_down_bounded() {
    let mut slots = Slots::from(vec![9, 2, 1]);

    sift_down(&mut slots, 1, 2, min());

    // Position 3 lies outside the logical range and is untouched
    assert_eq!(slots.as_slice(), &[2, 9, 1]);
}

/// Test restoration toward the root.
#[test]
fn test_restore_up() {
    let mut slots = Slots::from(vec![1, 5, 3, 0]);

    assert_eq!(restore(&mut slots, 4, 4, min()), Settle::Up);
    assert_eq!(slots.as_slice(), &[0, 1, 3, 5]);
}

/// Test restoration toward the leaves.
#[test]
fn test_restore_down() {
    let mut slots = Slots::from(vec![1, 9, 3, 4, 5]);

    assert_eq!(restore(&mut slots, 2, 5, min()), Settle::Down);
    assert_eq!(slots.as_slice(), &[1, 4, 3, 9, 5]);
}

/// Test restoration of a value already in order.
#[test]
fn test_restore_in_place() {
    let mut slots = Slots::from(vec![1, 2, 3]);

    assert_eq!(restore(&mut slots, 2, 3, min()), Settle::InPlace);
    assert_eq!(slots.as_slice(), &[1, 2, 3]);
}

// ============================================================================
// Whole-Tree Pass Tests
// ============================================================================

/// Test bottom-up construction of a min-heap.
#[test]
fn test_heapify_min() {
    let mut slots = Slots::from(vec![5, 3, 8, 1, 9, 2]);

    heapify(&mut slots, 6, min());

    assert_eq!(slots.as_slice(), &[1, 3, 2, 5, 9, 8]);
    assert!(Validator::validate_heap_order(&slots, 6, min()));
}

/// Test bottom-up construction of a max-heap.
#[test]
fn test_heapify_max() {
    let mut slots = Slots::from(vec![5, 3, 8, 1, 9, 2]);

    heapify(&mut slots, 6, max());

    assert_eq!(slots.as_slice(), &[9, 5, 8, 1, 3, 2]);
    assert!(Validator::validate_heap_order(&slots, 6, max()));
}

/// Test heapify on trivial inputs.
#[test]
fn test_heapify_trivial() {
    let mut empty: Slots<i32> = Slots::new();
    heapify(&mut empty, 0, min());
    assert!(empty.is_empty());

    let mut single = Slots::from(vec![42]);
    heapify(&mut single, 1, min());
    assert_eq!(single.as_slice(), &[42]);
}

/// Test that extraction from a max-heap leaves values ascending.
#[test]
fn test_extract_all_max_ascending() {
    let mut slots = Slots::from(vec![9, 5, 8, 1, 3, 2]);

    extract_all(&mut slots, 6, max());

    assert_eq!(slots.as_slice(), &[1, 2, 3, 5, 8, 9]);
}

/// Test that extraction from a min-heap leaves values descending.
#[test]
fn test_extract_all_min_descending() {
    let mut slots = Slots::from(vec![1, 3, 2, 5, 9, 8]);

    extract_all(&mut slots, 6, min());

    assert_eq!(slots.as_slice(), &[9, 8, 5, 3, 2, 1]);
}
