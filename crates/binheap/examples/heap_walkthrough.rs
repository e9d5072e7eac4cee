//! Binary Heap Walkthrough
//!
//! This example demonstrates the heap operations end to end:
//! - Building min- and max-heaps from unordered values
//! - Inserting, peeking, and removing at arbitrary positions
//! - Sorting in place and rebuilding heap order
//! - Error reporting for invalid positions and empty heaps
//!
//! Run with `RUST_LOG=binheap=trace` to see the heap's own log records.

#[cfg(feature = "std")]
use binheap::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), HeapError> {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("Binary Heap - Walkthrough");
    println!("{}", "=".repeat(60));
    println!();

    example_1_build()?;
    example_2_insert_and_remove()?;
    example_3_sort()?;
    example_4_errors();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Building
/// The same values produce different roots depending on the mode
fn example_1_build() -> Result<(), HeapError> {
    println!("Example 1: Building");
    println!("{}", "-".repeat(60));

    let values = vec![5, 3, 8, 1, 9, 2];

    let min_heap = Heap::new().mode(Min).values(values.clone()).build()?;
    let max_heap = Heap::new().mode(Max).values(values).build()?;

    println!("{}", min_heap);
    println!("{}", max_heap);

    // Expected output:
    // Min root: 1, Max root: 9
    println!("Min root: {}, Max root: {}\n", min_heap.peek()?, max_heap.peek()?);

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Insertion and Removal
/// Positions are 1-based; the root lives at position 1
fn example_2_insert_and_remove() -> Result<(), HeapError> {
    println!("Example 2: Insertion and Removal");
    println!("{}", "-".repeat(60));

    let mut heap = BinaryHeap::new(Min, vec![5, 3, 8, 1, 9, 2]);
    heap.insert(0);
    println!("After inserting 0: root={}, size={}", heap.peek()?, heap.size());

    let removed = heap.remove(4)?;
    println!("Removed position 4: {}", removed);
    println!("Contents by position: {:?}", heap.contents());

    let mut drained = Vec::new();
    while let Ok(value) = heap.pop() {
        drained.push(value);
    }

    // Expected output:
    // Drained: [0, 1, 2, 3, 8, 9]
    println!("Drained: {:?}\n", drained);

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Heapsort
/// Sorting always yields ascending order and consumes heap order
fn example_3_sort() -> Result<(), HeapError> {
    println!("Example 3: Heapsort");
    println!("{}", "-".repeat(60));

    for mode in [Min, Max] {
        let mut heap = BinaryHeap::new(mode, vec![64, 34, 25, 12, 22, 11, 90]);
        heap.sort();
        println!("{:>9} sorted: {:?}", mode.to_string(), heap.contents());

        heap.rebuild();
        println!("{:>9} root after rebuild: {}", mode.to_string(), heap.peek()?);
    }
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Errors
/// Invalid positions and empty heaps are reported, never panicked on
fn example_4_errors() {
    println!("Example 4: Errors");
    println!("{}", "-".repeat(60));

    let mut heap = BinaryHeap::new(Min, vec![2, 4, 6]);
    if let Err(e) = heap.remove(99) {
        println!("remove(99): {}", e);
    }

    let empty: BinaryHeap<i32> = BinaryHeap::new(Max, vec![]);
    if let Err(e) = empty.peek() {
        println!("peek on empty heap: {}", e);
    }

    let res = Heap::new().values(vec![1.0, f64::NAN]).build();
    if let Err(e) = res {
        println!("builder with NaN: {}", e);
    }
}
