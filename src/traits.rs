//! Common traits for double-ended heaps
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for a min-oriented priority queue
//! - [`DoubleEndedHeap`]: Extended trait adding access to the maximum
//!
//! The base [`Heap`] trait follows Rust's standard heap API patterns, while
//! [`DoubleEndedHeap`] adds the max-side operations that make a container
//! usable as a double-ended priority queue.

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use minmax_heap::Heap;
/// use minmax_heap::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(m log(n + m)) where m is the size of `other`
    fn merge(&mut self, other: Self);
}

/// Heap that also gives access to its maximum
///
/// # Example
///
/// ```rust
/// use minmax_heap::{DoubleEndedHeap, Heap, MinMaxHeap};
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek_max(), Some((&3, &"three")));
/// assert_eq!(heap.pop_max(), Some((3, "three")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// assert_eq!(heap.len(), 1);
/// ```
pub trait DoubleEndedHeap<T, P: Ord>: Heap<T, P> {
    /// Returns the maximum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<(&P, &T)>;

    /// Removes and returns the maximum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<(P, T)>;
}
