//! Min-Max Heap for Rust
//!
//! This crate provides a double-ended priority queue built on a min-max heap:
//! a single vector holding an implicit complete binary tree whose levels
//! alternate between min and max levels.
//!
//! # Features
//!
//! - **O(log n)** insert
//! - **O(log n)** removal of the minimum *or* the maximum
//! - **O(1)** peek at either end
//! - Priorities are kept apart from payloads, which are never compared
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for priority in [5, 1, 9, 1, 7, 3] {
//!     heap.insert(format!("job-{priority}"), priority);
//! }
//!
//! assert_eq!(heap.peek_min().map(|(p, _)| *p), Some(1));
//! assert_eq!(heap.peek_max().map(|(p, _)| *p), Some(9));
//! assert_eq!(heap.remove_max(), Some((9, "job-9".to_string())));
//! assert_eq!(heap.len(), 5);
//! ```
//!
//! The `minmax-repl` binary wraps the heap in a small console loop; see
//! [`repl`].

mod descent;
pub mod dump;
pub mod minmax;
pub mod repl;
pub mod traits;
mod tree;

// Re-export the main types for convenience
pub use minmax::{InvariantViolation, MinMaxHeap};
pub use traits::{DoubleEndedHeap, Heap};
