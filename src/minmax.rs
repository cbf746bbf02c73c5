//! Min-Max Heap implementation
//!
//! A min-max heap is a complete binary tree stored in a vector whose levels
//! alternate between *min levels* (even depth, starting with the root) and
//! *max levels* (odd depth). A node on a min level is no larger than anything
//! below it, a node on a max level is no smaller. The minimum is therefore the
//! root and the maximum is the larger of the root's two children, so both ends
//! of the priority range can be peeked in O(1) and removed in O(log n).
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `remove_max` | O(log n)   |
//! | `peek_min`   | O(1)       |
//! | `peek_max`   | O(1)       |
//! | `merge`      | O(m log n) |
//!
//! Removal fills the hole with the vector's last entry and settles it with a
//! deletion descent (see the `descent` module).
//!
//! Entries with equal priorities are returned in an unspecified order.
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.insert("four", 4);
//! heap.insert("two", 2);
//! heap.insert("eight", 8);
//!
//! assert_eq!(heap.remove_min(), Some((2, "two")));
//! assert_eq!(heap.remove_max(), Some((8, "eight")));
//! assert_eq!(heap.remove_max(), Some((4, "four")));
//! assert_eq!(heap.remove_min(), None);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::iter::FusedIterator;
use std::slice;

use crate::descent;
use crate::dump::Levels;
use crate::traits::{DoubleEndedHeap, Heap};
use crate::tree::{self, Level};

/// A double-ended priority queue over an implicit min-max tree
///
/// Stores `(priority, item)` pairs; only the priority takes part in ordering.
/// The priority type defaults to `i32`.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T, P = i32> {
    /// Entries in level order: position 0 is the root, the children of
    /// position `i` are at `2i + 1` and `2i + 2`.
    entries: Vec<(P, T)>,
}

/// A broken ordering between an entry and one of its ancestors
///
/// Returned by [`MinMaxHeap::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Position of the entry that is out of order
    pub position: usize,
    /// Position of the parent or grandparent whose bound it breaks
    pub ancestor: usize,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = match Level::of(self.ancestor) {
            Level::Min => "min",
            Level::Max => "max",
        };
        write!(
            f,
            "entry at position {} breaks the {} bound of its ancestor at position {}",
            self.position, bound, self.ancestor
        )
    }
}

impl std::error::Error for InvariantViolation {}

impl<T, P: Ord> MinMaxHeap<T, P> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts `item` with the given `priority`
    pub fn insert(&mut self, item: T, priority: P) {
        self.entries.push((priority, item));
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the entry with the smallest priority
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|(p, t)| (p, t))
    }

    /// Returns the entry with the largest priority
    pub fn peek_max(&self) -> Option<(&P, &T)> {
        self.max_position()
            .map(|pos| (&self.entries[pos].0, &self.entries[pos].1))
    }

    /// Removes and returns the entry with the smallest priority
    ///
    /// Returns `None`, leaving the heap untouched, if it is empty.
    pub fn remove_min(&mut self) -> Option<(P, T)> {
        if self.entries.len() <= 1 {
            return self.entries.pop();
        }
        let displaced = self.entries.pop()?;
        Some(descent::descend(&mut self.entries, 0, displaced, Level::Min))
    }

    /// Removes and returns the entry with the largest priority
    ///
    /// Returns `None`, leaving the heap untouched, if it is empty.
    pub fn remove_max(&mut self) -> Option<(P, T)> {
        let pos = self.max_position()?;
        if pos == self.entries.len() - 1 {
            return self.entries.pop();
        }
        let displaced = self.entries.pop()?;
        Some(descent::descend(&mut self.entries, pos, displaced, Level::Max))
    }

    /// Verifies the min-max ordering of every entry against its parent and
    /// grandparent, which together imply it against all ancestors.
    ///
    /// Reports the first violation found in level order.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for position in 1..self.entries.len() {
            let ancestors = [tree::parent(position), tree::grandparent(position)];
            for ancestor in ancestors.into_iter().flatten() {
                if Level::of(ancestor).precedes(&self.entries[position].0, &self.entries[ancestor].0) {
                    return Err(InvariantViolation { position, ancestor });
                }
            }
        }
        Ok(())
    }

    /// Position of the largest entry: the root of a one-entry heap, otherwise
    /// the larger of the root's children.
    fn max_position(&self) -> Option<usize> {
        match self.entries.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.entries[2].0 > self.entries[1].0 => Some(2),
            _ => Some(1),
        }
    }

    /// Move the entry at `pos` up to where it belongs.
    ///
    /// The first comparison, against the parent, decides whether the entry
    /// climbs the min levels or the max levels; after that it only ever meets
    /// ancestors two levels apart.
    fn sift_up(&mut self, mut pos: usize) {
        let Some(parent) = tree::parent(pos) else {
            return;
        };

        let side = if self.entries[pos].0 < self.entries[parent].0 {
            Level::Min
        } else {
            Level::Max
        };
        let mut next = if Level::of(parent) == side {
            Some(parent)
        } else {
            tree::grandparent(pos)
        };

        while let Some(ancestor) = next {
            if !side.precedes(&self.entries[pos].0, &self.entries[ancestor].0) {
                break;
            }
            self.entries.swap(pos, ancestor);
            pos = ancestor;
            next = tree::grandparent(pos);
        }
    }
}

impl<T, P> MinMaxHeap<T, P> {
    /// Iterates over the entries in storage (level) order
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Consumes the heap, returning its entries in storage (level) order
    pub fn into_vec(self) -> Vec<(P, T)> {
        self.entries
    }

    /// Level-order rendering of the priorities, one tree level per line
    ///
    /// ```rust
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let heap: MinMaxHeap<()> = [(4, ()), (2, ()), (8, ())].into_iter().collect();
    /// assert_eq!(heap.levels().to_string(), "2\n4 8\n");
    /// ```
    pub fn levels(&self) -> Levels<'_, T, P> {
        Levels::new(&self.entries)
    }

    /// Writes [`levels`](Self::levels) to `out`
    pub fn dump<W: io::Write>(&self, mut out: W) -> io::Result<()>
    where
        P: fmt::Display,
    {
        write!(out, "{}", self.levels())
    }
}

impl<T, P: fmt::Display> fmt::Display for MinMaxHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.levels(), f)
    }
}

impl<T, P: Ord> Default for MinMaxHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Extend<(P, T)> for MinMaxHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (priority, item) in iter {
            self.insert(item, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for MinMaxHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, T, P> IntoIterator for &'a MinMaxHeap<T, P> {
    type Item = (&'a P, &'a T);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P: Ord> Heap<T, P> for MinMaxHeap<T, P> {
    fn new() -> Self {
        MinMaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinMaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinMaxHeap::len(self)
    }

    fn push(&mut self, priority: P, item: T) {
        self.insert(item, priority);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.peek_min()
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.remove_min()
    }

    fn merge(&mut self, other: Self) {
        self.extend(other.entries);
    }
}

impl<T, P: Ord> DoubleEndedHeap<T, P> for MinMaxHeap<T, P> {
    fn peek_max(&self) -> Option<(&P, &T)> {
        MinMaxHeap::peek_max(self)
    }

    fn pop_max(&mut self) -> Option<(P, T)> {
        self.remove_max()
    }
}

/// Iterator over the entries of a [`MinMaxHeap`] in level order
///
/// Created by [`MinMaxHeap::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T, P> {
    inner: slice::Iter<'a, (P, T)>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = (&'a P, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(p, t)| (p, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> DoubleEndedIterator for Iter<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(p, t)| (p, t))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}
