//! Level-order rendering of a heap
//!
//! Prints one tree level per line with the priorities of that level
//! separated by single spaces. For the heap built from `[5, 1, 9, 1, 7, 3]`:
//!
//! ```text
//! 1
//! 7 9
//! 1 5 3
//! ```
//!
//! Payloads are not printed.

use std::fmt;

use crate::tree;

/// `Display` adapter returned by [`MinMaxHeap::levels`](crate::MinMaxHeap::levels)
pub struct Levels<'a, T, P> {
    entries: &'a [(P, T)],
}

impl<'a, T, P> Levels<'a, T, P> {
    pub(crate) fn new(entries: &'a [(P, T)]) -> Self {
        Self { entries }
    }

    /// Number of lines the rendering spans
    pub fn depth(&self) -> usize {
        if self.entries.is_empty() {
            0
        } else {
            tree::depth(self.entries.len() - 1) as usize + 1
        }
    }
}

impl<T, P: fmt::Display> fmt::Display for Levels<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for depth in 0..self.depth() as u32 {
            let span = tree::level_span(depth, self.entries.len());
            for (i, (priority, _)) in self.entries[span].iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", priority)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
