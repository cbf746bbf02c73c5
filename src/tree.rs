//! Position arithmetic for the implicit tree
//!
//! A heap of `n` entries occupies positions `0..n` of a vector. Position 0 is
//! the root, position `i` has children `2i + 1` and `2i + 2`, and levels
//! alternate between min levels (even depth) and max levels (odd depth).

/// Which bound a level enforces over its subtree
///
/// Also used as the orientation of a sift or a deletion descent: `Min` moves
/// small priorities toward the root, `Max` moves large ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Min,
    Max,
}

impl Level {
    /// The level kind of the node stored at `pos`
    #[inline]
    pub(crate) fn of(pos: usize) -> Level {
        if depth(pos) % 2 == 0 {
            Level::Min
        } else {
            Level::Max
        }
    }

    /// Returns true if `a` belongs strictly closer to the root than `b`
    /// under this orientation.
    #[inline]
    pub(crate) fn precedes<P: Ord>(self, a: &P, b: &P) -> bool {
        match self {
            Level::Min => a < b,
            Level::Max => a > b,
        }
    }
}

/// Depth of `pos` in the tree: `floor(log2(pos + 1))`
#[inline]
pub(crate) fn depth(pos: usize) -> u32 {
    (pos + 1).ilog2()
}

#[inline]
pub(crate) fn parent(pos: usize) -> Option<usize> {
    if pos == 0 {
        None
    } else {
        Some((pos - 1) / 2)
    }
}

#[inline]
pub(crate) fn grandparent(pos: usize) -> Option<usize> {
    parent(pos).and_then(parent)
}

/// Position of the left child; the right child is one past it.
#[inline]
pub(crate) fn first_child(pos: usize) -> usize {
    2 * pos + 1
}

/// Half-open range of positions on level `depth`, clipped to `len`.
pub(crate) fn level_span(depth: u32, len: usize) -> std::ops::Range<usize> {
    let start = (1usize << depth) - 1;
    let end = ((1usize << (depth + 1)) - 1).min(len);
    start.min(len)..end
}
