//! Deletion descent
//!
//! After the entry at some position has been taken out of the heap, the
//! vector's last entry is detached and has to be settled somewhere in the
//! subtree below that position. Instead of trickling it down with repeated
//! compare-and-swap, the descent collects the positions it could end up on
//! into a *descent chain*, whose priorities are sorted by construction,
//! binary-searches the chain for the displaced entry's slot, and rotates the
//! chain contents one step toward the removal point.
//!
//! For a `Min` descent from position `s` the chain looks like
//!
//! ```text
//! s, c1, c2, .., cn, [m], pn, .., p1
//! ```
//!
//! where each `ci` is the smallest entry two levels below its predecessor,
//! `m` is an optional leaf child of `cn` that beat every grandchild, and the
//! `pi` are the max-level ancestors of the final leaf that lie below `s`,
//! nearest first. Every max-level node bounds its subtree, so the priorities
//! read along the chain never decrease. `Max` descents are the mirror image.

use std::mem;

use smallvec::{smallvec, SmallVec};

use crate::tree::{self, Level};

/// Positions visited by one descent
///
/// Its length is bounded by the tree height plus the number of levels walked
/// back up, so 32 slots covers every heap that fits in memory without spilling.
pub(crate) type Chain = SmallVec<[usize; 32]>;

/// Builds the descent chain rooted at `start`.
///
/// `entries` must already be missing the detached last entry; the priority
/// currently stored at `start` is never read.
pub(crate) fn descent_chain<P: Ord, T>(
    entries: &[(P, T)],
    start: usize,
    orientation: Level,
) -> Chain {
    let len = entries.len();
    let mut chain: Chain = smallvec![start];
    let mut current = start;

    loop {
        let left = tree::first_child(current);
        if left >= len {
            break;
        }

        let mut next = extreme_below(entries, left, orientation);
        if left + 1 < len {
            let right = extreme_below(entries, left + 1, orientation);
            if orientation.precedes(&entries[right].0, &entries[next].0) {
                next = right;
            }
        }

        chain.push(next);
        current = next;
    }

    // `current` is a leaf. Walk back up through the ancestors that bound it
    // from the other side, stopping at the removal point.
    let mut above = if Level::of(current) == Level::of(start) {
        tree::parent(current)
    } else {
        tree::grandparent(current)
    };
    while let Some(pos) = above.filter(|&pos| pos > start) {
        chain.push(pos);
        above = tree::grandparent(pos);
    }

    chain
}

/// The most extreme entry in the top two levels of the subtree at `child`.
///
/// A leaf is its own answer. Otherwise `child` sits on the opposite level
/// to the orientation, so one of its children always beats or ties it and the
/// chain stays on one level parity.
fn extreme_below<P: Ord, T>(entries: &[(P, T)], child: usize, orientation: Level) -> usize {
    let left = tree::first_child(child);
    if left >= entries.len() {
        return child;
    }
    let right = left + 1;
    if right < entries.len() && orientation.precedes(&entries[right].0, &entries[left].0) {
        right
    } else {
        left
    }
}

/// Index into `chain` where an entry with `priority` comes to rest.
///
/// Counts the chain entries after the removal point that strictly precede
/// `priority`; these are exactly the ones that shift toward the removal point.
pub(crate) fn resting_slot<P: Ord, T>(
    entries: &[(P, T)],
    chain: &[usize],
    priority: &P,
    orientation: Level,
) -> usize {
    chain[1..].partition_point(|&pos| orientation.precedes(&entries[pos].0, priority))
}

/// Removes the entry at `start` and settles `displaced` in its subtree.
///
/// `displaced` is the entry just popped off the end of `entries`. Returns the
/// entry that used to live at `start`.
pub(crate) fn descend<P: Ord, T>(
    entries: &mut [(P, T)],
    start: usize,
    displaced: (P, T),
    orientation: Level,
) -> (P, T) {
    let chain = descent_chain(entries, start, orientation);
    let slot = resting_slot(entries, &chain, &displaced.0, orientation);

    // Carries the removed entry down to the slot while every chain entry
    // in front of it moves up one step.
    for pair in chain[..=slot].windows(2) {
        entries.swap(pair[0], pair[1]);
    }

    mem::replace(&mut entries[chain[slot]], displaced)
}
