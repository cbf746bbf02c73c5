//! Helpers shared by the integration tests

use minmax_heap::MinMaxHeap;

/// Priorities in storage order
pub fn priorities<T>(heap: &MinMaxHeap<T>) -> Vec<i32> {
    heap.iter().map(|(p, _)| *p).collect()
}

/// Checks every entry against every one of its ancestors.
///
/// This walks the whole ancestor path rather than only the parent and
/// grandparent, so it does not share any reasoning with
/// `MinMaxHeap::check_invariants`.
pub fn assert_minmax_ordered<T>(heap: &MinMaxHeap<T>) {
    let priorities = priorities(heap);
    for pos in 1..priorities.len() {
        let mut ancestor = pos;
        while ancestor > 0 {
            ancestor = (ancestor - 1) / 2;
            let on_min_level = (ancestor + 1).ilog2() % 2 == 0;
            if on_min_level {
                assert!(
                    priorities[ancestor] <= priorities[pos],
                    "min-level {} at {} is above smaller {} at {}: {:?}",
                    priorities[ancestor],
                    ancestor,
                    priorities[pos],
                    pos,
                    priorities
                );
            } else {
                assert!(
                    priorities[ancestor] >= priorities[pos],
                    "max-level {} at {} is above larger {} at {}: {:?}",
                    priorities[ancestor],
                    ancestor,
                    priorities[pos],
                    pos,
                    priorities
                );
            }
        }
    }
    assert_eq!(heap.check_invariants(), Ok(()));
}

/// Every permutation of `items`, in lexicographic order of positions
#[allow(dead_code)]
pub fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

/// Deterministic generator for reproducible workloads
#[allow(dead_code)]
pub struct Lcg {
    state: u64,
}

#[allow(dead_code)]
impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        let range = (max - min) as u64;
        if range == 0 {
            return min;
        }
        min + ((self.next() >> 33) % range) as i32
    }
}
