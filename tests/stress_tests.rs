//! Stress tests that push the heap through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

mod common;

use common::{assert_minmax_ordered, Lcg};
use minmax_heap::{DoubleEndedHeap, MinMaxHeap};

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: DoubleEndedHeap<i32, i32>>() {
    let mut heap = H::new();

    for i in 0..1000 {
        heap.push(i, i);
    }

    assert_eq!(heap.len(), 1000);

    // Pop from both ends until they meet
    for i in 0..500 {
        assert_eq!(heap.pop(), Some((i, i)));
        assert_eq!(heap.pop_max(), Some((999 - i, 999 - i)));
    }

    assert!(heap.is_empty());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: DoubleEndedHeap<i32, i32>>() {
    let mut heap = H::new();

    for i in 0..200 {
        heap.push(i * 2, i);
        heap.push(i * 2 + 1, i + 1000);

        let popped = if i % 2 == 0 { heap.pop() } else { heap.pop_max() };
        assert!(popped.is_some());
    }

    assert_eq!(heap.len(), 200);
    while !heap.is_empty() {
        let _ = heap.pop_max();
    }
    assert!(heap.is_empty());
}

/// Test merge with large heaps
fn test_large_merge<H: DoubleEndedHeap<i32, i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..500 {
        heap1.push(i * 2, i);
        heap2.push(i * 2 + 1, i + 1000);
    }

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 1000);

    let mut last = i32::MAX;
    while let Some((priority, _)) = heap1.pop_max() {
        assert!(priority <= last);
        last = priority;
    }
}

#[test]
fn test_minmax_massive_operations() {
    test_massive_operations::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_alternating_ops() {
    test_alternating_ops::<MinMaxHeap<i32>>();
}

#[test]
fn test_minmax_large_merge() {
    test_large_merge::<MinMaxHeap<i32>>();
}

#[test]
fn test_descending_insertion() {
    let mut heap = MinMaxHeap::new();
    for i in (0..1000).rev() {
        heap.insert(i, i);
    }
    assert_minmax_ordered(&heap);
    for i in 0..1000 {
        assert_eq!(heap.remove_min(), Some((i, i)));
    }
}

#[test]
fn test_ascending_insertion_drained_from_max() {
    let mut heap = MinMaxHeap::new();
    for i in 0..1000 {
        heap.insert(i, i);
    }
    assert_minmax_ordered(&heap);
    for i in (0..1000).rev() {
        assert_eq!(heap.remove_max(), Some((i, i)));
    }
}

#[test]
fn test_random_workload_against_model() {
    let mut rng = Lcg::new(0x5eed);
    let mut heap = MinMaxHeap::new();
    let mut model: Vec<i32> = Vec::new();

    for step in 0..20_000 {
        match rng.next_range(0, 10) {
            0..=4 => {
                let p = rng.next_range(-500, 500);
                heap.insert(step, p);
                let at = model.partition_point(|&q| q < p);
                model.insert(at, p);
            }
            5..=7 => {
                let got = heap.remove_min().map(|(p, _)| p);
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(got, expected, "remove_min at step {}", step);
            }
            _ => {
                let got = heap.remove_max().map(|(p, _)| p);
                assert_eq!(got, model.pop(), "remove_max at step {}", step);
            }
        }

        assert_eq!(heap.len(), model.len());
        if step % 500 == 0 {
            assert_minmax_ordered(&heap);
        }
    }
    assert_minmax_ordered(&heap);
}

#[test]
fn test_many_duplicates() {
    let mut heap = MinMaxHeap::new();
    for i in 0..3000 {
        heap.insert(i, i % 4);
    }
    assert_minmax_ordered(&heap);

    let mut mins = Vec::new();
    let mut maxes = Vec::new();
    while !heap.is_empty() {
        if let Some((p, _)) = heap.remove_min() {
            mins.push(p);
        }
        if let Some((p, _)) = heap.remove_max() {
            maxes.push(p);
        }
    }
    assert!(mins.windows(2).all(|w| w[0] <= w[1]));
    assert!(maxes.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(mins.len() + maxes.len(), 3000);
}

#[test]
fn test_grow_shrink_cycles() {
    let mut rng = Lcg::new(42);
    let mut heap = MinMaxHeap::new();

    for cycle in 0..20 {
        for _ in 0..300 {
            let p = rng.next_range(0, 1_000);
            heap.insert(cycle, p);
        }
        assert_minmax_ordered(&heap);
        for _ in 0..250 {
            let before_min = heap.peek_min().map(|(p, _)| *p);
            let before_max = heap.peek_max().map(|(p, _)| *p);
            if rng.next() % 2 == 0 {
                assert_eq!(heap.remove_min().map(|(p, _)| p), before_min);
            } else {
                assert_eq!(heap.remove_max().map(|(p, _)| p), before_max);
            }
        }
        assert_minmax_ordered(&heap);
    }
    assert_eq!(heap.len(), 20 * 50);
}
