//! Integration tests for the iterator combinators over the crate's
//! containers.

use fpds::circular::CircularArray;
use fpds::iterlib::{concat, exhaust, merge};
use fpds::persistent::PersistentStack;
use fpds::queue::{DoubleQueue, FifoQueue, LifoQueue};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_concat_over_queues_keeps_queue_order() {
    let fifo: FifoQueue<i32> = (1..=2).collect();
    let lifo: LifoQueue<i32> = (3..=4).collect();
    let joined: Vec<i32> = concat([
        fifo.into_iter().collect::<Vec<_>>(),
        lifo.into_iter().collect::<Vec<_>>(),
    ])
    .collect();
    assert_eq!(joined, vec![1, 2, 4, 3]);
}

#[rstest]
fn test_merge_borrowed_containers() {
    let array: CircularArray<char> = "abc".chars().collect();
    let queue: DoubleQueue<char> = "xyz".chars().collect();
    let merged: String = merge([array.iter(), queue.iter()]).collect();
    assert_eq!(merged, "axbycz");
    assert_eq!(array.len(), 3);
}

#[rstest]
fn test_exhaust_over_stacks() {
    let short: PersistentStack<i32> = (1..=1).collect();
    let long: PersistentStack<i32> = (1..=3).collect();
    let rotated: Vec<i32> = exhaust([short.iter(), long.iter()]).copied().collect();
    assert_eq!(rotated, vec![1, 3, 2, 1]);
}

#[rstest]
fn test_infinite_inputs_stay_lazy() {
    let evens = (0..).step_by(2);
    let odds = (1..).step_by(2);
    let first: Vec<u32> = exhaust([evens, odds]).take(6).collect();
    assert_eq!(first, vec![0, 1, 2, 3, 4, 5]);
}

proptest! {
    #[test]
    fn prop_concat_preserves_every_item(parts in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..8), 0..8)) {
        let expected: Vec<i16> = parts.iter().flatten().copied().collect();
        prop_assert_eq!(concat(parts).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_exhaust_yields_every_item(parts in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..8), 0..8)) {
        let total: usize = parts.iter().map(Vec::len).sum();
        prop_assert_eq!(exhaust(parts).count(), total);
    }

    #[test]
    fn prop_merge_yields_whole_rounds(parts in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..8), 1..8)) {
        let shortest = parts.iter().map(Vec::len).min().unwrap_or(0);
        let iterators = parts.len();
        prop_assert_eq!(merge(parts).count(), shortest * iterators);
    }
}
