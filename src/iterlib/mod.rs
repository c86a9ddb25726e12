//! Lazy combinators joining several iterators into one.
//!
//! | Function    | Order                    | Stops when                         |
//! |-------------|--------------------------|------------------------------------|
//! | [`concat`]  | each iterator in turn    | every iterator is exhausted        |
//! | [`merge`]   | round-robin, full rounds | any iterator is exhausted          |
//! | [`exhaust`] | round-robin              | every iterator is exhausted        |
//!
//! Every container of this crate is `IntoIterator`, so they all combine
//! directly.
//!
//! # Examples
//!
//! ```rust
//! use fpds::iterlib::{concat, exhaust, merge};
//!
//! let streams = || vec![vec![1, 2, 3], vec![10, 20], vec![100, 200, 300]];
//!
//! assert_eq!(
//!     concat(streams()).collect::<Vec<_>>(),
//!     vec![1, 2, 3, 10, 20, 100, 200, 300]
//! );
//! assert_eq!(merge(streams()).collect::<Vec<_>>(), vec![1, 10, 100, 2, 20, 200]);
//! assert_eq!(
//!     exhaust(streams()).collect::<Vec<_>>(),
//!     vec![1, 10, 100, 2, 20, 200, 3, 300]
//! );
//! ```

use std::iter::FusedIterator;

use crate::queue::FifoQueue;

/// Yields every item of each iterator in turn.
///
/// # Examples
///
/// ```rust
/// use fpds::iterlib::concat;
/// use fpds::queue::FifoQueue;
///
/// let head: FifoQueue<char> = "ab".chars().collect();
/// let tail: FifoQueue<char> = "cd".chars().collect();
/// assert_eq!(concat([head, tail]).collect::<String>(), "abcd");
/// ```
pub fn concat<I>(iterables: I) -> Concat<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Concat {
        current: None,
        pending: iterables.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

/// Yields one item from each iterator per round, stopping at the first round
/// some iterator cannot complete. Items of that partial round are dropped.
///
/// With no iterators at all, nothing is yielded.
pub fn merge<I>(iterables: I) -> Merge<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    let iterators: Vec<_> = iterables.into_iter().map(IntoIterator::into_iter).collect();
    Merge {
        finished: iterators.is_empty(),
        iterators,
        round: FifoQueue::new(),
    }
}

/// Yields one item from each iterator per round, dropping iterators as they
/// run out, until all are exhausted.
pub fn exhaust<I>(iterables: I) -> Exhaust<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Exhaust {
        rotation: iterables.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

/// Iterator returned by [`concat`].
pub struct Concat<J> {
    current: Option<J>,
    pending: FifoQueue<J>,
}

impl<J: Iterator> Iterator for Concat<J> {
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            self.current = self.pending.pop().ok();
            if self.current.is_none() {
                return None;
            }
        }
    }
}

impl<J: Iterator> FusedIterator for Concat<J> {}

/// Iterator returned by [`merge`].
pub struct Merge<J: Iterator> {
    iterators: Vec<J>,
    round: FifoQueue<J::Item>,
    finished: bool,
}

impl<J: Iterator> Merge<J> {
    fn fill_round(&mut self) {
        for iterator in &mut self.iterators {
            match iterator.next() {
                Some(item) => self.round.push(item),
                None => {
                    self.finished = true;
                    self.round = FifoQueue::new();
                    return;
                }
            }
        }
    }
}

impl<J: Iterator> Iterator for Merge<J> {
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.round.is_empty() && !self.finished {
            self.fill_round();
        }
        self.round.pop().ok()
    }
}

impl<J: Iterator> FusedIterator for Merge<J> {}

/// Iterator returned by [`exhaust`].
pub struct Exhaust<J> {
    rotation: FifoQueue<J>,
}

impl<J: Iterator> Iterator for Exhaust<J> {
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Ok(mut iterator) = self.rotation.pop() {
            if let Some(item) = iterator.next() {
                self.rotation.push(iterator);
                return Some(item);
            }
        }
        None
    }
}

impl<J: Iterator> FusedIterator for Exhaust<J> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_concat_skips_empty_iterators() {
        let parts = vec![vec![], vec![1], vec![], vec![2, 3]];
        assert_eq!(concat(parts).collect::<Vec<i32>>(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec![vec![1, 2], vec![3, 4]], vec![1, 3, 2, 4])]
    #[case(vec![vec![1, 2, 3], vec![4]], vec![1, 4])]
    #[case(vec![vec![1, 2], vec![]], vec![])]
    #[case(vec![], vec![])]
    fn test_merge_keeps_complete_rounds(
        #[case] parts: Vec<Vec<i32>>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge(parts).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_merge_is_fused() {
        let mut merged = merge(vec![vec![1], vec![2, 3]]);
        assert_eq!(merged.by_ref().count(), 2);
        assert_eq!(merged.next(), None);
    }

    #[rstest]
    fn test_exhaust_drops_finished_iterators() {
        let parts = vec![vec![1], vec![2, 4, 6], vec![], vec![3, 5]];
        assert_eq!(exhaust(parts).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_combinators_are_lazy() {
        let naturals = || 0_u64..;
        assert_eq!(
            merge(vec![naturals(), naturals()]).take(4).collect::<Vec<_>>(),
            vec![0, 0, 1, 1]
        );
        assert_eq!(concat(vec![naturals(), naturals()]).nth(10), Some(10));
    }
}
