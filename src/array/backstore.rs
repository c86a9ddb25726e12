//! Sources of replacement values for a [`FixedArray`](super::FixedArray).

use crate::circular::CircularArray;
use crate::persistent::PersistentStack;
use crate::queue::DoubleQueue;

/// A queue a [`FixedArray`](super::FixedArray) draws replacement values from
/// and stores sliced-off data on.
///
/// `give` followed by `take` returns the given value.
///
/// # Examples
///
/// ```rust
/// use fpds::array::Backstore;
/// use fpds::queue::DoubleQueue;
///
/// let mut backlog: DoubleQueue<i32> = DoubleQueue::new();
/// backlog.give(1);
/// backlog.give(2);
/// assert_eq!(backlog.take(), Some(2));
/// assert_eq!(Backstore::len(&backlog), 1);
/// ```
pub trait Backstore<T> {
    /// Removes and returns the next replacement value, if any.
    fn take(&mut self) -> Option<T>;

    /// Stores `value` so that it is the next one taken.
    fn give(&mut self, value: T);

    /// Returns the number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if no value is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Backstore<T> for DoubleQueue<T> {
    #[inline]
    fn take(&mut self) -> Option<T> {
        self.pop_front().ok()
    }

    #[inline]
    fn give(&mut self, value: T) {
        self.push_front(value);
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T> Backstore<T> for CircularArray<T> {
    #[inline]
    fn take(&mut self) -> Option<T> {
        self.pop_front().ok()
    }

    #[inline]
    fn give(&mut self, value: T) {
        self.push_front(value);
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

/// Taking clones the top value, since its node may be shared.
impl<T: Clone> Backstore<T> for PersistentStack<T> {
    fn take(&mut self) -> Option<T> {
        let (top, rest) = self.pop().ok()?;
        let top = top.clone();
        *self = rest;
        Some(top)
    }

    fn give(&mut self, value: T) {
        *self = self.push(value);
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drain<B: Backstore<i32>>(mut backstore: B) -> Vec<i32> {
        std::iter::from_fn(|| backstore.take()).collect()
    }

    fn loaded<B: Backstore<i32> + Default>() -> B {
        let mut backstore = B::default();
        for value in [3, 2, 1] {
            backstore.give(value);
        }
        backstore
    }

    #[rstest]
    fn test_every_backstore_takes_the_last_given_first() {
        assert_eq!(drain(loaded::<DoubleQueue<i32>>()), vec![1, 2, 3]);
        assert_eq!(drain(loaded::<CircularArray<i32>>()), vec![1, 2, 3]);
        assert_eq!(drain(loaded::<PersistentStack<i32>>()), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_persistent_backstore_leaves_shared_stacks_alone() {
        let shared: PersistentStack<i32> = (1..=2).collect();
        let mut backstore = shared.clone();
        assert_eq!(backstore.take(), Some(2));
        assert_eq!(Backstore::len(&backstore), 1);
        assert_eq!(shared.len(), 2);
    }

    #[rstest]
    fn test_is_empty() {
        let mut backstore: DoubleQueue<i32> = DoubleQueue::new();
        assert!(Backstore::is_empty(&backstore));
        backstore.give(0);
        assert!(!Backstore::is_empty(&backstore));
    }
}
