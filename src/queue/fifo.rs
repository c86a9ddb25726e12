//! First-in, first-out queue.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::circular::{CircularArray, CircularArrayIntoIterator, CircularArrayIterator};
use crate::error::{AbsentPolicy, EmptyError, InvalidValueError};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

use super::write_delimited;

const STRUCTURE: &str = "FifoQueue";

/// A first-in, first-out queue.
///
/// Elements are pushed onto the rear and popped from the front.
///
/// # Time Complexity
///
/// | Operation                         | Complexity     |
/// |-----------------------------------|----------------|
/// | `push`, `push_option`             | O(1) amortized |
/// | `pop`                             | O(1) amortized |
/// | `peek_next_out`, `peek_last_in`   | O(1)           |
/// | `clone`, `map`                    | O(n)           |
///
/// # Examples
///
/// ```rust
/// use fpds::queue::FifoQueue;
///
/// let mut queue = FifoQueue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
/// assert_eq!(queue.peek_next_out(), Ok(&1));
/// assert_eq!(queue.peek_last_in(), Ok(&3));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(3));
/// assert!(queue.is_empty());
/// ```
#[derive(Clone)]
pub struct FifoQueue<T> {
    buffer: CircularArray<T>,
    policy: AbsentPolicy,
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue that ignores absent values.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(AbsentPolicy::default())
    }

    /// Creates an empty queue with the given [`AbsentPolicy`].
    #[inline]
    #[must_use]
    pub fn with_policy(policy: AbsentPolicy) -> Self {
        Self {
            buffer: CircularArray::new(),
            policy,
        }
    }

    /// Returns the policy applied by [`FifoQueue::push_option`].
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> AbsentPolicy {
        self.policy
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Pushes an element onto the rear.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.buffer.push_rear(element);
    }

    /// Pushes `value` if present; an absent value is handled by the policy.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] for `None` under
    /// [`AbsentPolicy::Reject`]. The queue is unchanged.
    pub fn push_option(&mut self, value: Option<T>) -> Result<(), InvalidValueError> {
        if let Some(element) = self.policy.admit(value, STRUCTURE, "push_option")? {
            self.push(element);
        }
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.buffer
            .pop_front()
            .map_err(|_| EmptyError::new(STRUCTURE, "pop"))
    }

    /// Returns the element the next `pop` would remove.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_next_out(&self) -> Result<&T, EmptyError> {
        self.buffer
            .front()
            .ok_or(EmptyError::new(STRUCTURE, "peek_next_out"))
    }

    /// Returns the most recently pushed element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_last_in(&self) -> Result<&T, EmptyError> {
        self.buffer
            .rear()
            .ok_or(EmptyError::new(STRUCTURE, "peek_last_in"))
    }

    /// Returns an iterator from the oldest to the newest element.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> CircularArrayIterator<'_, T> {
        self.buffer.iter()
    }

    /// Returns a new queue of `function` applied to each element, keeping
    /// the order and the policy.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> FifoQueue<U>
    where
        F: FnMut(&T) -> U,
    {
        FifoQueue {
            buffer: self.buffer.map(function),
            policy: self.policy,
        }
    }

    /// Folds the elements from the oldest to the newest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::queue::FifoQueue;
    ///
    /// let queue: FifoQueue<i32> = (1..=4).collect();
    /// assert_eq!(queue.fold(0, |accumulator, x| accumulator * 10 + x), 1234);
    /// ```
    pub fn fold<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, element))
    }
}

impl<T: Clone> FifoQueue<T> {
    /// Folds the elements from the oldest to the newest, seeding with the
    /// oldest. Returns `None` for an empty queue.
    pub fn reduce<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.buffer.reduce_left(function)
    }
}

impl<T> Default for FifoQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
            policy: AbsentPolicy::default(),
        }
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = CircularArrayIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = CircularArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Queues compare by their elements only; the policy is not compared.
impl<T: PartialEq> PartialEq for FifoQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for FifoQueue<T> {}

impl<T: Hash> Hash for FifoQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for FifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, self.iter(), "<< ", " < ", " <<")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for FifoQueue<T> {
    type Inner = T;
    type WithType<B> = FifoQueue<B>;
}

impl<T> FunctorMut for FifoQueue<T> {
    fn fmap_mut<B, F>(self, function: F) -> FifoQueue<B>
    where
        F: FnMut(T) -> B,
    {
        FifoQueue {
            buffer: self.buffer.fmap_mut(function),
            policy: self.policy,
        }
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> FifoQueue<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for FifoQueue<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.buffer.fold_left(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.buffer.fold_right(init, function)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.buffer.len()
    }
}

/// Appends `other` behind `self`; the policy of `self` is kept.
impl<T> Semigroup for FifoQueue<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for FifoQueue<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for FifoQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.buffer, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for FifoQueue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <CircularArray<T> as serde::Deserialize>::deserialize(deserializer).map(|buffer| Self {
            buffer,
            policy: AbsentPolicy::default(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
