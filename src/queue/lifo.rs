//! Last-in, first-out queue.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, Rev};

use crate::circular::{CircularArray, CircularArrayIntoIterator, CircularArrayIterator};
use crate::error::{AbsentPolicy, EmptyError, InvalidValueError};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

use super::write_delimited;

const STRUCTURE: &str = "LifoQueue";

/// A last-in, first-out queue.
///
/// Elements are pushed onto and popped from the same end. Iteration,
/// folding and `Display` all start from the newest element.
///
/// # Examples
///
/// ```rust
/// use fpds::queue::LifoQueue;
///
/// let mut queue = LifoQueue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
/// assert_eq!(format!("{queue}"), "|| 3 > 2 > 1 ><");
/// assert_eq!(queue.pop(), Ok(3));
/// assert_eq!(queue.peek(), Ok(&2));
/// ```
#[derive(Clone)]
pub struct LifoQueue<T> {
    buffer: CircularArray<T>,
    policy: AbsentPolicy,
}

impl<T> LifoQueue<T> {
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

    /// Returns the policy applied by [`LifoQueue::push_option`].
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

    /// Pushes an element.
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

    /// Removes and returns the newest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.buffer
            .pop_rear()
            .map_err(|_| EmptyError::new(STRUCTURE, "pop"))
    }

    /// Returns the newest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.buffer.rear().ok_or(EmptyError::new(STRUCTURE, "peek"))
    }

    /// Returns an iterator from the newest to the oldest element.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Rev<CircularArrayIterator<'_, T>> {
        self.buffer.iter().rev()
    }

    /// Returns a new queue of `function` applied to each element, keeping
    /// the order and the policy.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> LifoQueue<U>
    where
        F: FnMut(&T) -> U,
    {
        LifoQueue {
            buffer: self.buffer.map(function),
            policy: self.policy,
        }
    }

    /// Folds the elements from the newest to the oldest.
    pub fn fold<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, element))
    }
}

impl<T: Clone> LifoQueue<T> {
    /// Folds from the newest to the oldest, seeding with the newest.
    /// Returns `None` for an empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::queue::LifoQueue;
    ///
    /// let queue: LifoQueue<i32> = vec![1, 2, 10].into_iter().collect();
    /// assert_eq!(queue.reduce(|accumulator, x| accumulator - x), Some(7));
    /// ```
    pub fn reduce<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.buffer.reduce_right(function)
    }
}

impl<T> Default for LifoQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the items in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for LifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
            policy: AbsentPolicy::default(),
        }
    }
}

impl<T> Extend<T> for LifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for LifoQueue<T> {
    type Item = T;
    type IntoIter = Rev<CircularArrayIntoIterator<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a LifoQueue<T> {
    type Item = &'a T;
    type IntoIter = Rev<CircularArrayIterator<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LifoQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for LifoQueue<T> {}

impl<T: Hash> Hash for LifoQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for LifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, self.iter(), "|| ", " > ", " ><")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for LifoQueue<T> {
    type Inner = T;
    type WithType<B> = LifoQueue<B>;
}

impl<T> FunctorMut for LifoQueue<T> {
    fn fmap_mut<B, F>(self, function: F) -> LifoQueue<B>
    where
        F: FnMut(T) -> B,
    {
        LifoQueue {
            buffer: self.buffer.fmap_mut(function),
            policy: self.policy,
        }
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> LifoQueue<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

/// Folds run in pop order: `fold_left` starts at the newest element.
impl<T> Foldable for LifoQueue<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.buffer
            .fold_left(init, |accumulator, element| function(element, accumulator))
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

/// Stacks `other` on top of `self`.
impl<T> Semigroup for LifoQueue<T> {
    fn combine(mut self, other: Self) -> Self {
        self.buffer.extend(other.buffer);
        self
    }
}

impl<T> Monoid for LifoQueue<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serialized from the oldest to the newest element, so a round trip
/// restores the same queue.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LifoQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.buffer, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LifoQueue<T>
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
