//! Double-ended queue.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::circular::{CircularArray, CircularArrayIntoIterator, CircularArrayIterator};
use crate::error::{AbsentPolicy, EmptyError, IndexError, InvalidValueError};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

use super::write_delimited;

const STRUCTURE: &str = "DoubleQueue";

/// A double-ended queue.
///
/// Elements can be pushed, popped and peeked at either end, and read by
/// logical index from the front.
///
/// # Time Complexity
///
/// | Operation                              | Complexity     |
/// |----------------------------------------|----------------|
/// | `push_front`, `push_rear`              | O(1) amortized |
/// | `pop_front`, `pop_rear`                | O(1) amortized |
/// | `peek_front`, `peek_rear`, `get`       | O(1)           |
/// | `clone`, `map`                         | O(n)           |
///
/// # Examples
///
/// ```rust
/// use fpds::queue::DoubleQueue;
///
/// let mut queue: DoubleQueue<i32> = (1..=3).collect();
/// queue.push_front(0);
/// assert_eq!(queue.get(0), Ok(&0));
/// assert_eq!(queue.pop_rear(), Ok(3));
/// assert_eq!(queue.peek_rear(), Ok(&2));
/// assert!(queue.get(3).is_err());
/// ```
#[derive(Clone)]
pub struct DoubleQueue<T> {
    buffer: CircularArray<T>,
    policy: AbsentPolicy,
}

impl<T> DoubleQueue<T> {
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

    /// Returns the policy applied by the `push_*_option` methods.
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

    /// Pushes an element onto the front.
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.buffer.push_front(element);
    }

    /// Pushes an element onto the rear.
    #[inline]
    pub fn push_rear(&mut self, element: T) {
        self.buffer.push_rear(element);
    }

    /// Pushes `value` onto the front if present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] for `None` under
    /// [`AbsentPolicy::Reject`]. The queue is unchanged.
    pub fn push_front_option(&mut self, value: Option<T>) -> Result<(), InvalidValueError> {
        if let Some(element) = self.policy.admit(value, STRUCTURE, "push_front_option")? {
            self.push_front(element);
        }
        Ok(())
    }

    /// Pushes `value` onto the rear if present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] for `None` under
    /// [`AbsentPolicy::Reject`]. The queue is unchanged.
    pub fn push_rear_option(&mut self, value: Option<T>) -> Result<(), InvalidValueError> {
        if let Some(element) = self.policy.admit(value, STRUCTURE, "push_rear_option")? {
            self.push_rear(element);
        }
        Ok(())
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        self.buffer
            .pop_front()
            .map_err(|_| EmptyError::new(STRUCTURE, "pop_front"))
    }

    /// Removes and returns the rear element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop_rear(&mut self) -> Result<T, EmptyError> {
        self.buffer
            .pop_rear()
            .map_err(|_| EmptyError::new(STRUCTURE, "pop_rear"))
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_front(&self) -> Result<&T, EmptyError> {
        self.buffer
            .front()
            .ok_or(EmptyError::new(STRUCTURE, "peek_front"))
    }

    /// Returns the rear element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_rear(&self) -> Result<&T, EmptyError> {
        self.buffer
            .rear()
            .ok_or(EmptyError::new(STRUCTURE, "peek_rear"))
    }

    /// Returns the element at logical `index`, counted from the front.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.buffer.get(index).map_err(|error| IndexError {
            structure: STRUCTURE,
            ..error
        })
    }

    /// Returns an iterator from front to rear; `.rev()` walks rear to front.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> CircularArrayIterator<'_, T> {
        self.buffer.iter()
    }

    /// Returns a new queue of `function` applied to each element, keeping
    /// the order and the policy.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> DoubleQueue<U>
    where
        F: FnMut(&T) -> U,
    {
        DoubleQueue {
            buffer: self.buffer.map(function),
            policy: self.policy,
        }
    }
}

impl<T: Clone> DoubleQueue<T> {
    /// Folds from front to rear, seeding with the front element.
    pub fn reduce_left<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.buffer.reduce_left(function)
    }

    /// Folds from rear to front, seeding with the rear element.
    pub fn reduce_right<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        self.buffer.reduce_right(function)
    }
}

impl<T> Default for DoubleQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoubleQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
            policy: AbsentPolicy::default(),
        }
    }
}

impl<T> From<CircularArray<T>> for DoubleQueue<T> {
    fn from(buffer: CircularArray<T>) -> Self {
        Self {
            buffer,
            policy: AbsentPolicy::default(),
        }
    }
}

impl<T> Extend<T> for DoubleQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for DoubleQueue<T> {
    type Item = T;
    type IntoIter = CircularArrayIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DoubleQueue<T> {
    type Item = &'a T;
    type IntoIter = CircularArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DoubleQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for DoubleQueue<T> {}

impl<T: Hash> Hash for DoubleQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoubleQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_delimited(formatter, self.iter(), ">< ", " | ", " ><")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for DoubleQueue<T> {
    type Inner = T;
    type WithType<B> = DoubleQueue<B>;
}

impl<T> FunctorMut for DoubleQueue<T> {
    fn fmap_mut<B, F>(self, function: F) -> DoubleQueue<B>
    where
        F: FnMut(T) -> B,
    {
        DoubleQueue {
            buffer: self.buffer.fmap_mut(function),
            policy: self.policy,
        }
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> DoubleQueue<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for DoubleQueue<T> {
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

impl<T> Semigroup for DoubleQueue<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for DoubleQueue<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for DoubleQueue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.buffer, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DoubleQueue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <CircularArray<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
