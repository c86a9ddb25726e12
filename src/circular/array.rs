//! The [`CircularArray`] type and its iterators.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::error::{EmptyError, IndexError};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

const STRUCTURE: &str = "CircularArray";

/// A double-ended, auto-resizing circular array.
///
/// Live elements occupy `count` consecutive slots (modulo the capacity)
/// starting at `front`. Every other slot holds `None`.
///
/// Any value can be stored, including an `Option::None` when `T` is itself
/// an `Option`: the array gives no element a special meaning.
///
/// # Time Complexity
///
/// | Operation                  | Complexity     |
/// |----------------------------|----------------|
/// | `push_front`, `push_rear`  | O(1) amortized |
/// | `pop_front`, `pop_rear`    | O(1) amortized |
/// | `get`, `get_mut`, `set`    | O(1)           |
/// | `len`, `capacity`          | O(1)           |
/// | `clone`, `reverse`, `map`  | O(n)           |
///
/// # Examples
///
/// ```rust
/// use fpds::circular::CircularArray;
///
/// let mut array: CircularArray<&str> = CircularArray::new();
/// array.push_rear("b");
/// array.push_front("a");
/// assert_eq!(array.pop_front(), Ok("a"));
/// assert_eq!(array.pop_front(), Ok("b"));
/// assert!(array.pop_front().is_err());
/// ```
#[derive(Clone)]
pub struct CircularArray<T> {
    /// Backing storage; its length is the capacity.
    slots: Vec<Option<T>>,
    /// Physical index of the logical first element.
    front: usize,
    /// Number of live elements.
    count: usize,
}

impl<T> CircularArray<T> {
    /// Capacity of an array created by [`CircularArray::new`].
    pub const DEFAULT_CAPACITY: usize = 2;

    /// Capacity at or below which popping never shrinks the storage.
    pub const MINIMUM_SHRINK_CAPACITY: usize = 8;

    /// Creates an empty array with [`Self::DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let array: CircularArray<i32> = CircularArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed; the first push allocates one slot.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            count: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `len() / capacity()`, or `0.0` for a zero-capacity array.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction_filled(&self) -> f64 {
        if self.slots.is_empty() {
            0.0
        } else {
            self.count as f64 / self.slots.len() as f64
        }
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.slots.len()
    }

    const fn index_error(&self, operation: &'static str, index: usize) -> IndexError {
        IndexError {
            structure: STRUCTURE,
            operation,
            index,
            length: self.count,
        }
    }

    /// Moves the live elements into fresh storage of `new_capacity` slots,
    /// starting at slot 0.
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.count);
        let capacity = self.slots.len();
        let mut slots = Vec::with_capacity(new_capacity);
        for offset in 0..self.count {
            slots.push(self.slots[(self.front + offset) % capacity].take());
        }
        slots.resize_with(new_capacity, || None);
        self.slots = slots;
        self.front = 0;
    }

    fn grow_if_full(&mut self) {
        if self.count == self.slots.len() {
            let doubled = self.slots.len().saturating_mul(2).max(1);
            self.relocate(doubled);
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.slots.len();
        if capacity > Self::MINIMUM_SHRINK_CAPACITY && self.count <= capacity / 4 {
            self.relocate(capacity / 2);
        }
    }

    /// Pushes an element onto the front.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; doubles the capacity when full.
    pub fn push_front(&mut self, element: T) {
        self.grow_if_full();
        let capacity = self.slots.len();
        self.front = (self.front + capacity - 1) % capacity;
        self.slots[self.front] = Some(element);
        self.count += 1;
    }

    /// Pushes an element onto the rear.
    ///
    /// # Complexity
    ///
    /// O(1) amortized; doubles the capacity when full.
    pub fn push_rear(&mut self, element: T) {
        self.grow_if_full();
        let slot = self.physical(self.count);
        self.slots[slot] = Some(element);
        self.count += 1;
    }

    fn take_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let element = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        element
    }

    fn take_rear(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let slot = self.physical(self.count - 1);
        self.count -= 1;
        self.slots[slot].take()
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the array is empty; the array is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = (1..=2).collect();
    /// assert_eq!(array.pop_front(), Ok(1));
    /// assert_eq!(array.pop_front(), Ok(2));
    /// assert!(array.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        let element = self
            .take_front()
            .ok_or(EmptyError::new(STRUCTURE, "pop_front"))?;
        self.shrink_if_sparse();
        Ok(element)
    }

    /// Removes and returns the rear element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the array is empty; the array is unchanged.
    pub fn pop_rear(&mut self) -> Result<T, EmptyError> {
        let element = self
            .take_rear()
            .ok_or(EmptyError::new(STRUCTURE, "pop_rear"))?;
        self.shrink_if_sparse();
        Ok(element)
    }

    /// Returns a reference to the front element, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.slot(0)
    }

    /// Returns a reference to the rear element, if any.
    #[inline]
    #[must_use]
    pub fn rear(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.slot(last))
    }

    fn slot(&self, index: usize) -> Option<&T> {
        if index < self.count {
            self.slots[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    /// Returns a reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`. A wrapped negative
    /// index such as `usize::MAX` is rejected like any other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let array: CircularArray<char> = "abc".chars().collect();
    /// assert_eq!(array.get(2), Ok(&'c'));
    /// assert!(array.get(3).is_err());
    /// assert!(array.get(usize::MAX).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.slot(index)
            .ok_or_else(|| self.index_error("get", index))
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        if index >= self.count {
            return Err(self.index_error("get_mut", index));
        }
        let slot = self.physical(index);
        let error = self.index_error("get_mut", index);
        self.slots[slot].as_mut().ok_or(error)
    }

    /// Replaces the element at logical `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`; `element` is dropped
    /// and the array is unchanged.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexError> {
        if index >= self.count {
            return Err(self.index_error("set", index));
        }
        let slot = self.physical(index);
        let error = self.index_error("set", index);
        self.slots[slot].replace(element).ok_or(error)
    }

    /// Removes every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.front = 0;
        self.count = 0;
    }

    /// Shrinks the storage to fit the elements, keeping at least
    /// [`Self::DEFAULT_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = CircularArray::with_capacity(64);
    /// array.push_rear(1);
    /// array.push_rear(2);
    /// array.push_rear(3);
    /// array.compact();
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn compact(&mut self) {
        self.relocate(self.count.max(Self::DEFAULT_CAPACITY));
    }

    /// Grows the storage so that the next `additional` pushes do not
    /// reallocate.
    ///
    /// Storage that has to grow at least doubles, so repeated small
    /// reservations stay amortized O(1) per element. Popping may still shrink
    /// the storage afterwards.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.count.saturating_add(additional);
        if required > self.slots.len() {
            self.relocate(required.max(self.slots.len().saturating_mul(2)));
        }
    }

    /// Returns an iterator over the elements from front to rear.
    ///
    /// The iterator is double ended: `.rev()` walks from rear to front.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> CircularArrayIterator<'_, T> {
        CircularArrayIterator {
            array: self,
            next_front: 0,
            next_back: self.count,
        }
    }

    /// Returns a new array of `function` applied to each element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let array: CircularArray<i32> = (1..=3).collect();
    /// let squares = array.map(|x| x * x);
    /// assert_eq!(squares.iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> CircularArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut mapped = CircularArray::with_capacity(self.count + Self::DEFAULT_CAPACITY);
        mapped.extend(self.iter().map(function));
        mapped
    }

    /// Replaces every element with `function` applied to it.
    pub fn map_in_place<F>(&mut self, mut function: F)
    where
        F: FnMut(&mut T),
    {
        let capacity = self.slots.len();
        for offset in 0..self.count {
            if let Some(element) = self.slots[(self.front + offset) % capacity].as_mut() {
                function(element);
            }
        }
    }
}

impl<T: Clone> CircularArray<T> {
    /// Returns a new array with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Folds from front to rear, seeding with a clone of the front element.
    ///
    /// Returns `None` for an empty array. Use [`Foldable::fold_left`] to fold
    /// from an explicit initial value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::circular::CircularArray;
    ///
    /// let array: CircularArray<i32> = vec![10, 3, 2].into();
    /// assert_eq!(array.reduce_left(|accumulator, x| accumulator - x), Some(5));
    /// assert_eq!(array.reduce_right(|accumulator, x| accumulator - x), Some(-11));
    /// ```
    pub fn reduce_left<F>(&self, mut function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |accumulator, element| function(accumulator, element)))
    }

    /// Folds from rear to front, seeding with a clone of the rear element.
    ///
    /// Returns `None` for an empty array.
    pub fn reduce_right<F>(&self, mut function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter().rev();
        let last = iter.next()?.clone();
        Some(iter.fold(last, |accumulator, element| function(accumulator, element)))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`CircularArray`].
pub struct CircularArrayIterator<'a, T> {
    array: &'a CircularArray<T>,
    next_front: usize,
    next_back: usize,
}

impl<'a, T> Iterator for CircularArrayIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_front == self.next_back {
            return None;
        }
        let element = self.array.slot(self.next_front);
        self.next_front += 1;
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next_back - self.next_front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for CircularArrayIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next_front == self.next_back {
            return None;
        }
        self.next_back -= 1;
        self.array.slot(self.next_back)
    }
}

impl<T> ExactSizeIterator for CircularArrayIterator<'_, T> {}

impl<T> FusedIterator for CircularArrayIterator<'_, T> {}

/// An owning iterator over the elements of a [`CircularArray`].
///
/// Consuming the iterator never shrinks the storage.
pub struct CircularArrayIntoIterator<T> {
    array: CircularArray<T>,
}

impl<T> Iterator for CircularArrayIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.array.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.array.count, Some(self.array.count))
    }
}

impl<T> DoubleEndedIterator for CircularArrayIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.array.take_rear()
    }
}

impl<T> ExactSizeIterator for CircularArrayIntoIterator<T> {}

impl<T> FusedIterator for CircularArrayIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CircularArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slots: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let count = slots.len();
        slots.resize_with(count + Self::DEFAULT_CAPACITY, || None);
        Self {
            slots,
            front: 0,
            count,
        }
    }
}

impl<T> From<Vec<T>> for CircularArray<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> Extend<T> for CircularArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push_rear(element);
        }
    }
}

impl<T> IntoIterator for CircularArray<T> {
    type Item = T;
    type IntoIter = CircularArrayIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CircularArrayIntoIterator { array: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = CircularArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two arrays are equal when they hold equal elements in the same order,
/// whatever their capacities and internal offsets.
impl<T: PartialEq> PartialEq for CircularArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArray<T> {}

impl<T: Hash> Hash for CircularArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(|")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "|)")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for CircularArray<T> {
    type Inner = T;
    type WithType<B> = CircularArray<B>;
}

impl<T> FunctorMut for CircularArray<T> {
    fn fmap_mut<B, F>(self, function: F) -> CircularArray<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> CircularArray<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for CircularArray<T> {
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
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.count
    }
}

impl<T> Semigroup for CircularArray<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Monoid for CircularArray<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CircularArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CircularArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CircularArrayVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CircularArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut array = CircularArray::with_capacity(capacity.max(1));
        while let Some(element) = seq.next_element()? {
            array.push_rear(element);
        }
        Ok(array)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CircularArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CircularArrayVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
