//! The [`FTuple`] type and its iterators.

use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::ops::{Add, Bound, Mul, RangeBounds};

use crate::iterlib::{concat, exhaust, merge};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

/// An immutable tuple of values with a functional interface.
///
/// Nothing mutates a tuple once built. Joining, repeating and mapping all
/// produce new tuples.
///
/// # Time Complexity
///
/// | Operation                   | Complexity |
/// |-----------------------------|------------|
/// | `get`, `len`                | O(1)       |
/// | `slice`, `map`, `+`         | O(n)       |
/// | `* times`                   | O(n·times) |
///
/// # Examples
///
/// ```rust
/// use fpds::tuple::FTuple;
///
/// let tuple: FTuple<i32> = (1..=4).collect();
/// assert_eq!(tuple.get(0), Some(&1));
/// assert_eq!(tuple.get(9), None);
/// assert_eq!(tuple.reduce_left(|sum, x| sum + x), Some(10));
/// assert_eq!(tuple.accumulate(|sum, x| sum + x).to_string(), "((1, 3, 6, 10))");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FTuple<T> {
    elements: Vec<T>,
}

impl<T> FTuple<T> {
    /// Creates an empty tuple.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builds a tuple of the present values, skipping every `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::tuple::FTuple;
    ///
    /// let tuple = FTuple::from_options([None, Some("a"), None, Some("b")]);
    /// assert_eq!(tuple.as_slice(), &["a", "b"]);
    /// ```
    pub fn from_options<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        values.into_iter().flatten().collect()
    }

    /// Returns the number of values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the tuple holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the value at `index`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the values as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the values in order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> FTupleIterator<'_, T> {
        FTupleIterator {
            inner: self.elements.iter(),
        }
    }

    /// Returns a new tuple of the values in `range`.
    ///
    /// Bounds past the end are clamped, and a range whose start lies beyond
    /// its end selects nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::tuple::FTuple;
    ///
    /// let tuple: FTuple<i32> = (0..5).collect();
    /// assert_eq!(tuple.slice(1..3).as_slice(), &[1, 2]);
    /// assert_eq!(tuple.slice(3..).as_slice(), &[3, 4]);
    /// assert!(tuple.slice(4..2).is_empty());
    /// assert_eq!(tuple.slice(..100).len(), 5);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        T: Clone,
        R: RangeBounds<usize>,
    {
        let length = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(length);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .min(length);
        if start >= end {
            return Self::new();
        }
        self.elements[start..end].to_vec().into()
    }

    /// Returns a new tuple with `function` applied to every value.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> FTuple<U>
    where
        F: FnMut(&T) -> U,
    {
        self.elements.iter().map(function).collect()
    }

    /// Folds from first to last, seeding with a clone of the first value.
    ///
    /// Returns `None` for an empty tuple. Use [`Foldable::fold_left`] to fold
    /// from an explicit initial value.
    pub fn reduce_left<F>(&self, mut function: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.elements.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |accumulator, element| function(accumulator, element)))
    }

    /// Folds from last to first, seeding with a clone of the last value.
    ///
    /// Returns `None` for an empty tuple.
    pub fn reduce_right<F>(&self, mut function: F) -> Option<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.elements.iter().rev();
        let last = iter.next()?.clone();
        Some(iter.fold(last, |accumulator, element| function(accumulator, element)))
    }

    /// Returns the running results of a left fold seeded with the first
    /// value. The result has as many values as `self`.
    #[must_use]
    pub fn accumulate<F>(&self, mut function: F) -> Self
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.elements.iter();
        let Some(first) = iter.next() else {
            return Self::new();
        };
        let mut results = Vec::with_capacity(self.len());
        let mut accumulator = first.clone();
        results.push(accumulator.clone());

        for element in iter {
            accumulator = function(accumulator, element);
            results.push(accumulator.clone());
        }

        results.into()
    }

    /// Returns `initial` followed by the running results of a left fold
    /// starting from it. The result has one more value than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::tuple::FTuple;
    ///
    /// let tuple: FTuple<i32> = (1..=3).collect();
    /// let prefixes = tuple.accumulate_from(String::new(), |text, x| format!("{text}{x}"));
    /// assert_eq!(prefixes.as_slice(), &["", "1", "12", "123"]);
    /// ```
    #[must_use]
    pub fn accumulate_from<U, F>(&self, initial: U, mut function: F) -> FTuple<U>
    where
        U: Clone,
        F: FnMut(U, &T) -> U,
    {
        let mut results = Vec::with_capacity(self.len() + 1);
        let mut accumulator = initial;
        results.push(accumulator.clone());

        for element in self {
            accumulator = function(accumulator, element);
            results.push(accumulator.clone());
        }

        results.into()
    }

    /// Maps each value to a tuple and concatenates the results in order.
    #[must_use]
    pub fn flat_map<U, F>(&self, function: F) -> FTuple<U>
    where
        F: FnMut(&T) -> FTuple<U>,
    {
        concat(self.elements.iter().map(function)).collect()
    }

    /// Maps each value to a tuple and merges the results round-robin,
    /// stopping when the shortest one runs out.
    #[must_use]
    pub fn merge_map<U, F>(&self, function: F) -> FTuple<U>
    where
        F: FnMut(&T) -> FTuple<U>,
    {
        merge(self.elements.iter().map(function)).collect()
    }

    /// Maps each value to a tuple and merges the results round-robin until
    /// all of them run out.
    #[must_use]
    pub fn exhaust_map<U, F>(&self, function: F) -> FTuple<U>
    where
        F: FnMut(&T) -> FTuple<U>,
    {
        exhaust(self.elements.iter().map(function)).collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the values of an [`FTuple`].
pub struct FTupleIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for FTupleIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for FTupleIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for FTupleIterator<'_, T> {}

impl<T> FusedIterator for FTupleIterator<'_, T> {}

/// An owning iterator over the values of an [`FTuple`].
pub struct FTupleIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for FTupleIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for FTupleIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for FTupleIntoIterator<T> {}

impl<T> FusedIterator for FTupleIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for FTuple<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for FTuple<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for FTuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for FTuple<T> {
    type Item = T;
    type IntoIter = FTupleIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        FTupleIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FTuple<T> {
    type Item = &'a T;
    type IntoIter = FTupleIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Concatenation: the values of `self` followed by those of `other`.
impl<T> Add for FTuple<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.elements.extend(other.elements);
        self
    }
}

/// Repetition: the values of `self`, `times` times over. Zero gives an empty
/// tuple.
impl<T: Clone> Mul<usize> for FTuple<T> {
    type Output = Self;

    fn mul(self, times: usize) -> Self {
        let mut elements = Vec::with_capacity(self.len().saturating_mul(times));
        for _ in 0..times {
            elements.extend(self.elements.iter().cloned());
        }
        Self { elements }
    }
}

impl<T: fmt::Debug> fmt::Debug for FTuple<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("FTuple");
        for element in &self.elements {
            tuple.field(element);
        }
        tuple.finish()
    }
}

impl<T: fmt::Display> fmt::Display for FTuple<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "((")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "))")
    }
}

static_assertions::assert_impl_all!(FTuple<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for FTuple<T> {
    type Inner = T;
    type WithType<B> = FTuple<B>;
}

impl<T> FunctorMut for FTuple<T> {
    fn fmap_mut<B, F>(self, function: F) -> FTuple<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> FTuple<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for FTuple<T> {
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
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Semigroup for FTuple<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl<T> Monoid for FTuple<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for FTuple<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.elements, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for FTuple<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
