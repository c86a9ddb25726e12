//! The [`FixedArray`] type.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Backstore;
use crate::circular::{CircularArray, CircularArrayIterator};
use crate::error::IndexError;
use crate::iterlib::{concat, exhaust, merge};
use crate::queue::DoubleQueue;
use crate::typeclass::{Foldable, FunctorMut, TypeConstructor};

const STRUCTURE: &str = "FixedArray";

/// Which end of the data a sized [`FixedArray`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Keep the leading data: pad on the right, or slice off trailing data.
    #[default]
    Left,
    /// Keep the trailing data: pad on the left, or slice off leading data.
    Right,
}

/// A constant-length array that never stores an absent value.
///
/// Storing `None` through [`FixedArray::set`] stores the next value of the
/// backlog instead, or a clone of the array's default value when the backlog
/// is empty. No method changes the length.
///
/// The backlog is any [`Backstore`]; [`DoubleQueue`] unless chosen otherwise.
///
/// # Examples
///
/// ```rust
/// use fpds::array::{Alignment, FixedArray};
///
/// let mut array = FixedArray::with_size(1..=5, 3, Alignment::Left, 0);
/// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// // 4 and 5 were sliced off onto the backlog.
/// assert_eq!(array.set(0, None), Ok(1));
/// assert_eq!(array.set(1, None), Ok(2));
/// assert_eq!(array.set(2, None), Ok(3));
/// assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![4, 5, 0]);
/// ```
#[derive(Clone)]
pub struct FixedArray<T, B = DoubleQueue<T>> {
    slots: CircularArray<T>,
    backlog: B,
    default: T,
}

impl<T> FixedArray<T> {
    /// Creates an array holding `data`, sized to it.
    #[must_use]
    pub fn new<I: IntoIterator<Item = T>>(data: I, default: T) -> Self {
        let slots: CircularArray<T> = data.into_iter().collect();
        Self {
            slots,
            backlog: DoubleQueue::new(),
            default,
        }
    }

    /// Creates an array of exactly `size` slots from `data`.
    ///
    /// Missing data is padded with `default`; surplus data is put on the
    /// backlog in its original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::array::{Alignment, FixedArray};
    ///
    /// let left = FixedArray::with_size(vec![1, 2], 4, Alignment::Left, 0);
    /// let right = FixedArray::with_size(vec![1, 2], 4, Alignment::Right, 0);
    /// assert_eq!(left.to_string(), "[|1, 2, 0, 0|]");
    /// assert_eq!(right.to_string(), "[|0, 0, 1, 2|]");
    ///
    /// let sliced = FixedArray::with_size(vec![1, 2, 3], 2, Alignment::Right, 0);
    /// assert_eq!(sliced.to_string(), "[|2, 3|]");
    /// assert_eq!(sliced.backstore().peek_front(), Ok(&1));
    /// ```
    #[must_use]
    pub fn with_size<I>(data: I, size: usize, alignment: Alignment, default: T) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        Self::with_backstore(data, Some(size), alignment, default, DoubleQueue::new())
    }
}

impl<T, B: Backstore<T>> FixedArray<T, B> {
    /// Creates an array from `data` drawing replacements from `backstore`.
    ///
    /// With `size` of `None` the array is sized to the data and `alignment`
    /// has no effect. Sliced-off data is given to `backstore` so that it is
    /// taken back in its original order, ahead of values already there.
    pub fn with_backstore<I>(
        data: I,
        size: Option<usize>,
        alignment: Alignment,
        default: T,
        mut backstore: B,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let mut incoming: CircularArray<T> = data.into_iter().collect();
        let size = size.unwrap_or_else(|| incoming.len());
        let mut slots = CircularArray::with_capacity(size);
        match alignment {
            Alignment::Left => {
                while slots.len() < size {
                    slots.push_rear(incoming.pop_front().unwrap_or_else(|_| default.clone()));
                }
                while let Ok(surplus) = incoming.pop_rear() {
                    backstore.give(surplus);
                }
            }
            Alignment::Right => {
                while slots.len() < size {
                    slots.push_front(incoming.pop_rear().unwrap_or_else(|_| default.clone()));
                }
                while let Ok(surplus) = incoming.pop_rear() {
                    backstore.give(surplus);
                }
            }
        }
        Self {
            slots,
            backlog: backstore,
            default,
        }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` for a zero-length array.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value substituted for `None` once the backlog is empty.
    #[inline]
    #[must_use]
    pub const fn default(&self) -> &T {
        &self.default
    }

    /// Returns the backlog.
    #[inline]
    #[must_use]
    pub const fn backstore(&self) -> &B {
        &self.backlog
    }

    /// Puts `value` on the backlog, to be used by the next `set(_, None)`.
    pub fn push_backstore(&mut self, value: T) {
        self.backlog.give(value);
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.slots.get(index).map_err(|error| IndexError {
            structure: STRUCTURE,
            ..error
        })
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.slots.get_mut(index).map_err(|error| IndexError {
            structure: STRUCTURE,
            ..error
        })
    }

    /// Returns an iterator over the values; `.rev()` walks backwards.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> CircularArrayIterator<'_, T> {
        self.slots.iter()
    }

    /// Reverses the values in place.
    pub fn reverse(&mut self) {
        let slots = std::mem::take(&mut self.slots);
        self.slots = slots.into_iter().rev().collect();
    }

    /// Replaces every value with `function` applied to it.
    pub fn map_in_place<F>(&mut self, function: F)
    where
        F: FnMut(&mut T),
    {
        self.slots.map_in_place(function);
    }
}

impl<T: Clone, B: Backstore<T>> FixedArray<T, B> {
    /// Stores `value` at `index`, returning the value it replaces.
    ///
    /// `None` stores the next backlog value, or a clone of the default.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] unless `index < len()`. Nothing is taken from
    /// the backlog in that case.
    pub fn set(&mut self, index: usize, value: Option<T>) -> Result<T, IndexError> {
        if index >= self.slots.len() {
            return Err(IndexError {
                structure: STRUCTURE,
                operation: "set",
                index,
                length: self.slots.len(),
            });
        }
        let value = value
            .or_else(|| self.backlog.take())
            .unwrap_or_else(|| self.default.clone());
        self.slots.set(index, value).map_err(|error| IndexError {
            structure: STRUCTURE,
            ..error
        })
    }
}

impl<T: PartialEq, B> FixedArray<T, B> {
    /// Returns `true` if some value differs from the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::array::FixedArray;
    ///
    /// assert!(!FixedArray::new(vec![0, 0], 0).has_non_default());
    /// assert!(FixedArray::new(vec![0, 7], 0).has_non_default());
    /// ```
    #[must_use]
    pub fn has_non_default(&self) -> bool {
        self.slots.iter().any(|value| *value != self.default)
    }
}

impl<T, B> FixedArray<T, B> {
    /// Returns a new array of `function` applied to each value and to the
    /// default. The new array's backlog is empty.
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> FixedArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let default = function(&self.default);
        FixedArray {
            slots: self.slots.map(function),
            backlog: DoubleQueue::new(),
            default,
        }
    }

    /// Maps each value to an array and concatenates the results.
    ///
    /// The default of the result is the default of `function(default())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::array::FixedArray;
    ///
    /// let array = FixedArray::new(vec![1, 2], 0);
    /// let flattened = array.flat_map(|&n| FixedArray::new(vec![n; n], 0));
    /// assert_eq!(flattened.to_string(), "[|1, 2, 2|]");
    /// ```
    #[must_use]
    pub fn flat_map<U, C, F>(&self, function: F) -> FixedArray<U>
    where
        F: FnMut(&T) -> FixedArray<U, C>,
    {
        self.join_with(function, |arrays| concat(arrays).collect())
    }

    /// Maps each value to an array and merges the results round-robin,
    /// stopping when the shortest one runs out.
    #[must_use]
    pub fn merge_map<U, C, F>(&self, function: F) -> FixedArray<U>
    where
        F: FnMut(&T) -> FixedArray<U, C>,
    {
        self.join_with(function, |arrays| merge(arrays).collect())
    }

    /// Maps each value to an array and merges the results round-robin
    /// until all of them run out.
    #[must_use]
    pub fn exhaust_map<U, C, F>(&self, function: F) -> FixedArray<U>
    where
        F: FnMut(&T) -> FixedArray<U, C>,
    {
        self.join_with(function, |arrays| exhaust(arrays).collect())
    }

    fn join_with<U, C, F, J>(&self, mut function: F, join: J) -> FixedArray<U>
    where
        F: FnMut(&T) -> FixedArray<U, C>,
        J: FnOnce(Vec<CircularArray<U>>) -> CircularArray<U>,
    {
        let default = function(&self.default).default;
        let arrays = self.slots.iter().map(|value| function(value).slots).collect();
        FixedArray {
            slots: join(arrays),
            backlog: DoubleQueue::new(),
            default,
        }
    }
}

impl<'a, T, B> IntoIterator for &'a FixedArray<T, B> {
    type Item = &'a T;
    type IntoIter = CircularArrayIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Arrays are equal when their values are; defaults and backlogs are not
/// compared.
impl<T: PartialEq, B, C> PartialEq<FixedArray<T, C>> for FixedArray<T, B> {
    fn eq(&self, other: &FixedArray<T, C>) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq, B> Eq for FixedArray<T, B> {}

impl<T: Hash, B> Hash for FixedArray<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
    }
}

impl<T: fmt::Debug, B> fmt::Debug for FixedArray<T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FixedArray")
            .field("data", &self.slots)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, B> fmt::Display for FixedArray<T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[|")?;
        for (position, value) in self.slots.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "|]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, B> TypeConstructor for FixedArray<T, B> {
    type Inner = T;
    type WithType<U> = FixedArray<U>;
}

/// Maps the default along with the values; the backlog is dropped.
impl<T, B> FunctorMut for FixedArray<T, B> {
    fn fmap_mut<U, F>(self, mut function: F) -> FixedArray<U>
    where
        F: FnMut(T) -> U,
    {
        let default = function(self.default);
        FixedArray {
            slots: self.slots.fmap_mut(function),
            backlog: DoubleQueue::new(),
            default,
        }
    }

    fn fmap_ref_mut<U, F>(&self, function: F) -> FixedArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map(function)
    }
}

impl<T, B> Foldable for FixedArray<T, B> {
    fn fold_left<A, F>(self, init: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.slots.fold_left(init, function)
    }

    fn fold_right<A, F>(self, init: A, function: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        self.slots.fold_right(init, function)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.slots.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct FixedArrayRef<'a, T> {
    data: &'a CircularArray<T>,
    default: &'a T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FixedArrayOwned<T> {
    data: CircularArray<T>,
    default: T,
}

/// Serialized as `{"data": [..], "default": ..}`; the backlog is not kept.
#[cfg(feature = "serde")]
impl<T: serde::Serialize, B> serde::Serialize for FixedArray<T, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let helper = FixedArrayRef {
            data: &self.slots,
            default: &self.default,
        };
        serde::Serialize::serialize(&helper, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, B> serde::Deserialize<'de> for FixedArray<T, B>
where
    T: serde::Deserialize<'de>,
    B: Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let FixedArrayOwned { data, default } =
            <FixedArrayOwned<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self {
            slots: data,
            backlog: B::default(),
            default,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::PersistentStack;
    use rstest::rstest;

    fn values<T: Clone, B: Backstore<T>>(array: &FixedArray<T, B>) -> Vec<T> {
        array.iter().cloned().collect()
    }

    #[rstest]
    #[case(vec![1, 2, 3], 5, Alignment::Left, vec![1, 2, 3, 0, 0], vec![])]
    #[case(vec![1, 2, 3], 5, Alignment::Right, vec![0, 0, 1, 2, 3], vec![])]
    #[case(vec![1, 2, 3, 4], 2, Alignment::Left, vec![1, 2], vec![3, 4])]
    #[case(vec![1, 2, 3, 4], 2, Alignment::Right, vec![3, 4], vec![1, 2])]
    #[case(vec![], 2, Alignment::Left, vec![0, 0], vec![])]
    #[case(vec![1, 2], 0, Alignment::Left, vec![], vec![1, 2])]
    fn test_sizing(
        #[case] data: Vec<i32>,
        #[case] size: usize,
        #[case] alignment: Alignment,
        #[case] expected: Vec<i32>,
        #[case] backlog: Vec<i32>,
    ) {
        let array = FixedArray::with_size(data, size, alignment, 0);
        assert_eq!(array.len(), size);
        assert_eq!(values(&array), expected);
        assert_eq!(array.backstore().iter().copied().collect::<Vec<_>>(), backlog);
    }

    #[rstest]
    fn test_new_sizes_to_data() {
        let array = FixedArray::new("abc".chars(), '-');
        assert_eq!(array.len(), 3);
        assert!(FixedArray::new(Vec::<char>::new(), '-').is_empty());
    }

    #[rstest]
    fn test_set_none_uses_backlog_then_default() {
        let mut array = FixedArray::new(vec![1, 2], 0);
        array.push_backstore(9);
        assert_eq!(array.set(0, None), Ok(1));
        assert_eq!(array.set(1, None), Ok(2));
        assert_eq!(values(&array), vec![9, 0]);
        assert_eq!(array.set(1, Some(5)), Ok(0));
        assert_eq!(values(&array), vec![9, 5]);
    }

    #[rstest]
    fn test_set_out_of_range_keeps_backlog() {
        let mut array = FixedArray::new(vec![1], 0);
        array.push_backstore(9);
        let error = array.set(1, None).unwrap_err();
        assert_eq!(error.structure, "FixedArray");
        assert_eq!(error.length, 1);
        assert!(array.get(usize::MAX).is_err());
        assert_eq!(Backstore::len(array.backstore()), 1);
        assert_eq!(array.len(), 1);
    }

    #[rstest]
    fn test_persistent_backstore() {
        let spares: PersistentStack<i32> = (7..=8).collect();
        let mut array =
            FixedArray::with_backstore(vec![1, 2, 3], Some(2), Alignment::Left, 0, spares.clone());
        assert_eq!(array.set(0, None), Ok(1));
        assert_eq!(array.set(1, None), Ok(2));
        assert_eq!(values(&array), vec![3, 8]);
        assert_eq!(spares.len(), 2);
    }

    #[rstest]
    fn test_reverse_in_place_and_get_mut() {
        let mut array = FixedArray::new(1..=4, 0);
        array.reverse();
        *array.get_mut(0).unwrap() *= 10;
        assert_eq!(values(&array), vec![40, 3, 2, 1]);
        assert_eq!(array.iter().rev().next(), Some(&1));
    }

    #[rstest]
    fn test_equality_ignores_default_and_backlog() {
        let mut with_backlog = FixedArray::new(vec![1, 2], 0);
        with_backlog.push_backstore(3);
        let other_default = FixedArray::new(vec![1, 2], 100);
        assert_eq!(with_backlog, other_default);
        assert_ne!(with_backlog, FixedArray::new(vec![2, 1], 0));
    }

    #[rstest]
    fn test_map_maps_default() {
        let array = FixedArray::new(vec![1, 2], 0);
        let mapped = array.map(|n| n + 1);
        assert_eq!(*mapped.default(), 1);
        assert_eq!(values(&mapped), vec![2, 3]);
        let consumed = array.fmap_mut(|n| n.to_string());
        assert_eq!(consumed.default(), "0");
    }

    #[rstest]
    fn test_merge_and_exhaust_map() {
        let array = FixedArray::new(vec![1, 2, 3], 0);
        let repeat = |&n: &i32| FixedArray::new(vec![n; n as usize], -1);
        assert_eq!(values(&array.merge_map(repeat)), vec![1, 2, 3]);
        assert_eq!(values(&array.exhaust_map(repeat)), vec![1, 2, 3, 2, 3, 3]);
        assert_eq!(*array.flat_map(repeat).default(), -1);
    }

    #[rstest]
    fn test_display_and_debug() {
        let array = FixedArray::new(vec![1, 2], 0);
        assert_eq!(array.to_string(), "[|1, 2|]");
        assert_eq!(FixedArray::new(Vec::<i32>::new(), 0).to_string(), "[||]");
        assert_eq!(format!("{array:?}"), "FixedArray { data: [1, 2], default: 0, .. }");
    }
}
