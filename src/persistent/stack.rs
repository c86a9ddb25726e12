//! Persistent (immutable) LIFO stack.
//!
//! This module provides [`PersistentStack`], a singly-linked stack whose
//! immutable nodes are shared between every stack built from them.
//!
//! # Overview
//!
//! - O(1) `push`, `pop` and `peek`, none of which alter the receiver
//! - O(1) `len` (stored, not counted)
//! - O(1) copies: a copy is a new handle to the same head node
//!
//! # Structural Sharing
//!
//! ```text
//! s1 = s0.push(10):            10 -> nil
//! s2 = s1.push(20):      20 -> [10 -> nil]   // shares [10] with s1
//! s3 = s1.push(30):      30 -> [10 -> nil]   // shares [10] with s1 and s2
//! ```
//!
//! Popping `s2` yields `20` and a handle equal to `s1`; `s1` and `s3` are
//! untouched because nodes are never mutated.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::ReferenceCounter;
use crate::error::{AbsentPolicy, EmptyError, InvalidValueError};
use crate::typeclass::{Foldable, FunctorMut, Monoid, Semigroup, TypeConstructor};

const STRUCTURE: &str = "PersistentStack";

struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent LIFO stack with structural sharing.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`, `singleton` | O(1)       |
/// | `push`             | O(1)       |
/// | `pop`, `peek`      | O(1)       |
/// | `len`, `copy`      | O(1)       |
/// | `reverse`, `map`   | O(n)       |
///
/// # Examples
///
/// ```rust
/// use fpds::persistent::PersistentStack;
///
/// let s0: PersistentStack<i32> = PersistentStack::new();
/// let s1 = s0.push(10);
/// let s2 = s1.push(20);
///
/// let (top, rest) = s2.pop().unwrap();
/// assert_eq!(*top, 20);
/// assert_eq!(rest, s1);
/// assert!(rest.ptr_eq(&s1));
/// assert_eq!(s1.peek(), Ok(&10));
/// assert_eq!(s0.len(), 0);
/// ```
pub struct PersistentStack<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
    policy: AbsentPolicy,
}

impl<T> PersistentStack<T> {
    /// Creates an empty stack that ignores absent values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = PersistentStack::new();
    /// assert!(stack.is_empty());
    /// assert!(stack.peek().is_err());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(AbsentPolicy::Ignore)
    }

    /// Creates an empty stack with the given [`AbsentPolicy`].
    ///
    /// Every stack derived from it by `push`, `pop` or `map` shares the policy.
    #[inline]
    #[must_use]
    pub const fn with_policy(policy: AbsentPolicy) -> Self {
        Self {
            head: None,
            length: 0,
            policy,
        }
    }

    /// Creates a stack holding a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().push(element)
    }

    /// Returns the policy applied by [`PersistentStack::push_option`].
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> AbsentPolicy {
        self.policy
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a new stack with `element` on top of this one.
    ///
    /// The receiver is unchanged and shares all of its nodes with the result.
    #[must_use]
    pub fn push(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
            policy: self.policy,
        }
    }

    /// Pushes `value` if present; an absent value is handled by the policy.
    ///
    /// When an absent value is ignored, the result is a copy of the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] for `None` under
    /// [`AbsentPolicy::Reject`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::AbsentPolicy;
    /// use fpds::persistent::PersistentStack;
    ///
    /// let lenient = PersistentStack::singleton(1);
    /// assert_eq!(lenient.push_option(None).unwrap().len(), 1);
    ///
    /// let strict = PersistentStack::with_policy(AbsentPolicy::Reject).push(1);
    /// assert!(strict.push_option(None).is_err());
    /// assert_eq!(strict.push_option(Some(2)).unwrap().peek(), Ok(&2));
    /// ```
    pub fn push_option(&self, value: Option<T>) -> Result<Self, InvalidValueError> {
        Ok(match self.policy.admit(value, STRUCTURE, "push_option")? {
            Some(element) => self.push(element),
            None => self.copy(),
        })
    }

    /// Pushes every element in iteration order; the last one ends on top.
    #[must_use]
    pub fn push_all<I: IntoIterator<Item = T>>(&self, elements: I) -> Self {
        elements
            .into_iter()
            .fold(self.copy(), |stack, element| stack.push(element))
    }

    /// Returns the top element together with the stack beneath it.
    ///
    /// The receiver is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&self) -> Result<(&T, Self), EmptyError> {
        let node = self
            .head
            .as_ref()
            .ok_or(EmptyError::new(STRUCTURE, "pop"))?;
        let rest = Self {
            head: node.next.clone(),
            length: self.length - 1,
            policy: self.policy,
        };
        Ok((&node.element, rest))
    }

    /// Returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.head
            .as_ref()
            .map(|node| &node.element)
            .ok_or(EmptyError::new(STRUCTURE, "peek"))
    }

    /// Returns a new handle to the same nodes in O(1).
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
            policy: self.policy,
        }
    }

    /// Returns `true` if both stacks are handles to the same nodes.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.length == other.length
            && match (&self.head, &other.head) {
                (None, None) => true,
                (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
                _ => false,
            }
    }

    /// Returns an iterator from the top to the bottom of the stack.
    ///
    /// Iterating never changes the stack, so every call starts afresh.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentStackIterator<'_, T> {
        PersistentStackIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Folds the elements from the top to the bottom.
    pub fn fold<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, element))
    }

    /// Returns a stack of `function` applied to each element, in the same
    /// order and with the same policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::persistent::PersistentStack;
    ///
    /// let stack: PersistentStack<i32> = (1..=3).collect();
    /// let doubled = stack.map(|x| x * 2);
    /// assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![6, 4, 2]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> PersistentStack<U>
    where
        F: FnMut(&T) -> U,
    {
        let mapped: Vec<U> = self.iter().map(function).collect();
        PersistentStack::with_policy(self.policy).push_all(mapped.into_iter().rev())
    }
}

impl<T: Clone> PersistentStack<T> {
    /// Returns a new stack with the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::with_policy(self.policy).push_all(self.iter().cloned())
    }
}

/// Releases uniquely owned nodes one at a time instead of recursively.
impl<T> Drop for PersistentStack<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`PersistentStack`],
/// from top to bottom.
pub struct PersistentStackIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentStackIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentStackIterator<'_, T> {}

impl<T> FusedIterator for PersistentStackIterator<'_, T> {}

/// An owning iterator over the elements of a [`PersistentStack`], from top
/// to bottom.
///
/// Elements of nodes owned only by this iterator are moved out. Elements of
/// nodes still shared with another stack are cloned.
pub struct PersistentStackIntoIterator<T> {
    stack: PersistentStack<T>,
}

impl<T: Clone> Iterator for PersistentStackIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.head.take()?;
        self.stack.length -= 1;
        match ReferenceCounter::try_unwrap(node) {
            Ok(node) => {
                self.stack.head = node.next;
                Some(node.element)
            }
            Err(shared) => {
                self.stack.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.length, Some(self.stack.length))
    }
}

impl<T: Clone> ExactSizeIterator for PersistentStackIntoIterator<T> {}

impl<T: Clone> FusedIterator for PersistentStackIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// O(1): the clone shares every node with the original.
impl<T> Clone for PersistentStack<T> {
    #[inline]
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Default for PersistentStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the items in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for PersistentStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new().push_all(iter)
    }
}

impl<T: Clone> IntoIterator for PersistentStack<T> {
    type Item = T;
    type IntoIter = PersistentStackIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentStackIntoIterator { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentStack<T> {
    type Item = &'a T;
    type IntoIter = PersistentStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Stacks sharing their nodes are equal without comparing elements.
impl<T: PartialEq> PartialEq for PersistentStack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentStack<T> {}

impl<T: Hash> Hash for PersistentStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders from the bottom to the top, e.g. `|| 1 <- 2 <- 3 ><`.
impl<T: fmt::Display> fmt::Display for PersistentStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(formatter, "||><");
        }
        let bottom_up: Vec<&T> = self.iter().collect();
        write!(formatter, "|| ")?;
        let mut first = true;
        for element in bottom_up.into_iter().rev() {
            if first {
                first = false;
            } else {
                write!(formatter, " <- ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, " ><")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentStack<T> {
    type Inner = T;
    type WithType<B> = PersistentStack<B>;
}

impl<T: Clone> FunctorMut for PersistentStack<T> {
    fn fmap_mut<B, F>(self, mut function: F) -> PersistentStack<B>
    where
        F: FnMut(T) -> B,
    {
        self.map(|element| function(element.clone()))
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> PersistentStack<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

/// `fold_left` runs from the top to the bottom.
impl<T: Clone> Foldable for PersistentStack<T> {
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
        let elements: Vec<&T> = self.iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| {
                function(element.clone(), accumulator)
            })
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

/// Stacks `other` on top of `self`, sharing the nodes of `self`.
impl<T: Clone> Semigroup for PersistentStack<T> {
    fn combine(self, other: Self) -> Self {
        let top_down: Vec<&T> = other.iter().collect();
        self.push_all(top_down.into_iter().rev().cloned())
    }
}

impl<T: Clone> Monoid for PersistentStack<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serialized from the bottom to the top so that deserializing pushes the
/// elements back in their original order.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentStack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let bottom_up: Vec<&T> = self.iter().collect();
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in bottom_up.into_iter().rev() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentStackVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentStackVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = PersistentStack<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut stack = PersistentStack::new();
        while let Some(element) = seq.next_element()? {
            stack = stack.push(element);
        }
        Ok(stack)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentStack<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentStackVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// Sharing across threads is only possible with atomic reference counts.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentStack<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentStack<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn contents<T: Clone>(stack: &PersistentStack<T>) -> Vec<T> {
        stack.iter().cloned().collect()
    }

    #[rstest]
    fn test_push_pop_scenario() {
        let s0: PersistentStack<i32> = PersistentStack::new();
        let s1 = s0.push(10);
        let s2 = s1.push(20);
        let (top, rest) = s2.pop().unwrap();
        assert_eq!(*top, 20);
        assert!(rest.ptr_eq(&s1));
        assert_eq!(s1.peek(), Ok(&10));
        assert_eq!(s0.len(), 0);
        assert_eq!(s2.len(), 2);
    }

    #[rstest]
    fn test_empty_errors() {
        let stack: PersistentStack<i32> = PersistentStack::new();
        assert_eq!(stack.pop().unwrap_err(), EmptyError::new("PersistentStack", "pop"));
        assert_eq!(stack.peek(), Err(EmptyError::new("PersistentStack", "peek")));
    }

    #[rstest]
    fn test_branches_do_not_interfere() {
        let base: PersistentStack<i32> = (1..=3).collect();
        let left = base.push(4);
        let right = base.push(5);
        let (_, popped) = left.pop().unwrap();
        assert_eq!(right.peek(), Ok(&5));
        assert_eq!(right.len(), 4);
        assert_eq!(popped, base);
        assert_eq!(contents(&base), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_copy_shares_nodes() {
        let stack: PersistentStack<String> = ["a", "b"].iter().map(|s| (*s).to_string()).collect();
        let copy = stack.copy();
        assert!(copy.ptr_eq(&stack));
        assert!(!stack.push("c".to_string()).ptr_eq(&stack));
    }

    #[rstest]
    fn test_equal_without_sharing() {
        let left: PersistentStack<i32> = (1..=3).collect();
        let right: PersistentStack<i32> = (1..=3).collect();
        assert!(!left.ptr_eq(&right));
        assert_eq!(left, right);
        assert_ne!(left, right.reverse());
    }

    #[rstest]
    #[case(AbsentPolicy::Ignore, Some(1))]
    #[case(AbsentPolicy::Reject, None)]
    fn test_push_option(#[case] policy: AbsentPolicy, #[case] expected_len: Option<usize>) {
        let stack = PersistentStack::with_policy(policy).push(1);
        assert_eq!(stack.push_option(None).ok().map(|s| s.len()), expected_len);
        assert_eq!(stack.push_option(Some(2)).map(|s| s.len()), Ok(2));
    }

    #[rstest]
    fn test_map_preserves_order_and_policy() {
        let stack: PersistentStack<i32> = PersistentStack::with_policy(AbsentPolicy::Reject)
            .push_all(1..=3);
        let mapped = stack.map(|x| x.to_string());
        assert_eq!(contents(&mapped), vec!["3", "2", "1"]);
        assert_eq!(mapped.policy(), AbsentPolicy::Reject);
    }

    #[rstest]
    fn test_fold_and_foldable() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        assert_eq!(stack.fold(0, |accumulator, x| accumulator * 10 + x), 321);
        assert_eq!(stack.clone().fold_right(0, |x, accumulator| accumulator * 10 + x), 123);
        assert_eq!(stack.to_list(), vec![3, 2, 1]);
    }

    #[rstest]
    fn test_combine_pushes_other_on_top() {
        let bottom: PersistentStack<i32> = (1..=2).collect();
        let top: PersistentStack<i32> = (3..=4).collect();
        let combined = bottom.clone().combine(top);
        assert_eq!(contents(&combined), vec![4, 3, 2, 1]);
        let (_, rest) = combined.pop().unwrap();
        let (_, rest) = rest.pop().unwrap();
        assert!(rest.ptr_eq(&bottom));
    }

    #[rstest]
    fn test_iterator_is_restartable_and_exact() {
        let stack: PersistentStack<i32> = (1..=4).collect();
        let mut iter = stack.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(stack.iter().count(), 4);
    }

    #[rstest]
    fn test_display() {
        let stack: PersistentStack<i32> = (1..=3).collect();
        assert_eq!(stack.to_string(), "|| 1 <- 2 <- 3 ><");
        assert_eq!(PersistentStack::<i32>::new().to_string(), "||><");
    }

    #[derive(Debug)]
    struct Tracked {
        value: i32,
        clones: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                value: self.value,
                clones: std::rc::Rc::clone(&self.clones),
            }
        }
    }

    fn tracked_stack(clones: &std::rc::Rc<std::cell::Cell<usize>>) -> PersistentStack<Tracked> {
        (1..=4)
            .map(|value| Tracked {
                value,
                clones: std::rc::Rc::clone(clones),
            })
            .collect()
    }

    #[rstest]
    fn test_into_iter_moves_out_of_unique_nodes() {
        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let stack = tracked_stack(&clones);
        let values: Vec<i32> = stack.into_iter().map(|tracked| tracked.value).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
        assert_eq!(clones.get(), 0);
    }

    #[rstest]
    fn test_into_iter_clones_only_shared_nodes() {
        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let stack = tracked_stack(&clones);
        let (_, shared) = stack.pop().unwrap();
        let values: Vec<i32> = stack.into_iter().map(|tracked| tracked.value).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
        assert_eq!(clones.get(), 3);
        assert_eq!(shared.len(), 3);
    }

    #[rstest]
    fn test_fold_left_moves_out_of_unique_nodes() {
        let clones = std::rc::Rc::new(std::cell::Cell::new(0));
        let total = tracked_stack(&clones).fold_left(0, |sum, tracked| sum + tracked.value);
        assert_eq!(total, 10);
        assert_eq!(clones.get(), 0);
    }

    #[rstest]
    fn test_dropping_long_chain() {
        let stack: PersistentStack<u32> = (0..200_000).collect();
        let shared = stack.pop().map(|(_, rest)| rest).unwrap();
        drop(stack);
        assert_eq!(shared.len(), 199_999);
        drop(shared);
    }
}
