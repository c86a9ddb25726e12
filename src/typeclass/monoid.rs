//! Semigroups with an identity element.

use std::ops::{Add, Mul};

use super::{Product, Semigroup, Sum};

/// A [`Semigroup`] with an identity element.
///
/// ```text
/// Self::empty().combine(a) == a == a.combine(Self::empty())
/// ```
///
/// # Examples
///
/// ```rust
/// use fpds::typeclass::{Monoid, Sum};
///
/// assert_eq!(Sum::combine_all([Sum(1), Sum(2), Sum(3)]), Sum(6));
/// assert_eq!(Sum::<i32>::combine_all([]), Sum(0));
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}
