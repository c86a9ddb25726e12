//! Functor type classes.
//!
//! [`Functor`] maps with a `FnOnce` and suits containers of at most one value
//! (`Option`, [`Either`](crate::control::Either)). [`FunctorMut`] maps with a
//! `FnMut` and is what the multi-element containers of this crate implement.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! The same laws hold for `fmap_mut`.

use super::TypeConstructor;

/// Mapping over a container holding at most one value.
///
/// # Examples
///
/// ```rust
/// use fpds::typeclass::Functor;
///
/// let value: Option<i32> = Some(5);
/// assert_eq!(value.fmap(|n| n.to_string()), Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value, leaving the
    /// receiver untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

/// Mapping over a container holding any number of values.
///
/// The shape is preserved: same length, same order.
///
/// # Examples
///
/// ```rust
/// use fpds::typeclass::FunctorMut;
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(numbers.fmap_mut(|n| n * 2), vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference to every element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
