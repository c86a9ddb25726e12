//! `Maybe`, the crate's name for an optional value, and its conversions to
//! and from [`Either`].

use super::Either;

/// An optional value: `Some(value)` or `None` ("nothing").
///
/// `Maybe` is `Option` itself, so the whole `Option` API and the
/// [`Functor`](crate::typeclass::Functor) and
/// [`Foldable`](crate::typeclass::Foldable) instances apply unchanged.
pub type Maybe<T> = Option<T>;

/// Makes a `Left` from a present value, or `Right(right)` from `None`.
///
/// # Examples
///
/// ```rust
/// use fpds::control::{Either, maybe_to_either};
///
/// assert_eq!(maybe_to_either(Some(3), "empty"), Either::Left(3));
/// assert_eq!(maybe_to_either(None::<i32>, "empty"), Either::Right("empty"));
/// ```
#[inline]
pub fn maybe_to_either<L, R>(maybe: Maybe<L>, right: R) -> Either<L, R> {
    Either::from_option(maybe, right)
}

/// Keeps a left value and discards a right one.
///
/// # Examples
///
/// ```rust
/// use fpds::control::{Either, either_to_maybe};
///
/// assert_eq!(either_to_maybe(Either::<i32, &str>::Left(3)), Some(3));
/// assert_eq!(either_to_maybe(Either::<i32, &str>::Right("no")), None);
/// ```
#[inline]
pub fn either_to_maybe<L, R>(either: Either<L, R>) -> Maybe<L> {
    either.into_option()
}
