//! Left-biased `Either`.
//!
//! [`Either<L, R>`] holds either a `Left(L)` or a `Right(R)`. The left side
//! is the happy path: `map`, `flat_map` and the [`Functor`] instance act on
//! `Left` and pass a `Right` through untouched, so `Right` plays the role of
//! a short-circuiting alternative.
//!
//! # Examples
//!
//! ```rust
//! use fpds::control::Either;
//!
//! fn halve(n: i32) -> Either<i32, String> {
//!     if n % 2 == 0 {
//!         Either::Left(n / 2)
//!     } else {
//!         Either::Right(format!("{n} is odd"))
//!     }
//! }
//!
//! assert_eq!(Either::Left(12).flat_map(halve).flat_map(halve), Either::Left(3));
//! assert_eq!(
//!     Either::Left(6).flat_map(halve).flat_map(halve),
//!     Either::Right("3 is odd".to_string())
//! );
//! ```

use std::fmt;

use crate::typeclass::{Functor, TypeConstructor};

/// A value that is either a `Left(L)` or a `Right(R)`, biased to the left.
///
/// # Examples
///
/// ```rust
/// use fpds::control::Either;
///
/// let value: Either<i32, String> = Either::Left(21);
/// assert_eq!(value.map(|n| n * 2).get_or(0), 42);
///
/// let alternative: Either<i32, String> = Either::Right("missing".to_string());
/// assert_eq!(alternative.get_or(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The preferred variant.
    Left(L),
    /// The alternative variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Makes a `Left` from `maybe`, or a `Right(right)` when it is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::control::Either;
    ///
    /// assert_eq!(Either::from_option(Some(1), "none"), Either::Left(1));
    /// assert_eq!(Either::from_option(None::<i32>, "none"), Either::Right("none"));
    /// ```
    #[inline]
    pub fn from_option(maybe: Option<L>, right: R) -> Self {
        maybe.map_or(Self::Right(right), Self::Left)
    }

    /// Returns `true` if this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the left value, or `alternative` for a `Right`.
    #[inline]
    pub fn get_or(self, alternative: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => alternative,
        }
    }

    /// Returns the right value, or `alternative` for a `Left`.
    #[inline]
    pub fn get_right_or(self, alternative: R) -> R {
        match self {
            Self::Left(_) => alternative,
            Self::Right(value) => value,
        }
    }

    /// Applies `function` to a left value; a `Right` is passed through.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a partial `function` to a left value.
    ///
    /// When `function` yields `None` the result is `Right(right)`; a `Right`
    /// is passed through and `right` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpds::control::Either;
    ///
    /// let parse = |text: &str| text.parse::<i32>().ok();
    /// assert_eq!(Either::Left("7").map_option(parse, "bad"), Either::Left(7));
    /// assert_eq!(Either::Left("x").map_option(parse, "bad"), Either::Right("bad"));
    /// ```
    pub fn map_option<T, F>(self, function: F, right: R) -> Either<T, R>
    where
        F: FnOnce(L) -> Option<T>,
    {
        match self {
            Self::Left(value) => Either::from_option(function(value), right),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a right value; a `Left` is passed through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the left value; a `Right` short-circuits.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the `Either` by applying the function for its variant.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Keeps the left value and forgets the right one.
    #[inline]
    pub fn into_option(self) -> Option<L> {
        self.left()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

/// `Ok` is the preferred outcome, so it maps to `Left`.
impl<L, R> From<Result<L, R>> for Either<L, R> {
    #[inline]
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = L;
    type WithType<B> = Either<B, R>;
}

/// `fmap_ref` clones a right value into the result.
impl<L, R: Clone> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Either<B, R>
    where
        F: FnOnce(&L) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(1), true, Some(1), None)]
    #[case(Either::Right('r'), false, None, Some('r'))]
    fn test_variant_accessors(
        #[case] value: Either<i32, char>,
        #[case] is_left: bool,
        #[case] left: Option<i32>,
        #[case] right: Option<char>,
    ) {
        assert_eq!(value.is_left(), is_left);
        assert_eq!(value.is_right(), !is_left);
        assert_eq!(value.left_ref().copied(), left);
        assert_eq!(value.right_ref().copied(), right);
        assert_eq!(value.left(), left);
        assert_eq!(value.right(), right);
    }

    #[rstest]
    fn test_map_passes_right_through() {
        let right: Either<i32, &str> = Either::Right("stop");
        assert_eq!(right.map(|n| n + 1), Either::Right("stop"));
        assert_eq!(right.map_right(str::len), Either::Right(4));
        assert_eq!(Either::<i32, &str>::Left(1).map_right(str::len), Either::Left(1));
    }

    #[rstest]
    fn test_swap_and_fold() {
        let value: Either<i32, String> = Either::Left(5);
        assert_eq!(value.clone().swap(), Either::Right(5));
        assert_eq!(value.fold(|n| n * 2, |text| text.len() as i32), 10);
    }

    #[rstest]
    fn test_result_conversion_is_left_biased() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<i32, String> = ok.into();
        assert_eq!(either, Either::Left(42));
        let result: Result<i32, String> = Either::Right("error".to_string()).into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_fmap_ref_keeps_original() {
        let value: Either<i32, String> = Either::Left(3);
        assert_eq!(value.fmap_ref(|n| n * 3), Either::Left(9));
        assert_eq!(value, Either::Left(3));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Either::<i32, &str>::Left(1).to_string(), "Left(1)");
        assert_eq!(Either::<i32, &str>::Right("no").to_string(), "Right(no)");
    }
}
