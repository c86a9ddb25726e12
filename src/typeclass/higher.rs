//! Higher-kinded type emulation.
//!
//! Rust has no higher-kinded types, so a container such as `Option` cannot be
//! named without its element type. [`TypeConstructor`] uses a generic
//! associated type to recover "the same container holding `B`", which is all
//! [`Functor`](super::Functor) and friends need.

/// A type of the shape `F<A>` that can be re-applied to another type.
///
/// # Examples
///
/// ```rust
/// use fpds::typeclass::TypeConstructor;
///
/// fn same_shape<T: TypeConstructor<Inner = i32>>(_: &T) {}
///
/// same_shape(&Some(1));
/// same_shape(&vec![1, 2, 3]);
/// ```
pub trait TypeConstructor {
    /// The element type, `A` in `F<A>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
