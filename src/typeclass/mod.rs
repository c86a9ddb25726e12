//! Type class traits shared by the containers of this crate.
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with a GAT
//! - [`Functor`]: mapping over a container holding at most one value
//! - [`FunctorMut`]: mapping over containers holding many values
//! - [`Foldable`]: folding a structure into a summary value
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//! - [`Sum`], [`Product`]: numeric wrappers selecting a monoid
//!
//! # Examples
//!
//! ```rust
//! use fpds::circular::CircularArray;
//! use fpds::typeclass::{Foldable, FunctorMut, Semigroup, Sum};
//!
//! let array: CircularArray<i32> = (1..=4).collect();
//! let doubled = array.fmap_mut(|element| element * 2);
//! let total: Sum<i32> = doubled.clone().fold_map(Sum);
//! assert_eq!(total, Sum(20));
//!
//! let joined = doubled.combine((9..=10).collect());
//! assert_eq!(joined.len(), 6);
//! ```

mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
