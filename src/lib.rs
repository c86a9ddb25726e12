//! # fpds
//!
//! Purpose-tailored container types supporting both imperative and
//! functional programming idioms.
//!
//! ## Overview
//!
//! - **Circular Array**: auto-resizing double-ended circular buffer with
//!   amortized O(1) pushes and pops at both ends and O(1) indexing
//! - **Queues**: FIFO, LIFO and double-ended queues over a private circular
//!   array
//! - **Persistent Stack**: LIFO stack whose immutable nodes are shared
//!   between stacks, O(1) copies
//! - **Fixed Array**: constant-length array that substitutes a backlog value
//!   or a default whenever an absent value is stored
//! - **Control**: a left-biased `Either` with conversions to and from
//!   `Option` (the crate's `Maybe`)
//! - **Functional Tuple**: immutable `FTuple` with folds, accumulations and
//!   `concat`/`merge`/`exhaust` joins
//! - **Iterator combinators**: `concat`, `merge` and `exhaust`
//! - **Type Classes**: `Functor`, `Foldable`, `Semigroup`, `Monoid`, ...
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits
//! - `control`: `Either`
//! - `circular`: `CircularArray`
//! - `queue`: `FifoQueue`, `LifoQueue`, `DoubleQueue`
//! - `persistent`: `PersistentStack`
//! - `array`: `FixedArray`
//! - `iterlib`: iterator combinators
//! - `tuple`: `FTuple`
//! - `arc`: share persistent nodes through `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` for every container
//! - `full`: every feature except `arc`
//!
//! ## Example
//!
//! ```rust
//! use fpds::prelude::*;
//!
//! let mut queue: FifoQueue<i32> = FifoQueue::new();
//! queue.push(1);
//! queue.push(2);
//! assert_eq!(queue.pop(), Ok(1));
//!
//! let base = PersistentStack::new().push(10);
//! let branch = base.push(20);
//! assert_eq!(branch.peek(), Ok(&20));
//! assert_eq!(base.peek(), Ok(&10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpds::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{
        AbsentPolicy, CollectionError, EmptyError, IndexError, InvalidValueError,
    };

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "circular")]
    pub use crate::circular::*;

    #[cfg(feature = "queue")]
    pub use crate::queue::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "iterlib")]
    pub use crate::iterlib::*;

    #[cfg(feature = "tuple")]
    pub use crate::tuple::*;
}

mod error;

pub use error::{AbsentPolicy, CollectionError, EmptyError, IndexError, InvalidValueError};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "circular")]
pub mod circular;

#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "iterlib")]
pub mod iterlib;

#[cfg(feature = "tuple")]
pub mod tuple;
