//! Optional and alternative values.
//!
//! - [`Maybe`]: an optional value (`Option<T>`)
//! - [`Either`]: a left-biased choice between two types
//!
//! The two convert into each other with [`maybe_to_either`] and
//! [`either_to_maybe`]; a `Right` carries the information that a `None`
//! cannot.
//!
//! # Examples
//!
//! ```rust
//! use fpds::control::{Either, Maybe, either_to_maybe, maybe_to_either};
//! use fpds::queue::FifoQueue;
//!
//! let mut queue: FifoQueue<i32> = (1..=2).collect();
//! let first: Maybe<i32> = queue.pop().ok();
//! let labelled = maybe_to_either(first, "queue was empty");
//! assert_eq!(labelled, Either::Left(1));
//!
//! assert_eq!(queue.pop(), Ok(2));
//! let none: Either<i32, &str> = maybe_to_either(queue.pop().ok(), "queue was empty");
//! assert_eq!(either_to_maybe(none), None);
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::{Maybe, either_to_maybe, maybe_to_either};
