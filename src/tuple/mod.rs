//! Immutable tuples with a functional interface.
//!
//! An [`FTuple`] is built once and never changes. Every operation returns a
//! new tuple. Absent values are filtered out on construction through
//! [`FTuple::from_options`], so a tuple only ever holds real values.
//!
//! # Examples
//!
//! ```rust
//! use fpds::tuple::FTuple;
//!
//! let tuple = FTuple::from_options([Some(1), None, Some(2)]);
//! assert_eq!(tuple.len(), 2);
//!
//! let doubled = tuple.map(|x| x * 2) + FTuple::from(vec![9]);
//! assert_eq!(doubled.to_string(), "((2, 4, 9))");
//! assert_eq!((doubled * 2).len(), 6);
//! ```

mod ftuple;

pub use ftuple::{FTuple, FTupleIntoIterator, FTupleIterator};
