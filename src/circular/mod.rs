//! Auto-resizing circular array.
//!
//! [`CircularArray`] is the storage primitive behind every queue of this
//! crate. It is a double-ended buffer with:
//!
//! - amortized O(1) pushes and pops at both ends
//! - O(1) indexed reads and writes
//! - O(1) length
//!
//! # Resizing
//!
//! A push into a full array doubles the capacity. A pop that leaves the array
//! at most one quarter full halves the capacity, as long as the capacity is
//! above [`CircularArray::MINIMUM_SHRINK_CAPACITY`]. Both copy the live
//! elements into fresh storage starting at slot 0.
//!
//! ```text
//! capacity 4, front = 2:   [ c  d  a  b ]      logical: a b c d
//! push_rear(e) -> grow:    [ a  b  c  d  e  _  _  _ ]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpds::circular::CircularArray;
//!
//! let mut array = CircularArray::with_capacity(2);
//! array.push_rear(2);
//! array.push_rear(3);
//! array.push_front(1);
//! array.push_rear(4);
//!
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.get(0), Ok(&1));
//! assert_eq!(array.pop_rear(), Ok(4));
//! assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

mod array;

pub use array::CircularArray;
pub use array::CircularArrayIntoIterator;
pub use array::CircularArrayIterator;
