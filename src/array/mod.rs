//! Fixed-length arrays.
//!
//! A [`FixedArray`] keeps its length for its whole life and never holds an
//! absent value. Storing `None` takes a replacement from the array's
//! [`Backstore`] or, once that runs dry, clones the array's default value.
//!
//! Any queue of this crate can serve as the backstore:
//!
//! | Backstore                                   | Taken next         |
//! |---------------------------------------------|--------------------|
//! | [`DoubleQueue`](crate::queue::DoubleQueue)  | front              |
//! | [`CircularArray`](crate::circular::CircularArray) | front        |
//! | [`PersistentStack`](crate::persistent::PersistentStack) | top    |
//!
//! # Examples
//!
//! ```rust
//! use fpds::array::{Alignment, FixedArray};
//! use fpds::persistent::PersistentStack;
//!
//! let spares = PersistentStack::new().push(8).push(9);
//! let mut board =
//!     FixedArray::with_backstore(vec![1, 2, 3], None, Alignment::Left, 0, spares);
//!
//! assert_eq!(board.set(1, None), Ok(2));
//! assert_eq!(board.set(2, None), Ok(3));
//! assert_eq!(board.set(0, None), Ok(1));
//! assert_eq!(board.to_string(), "[|0, 9, 8|]");
//! ```

mod backstore;
mod fixed;

pub use backstore::Backstore;
pub use fixed::{Alignment, FixedArray};
