//! Queues layered over a private [`CircularArray`](crate::circular::CircularArray).
//!
//! | Queue           | push       | pop        | peek                                 |
//! |-----------------|------------|------------|--------------------------------------|
//! | [`FifoQueue`]   | rear       | front      | `peek_next_out`, `peek_last_in`      |
//! | [`LifoQueue`]   | rear       | rear       | `peek`                               |
//! | [`DoubleQueue`] | either end | either end | `peek_front`, `peek_rear`, `get`     |
//!
//! Every queue owns its buffer exclusively, so `clone` is an O(n) copy that
//! never affects the original.
//!
//! # Absent values
//!
//! A queue never stores an absent value. `push_option(None)` is resolved by
//! the queue's [`AbsentPolicy`](crate::AbsentPolicy): ignored by default,
//! or rejected with an [`InvalidValueError`](crate::InvalidValueError).
//! A queue of `Option<T>` still stores `None` elements pushed with `push`.
//!
//! # Examples
//!
//! ```rust
//! use fpds::queue::{DoubleQueue, FifoQueue, LifoQueue};
//!
//! let mut fifo: FifoQueue<i32> = (1..=3).collect();
//! let mut lifo: LifoQueue<i32> = (1..=3).collect();
//! assert_eq!(fifo.pop(), Ok(1));
//! assert_eq!(lifo.pop(), Ok(3));
//!
//! let mut double: DoubleQueue<i32> = DoubleQueue::new();
//! double.push_front(2);
//! double.push_front(1);
//! double.push_rear(3);
//! assert_eq!(format!("{double}"), ">< 1 | 2 | 3 ><");
//! ```

mod double;
mod fifo;
mod lifo;

pub use double::DoubleQueue;
pub use fifo::FifoQueue;
pub use lifo::LifoQueue;

use std::fmt;

/// Writes `open`, then the elements joined by `separator`, then `close`.
///
/// An empty sequence renders as `open` followed by `close`, padding included,
/// so an empty FIFO queue shows as `<<  <<`.
pub(crate) fn write_delimited<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    elements: I,
    open: &str,
    separator: &str,
    close: &str,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "{open}")?;
    let mut first = true;
    for element in elements {
        if !first {
            write!(formatter, "{separator}")?;
        }
        first = false;
        write!(formatter, "{element}")?;
    }
    write!(formatter, "{close}")
}
