//! Error types shared by every container in this crate.
//!
//! Each fallible operation returns the narrowest error it can produce:
//!
//! - [`EmptyError`]: `pop`/`peek` on a structure with no elements
//! - [`IndexError`]: indexed access outside `[0, len)`
//! - [`InvalidValueError`]: pushing an absent value into a structure whose
//!   [`AbsentPolicy`](crate::AbsentPolicy) rejects it
//!
//! [`CollectionError`] unifies the three so that code mixing operations can
//! use `?` throughout.
//!
//! # Examples
//!
//! ```rust
//! use fpds::circular::CircularArray;
//! use fpds::CollectionError;
//!
//! fn swap_ends(array: &mut CircularArray<i32>) -> Result<(), CollectionError> {
//!     let front = array.pop_front()?;
//!     let rear = array.pop_rear()?;
//!     array.push_front(rear);
//!     array.push_rear(front);
//!     Ok(())
//! }
//!
//! let mut array: CircularArray<i32> = (1..=3).collect();
//! swap_ends(&mut array).unwrap();
//! assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! let mut empty: CircularArray<i32> = CircularArray::new();
//! assert!(matches!(swap_ends(&mut empty), Err(CollectionError::Empty(_))));
//! ```

use std::fmt;

/// An operation needed at least one element but the structure was empty.
///
/// # Examples
///
/// ```rust
/// use fpds::EmptyError;
///
/// let error = EmptyError {
///     structure: "FifoQueue",
///     operation: "pop",
/// };
/// assert_eq!(format!("{error}"), "FifoQueue::pop: structure is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyError {
    /// The name of the structure the operation was applied to.
    pub structure: &'static str,
    /// The name of the failed operation.
    pub operation: &'static str,
}

impl EmptyError {
    pub(crate) const fn new(structure: &'static str, operation: &'static str) -> Self {
        Self {
            structure,
            operation,
        }
    }
}

impl fmt::Display for EmptyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}::{}: structure is empty",
            self.structure, self.operation
        )
    }
}

impl std::error::Error for EmptyError {}

/// An index was outside the live range `[0, length)`.
///
/// # Examples
///
/// ```rust
/// use fpds::IndexError;
///
/// let error = IndexError {
///     structure: "CircularArray",
///     operation: "get",
///     index: 3,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "CircularArray::get: index 3 out of bounds for length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexError {
    /// The name of the structure the operation was applied to.
    pub structure: &'static str,
    /// The name of the failed operation.
    pub operation: &'static str,
    /// The rejected index.
    pub index: usize,
    /// The number of elements at the time of the call.
    pub length: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length == 0 {
            write!(
                formatter,
                "{}::{}: index {} into an empty structure",
                self.structure, self.operation, self.index
            )
        } else {
            write!(
                formatter,
                "{}::{}: index {} out of bounds for length {}",
                self.structure, self.operation, self.index, self.length
            )
        }
    }
}

impl std::error::Error for IndexError {}

/// An absent value was pushed into a structure configured with
/// [`AbsentPolicy::Reject`](crate::AbsentPolicy::Reject).
///
/// # Examples
///
/// ```rust
/// use fpds::InvalidValueError;
///
/// let error = InvalidValueError {
///     structure: "LifoQueue",
///     operation: "push_option",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "LifoQueue::push_option: absent values cannot be stored"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidValueError {
    /// The name of the structure the operation was applied to.
    pub structure: &'static str,
    /// The name of the failed operation.
    pub operation: &'static str,
}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}::{}: absent values cannot be stored",
            self.structure, self.operation
        )
    }
}

impl std::error::Error for InvalidValueError {}

/// Any error produced by the containers of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// See [`EmptyError`].
    Empty(EmptyError),
    /// See [`IndexError`].
    Index(IndexError),
    /// See [`InvalidValueError`].
    InvalidValue(InvalidValueError),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(error) => write!(formatter, "{error}"),
            Self::Index(error) => write!(formatter, "{error}"),
            Self::InvalidValue(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty(error) => Some(error),
            Self::Index(error) => Some(error),
            Self::InvalidValue(error) => Some(error),
        }
    }
}

impl From<EmptyError> for CollectionError {
    fn from(error: EmptyError) -> Self {
        Self::Empty(error)
    }
}

impl From<IndexError> for CollectionError {
    fn from(error: IndexError) -> Self {
        Self::Index(error)
    }
}

impl From<InvalidValueError> for CollectionError {
    fn from(error: InvalidValueError) -> Self {
        Self::InvalidValue(error)
    }
}

/// How a queue or stack treats an absent value pushed through
/// `push_option`.
///
/// The policy is fixed when the structure is created and is carried over by
/// copies and by `map`.
///
/// # Examples
///
/// ```rust
/// use fpds::AbsentPolicy;
/// use fpds::queue::FifoQueue;
///
/// let mut lenient: FifoQueue<i32> = FifoQueue::new();
/// assert!(lenient.push_option(None).is_ok());
/// assert!(lenient.is_empty());
///
/// let mut strict: FifoQueue<i32> = FifoQueue::with_policy(AbsentPolicy::Reject);
/// assert!(strict.push_option(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AbsentPolicy {
    /// Silently drop absent values.
    #[default]
    Ignore,
    /// Refuse absent values with an [`InvalidValueError`].
    Reject,
}

impl AbsentPolicy {
    /// Applies the policy to `value`.
    ///
    /// Returns `Ok(Some(value))` when there is something to store, `Ok(None)`
    /// when an absent value is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidValueError`] when `value` is `None` and the policy is
    /// [`AbsentPolicy::Reject`].
    pub fn admit<T>(
        self,
        value: Option<T>,
        structure: &'static str,
        operation: &'static str,
    ) -> Result<Option<T>, InvalidValueError> {
        match (value, self) {
            (Some(value), _) => Ok(Some(value)),
            (None, Self::Ignore) => Ok(None),
            (None, Self::Reject) => Err(InvalidValueError {
                structure,
                operation,
            }),
        }
    }
}
