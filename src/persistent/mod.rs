//! Persistent (immutable) data structures.
//!
//! - [`PersistentStack`]: LIFO stack built from shared immutable nodes
//!
//! # Structural Sharing
//!
//! Pushing onto a stack creates one node pointing at the existing head, so
//! every stack derived from another shares its nodes instead of copying them.
//! Copying a stack is O(1).
//!
//! # Examples
//!
//! ```rust
//! use fpds::persistent::PersistentStack;
//!
//! let base: PersistentStack<i32> = (1..=3).collect();
//! let left = base.push(4);
//! let right = base.push(5);
//!
//! assert_eq!(base.len(), 3);      // Original unchanged
//! assert_eq!(left.peek(), Ok(&4));
//! assert_eq!(right.peek(), Ok(&5));
//! ```
//!
//! # Thread Safety
//!
//! With the `arc` feature, nodes are shared through `Arc` and
//! `PersistentStack<T>` is `Send + Sync` whenever `T` is.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod stack;

pub use stack::PersistentStack;
pub use stack::PersistentStackIntoIterator;
pub use stack::PersistentStackIterator;

// =============================================================================
// Tests
// =============================================================================
