//! Error types for the priority queues
//!
//! - [`HeapError`]: returned by handle-based operations such as
//!   [`update_elt`](crate::traits::AddressableQueue::update_elt) when the
//!   caller breaks their documented preconditions.
//! - [`InvariantError`]: returned by the `check_invariants` methods when an
//!   internal structural invariant does not hold.

use std::fmt;

/// Error type for handle-based heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The new value is less extreme than the value it replaces
    PriorityNotRaised,
    /// The handle is no longer valid (element was popped, or the handle
    /// belongs to a different heap)
    InvalidHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::PriorityNotRaised => {
                write!(f, "new value is less extreme than the current value")
            }
            HeapError::InvalidHandle => {
                write!(f, "handle is no longer valid for this heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Error returned when a heap's structural invariants are violated.
///
/// Carries a human-readable description of the first invariant that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
