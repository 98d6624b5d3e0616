//! Ordering predicates for the priority queues
//!
//! Every queue in this crate is parameterized by a [`Compare`] implementation
//! that answers a single question: is `a` *less extreme* than `b`? The queue
//! always reports the element that nothing else beats under that predicate.
//!
//! | Comparator     | `compare(a, b)` | Queue reports |
//! |----------------|-----------------|---------------|
//! | [`Less`]       | `a < b`         | the maximum   |
//! | [`Greater`]    | `a > b`         | the minimum   |
//! | [`FnCompare`]  | user closure    | user-defined  |
//!
//! [`Less`] is the default, which makes a queue built with `new()` a
//! max-heap, the same orientation as `std::collections::BinaryHeap`.
//!
//! The predicate must be a strict weak ordering. It is fixed when the queue
//! is constructed and never changes afterwards.

use std::fmt;

/// A strict weak ordering that decides which element is "most extreme".
///
/// `compare(a, b)` returns true iff `a` is less extreme than `b`.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is less extreme than `b`.
    fn compare(&self, a: &T, b: &T) -> bool;
}

/// `a < b`: the queue yields its largest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// `a > b`: the queue yields its smallest element first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Compare`].
///
/// ```rust
/// use pairing_pq::compare::{Compare, FnCompare};
///
/// // Order tasks by their deadline, earliest first.
/// let by_deadline = FnCompare(|a: &(u32, char), b: &(u32, char)| a.0 > b.0);
/// assert!(by_deadline.compare(&(9, 'z'), &(1, 'a')));
/// ```
#[derive(Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (**self).compare(a, b)
    }
}
