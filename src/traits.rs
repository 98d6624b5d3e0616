//! Common traits for the priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the base contract shared by every queue (push, top,
//!   pop, bulk rebuild)
//! - [`AddressableQueue`]: adds stable handles and in-place priority updates
//!
//! Unlike the standard library's `BinaryHeap`, which is bound to `Ord`,
//! these queues are ordered by a [`Compare`](crate::compare::Compare)
//! predicate chosen at construction. The queue always reports the "most
//! extreme" element under that predicate.

use crate::error::HeapError;

/// A handle to an element in an addressable queue
///
/// This is an opaque type that identifies a specific element. It stays valid
/// until that element is popped.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for comparator-ordered priority queues
///
/// # Example
///
/// ```rust
/// use pairing_pq::binary::BinaryHeap;
/// use pairing_pq::PriorityQueue;
///
/// fn drain<Q: PriorityQueue<i32>>(queue: &mut Q) -> Vec<i32> {
///     std::iter::from_fn(|| queue.pop()).collect()
/// }
///
/// let mut heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(drain(&mut heap), vec![3, 2, 1]);
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(1) for the pairing heap.
    fn push(&mut self, value: T);

    /// Returns the most extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn top(&self) -> Option<&T>;

    /// Removes and returns the most extreme element
    ///
    /// # Time Complexity
    /// O(log n), amortized for the pairing heap.
    fn pop(&mut self) -> Option<T>;

    /// Restores the heap invariant after contained elements were mutated
    /// in place
    ///
    /// # Time Complexity
    /// O(n) for all implementations
    fn update_priorities(&mut self);

    /// Removes every element
    fn clear(&mut self);
}

/// Extended trait with handle-based priority updates
///
/// `add_node` returns a handle that can later be passed to `update_elt` to
/// make an element *more* extreme without searching for it.
///
/// # Example
///
/// ```rust
/// use pairing_pq::pairing::PairingHeap;
/// use pairing_pq::{AddressableQueue, PriorityQueue};
///
/// let mut heap: PairingHeap<i32> = PairingHeap::new();
/// let handle = heap.add_node(1);
/// heap.add_node(3);
/// heap.update_elt(&handle, 5).unwrap();
/// assert_eq!(PriorityQueue::top(&heap), Some(&5));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    ///
    /// # Time Complexity
    /// O(1) for the pairing heap
    fn add_node(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a value that is at least as
    /// extreme, restoring heap order
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element was popped or the handle
    ///   belongs to another queue
    /// - [`HeapError::PriorityNotRaised`] if `new_value` is less extreme than
    ///   the current value; the queue is left untouched
    ///
    /// # Time Complexity
    /// Amortized O(log n) for the pairing heap
    fn update_elt(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;

    /// Returns the element behind `handle`, if it is still in the queue
    fn get(&self, handle: &Self::Handle) -> Option<&T>;
}
