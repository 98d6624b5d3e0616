//! Binary Heap implementation
//!
//! A straightforward array-backed binary heap ordered by a
//! [`Compare`](crate::compare::Compare) predicate. It implements only the base
//! [`PriorityQueue`] trait: elements cannot be re-prioritized individually,
//! only rebuilt in bulk with [`update_priorities`](BinaryHeap::update_priorities).
//!
//! This is the reference baseline for the
//! [`PairingHeap`](crate::pairing::PairingHeap). Use the pairing heap when you
//! need handles and in-place priority updates.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `top`               | O(1)       |
//! | `update_priorities` | O(n)       |
//! | bulk construction   | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::binary::BinaryHeap;
//!
//! let mut heap: BinaryHeap<i32> = BinaryHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.top(), Some(&8));
//! assert_eq!(heap.pop(), Some(8));
//! assert_eq!(heap.top(), Some(&5));
//! ```

use crate::compare::{Compare, Less};
use crate::error::InvariantError;
use crate::stats::OpStats;
use crate::traits::PriorityQueue;

/// An array-backed binary heap
///
/// Slot 0 always holds the most extreme element; the parent of slot `i > 0`
/// is slot `(i - 1) / 2`, and no parent is less extreme than its children.
#[derive(Debug)]
pub struct BinaryHeap<T, C = Less> {
    data: Vec<T>,
    compare: C,
    stats: OpStats,
}

impl<T, C: Compare<T> + Default> BinaryHeap<T, C> {
    /// Creates an empty heap using the comparator's default value
    pub fn new() -> Self {
        Self::with_compare(C::default())
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare: C::default(),
            stats: OpStats::default(),
        }
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_compare(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
            stats: OpStats::default(),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec_with(data: Vec<T>, compare: C) -> Self {
        let mut heap = Self {
            data,
            compare,
            stats: OpStats::default(),
        };
        heap.update_priorities();
        heap
    }

    /// Builds a heap from any sequence of elements in O(n)
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), compare)
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts an element
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the most extreme element
    pub fn top(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the most extreme element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if self.data.len() > 1 {
            self.sift_down(0);
        }

        result
    }

    /// Re-heapifies in place after the contents were mutated
    ///
    /// Sifts down every non-leaf slot, from the last one back to the root.
    pub fn update_priorities(&mut self) {
        let len = self.data.len();
        if len <= 1 {
            return;
        }
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable access to the elements in storage order
    ///
    /// Changing an element's priority breaks heap order until
    /// [`update_priorities`](Self::update_priorities) is called.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the comparator
    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// Operation counters accumulated since creation or the last reset
    pub fn stats(&self) -> OpStats {
        self.stats
    }

    /// Zeroes the operation counters
    pub fn reset_stats(&mut self) {
        self.stats = OpStats::default();
    }

    /// Consumes the heap, returning the underlying storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements most extreme first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    /// Verifies that no slot is more extreme than its parent
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for index in 1..self.data.len() {
            let parent = (index - 1) / 2;
            if self.compare.compare(&self.data[parent], &self.data[index]) {
                return Err(InvariantError::new(format!(
                    "slot {} is more extreme than its parent slot {}",
                    index, parent
                )));
            }
        }
        Ok(())
    }

    /// True if slot `a` is less extreme than slot `b`
    #[inline]
    fn less_extreme(&mut self, a: usize, b: usize) -> bool {
        self.stats.record_comparison();
        self.compare.compare(&self.data[a], &self.data[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.stats.record_swap();
        self.data.swap(a, b);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less_extreme(parent, index) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            // Pick the more extreme child; ties go left.
            let right = left + 1;
            let child = if right < len && self.less_extreme(left, right) {
                right
            } else {
                left
            };

            if !self.less_extreme(index, child) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, value: T) {
        BinaryHeap::push(self, value)
    }

    fn top(&self) -> Option<&T> {
        BinaryHeap::top(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }

    fn update_priorities(&mut self) {
        BinaryHeap::update_priorities(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }
}

/// Deep copy of the contents; the copy starts with zeroed counters.
impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            compare: self.compare.clone(),
            stats: OpStats::default(),
        }
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
