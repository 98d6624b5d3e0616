//! Comparator-driven priority queues
//!
//! This crate provides two interchangeable priority queues that share one
//! contract ([`PriorityQueue`]): push, look up the most extreme element, pop
//! it, and rebuild heap order in bulk after elements were mutated in place.
//!
//! - **Binary Heap** ([`binary::BinaryHeap`]): array-backed; O(log n) push and pop,
//!   O(n) bulk construction. The simple baseline.
//! - **Pairing Heap** ([`pairing::PairingHeap`]): arena-backed multi-way tree; O(1)
//!   push, O(log n) amortized pop, and O(log n) amortized `update_elt` through
//!   stable handles ([`AddressableQueue`]).
//!
//! Ordering comes from a [`Compare`] predicate fixed at construction:
//! `compare(a, b)` is true iff `a` is less extreme than `b`. The default,
//! [`Less`], yields a max-heap; [`Greater`] yields a min-heap.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::pairing::PairingHeap;
//!
//! let mut heap: PairingHeap<i32> = PairingHeap::new();
//! let handle = heap.push(1);
//! heap.push(2);
//! heap.push(3);
//! assert_eq!(heap.top(), Some(&3));
//!
//! heap.update_elt(&handle, 5).unwrap();
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.top(), Some(&3));
//! ```

pub mod binary;
pub mod compare;
pub mod error;
pub mod pairing;
pub mod stats;
pub mod traits;

// Re-export the main traits for convenience
pub use compare::{Compare, FnCompare, Greater, Less};
pub use error::{HeapError, InvariantError};
pub use stats::OpStats;
pub use traits::{AddressableQueue, Handle, PriorityQueue};
