//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) insert
//! - O(log n) amortized pop
//! - O(log n) amortized `update_elt` (decrease-key towards the extreme)
//! - O(n) bulk rebuild with `update_priorities`
//!
//! Every structural change goes through `meld`, which makes the less extreme
//! of two roots the leftmost child of the other.
//!
//! Nodes live in a [`slotmap`] arena and are linked by `child`, `sibling` and
//! `parent` keys. Relinking only rewrites those keys, so a node never moves
//! and the [`PairingHandle`] returned by [`push`](PairingHeap::push) stays
//! valid until that very node is popped. Slot keys are generational: a handle
//! to a popped node is detected and rejected instead of aliasing a newer node.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::pairing::PairingHeap;
//!
//! let mut heap: PairingHeap<i32> = PairingHeap::new();
//! let h1 = heap.push(1);
//! heap.push(2);
//! heap.push(3);
//! assert_eq!(heap.top(), Some(&3));
//!
//! heap.update_elt(&h1, 5).unwrap();
//! assert_eq!(heap.top(), Some(&5));
//!
//! heap.pop();
//! assert_eq!(heap.top(), Some(&3));
//! ```

use crate::compare::{Compare, Less};
use crate::error::{HeapError, InvariantError};
use crate::stats::OpStats;
use crate::traits::{AddressableQueue, Handle, PriorityQueue};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    struct NodeKey;
}

/// Source of per-instance identities, so a handle cannot be used against a
/// heap it was not issued by.
static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to an element in a pairing heap
///
/// Valid until the element is popped. It is never invalidated by `push`,
/// `update_elt` or `update_priorities`. Handles are tied to the heap that
/// issued them; a clone of that heap does not accept them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    key: NodeKey,
    heap: u64,
}

impl Handle for PairingHandle {}

struct Node<T> {
    elt: T,
    child: Option<NodeKey>,   // leftmost child
    sibling: Option<NodeKey>, // next sibling to the right
    parent: Option<NodeKey>,
}

impl<T> Node<T> {
    fn new(elt: T) -> Self {
        Self {
            elt,
            child: None,
            sibling: None,
            parent: None,
        }
    }
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use pairing_pq::compare::Greater;
/// use pairing_pq::pairing::PairingHeap;
///
/// // Min-oriented queue of distances.
/// let mut heap: PairingHeap<u32, Greater> = PairingHeap::new();
/// let far = heap.push(40);
/// heap.push(25);
/// heap.update_elt(&far, 10).unwrap();
/// assert_eq!(heap.pop(), Some(10));
/// assert_eq!(heap.pop(), Some(25));
/// ```
pub struct PairingHeap<T, C = Less> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    compare: C,
    id: u64,
    stats: OpStats,
}

impl<T, C: Compare<T> + Default> PairingHeap<T, C> {
    /// Creates an empty heap using the comparator's default value
    pub fn new() -> Self {
        Self::with_compare(C::default())
    }

    /// Creates an empty heap with arena room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            root: None,
            compare: C::default(),
            id: next_heap_id(),
            stats: OpStats::default(),
        }
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_compare(compare: C) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            compare,
            id: next_heap_id(),
            stats: OpStats::default(),
        }
    }

    /// Builds a heap from any sequence of elements in O(n)
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, compare: C) -> Self {
        let mut heap = Self::with_compare(compare);
        heap.extend(iter);
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts an element and returns its handle
    ///
    /// Same as [`add_node`](Self::add_node).
    pub fn push(&mut self, value: T) -> PairingHandle {
        self.add_node(value)
    }

    /// Allocates a singleton node for `value` and melds it into the heap
    pub fn add_node(&mut self, value: T) -> PairingHandle {
        let key = self.nodes.insert(Node::new(value));
        self.root = Some(match self.root {
            Some(root) => self.meld(root, key),
            None => key,
        });
        PairingHandle { key, heap: self.id }
    }

    /// Returns the most extreme element
    pub fn top(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].elt)
    }

    /// Removes and returns the most extreme element
    ///
    /// The root's children are detached in sibling order and combined by
    /// repeatedly melding the two front trees of a FIFO queue and appending
    /// the result to its back, until one tree remains.
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root?;

        let mut pending = VecDeque::new();
        let mut next = self.nodes[root].child;
        while let Some(key) = next {
            let node = &mut self.nodes[key];
            next = node.sibling.take();
            node.parent = None;
            pending.push_back(key);
        }

        let removed = self.nodes.remove(root).map(|node| node.elt);
        self.root = self.combine_pairs(pending);
        removed
    }

    /// Replaces the element behind `handle` with a value at least as extreme
    ///
    /// If the node is the root, or the new value is still no more extreme
    /// than its parent, the value is overwritten in place. Otherwise the
    /// node's subtree is cut from its parent and melded with the root.
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element was already popped or
    ///   the handle was issued by another heap
    /// - [`HeapError::PriorityNotRaised`] if `new_value` is less extreme
    ///   than the current value
    pub fn update_elt(&mut self, handle: &PairingHandle, new_value: T) -> Result<(), HeapError> {
        let key = self.resolve(handle)?;

        self.stats.record_comparison();
        if self.compare.compare(&new_value, &self.nodes[key].elt) {
            return Err(HeapError::PriorityNotRaised);
        }

        let parent = match self.nodes[key].parent {
            Some(parent) => parent,
            None => {
                self.nodes[key].elt = new_value;
                return Ok(());
            }
        };

        self.stats.record_comparison();
        let violates_parent = self.compare.compare(&self.nodes[parent].elt, &new_value);
        self.nodes[key].elt = new_value;

        if violates_parent {
            self.cut(key, parent);
            if let Some(root) = self.root {
                self.root = Some(self.meld(root, key));
            }
        }
        Ok(())
    }

    /// Rebuilds heap order after elements were mutated in place
    ///
    /// Every node is visited breadth-first, stripped of its links and melded
    /// into a fresh tree. Nodes are relinked, never reallocated, so all
    /// outstanding handles keep pointing at their elements.
    pub fn update_priorities(&mut self) {
        if self.nodes.len() <= 1 {
            return;
        }
        let Some(root) = self.root else {
            return;
        };

        let mut queue = VecDeque::with_capacity(self.nodes.len());
        queue.push_back(root);
        let mut rebuilt: Option<NodeKey> = None;

        while let Some(key) = queue.pop_front() {
            let node = &mut self.nodes[key];
            if let Some(sibling) = node.sibling.take() {
                queue.push_back(sibling);
            }
            if let Some(child) = node.child.take() {
                queue.push_back(child);
            }
            node.parent = None;

            rebuilt = Some(match rebuilt {
                Some(acc) => self.meld(acc, key),
                None => key,
            });
        }

        self.root = rebuilt;
    }

    /// Returns the element behind `handle`, if it is still in this heap
    pub fn get(&self, handle: &PairingHandle) -> Option<&T> {
        let key = self.resolve(handle).ok()?;
        Some(&self.nodes[key].elt)
    }

    /// Mutable access to the element behind `handle`
    ///
    /// Making the element less extreme, or more extreme than its ancestors,
    /// breaks heap order until [`update_priorities`](Self::update_priorities)
    /// is called. Use [`update_elt`](Self::update_elt) for single decreases.
    pub fn get_mut(&mut self, handle: &PairingHandle) -> Option<&mut T> {
        let key = self.resolve(handle).ok()?;
        Some(&mut self.nodes[key].elt)
    }

    /// Returns true if `handle` refers to an element still in this heap
    pub fn contains(&self, handle: &PairingHandle) -> bool {
        self.resolve(handle).is_ok()
    }

    /// Removes every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Iterates over the elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.elt)
    }

    /// Mutable access to every element in arbitrary order
    ///
    /// Call [`update_priorities`](Self::update_priorities) afterwards if any
    /// priority changed.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.nodes.values_mut().map(|node| &mut node.elt)
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

    /// Consumes the heap, returning the elements most extreme first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }

    /// Walks the tree and verifies every structural invariant:
    /// root placement, parent back-links, heap order along each
    /// parent-child edge, and that every live node is reachable.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let root = match self.root {
            Some(root) => root,
            None if self.nodes.is_empty() => return Ok(()),
            None => {
                return Err(InvariantError::new(format!(
                    "no root but {} live nodes",
                    self.nodes.len()
                )))
            }
        };

        let root_node = self
            .nodes
            .get(root)
            .ok_or_else(|| InvariantError::new("root key is not live"))?;
        if root_node.parent.is_some() || root_node.sibling.is_some() {
            return Err(InvariantError::new("root has a parent or sibling"));
        }

        let mut reached = 1usize;
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            let mut next = self.nodes[parent].child;
            while let Some(child) = next {
                reached += 1;
                if reached > self.nodes.len() {
                    return Err(InvariantError::new("cycle in child/sibling links"));
                }
                let node = &self.nodes[child];
                if node.parent != Some(parent) {
                    return Err(InvariantError::new("child does not link back to its parent"));
                }
                if self.compare.compare(&self.nodes[parent].elt, &node.elt) {
                    return Err(InvariantError::new("child is more extreme than its parent"));
                }
                stack.push(child);
                next = node.sibling;
            }
        }

        if reached != self.nodes.len() {
            return Err(InvariantError::new(format!(
                "{} nodes reachable but {} live",
                reached,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    fn resolve(&self, handle: &PairingHandle) -> Result<NodeKey, HeapError> {
        if handle.heap == self.id && self.nodes.contains_key(handle.key) {
            Ok(handle.key)
        } else {
            Err(HeapError::InvalidHandle)
        }
    }

    /// Melds two parentless trees, returning the new root
    ///
    /// The less extreme root becomes the leftmost child of the other; on a
    /// tie `a` stays on top.
    fn meld(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert!(self.nodes[a].parent.is_none() && self.nodes[b].parent.is_none());
        self.stats.record_meld();
        self.stats.record_comparison();
        if self.compare.compare(&self.nodes[a].elt, &self.nodes[b].elt) {
            self.reparent(a, b);
            b
        } else {
            self.reparent(b, a);
            a
        }
    }

    /// Makes `child` the leftmost child of `parent`
    fn reparent(&mut self, child: NodeKey, parent: NodeKey) {
        let first = self.nodes[parent].child.replace(child);
        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.sibling = first;
    }

    /// Removes `key` (and its subtree) from `parent`'s child list
    fn cut(&mut self, key: NodeKey, parent: NodeKey) {
        let node = &mut self.nodes[key];
        let sibling = node.sibling.take();
        node.parent = None;

        if self.nodes[parent].child == Some(key) {
            self.nodes[parent].child = sibling;
            return;
        }

        let mut prev = self.nodes[parent].child;
        while let Some(prev_key) = prev {
            let prev_node = &mut self.nodes[prev_key];
            if prev_node.sibling == Some(key) {
                prev_node.sibling = sibling;
                return;
            }
            prev = prev_node.sibling;
        }
    }

    /// Combines detached sibling trees front-to-back through a FIFO queue
    fn combine_pairs(&mut self, mut pending: VecDeque<NodeKey>) -> Option<NodeKey> {
        while let Some(first) = pending.pop_front() {
            match pending.pop_front() {
                Some(second) => {
                    let melded = self.meld(first, second);
                    pending.push_back(melded);
                }
                None => return Some(first),
            }
        }
        None
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingHeap<T, C> {
    fn is_empty(&self) -> bool {
        PairingHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        PairingHeap::len(self)
    }

    fn push(&mut self, value: T) {
        self.add_node(value);
    }

    fn top(&self) -> Option<&T> {
        PairingHeap::top(self)
    }

    fn pop(&mut self) -> Option<T> {
        PairingHeap::pop(self)
    }

    fn update_priorities(&mut self) {
        PairingHeap::update_priorities(self)
    }

    fn clear(&mut self) {
        PairingHeap::clear(self)
    }
}

impl<T, C: Compare<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn add_node(&mut self, value: T) -> Self::Handle {
        PairingHeap::add_node(self, value)
    }

    fn update_elt(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError> {
        PairingHeap::update_elt(self, handle, new_value)
    }

    fn get(&self, handle: &Self::Handle) -> Option<&T> {
        PairingHeap::get(self, handle)
    }
}

/// Deep copy with the same tree shape, fresh nodes and a fresh identity.
/// Handles issued by the source are rejected by the copy.
impl<T: Clone, C: Compare<T> + Clone> Clone for PairingHeap<T, C> {
    fn clone(&self) -> Self {
        let mut nodes = SlotMap::with_capacity_and_key(self.nodes.len());
        let mut remap: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(self.nodes.len());
        for (key, node) in &self.nodes {
            remap.insert(key, nodes.insert(Node::new(node.elt.clone())));
        }
        for (key, node) in &self.nodes {
            let copy = &mut nodes[remap[key]];
            copy.child = node.child.map(|k| remap[k]);
            copy.sibling = node.sibling.map(|k| remap[k]);
            copy.parent = node.parent.map(|k| remap[k]);
        }

        Self {
            nodes,
            root: self.root.map(|k| remap[k]),
            compare: self.compare.clone(),
            id: next_heap_id(),
            stats: OpStats::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.nodes.len())
            .field("top", &self.root.map(|root| &self.nodes[root].elt))
            .finish()
    }
}

impl<T, C: Compare<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}
