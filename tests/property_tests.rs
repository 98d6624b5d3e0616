//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify against a
//! plain `Vec` model that the queue invariants are always maintained.

use pairing_pq::binary::BinaryHeap;
use pairing_pq::pairing::{PairingHandle, PairingHeap};
use pairing_pq::{Compare, Greater, HeapError, InvariantError, Less, PriorityQueue};
use proptest::prelude::*;

/// Structural self-check shared by both heaps
trait Checked {
    fn check(&self) -> Result<(), InvariantError>;
}

impl<C: Compare<i32>> Checked for BinaryHeap<i32, C> {
    fn check(&self) -> Result<(), InvariantError> {
        self.check_invariants()
    }
}

impl<C: Compare<i32>> Checked for PairingHeap<i32, C> {
    fn check(&self) -> Result<(), InvariantError> {
        self.check_invariants()
    }
}

/// Push/pop against a model; top, len and structure checked after every step
fn check_push_pop_matches_model<Q>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError>
where
    Q: PriorityQueue<i32> + Checked + Default,
{
    let mut queue = Q::default();
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !model.is_empty() {
            let expected = *model.iter().max().unwrap();
            prop_assert_eq!(queue.pop(), Some(expected));
            let pos = model.iter().position(|&v| v == expected).unwrap();
            model.swap_remove(pos);
        } else {
            queue.push(value);
            model.push(value);
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.is_empty(), model.is_empty());
        prop_assert_eq!(queue.top().copied(), model.iter().max().copied());
        prop_assert!(queue.check().is_ok(), "{:?}", queue.check());
    }

    Ok(())
}

/// Draining yields every pushed value, most extreme first
fn check_drain_order<Q, C>(values: Vec<i32>, compare: C) -> Result<(), TestCaseError>
where
    Q: PriorityQueue<i32> + Default,
    C: Compare<i32>,
{
    let mut queue = Q::default();
    for v in &values {
        queue.push(*v);
    }

    let mut drained = Vec::new();
    while let Some(v) = queue.pop() {
        drained.push(v);
    }

    prop_assert_eq!(drained.len(), values.len());
    for pair in drained.windows(2) {
        prop_assert!(!compare.compare(&pair[0], &pair[1]), "out of order: {:?}", pair);
    }

    let mut a = drained;
    let mut b = values;
    a.sort_unstable();
    b.sort_unstable();
    prop_assert_eq!(a, b);
    Ok(())
}

fn sorted_desc(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

proptest! {
    #[test]
    fn test_binary_push_pop_matches_model(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..150)) {
        check_push_pop_matches_model::<BinaryHeap<i32>>(ops)?;
    }

    #[test]
    fn test_pairing_push_pop_matches_model(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..150)) {
        check_push_pop_matches_model::<PairingHeap<i32>>(ops)?;
    }

    #[test]
    fn test_binary_drain_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_drain_order::<BinaryHeap<i32>, _>(values.clone(), Less)?;
        check_drain_order::<BinaryHeap<i32, Greater>, _>(values, Greater)?;
    }

    #[test]
    fn test_pairing_drain_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_drain_order::<PairingHeap<i32>, _>(values.clone(), Less)?;
        check_drain_order::<PairingHeap<i32, Greater>, _>(values, Greater)?;
    }

    #[test]
    fn test_binary_bulk_load_matches_pushes(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        let bulk = BinaryHeap::from_vec_with(values.clone(), Less);
        prop_assert!(bulk.check_invariants().is_ok());
        prop_assert_eq!(bulk.into_sorted_vec(), sorted_desc(values));
    }

    #[test]
    fn test_binary_update_priorities_after_corruption(
        values in prop::collection::vec(-1000i32..1000, 0..100),
        noise in prop::collection::vec(-1000i32..1000, 100),
    ) {
        let mut heap: BinaryHeap<i32> = values.into_iter().collect();
        for (v, n) in heap.iter_mut().zip(&noise) {
            *v = *n;
        }
        heap.update_priorities();
        prop_assert!(heap.check_invariants().is_ok());

        let expected = sorted_desc(heap.iter().copied().collect());
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn test_pairing_update_priorities_after_corruption(
        values in prop::collection::vec(-1000i32..1000, 0..100),
        pops in 0usize..20,
        noise in prop::collection::vec(-1000i32..1000, 100),
    ) {
        let mut heap: PairingHeap<i32> = PairingHeap::new();
        let handles: Vec<PairingHandle> = values.iter().map(|v| heap.push(*v)).collect();
        // Pops first, so the rebuild starts from a non-trivial tree shape.
        for _ in 0..pops.min(values.len()) {
            heap.pop();
        }

        let mut expected = Vec::new();
        for (h, n) in handles.iter().zip(&noise) {
            if let Some(v) = heap.get_mut(h) {
                *v = *n;
                expected.push((*h, *n));
            }
        }
        heap.update_priorities();
        prop_assert!(heap.check_invariants().is_ok());

        for (h, n) in &expected {
            prop_assert_eq!(heap.get(h), Some(n));
        }
        let drained = heap.into_sorted_vec();
        prop_assert_eq!(drained, sorted_desc(expected.iter().map(|(_, n)| *n).collect()));
    }

    #[test]
    fn test_pairing_update_elt_interleaved_with_pops(
        initial in prop::collection::vec(-100i32..100, 1..60),
        ops in prop::collection::vec((0usize..60, 0i32..200, prop::bool::weighted(0.2)), 0..80),
    ) {
        let mut heap: PairingHeap<i32> = PairingHeap::new();
        let handles: Vec<PairingHandle> = initial.iter().map(|v| heap.push(*v)).collect();
        let mut live: Vec<Option<i32>> = initial.iter().map(|v| Some(*v)).collect();

        for (idx, raise, should_pop) in ops {
            if should_pop {
                let expected = live.iter().flatten().max().copied();
                let popped = heap.pop();
                prop_assert_eq!(popped, expected);
                if popped.is_some() {
                    // Exactly one handle went stale; it must have held the popped value.
                    let gone: Vec<usize> = (0..handles.len())
                        .filter(|&i| live[i].is_some() && !heap.contains(&handles[i]))
                        .collect();
                    prop_assert_eq!(gone.len(), 1);
                    prop_assert_eq!(live[gone[0]], popped);
                    live[gone[0]] = None;
                }
            } else if idx < handles.len() {
                let result = heap.update_elt(&handles[idx], live[idx].unwrap_or(0) + raise);
                match live[idx] {
                    Some(old) => {
                        prop_assert_eq!(result, Ok(()));
                        live[idx] = Some(old + raise);
                        prop_assert_eq!(heap.get(&handles[idx]), Some(&(old + raise)));
                    }
                    None => prop_assert_eq!(result, Err(HeapError::InvalidHandle)),
                }
            }

            prop_assert_eq!(heap.len(), live.iter().flatten().count());
            prop_assert_eq!(heap.top().copied(), live.iter().flatten().max().copied());
            prop_assert!(heap.check_invariants().is_ok(), "{:?}", heap.check_invariants());
        }

        let remaining = sorted_desc(live.iter().flatten().copied().collect());
        prop_assert_eq!(heap.into_sorted_vec(), remaining);
    }

    #[test]
    fn test_pairing_rejects_lowering(values in prop::collection::vec(-100i32..100, 1..40), idx in 0usize..40, drop_by in 1i32..50) {
        let mut heap: PairingHeap<i32> = PairingHeap::new();
        let handles: Vec<PairingHandle> = values.iter().map(|v| heap.push(*v)).collect();
        let idx = idx % handles.len();
        let before = heap.clone().into_sorted_vec();

        let result = heap.update_elt(&handles[idx], values[idx] - drop_by);
        prop_assert_eq!(result, Err(HeapError::PriorityNotRaised));
        prop_assert_eq!(heap.get(&handles[idx]), Some(&values[idx]));
        prop_assert_eq!(heap.into_sorted_vec(), before);
    }

    #[test]
    fn test_pairing_clone_is_independent(
        values in prop::collection::vec(-100i32..100, 0..60),
        extra in prop::collection::vec(-100i32..100, 0..20),
        pops in 0usize..30,
    ) {
        let original: PairingHeap<i32> = values.iter().copied().collect();
        let mut copy = original.clone();
        prop_assert!(copy.check_invariants().is_ok());

        for v in extra {
            copy.push(v);
        }
        for _ in 0..pops {
            copy.pop();
        }

        prop_assert_eq!(original.len(), values.len());
        prop_assert_eq!(original.into_sorted_vec(), sorted_desc(values));
    }

    #[test]
    fn test_clone_drains_like_original(values in prop::collection::vec(-100i32..100, 0..60)) {
        let pairing: PairingHeap<i32> = values.iter().copied().collect();
        prop_assert_eq!(pairing.clone().into_sorted_vec(), pairing.into_sorted_vec());

        let binary: BinaryHeap<i32> = values.into_iter().collect();
        prop_assert_eq!(binary.clone().into_sorted_vec(), binary.into_sorted_vec());
    }
}
