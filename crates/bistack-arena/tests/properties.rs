//! Property tests for BiStack and TempArena allocation invariants.

use bistack_arena::{ArenaError, BiStack, End, TempArena};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Front(usize),
    Back(usize),
    ResetFront,
    ResetBack,
    ResetAll,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..96).prop_map(Op::Front),
        4 => (0usize..96).prop_map(Op::Back),
        1 => Just(Op::ResetFront),
        1 => Just(Op::ResetBack),
        1 => Just(Op::ResetAll),
    ]
}

proptest! {
    #[test]
    fn cursors_never_cross(capacity in 0usize..512, ops in proptest::collection::vec(arb_op(), 0..64)) {
        let mut arena = BiStack::new(capacity);
        for op in ops {
            let before = (arena.used_front(), arena.used_back());
            let remaining = arena.remaining();
            let result = match op {
                Op::Front(n) => Some((n, arena.alloc_front(n))),
                Op::Back(n) => Some((n, arena.alloc_back(n))),
                Op::ResetFront => { arena.reset_front(); None }
                Op::ResetBack => { arena.reset_back(); None }
                Op::ResetAll => { arena.reset_all(); None }
            };
            if let Some((n, result)) = result {
                if n <= remaining {
                    let h = result.unwrap();
                    prop_assert_eq!(h.len(), n);
                } else {
                    prop_assert_eq!(
                        result.unwrap_err(),
                        ArenaError::CapacityExceeded { requested: n, remaining }
                    );
                    prop_assert_eq!((arena.used_front(), arena.used_back()), before);
                }
            }
            prop_assert!(arena.used_front() + arena.used_back() <= arena.capacity());
        }
    }

    #[test]
    fn live_allocations_are_disjoint(sizes in proptest::collection::vec((any::<bool>(), 1usize..48), 1..32)) {
        let mut arena = BiStack::new(512);
        let mut live = Vec::new();
        for (front, size) in sizes {
            let result = if front { arena.alloc_front(size) } else { arena.alloc_back(size) };
            if let Ok(h) = result {
                let tag = live.len() as u8;
                arena.get_mut(&h).unwrap().fill(tag);
                live.push((h, tag));
            }
        }
        for (h, tag) in &live {
            prop_assert!(arena.get(h).unwrap().iter().all(|b| b == tag));
        }
        let mut ranges: Vec<_> = live.iter().map(|(h, _)| (h.offset(), h.offset() + h.len())).collect();
        ranges.sort_unstable();
        for pair in ranges.windows(2) {
            prop_assert!(pair[0].1 <= pair[1].0);
        }
    }

    #[test]
    fn full_reclaim_after_reset_all(capacity in 1usize..1024, front in 0usize..1024, back in 0usize..1024) {
        let mut arena = BiStack::new(capacity);
        let _ = arena.alloc_front(front.min(capacity));
        let _ = arena.alloc_back(back);
        arena.reset_all();
        prop_assert!(arena.alloc_front(capacity).is_ok());
    }

    #[test]
    fn temp_allocations_are_zeroed(sizes in proptest::collection::vec(0usize..64, 1..16)) {
        let mut temp = TempArena::with_capacity(256).unwrap();
        // Dirty the whole buffer first.
        let h = temp.alloc(256).unwrap();
        temp.get_mut(&h).unwrap().fill(0xFF);
        temp.reset();
        for size in sizes {
            match temp.alloc(size) {
                Ok(h) => {
                    prop_assert_eq!(h.len(), size);
                    prop_assert!(temp.get(&h).unwrap().iter().all(|&b| b == 0));
                }
                Err(ArenaError::CapacityExceeded { requested, .. }) => prop_assert_eq!(requested, size),
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }

    #[test]
    fn stale_front_handles_rejected(resets in 1u32..8) {
        let mut arena = BiStack::new(64);
        let h = arena.alloc_front(8).unwrap();
        for _ in 0..resets {
            arena.reset_front();
        }
        let _ = arena.alloc_front(8).unwrap();
        let rejected = matches!(
            arena.get(&h),
            Err(ArenaError::StaleHandle { end: End::Front, .. })
        );
        prop_assert!(rejected);
    }
}
