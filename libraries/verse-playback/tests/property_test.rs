//! Property-based tests for the queue state machine
//!
//! Uses proptest to verify the structural invariants across many random
//! inputs: position bounds, permutation preservation, and the shuffle
//! round-trip.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use verse_core::types::{ListenerId, LoopMode, Queue, TrackId};
use verse_playback::{queue, shuffle};

// ===== Helpers =====

fn queue_of(len: usize) -> Queue {
    let tracks = (0..len).map(|i| TrackId::new(format!("track-{i}"))).collect();
    Queue::new(ListenerId::new("listener"), tracks)
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Previous,
    ToggleLoop,
    ToggleShuffle { seed: u64, recent: Vec<usize> },
    Append(usize),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Previous),
        Just(Op::ToggleLoop),
        (any::<u64>(), prop::collection::vec(0usize..100, 0..10))
            .prop_map(|(seed, recent)| Op::ToggleShuffle { seed, recent }),
        (0usize..120).prop_map(Op::Append),
    ]
}

fn apply(queue_state: &mut Queue, op: &Op) {
    match op {
        Op::Next => {
            queue::advance(queue_state);
        }
        Op::Previous => {
            // Boundary failures are expected; the queue must stay valid
            let _ = queue::retreat(queue_state);
        }
        Op::ToggleLoop => {
            queue_state.loop_mode = queue_state.loop_mode.successor();
        }
        Op::ToggleShuffle { seed, recent } => {
            if queue_state.shuffled {
                shuffle::disable(queue_state);
            } else {
                let recent: Vec<TrackId> = recent
                    .iter()
                    .map(|i| TrackId::new(format!("track-{i}")))
                    .collect();
                let mut rng = StdRng::seed_from_u64(*seed);
                shuffle::enable_with_rng(queue_state, &recent, &mut rng);
            }
        }
        Op::Append(i) => {
            queue::append(queue_state, TrackId::new(format!("track-{i}")));
        }
    }
}

// ===== Property Tests =====

proptest! {
    /// Position stays in bounds and the two orderings stay set-equal
    /// after any sequence of operations
    #[test]
    fn invariants_hold_under_arbitrary_operations(
        len in 1usize..40,
        ops in prop::collection::vec(arbitrary_op(), 0..60),
    ) {
        let mut state = queue_of(len);
        for op in &ops {
            apply(&mut state, op);
            prop_assert!(state.invariants_hold(), "violated after {:?}", op);
            prop_assert!(!state.is_empty(), "operations never empty a queue");
        }
    }

    /// Shuffle on then off with no intervening navigation restores the
    /// pre-shuffle order exactly, position included
    #[test]
    fn shuffle_round_trip_is_identity(
        len in 1usize..40,
        start in 0usize..40,
        seed in any::<u64>(),
        recent in prop::collection::vec(0usize..40, 0..20),
    ) {
        let mut state = queue_of(len);
        state.position = start % len;
        let before_tracks = state.ordered_tracks.clone();
        let before_position = state.position;

        let recent: Vec<TrackId> = recent
            .iter()
            .map(|i| TrackId::new(format!("track-{i}")))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        shuffle::enable_with_rng(&mut state, &recent, &mut rng);
        shuffle::disable(&mut state);

        prop_assert_eq!(&state.ordered_tracks, &before_tracks);
        prop_assert_eq!(state.position, before_position);
        prop_assert!(!state.shuffled);
    }

    /// Advancing with a collection loop visits every index and only
    /// in-bounds indices
    #[test]
    fn collection_loop_walks_every_index(len in 2usize..20) {
        let mut state = queue_of(len);
        state.loop_mode = LoopMode::Collection;

        let mut visited = vec![false; len];
        visited[0] = true;
        for _ in 0..len {
            queue::advance(&mut state);
            prop_assert!(state.position < len);
            visited[state.position] = true;
        }
        prop_assert!(visited.iter().all(|v| *v), "a full lap visits every slot");
    }

    /// The track-loop fixed point holds for any starting position
    #[test]
    fn track_loop_never_moves(len in 1usize..20, start in 0usize..20) {
        let mut state = queue_of(len);
        state.position = start % len;
        state.loop_mode = LoopMode::Track;
        let position = state.position;

        for _ in 0..5 {
            queue::advance(&mut state);
            let _ = queue::retreat(&mut state);
            prop_assert_eq!(state.position, position);
        }
    }
}
