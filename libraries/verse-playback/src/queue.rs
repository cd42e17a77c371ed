//! Queue navigation transitions
//!
//! Pure state-machine functions over [`Queue`]. Every transition either
//! mutates the queue in place and reports what it did, or fails without
//! touching it - the controller persists only on success.

use verse_core::error::{Result, VerseError};
use verse_core::types::{LoopMode, NavStatus, Queue, TrackId};

/// Advance to the next track
///
/// Transition rules, evaluated in order:
/// 1. One-track queue: no movement, single-track repeat.
/// 2. Track loop: no movement, the position is a fixed point.
/// 3. Otherwise step forward; at the end either wrap (collection loop)
///    or clamp at the last index and report the queue exhausted.
pub fn advance(queue: &mut Queue) -> NavStatus {
    debug_assert!(!queue.is_empty(), "navigation requires a non-empty queue");

    if queue.len() == 1 {
        return NavStatus::SingleTrackRepeat;
    }
    if queue.loop_mode == LoopMode::Track {
        return NavStatus::TrackRepeat;
    }

    let next = queue.position + 1;
    if next == queue.len() {
        if queue.loop_mode == LoopMode::Collection {
            queue.position = 0;
            NavStatus::Wrapped
        } else {
            // Clamp at the end; playback stops until a new clone
            NavStatus::Exhausted
        }
    } else {
        queue.position = next;
        NavStatus::Advanced
    }
}

/// Step back to the previous track
///
/// Symmetric to [`advance`] for the one-track and track-loop cases.
/// At position 0 there is no wraparound: the call fails with a boundary
/// error and the queue is left unmodified.
pub fn retreat(queue: &mut Queue) -> Result<NavStatus> {
    debug_assert!(!queue.is_empty(), "navigation requires a non-empty queue");

    if queue.len() == 1 {
        return Ok(NavStatus::SingleTrackRepeat);
    }
    if queue.loop_mode == LoopMode::Track {
        return Ok(NavStatus::TrackRepeat);
    }

    if queue.position == 0 {
        return Err(VerseError::boundary("already at the first track"));
    }
    queue.position -= 1;
    Ok(NavStatus::Advanced)
}

/// Append a track to both orderings
///
/// Idempotent by track id: returns `false` without modifying the queue
/// when the track is already present.
pub fn append(queue: &mut Queue, track_id: TrackId) -> bool {
    if queue.contains(&track_id) {
        return false;
    }
    queue.ordered_tracks.push(track_id.clone());
    queue.original_order.push(track_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_core::types::ListenerId;

    fn make_queue(ids: &[&str]) -> Queue {
        Queue::new(
            ListenerId::new("listener"),
            ids.iter().copied().map(TrackId::new).collect(),
        )
    }

    #[test]
    fn advance_steps_forward() {
        let mut queue = make_queue(&["a", "b", "c"]);
        assert_eq!(advance(&mut queue), NavStatus::Advanced);
        assert_eq!(queue.position, 1);
        assert_eq!(advance(&mut queue), NavStatus::Advanced);
        assert_eq!(queue.position, 2);
    }

    #[test]
    fn advance_at_end_without_loop_is_exhausted() {
        let mut queue = make_queue(&["a", "b", "c"]);
        queue.position = 2;
        assert_eq!(advance(&mut queue), NavStatus::Exhausted);
        assert_eq!(queue.position, 2, "position clamps at the last index");
    }

    #[test]
    fn advance_at_end_with_collection_loop_wraps() {
        let mut queue = make_queue(&["a", "b", "c"]);
        queue.position = 2;
        queue.loop_mode = LoopMode::Collection;
        assert_eq!(advance(&mut queue), NavStatus::Wrapped);
        assert_eq!(queue.position, 0);
    }

    #[test]
    fn track_loop_is_a_fixed_point() {
        let mut queue = make_queue(&["a", "b", "c"]);
        queue.position = 1;
        queue.loop_mode = LoopMode::Track;
        for _ in 0..5 {
            assert_eq!(advance(&mut queue), NavStatus::TrackRepeat);
            assert_eq!(queue.position, 1);
        }
    }

    #[test]
    fn single_track_repeats_in_both_directions() {
        let mut queue = make_queue(&["only"]);
        assert_eq!(advance(&mut queue), NavStatus::SingleTrackRepeat);
        assert_eq!(retreat(&mut queue).unwrap(), NavStatus::SingleTrackRepeat);
        assert_eq!(queue.position, 0);
    }

    #[test]
    fn retreat_at_origin_fails_and_leaves_queue_unchanged() {
        let mut queue = make_queue(&["a", "b", "c"]);
        let before = queue.clone();
        let err = retreat(&mut queue).unwrap_err();
        assert!(matches!(err, VerseError::Boundary(_)));
        assert_eq!(queue, before);
    }

    #[test]
    fn retreat_steps_back() {
        let mut queue = make_queue(&["a", "b", "c"]);
        queue.position = 2;
        assert_eq!(retreat(&mut queue).unwrap(), NavStatus::Advanced);
        assert_eq!(queue.position, 1);
    }

    #[test]
    fn retreat_has_no_wraparound_under_collection_loop() {
        let mut queue = make_queue(&["a", "b", "c"]);
        queue.loop_mode = LoopMode::Collection;
        assert!(retreat(&mut queue).is_err());
    }

    #[test]
    fn append_adds_to_both_orderings() {
        let mut queue = make_queue(&["a", "b"]);
        assert!(append(&mut queue, TrackId::new("c")));
        assert_eq!(queue.ordered_tracks.len(), 3);
        assert_eq!(queue.original_order.len(), 3);
        assert!(queue.invariants_hold());
    }

    #[test]
    fn append_is_idempotent() {
        let mut queue = make_queue(&["a", "b"]);
        assert!(!append(&mut queue, TrackId::new("a")));
        assert_eq!(queue.ordered_tracks.len(), 2);
    }
}
