//! Recent-aware shuffle for playback queues
//!
//! Enabling shuffle defers the listener's just-heard tracks toward the end
//! of the new order so an immediate re-shuffle does not replay them: the
//! non-recent tracks are randomly permuted up front, the recent ones keep
//! their relative order at the tail.

use rand::seq::SliceRandom;
use rand::thread_rng;
use rand::Rng;
use std::collections::HashSet;
use verse_core::types::{Queue, TrackId};

/// Enable shuffle on a queue
///
/// Snapshots the current order into `original_order`, then rebuilds
/// `ordered_tracks` as `[permuted non-recent] ++ [recent, order kept]`.
/// `recent` is the listener's recently played list, most recent first;
/// tracks not in the queue are ignored. The position is remapped by track
/// identity so the current track stays current.
pub fn enable(queue: &mut Queue, recent: &[TrackId]) {
    enable_with_rng(queue, recent, &mut thread_rng());
}

/// [`enable`] with an explicit RNG, for deterministic tests
pub fn enable_with_rng<R: Rng>(queue: &mut Queue, recent: &[TrackId], rng: &mut R) {
    let current = queue.current_track().cloned();

    queue.original_order = queue.ordered_tracks.clone();

    let recent_set: HashSet<&TrackId> = recent.iter().collect();

    // Stable partition of the current order: tracks seen recently keep
    // their relative order and move to the tail
    let (recent_part, mut fresh): (Vec<TrackId>, Vec<TrackId>) = queue
        .ordered_tracks
        .drain(..)
        .partition(|t| recent_set.contains(t));

    fresh.shuffle(rng);
    fresh.extend(recent_part);
    queue.ordered_tracks = fresh;

    queue.shuffled = true;
    remap_position(queue, current.as_ref());
}

/// Disable shuffle: restore the pre-shuffle order
///
/// The position is remapped by track identity, so the current track stays
/// current after the restore.
pub fn disable(queue: &mut Queue) {
    let current = queue.current_track().cloned();
    queue.ordered_tracks = queue.original_order.clone();
    queue.shuffled = false;
    remap_position(queue, current.as_ref());
}

/// Point `position` at the given track in the (re)ordered list
fn remap_position(queue: &mut Queue, current: Option<&TrackId>) {
    if let Some(track) = current {
        if let Some(index) = queue.ordered_tracks.iter().position(|t| t == track) {
            queue.position = index;
            return;
        }
    }
    queue.position = 0;
}
