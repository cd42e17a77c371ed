/// Playback queue types shared across the workspace
use super::ids::{ListenerId, TrackId};
use serde::{Deserialize, Serialize};

/// Loop mode for queue navigation
///
/// Cycles through a fixed period-3 sequence via [`LoopMode::successor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Stop when the queue ends
    #[default]
    None,
    /// Loop the entire collection
    Collection,
    /// Loop the current track only
    Track,
}

impl LoopMode {
    /// The next mode in the toggle cycle: none -> collection -> track -> none
    #[must_use]
    pub fn successor(self) -> Self {
        match self {
            Self::None => Self::Collection,
            Self::Collection => Self::Track,
            Self::Track => Self::None,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Collection => "collection",
            Self::Track => "track",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "collection" => Some(Self::Collection),
            "track" => Some(Self::Track),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of collection a queue is cloned from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// A single track
    Single,
    /// An album
    Album,
    /// A playlist
    Playlist,
}

impl SourceType {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Album => "album",
            Self::Playlist => "playlist",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "album" => Some(Self::Album),
            "playlist" => Some(Self::Playlist),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A listener's playback queue - at most one live record per owner
///
/// `ordered_tracks` is the current playback order; `original_order`
/// preserves the pre-shuffle order and is always a permutation of
/// `ordered_tracks`. The record is replaced wholesale by a re-clone and
/// mutated in place by navigation and toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    /// Listener this queue belongs to
    pub owner: ListenerId,

    /// Current playback order
    pub ordered_tracks: Vec<TrackId>,

    /// Pre-shuffle order (equal to `ordered_tracks` when not shuffled)
    pub original_order: Vec<TrackId>,

    /// Index of the currently playing track
    pub position: usize,

    /// Whether the queue is currently shuffled
    pub shuffled: bool,

    /// Loop mode
    pub loop_mode: LoopMode,

    /// Last update timestamp (Unix epoch seconds)
    pub updated_at: i64,
}

impl Queue {
    /// Create a fresh queue from a resolved source track list
    ///
    /// Starts at position 0 with no loop and no shuffle.
    pub fn new(owner: ListenerId, tracks: Vec<TrackId>) -> Self {
        Self {
            owner,
            ordered_tracks: tracks.clone(),
            original_order: tracks,
            position: 0,
            shuffled: false,
            loop_mode: LoopMode::None,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.ordered_tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.ordered_tracks.is_empty()
    }

    /// The currently playing track, if the queue is non-empty
    pub fn current_track(&self) -> Option<&TrackId> {
        self.ordered_tracks.get(self.position)
    }

    /// Check if a track is already present in the queue
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.ordered_tracks.iter().any(|t| t == track_id)
    }

    /// Verify the structural invariants: position in bounds for non-empty
    /// queues, and the two orderings set-equal
    pub fn invariants_hold(&self) -> bool {
        if !self.ordered_tracks.is_empty() && self.position >= self.ordered_tracks.len() {
            return false;
        }
        let mut current = self.ordered_tracks.clone();
        let mut original = self.original_order.clone();
        current.sort();
        original.sort();
        current == original
    }
}

/// Descriptive result of a navigation call
///
/// `SingleTrackRepeat` and `Exhausted` are successful terminal statuses,
/// not errors - callers must distinguish them from the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavStatus {
    /// Position moved to an adjacent track
    Advanced,
    /// Position wrapped from the end back to the start (collection loop)
    Wrapped,
    /// One-track queue: navigation repeats the only track
    SingleTrackRepeat,
    /// Track loop active: position is a fixed point
    TrackRepeat,
    /// End of queue with no loop: playback should stop until a new clone
    Exhausted,
}

/// A navigation result: the queue after the call plus its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOutcome {
    /// Queue state after the operation
    pub queue: Queue,
    /// What the operation did
    pub status: NavStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_ids(ids: &[&str]) -> Vec<TrackId> {
        ids.iter().copied().map(TrackId::new).collect()
    }

    #[test]
    fn loop_mode_cycle_has_period_three() {
        let start = LoopMode::None;
        let after_three = start.successor().successor().successor();
        assert_eq!(start, after_three);
    }

    #[test]
    fn loop_mode_round_trips_through_strings() {
        for mode in [LoopMode::None, LoopMode::Collection, LoopMode::Track] {
            assert_eq!(LoopMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(LoopMode::from_str("bogus"), None);
    }

    #[test]
    fn new_queue_starts_at_origin() {
        let queue = Queue::new(ListenerId::new("alice"), track_ids(&["a", "b", "c"]));
        assert_eq!(queue.position, 0);
        assert_eq!(queue.loop_mode, LoopMode::None);
        assert!(!queue.shuffled);
        assert_eq!(queue.ordered_tracks, queue.original_order);
        assert!(queue.invariants_hold());
    }

    #[test]
    fn invariants_catch_out_of_bounds_position() {
        let mut queue = Queue::new(ListenerId::new("alice"), track_ids(&["a", "b"]));
        queue.position = 2;
        assert!(!queue.invariants_hold());
    }

    #[test]
    fn invariants_catch_lost_tracks() {
        let mut queue = Queue::new(ListenerId::new("alice"), track_ids(&["a", "b"]));
        queue.ordered_tracks.pop();
        queue.position = 0;
        assert!(!queue.invariants_hold());
    }

    #[test]
    fn source_type_serde_is_lowercase() {
        let json = serde_json::to_string(&SourceType::Playlist).unwrap();
        assert_eq!(json, "\"playlist\"");
    }
}
