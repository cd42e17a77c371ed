/// Catalog and play-statistics types
use super::ids::{ListenerId, TrackId};
use serde::{Deserialize, Serialize};

/// A source (single track, album, or playlist) resolved to its track list
///
/// `owner` and `public` carry the visibility metadata the controller needs
/// for playlist permission checks; albums and singles resolve as public
/// with no owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSource {
    /// Ordered track list of the source
    pub tracks: Vec<TrackId>,

    /// Owning listener, if the source has one (playlists)
    pub owner: Option<ListenerId>,

    /// Whether the source is publicly visible
    pub public: bool,
}

impl ResolvedSource {
    /// A source with no ownership restrictions (albums, singles)
    pub fn public(tracks: Vec<TrackId>) -> Self {
        Self {
            tracks,
            owner: None,
            public: true,
        }
    }
}

/// Per-track play-count aggregate, owned by the play log
///
/// Read-only to the core: `recent_plays` counts events inside the
/// trailing window the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPlayStat {
    /// The track these counts belong to
    pub track_id: TrackId,

    /// All-time play count
    pub total_plays: u64,

    /// Play count within the trailing window
    pub recent_plays: u64,
}
