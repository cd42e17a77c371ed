/// Collaborator traits for the Verse core
///
/// The queue controller and trending engine consume their environment
/// exclusively through these contracts. Concrete implementations (database,
/// HTTP, in-memory) live outside this crate.
use crate::error::Result;
use crate::types::{
    AlbumId, ListenerId, PlaylistId, Queue, ResolvedSource, TrackId, TrackPlayStat,
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Track catalog: resolves identifiers to ordered track lists with
/// ownership/visibility metadata
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Check that a track exists
    async fn resolve_track(&self, id: &TrackId) -> Result<TrackId>;

    /// Resolve an album to its ordered track list
    async fn resolve_album(&self, id: &AlbumId) -> Result<ResolvedSource>;

    /// Resolve a playlist to its ordered track list plus visibility metadata
    async fn resolve_playlist(&self, id: &PlaylistId) -> Result<ResolvedSource>;

    /// The top publicly visible tracks by all-time play count, most played
    /// first (the trending candidate set)
    async fn top_tracks_by_total_plays(&self, limit: usize) -> Result<Vec<TrackPlayStat>>;
}

/// Listening event recorder: records play events and exposes aggregate and
/// recency queries over them
#[async_trait]
pub trait PlayLog: Send + Sync {
    /// Record a play event for a listener
    async fn record_play(&self, listener: &ListenerId, track: &TrackId) -> Result<()>;

    /// Per-track event counts within the trailing window, for every track
    /// with at least one such event
    async fn recent_play_counts(&self, window: chrono::Duration)
        -> Result<HashMap<TrackId, u64>>;

    /// The listener's most recently played tracks, most recent first
    async fn most_recently_played(
        &self,
        listener: &ListenerId,
        limit: usize,
    ) -> Result<Vec<TrackId>>;
}

/// Access control for playlist visibility
#[async_trait]
pub trait AccessControl: Send + Sync {
    /// Whether the listener owns the playlist or the playlist is public
    async fn is_owner_or_public(&self, listener: &ListenerId, playlist: &PlaylistId)
        -> Result<bool>;
}

/// Persistent store for per-listener queue records
///
/// At most one record per owner; `put` is an upsert keyed by `queue.owner`.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Fetch the listener's queue, if one exists
    async fn get(&self, owner: &ListenerId) -> Result<Option<Queue>>;

    /// Create or replace the record for `queue.owner`
    async fn put(&self, queue: Queue) -> Result<()>;

    /// Delete the listener's queue, if one exists
    async fn delete(&self, owner: &ListenerId) -> Result<()>;
}

/// The single, globally shared trending collection
#[async_trait]
pub trait TrendingStore: Send + Sync {
    /// Atomically overwrite the published track list
    async fn publish(&self, tracks: Vec<TrackId>) -> Result<()>;

    /// The currently published list (empty if never published)
    async fn current(&self) -> Result<Vec<TrackId>>;
}
