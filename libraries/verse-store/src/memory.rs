//! In-memory library: catalog, play log, access control, queue store, and
//! trending store over `RwLock`ed maps

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use verse_core::error::{Result, VerseError};
use verse_core::traits::{AccessControl, PlayLog, QueueStore, TrackCatalog, TrendingStore};
use verse_core::types::{
    AlbumId, ListenerId, PlaylistId, Queue, ResolvedSource, TrackId, TrackPlayStat,
};

#[derive(Debug, Clone)]
struct TrackRecord {
    public: bool,
}

#[derive(Debug, Clone)]
struct PlaylistRecord {
    tracks: Vec<TrackId>,
    owner: ListenerId,
    public: bool,
}

#[derive(Debug, Clone)]
struct PlayEvent {
    listener: ListenerId,
    track: TrackId,
    at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    tracks: HashMap<TrackId, TrackRecord>,
    albums: HashMap<AlbumId, Vec<TrackId>>,
    playlists: HashMap<PlaylistId, PlaylistRecord>,
    plays: Vec<PlayEvent>,
    queues: HashMap<ListenerId, Queue>,
    trending: Vec<TrackId>,
}

/// In-memory implementation of all Verse collaborator traits
///
/// One `MemoryLibrary` plays the role of the track catalog, the listening
/// event recorder, access control, the queue store, and the trending store
/// at once. Seed it with [`add_track`](MemoryLibrary::add_track) and
/// friends before use.
#[derive(Default)]
pub struct MemoryLibrary {
    inner: RwLock<Inner>,
}

impl MemoryLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a track
    pub async fn add_track(&self, id: TrackId, public: bool) {
        let mut inner = self.inner.write().await;
        inner.tracks.insert(id, TrackRecord { public });
    }

    /// Register an album with its ordered track list
    pub async fn add_album(&self, id: AlbumId, tracks: Vec<TrackId>) {
        let mut inner = self.inner.write().await;
        inner.albums.insert(id, tracks);
    }

    /// Register a playlist with its ordered track list and visibility
    pub async fn add_playlist(
        &self,
        id: PlaylistId,
        owner: ListenerId,
        public: bool,
        tracks: Vec<TrackId>,
    ) {
        let mut inner = self.inner.write().await;
        inner.playlists.insert(
            id,
            PlaylistRecord {
                tracks,
                owner,
                public,
            },
        );
    }

    /// Record a play event with an explicit timestamp (test/backfill helper)
    pub async fn record_play_at(
        &self,
        listener: &ListenerId,
        track: &TrackId,
        at: DateTime<Utc>,
    ) {
        let mut inner = self.inner.write().await;
        inner.plays.push(PlayEvent {
            listener: listener.clone(),
            track: track.clone(),
            at,
        });
    }
}

#[async_trait]
impl TrackCatalog for MemoryLibrary {
    async fn resolve_track(&self, id: &TrackId) -> Result<TrackId> {
        let inner = self.inner.read().await;
        if inner.tracks.contains_key(id) {
            Ok(id.clone())
        } else {
            Err(VerseError::TrackNotFound(id.clone()))
        }
    }

    async fn resolve_album(&self, id: &AlbumId) -> Result<ResolvedSource> {
        let inner = self.inner.read().await;
        inner
            .albums
            .get(id)
            .map(|tracks| ResolvedSource::public(tracks.clone()))
            .ok_or_else(|| VerseError::AlbumNotFound(id.clone()))
    }

    async fn resolve_playlist(&self, id: &PlaylistId) -> Result<ResolvedSource> {
        let inner = self.inner.read().await;
        inner
            .playlists
            .get(id)
            .map(|record| ResolvedSource {
                tracks: record.tracks.clone(),
                owner: Some(record.owner.clone()),
                public: record.public,
            })
            .ok_or_else(|| VerseError::PlaylistNotFound(id.clone()))
    }

    async fn top_tracks_by_total_plays(&self, limit: usize) -> Result<Vec<TrackPlayStat>> {
        let inner = self.inner.read().await;

        let mut totals: HashMap<&TrackId, u64> = HashMap::new();
        for event in &inner.plays {
            if inner.tracks.get(&event.track).is_some_and(|t| t.public) {
                *totals.entry(&event.track).or_insert(0) += 1;
            }
        }

        let mut stats: Vec<TrackPlayStat> = totals
            .into_iter()
            .map(|(track_id, total_plays)| TrackPlayStat {
                track_id: track_id.clone(),
                total_plays,
                recent_plays: 0,
            })
            .collect();
        // Most played first, ids break ties for a stable listing
        stats.sort_by(|a, b| {
            b.total_plays
                .cmp(&a.total_plays)
                .then_with(|| a.track_id.cmp(&b.track_id))
        });
        stats.truncate(limit);
        Ok(stats)
    }
}

#[async_trait]
impl PlayLog for MemoryLibrary {
    async fn record_play(&self, listener: &ListenerId, track: &TrackId) -> Result<()> {
        self.record_play_at(listener, track, Utc::now()).await;
        Ok(())
    }

    async fn recent_play_counts(&self, window: Duration) -> Result<HashMap<TrackId, u64>> {
        let cutoff = Utc::now() - window;
        let inner = self.inner.read().await;

        let mut counts = HashMap::new();
        for event in &inner.plays {
            if event.at >= cutoff {
                *counts.entry(event.track.clone()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn most_recently_played(
        &self,
        listener: &ListenerId,
        limit: usize,
    ) -> Result<Vec<TrackId>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let inner = self.inner.read().await;

        let mut events: Vec<&PlayEvent> = inner
            .plays
            .iter()
            .filter(|e| &e.listener == listener)
            .collect();
        events.sort_by_key(|e| std::cmp::Reverse(e.at));

        // Deduplicate, keeping only each track's most recent event
        let mut seen = Vec::with_capacity(limit);
        for event in events {
            if !seen.contains(&event.track) {
                seen.push(event.track.clone());
                if seen.len() == limit {
                    break;
                }
            }
        }
        Ok(seen)
    }
}

#[async_trait]
impl AccessControl for MemoryLibrary {
    async fn is_owner_or_public(
        &self,
        listener: &ListenerId,
        playlist: &PlaylistId,
    ) -> Result<bool> {
        let inner = self.inner.read().await;
        let record = inner
            .playlists
            .get(playlist)
            .ok_or_else(|| VerseError::PlaylistNotFound(playlist.clone()))?;
        Ok(record.public || &record.owner == listener)
    }
}

#[async_trait]
impl QueueStore for MemoryLibrary {
    async fn get(&self, owner: &ListenerId) -> Result<Option<Queue>> {
        let inner = self.inner.read().await;
        Ok(inner.queues.get(owner).cloned())
    }

    async fn put(&self, queue: Queue) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.queues.insert(queue.owner.clone(), queue);
        Ok(())
    }

    async fn delete(&self, owner: &ListenerId) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.queues.remove(owner);
        Ok(())
    }
}

#[async_trait]
impl TrendingStore for MemoryLibrary {
    async fn publish(&self, tracks: Vec<TrackId>) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.trending = tracks;
        Ok(())
    }

    async fn current(&self) -> Result<Vec<TrackId>> {
        let inner = self.inner.read().await;
        Ok(inner.trending.clone())
    }
}
