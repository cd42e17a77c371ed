//! Queue controller
//!
//! Deterministic, single-owner orchestration of one listener's playback
//! queue over the collaborator traits. Every mutating call serializes per
//! listener (two devices racing on `next` cannot lose an update) and is
//! atomic against exactly one queue record: it mutates a working copy and
//! persists only on success, so a failed call leaves the stored record
//! untouched.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use verse_core::error::{Result, VerseError};
use verse_core::traits::{AccessControl, PlayLog, QueueStore, TrackCatalog};
use verse_core::types::{
    AlbumId, ListenerId, NavOutcome, PlaylistId, Queue, SourceType, TrackId,
};

use crate::{queue, shuffle};

/// Controller for per-listener playback queues
pub struct QueueController {
    catalog: Arc<dyn TrackCatalog>,
    play_log: Arc<dyn PlayLog>,
    access: Arc<dyn AccessControl>,
    store: Arc<dyn QueueStore>,

    /// Per-listener write locks, created lazily
    locks: Mutex<HashMap<ListenerId, Arc<Mutex<()>>>>,
}

impl QueueController {
    /// Create a controller over the given collaborators
    pub fn new(
        catalog: Arc<dyn TrackCatalog>,
        play_log: Arc<dyn PlayLog>,
        access: Arc<dyn AccessControl>,
        store: Arc<dyn QueueStore>,
    ) -> Self {
        Self {
            catalog,
            play_log,
            access,
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Clone a source into a fresh queue, replacing any prior queue wholesale
    ///
    /// Playlists require the listener to own them or the playlist to be
    /// public. Fails with `EmptySource` when the source resolves to zero
    /// tracks.
    pub async fn clone_to_queue(
        &self,
        listener: &ListenerId,
        source_type: SourceType,
        source_id: &str,
    ) -> Result<Queue> {
        let tracks = match source_type {
            SourceType::Single => {
                let id = self.catalog.resolve_track(&TrackId::new(source_id)).await?;
                vec![id]
            }
            SourceType::Album => {
                let source = self.catalog.resolve_album(&AlbumId::new(source_id)).await?;
                source.tracks
            }
            SourceType::Playlist => {
                let playlist_id = PlaylistId::new(source_id);
                let source = self.catalog.resolve_playlist(&playlist_id).await?;
                if !self.access.is_owner_or_public(listener, &playlist_id).await? {
                    return Err(VerseError::permission_denied(format!(
                        "playlist {playlist_id} is private"
                    )));
                }
                source.tracks
            }
        };

        if tracks.is_empty() {
            return Err(VerseError::empty_source(format!(
                "{source_type} {source_id}"
            )));
        }

        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let fresh = Queue::new(listener.clone(), tracks);
        self.store.put(fresh.clone()).await?;
        tracing::debug!(
            listener = %listener,
            source = %source_type,
            tracks = fresh.len(),
            "queue cloned"
        );
        Ok(fresh)
    }

    /// String-typed variant of [`clone_to_queue`] for edge callers
    ///
    /// Maps an unrecognized source type string to `InvalidSourceType`.
    pub async fn clone_to_queue_str(
        &self,
        listener: &ListenerId,
        source_type: &str,
        source_id: &str,
    ) -> Result<Queue> {
        let parsed = SourceType::from_str(source_type)
            .ok_or_else(|| VerseError::InvalidSourceType(source_type.to_string()))?;
        self.clone_to_queue(listener, parsed, source_id).await
    }

    /// Append a resolvable track to the listener's queue (idempotent)
    pub async fn add_track(&self, listener: &ListenerId, track_id: &TrackId) -> Result<Queue> {
        let track_id = self.catalog.resolve_track(track_id).await?;

        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let mut current = self.get_owned(listener).await?;
        if queue::append(&mut current, track_id) {
            current.updated_at = chrono::Utc::now().timestamp();
            self.store.put(current.clone()).await?;
        }
        Ok(current)
    }

    /// Advance to the next track
    pub async fn next(&self, listener: &ListenerId) -> Result<NavOutcome> {
        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let mut current = self.get_owned(listener).await?;
        let before = current.position;
        let status = queue::advance(&mut current);
        if current.position != before {
            current.updated_at = chrono::Utc::now().timestamp();
            self.store.put(current.clone()).await?;
        }
        tracing::trace!(listener = %listener, status = ?status, position = current.position, "next");
        Ok(NavOutcome {
            queue: current,
            status,
        })
    }

    /// Step back to the previous track
    ///
    /// At position 0 this fails with a boundary error and the stored
    /// record is left untouched; there is no wraparound.
    pub async fn previous(&self, listener: &ListenerId) -> Result<NavOutcome> {
        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let mut current = self.get_owned(listener).await?;
        let before = current.position;
        let status = queue::retreat(&mut current)?;
        if current.position != before {
            current.updated_at = chrono::Utc::now().timestamp();
            self.store.put(current.clone()).await?;
        }
        tracing::trace!(listener = %listener, status = ?status, position = current.position, "previous");
        Ok(NavOutcome {
            queue: current,
            status,
        })
    }

    /// Advance the loop mode through its fixed cycle
    pub async fn toggle_loop_mode(&self, listener: &ListenerId) -> Result<Queue> {
        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let mut current = self.get_owned(listener).await?;
        current.loop_mode = current.loop_mode.successor();
        current.updated_at = chrono::Utc::now().timestamp();
        self.store.put(current.clone()).await?;
        Ok(current)
    }

    /// Toggle shuffle on or off
    ///
    /// Enabling asks the play log for the listener's `len / 2` most
    /// recently played tracks and defers them toward the end of the new
    /// order; disabling restores the pre-shuffle order.
    pub async fn toggle_shuffle(&self, listener: &ListenerId) -> Result<Queue> {
        let lock = self.lock_for(listener).await;
        let _guard = lock.lock().await;

        let mut current = self.get_owned(listener).await?;
        if current.shuffled {
            shuffle::disable(&mut current);
        } else {
            let recent = self
                .play_log
                .most_recently_played(listener, current.len() / 2)
                .await?;
            shuffle::enable(&mut current, &recent);
        }
        current.updated_at = chrono::Utc::now().timestamp();
        self.store.put(current.clone()).await?;
        tracing::debug!(listener = %listener, shuffled = current.shuffled, "shuffle toggled");
        Ok(current)
    }

    /// Read the listener's queue without modifying it
    pub async fn get_queue(&self, listener: &ListenerId) -> Result<Queue> {
        self.get_owned(listener).await
    }

    async fn get_owned(&self, listener: &ListenerId) -> Result<Queue> {
        self.store
            .get(listener)
            .await?
            .ok_or_else(|| VerseError::QueueNotFound(listener.clone()))
    }

    async fn lock_for(&self, listener: &ListenerId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        // An entry whose only reference is the map itself is idle; drop it
        // so the map stays bounded by the number of in-flight calls.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(listener.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_store::MemoryLibrary;

    #[tokio::test]
    async fn idle_listener_locks_do_not_accumulate() {
        let library = Arc::new(MemoryLibrary::new());
        library.add_track(TrackId::new("t1"), true).await;
        let controller = QueueController::new(
            library.clone(),
            library.clone(),
            library.clone(),
            library,
        );

        for i in 0..32 {
            let listener = ListenerId::new(format!("listener-{i}"));
            controller
                .clone_to_queue(&listener, SourceType::Single, "t1")
                .await
                .unwrap();
        }

        // Every prior listener's lock was released before the next call, so
        // at most the most recent entry survives the sweep.
        assert!(controller.locks.lock().await.len() <= 1);
    }
}
