/// Shared application state
use crate::config::ServerConfig;
use std::sync::Arc;
use verse_core::traits::PlayLog;
use verse_core::types::{AlbumId, ListenerId, PlaylistId, TrackId};
use verse_playback::QueueController;
use verse_store::MemoryLibrary;
use verse_trending::TrendingEngine;

pub struct AppState {
    pub library: Arc<MemoryLibrary>,
    pub controller: Arc<QueueController>,
    pub engine: Arc<TrendingEngine>,
}

impl AppState {
    /// Wire the controller and engine over one shared library
    pub fn new(config: &ServerConfig) -> Self {
        let library = Arc::new(MemoryLibrary::new());

        let controller = Arc::new(QueueController::new(
            library.clone(),
            library.clone(),
            library.clone(),
            library.clone(),
        ));

        let engine = Arc::new(TrendingEngine::new(
            library.clone(),
            library.clone(),
            library.clone(),
            config.trending_config(),
        ));

        Self {
            library,
            controller,
            engine,
        }
    }

    /// Seed a small demo catalog: two albums, one public and one private
    /// playlist, and a burst of play events to give trending something to
    /// rank
    pub async fn seed_demo(&self) -> verse_core::error::Result<()> {
        let tracks: Vec<TrackId> = (1..=8).map(|i| TrackId::new(format!("track-{i}"))).collect();
        for track in &tracks {
            self.library.add_track(track.clone(), true).await;
        }

        self.library
            .add_album(AlbumId::new("album-1"), tracks[0..4].to_vec())
            .await;
        self.library
            .add_album(AlbumId::new("album-2"), tracks[4..8].to_vec())
            .await;

        let alice = ListenerId::new("alice");
        let bob = ListenerId::new("bob");
        self.library
            .add_playlist(
                PlaylistId::new("mix-public"),
                alice.clone(),
                true,
                vec![tracks[0].clone(), tracks[5].clone(), tracks[7].clone()],
            )
            .await;
        self.library
            .add_playlist(
                PlaylistId::new("mix-private"),
                alice.clone(),
                false,
                vec![tracks[1].clone(), tracks[2].clone()],
            )
            .await;

        // Uneven play history so the ranking has structure
        for (i, track) in tracks.iter().enumerate() {
            for _ in 0..(tracks.len() - i) {
                self.library.record_play(&alice, track).await?;
            }
        }
        for track in tracks.iter().take(3) {
            self.library.record_play(&bob, track).await?;
        }
        Ok(())
    }
}
