//! Trending ranking engine
//!
//! Recomputes the published ranking from two signals: all-time play counts
//! (the candidate set, via the catalog) and play counts inside a trailing
//! window (momentum, via the play log). The 1.3/0.7 weighting deliberately
//! favors recent momentum over raw lifetime volume, letting newly popular
//! tracks overtake long-standing high-volume ones.

use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::Mutex;
use verse_core::error::Result;
use verse_core::traits::{PlayLog, TrackCatalog, TrendingStore};
use verse_core::types::TrackId;

/// Weight applied to the all-time play count
const TOTAL_WEIGHT: f64 = 0.7;

/// Weight applied to the trailing-window play count
const RECENT_WEIGHT: f64 = 1.3;

/// Tuning knobs for a ranking run
#[derive(Debug, Clone)]
pub struct TrendingConfig {
    /// Trailing window for the momentum signal
    pub window: chrono::Duration,

    /// How many top tracks (by all-time plays) form the candidate set
    pub candidate_limit: usize,

    /// How many ranked tracks get published
    pub publish_limit: usize,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            window: chrono::Duration::days(7),
            candidate_limit: 50,
            publish_limit: 30,
        }
    }
}

/// Recomputes and publishes the trending collection
pub struct TrendingEngine {
    catalog: Arc<dyn TrackCatalog>,
    play_log: Arc<dyn PlayLog>,
    store: Arc<dyn TrendingStore>,
    config: TrendingConfig,

    /// Serializes whole runs; overlapping executions wait instead of
    /// interleaving partial publishes
    run_lock: Mutex<()>,
}

impl TrendingEngine {
    /// Create an engine over the given collaborators
    pub fn new(
        catalog: Arc<dyn TrackCatalog>,
        play_log: Arc<dyn PlayLog>,
        store: Arc<dyn TrendingStore>,
        config: TrendingConfig,
    ) -> Self {
        Self {
            catalog,
            play_log,
            store,
            config,
            run_lock: Mutex::new(()),
        }
    }

    /// Recompute the ranking and publish the result
    ///
    /// All-or-nothing: the full ranking is computed before any write, and
    /// any collaborator failure aborts the run with no partial publish.
    /// An empty candidate set skips the write entirely, leaving the
    /// previously published list unchanged. Returns the number of tracks
    /// published (0 when skipped). Safe to run repeatedly.
    pub async fn recompute(&self) -> Result<usize> {
        let _guard = self.run_lock.lock().await;

        let recent = self.play_log.recent_play_counts(self.config.window).await?;
        let candidates = self
            .catalog
            .top_tracks_by_total_plays(self.config.candidate_limit)
            .await?;

        if candidates.is_empty() {
            tracing::debug!("no trending candidates; keeping previous ranking");
            return Ok(0);
        }

        let mut scored: Vec<(TrackId, f64)> = candidates
            .into_iter()
            .map(|stat| {
                let recent_plays = recent.get(&stat.track_id).copied().unwrap_or(0);
                let score = score(stat.total_plays, recent_plays);
                (stat.track_id, score)
            })
            .collect();

        // Highest score first; equal scores fall back to ascending track
        // id so reruns over the same inputs publish identical lists
        scored.sort_by(|(id_a, score_a), (id_b, score_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| id_a.cmp(id_b))
        });
        scored.truncate(self.config.publish_limit);

        let ranking: Vec<TrackId> = scored.into_iter().map(|(id, _)| id).collect();
        let published = ranking.len();
        self.store.publish(ranking).await?;

        tracing::info!(published, "trending ranking recomputed");
        Ok(published)
    }
}

/// The trending score for one track
///
/// Missing recent counts enter as 0.
fn score(total_plays: u64, recent_plays: u64) -> f64 {
    total_plays as f64 * TOTAL_WEIGHT + recent_plays as f64 * RECENT_WEIGHT
}
