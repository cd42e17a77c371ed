//! Periodic trending recomputation
//!
//! Runs the engine on a fixed wall-clock interval, fully decoupled from any
//! listener's request path. A failed run is logged and the loop keeps
//! going; the next tick simply tries again.

use crate::engine::TrendingEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Drives [`TrendingEngine::recompute`] on a fixed interval
pub struct TrendingScheduler {
    engine: Arc<TrendingEngine>,
    interval: Duration,
}

impl TrendingScheduler {
    /// Create a scheduler for the given engine
    pub fn new(engine: Arc<TrendingEngine>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    /// Spawn the background task
    ///
    /// The first run fires immediately, then once per interval. Dropping
    /// the returned handle detaches the task; abort it to stop.
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            tracing::info!(interval_secs = self.interval.as_secs(), "trending scheduler started");
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match self.engine.recompute().await {
                    Ok(published) => {
                        tracing::debug!(published, "trending run finished");
                    }
                    Err(e) => {
                        tracing::error!("trending run failed: {e}");
                    }
                }
            }
        })
    }
}
