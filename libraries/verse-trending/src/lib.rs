//! Verse Trending
//!
//! Periodic recomputation of the globally shared trending ranking from
//! play-count signals: lifetime volume weighted against recent momentum,
//! published wholesale to the trending store.

#![forbid(unsafe_code)]

pub mod engine;
pub mod scheduler;

pub use engine::{TrendingConfig, TrendingEngine};
pub use scheduler::TrendingScheduler;
