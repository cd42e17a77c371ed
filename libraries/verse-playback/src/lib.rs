//! Verse Playback
//!
//! The per-listener queue state machine and its orchestration layer.
//!
//! [`queue`] holds the pure navigation transitions, [`shuffle`] the
//! recent-aware shuffle algorithm, and [`QueueController`] wires both to the
//! collaborator traits (catalog, play log, access control, queue store).

#![forbid(unsafe_code)]

pub mod controller;
pub mod queue;
pub mod shuffle;

pub use controller::QueueController;
pub use verse_core::types::{ListenerId, LoopMode, NavOutcome, NavStatus, Queue, SourceType, TrackId};
