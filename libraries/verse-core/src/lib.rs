//! Verse Core
//!
//! Core types, collaborator traits, and error handling for the Verse
//! playback backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: [`Queue`], [`LoopMode`], [`ResolvedSource`], [`TrackPlayStat`], etc.
//! - **Collaborator Traits**: [`TrackCatalog`], [`PlayLog`], [`AccessControl`],
//!   [`QueueStore`], [`TrendingStore`]
//! - **Error Handling**: Unified [`VerseError`] and [`Result`] types
//!
//! The queue controller and trending engine are built entirely against the
//! collaborator traits; concrete storage, transport, and identity layers live
//! outside this workspace.
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{ListenerId, TrackId, LoopMode, Queue};
//!
//! let listener = ListenerId::new("alice");
//! let tracks = vec![TrackId::new("t1"), TrackId::new("t2")];
//! let queue = Queue::new(listener, tracks);
//!
//! assert_eq!(queue.position, 0);
//! assert_eq!(queue.loop_mode, LoopMode::None);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use traits::{AccessControl, PlayLog, QueueStore, TrackCatalog, TrendingStore};

// Export all types
pub use types::{
    AlbumId, ListenerId, LoopMode, NavOutcome, NavStatus, PlaylistId, Queue, ResolvedSource,
    SourceType, TrackId, TrackPlayStat,
};
