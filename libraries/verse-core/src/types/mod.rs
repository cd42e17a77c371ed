mod catalog;
mod ids;
mod queue;

pub use catalog::{ResolvedSource, TrackPlayStat};
pub use ids::{AlbumId, ListenerId, PlaylistId, TrackId};
pub use queue::{LoopMode, NavOutcome, NavStatus, Queue, SourceType};
