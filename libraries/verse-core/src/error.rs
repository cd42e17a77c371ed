/// Core error types for Verse
use crate::types::{AlbumId, ListenerId, PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `VerseError`
pub type Result<T> = std::result::Result<T, VerseError>;

/// Core error type for Verse
///
/// Every failure terminates only the operation that raised it; the core
/// never retries internally, and a failed operation leaves the affected
/// queue record untouched.
#[derive(Error, Debug)]
pub enum VerseError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// No live queue for the listener
    #[error("No queue for listener: {0}")]
    QueueNotFound(ListenerId),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Source resolved to zero tracks
    #[error("Source has no tracks: {0}")]
    EmptySource(String),

    /// Navigation past a queue boundary (previous at position 0)
    #[error("Queue boundary: {0}")]
    Boundary(String),

    /// Unrecognized source type
    #[error("Invalid source type: {0}")]
    InvalidSourceType(String),

    /// Store-level errors (for collaborator implementations)
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl VerseError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Create an empty source error
    pub fn empty_source(msg: impl Into<String>) -> Self {
        Self::EmptySource(msg.into())
    }

    /// Create a boundary error
    pub fn boundary(msg: impl Into<String>) -> Self {
        Self::Boundary(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
