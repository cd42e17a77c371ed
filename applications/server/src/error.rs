/// Server error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] verse_core::VerseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
