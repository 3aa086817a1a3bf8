//! Error types for vocab-core.
//!
//! Nothing here is fatal: load failures leave the previous word list in
//! place, persistence failures degrade to defaults, and playback failures
//! settle the affected session as failed.

use thiserror::Error;

/// Errors from fetching or parsing a word list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch word list: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse word list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word list is empty")]
    EmptyList,
}

/// Errors from the durable progress storage collaborator.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access progress storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode progress record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the platform audio layer. Each one terminates the current
/// playback session; none of them propagates as a panic or crash.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("audio output is unavailable: {0}")]
    AudioUnavailable(String),

    #[error("failed to fetch pronunciation clip: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to decode pronunciation clip: {0}")]
    Decode(String),

    #[error("playback could not start: {0}")]
    Start(String),
}
