//! Core vocabulary-trainer library: word progression, persisted learning
//! progress, and repeated pronunciation playback.
//!
//! Provides:
//! - [`ProgressStore`]: the word list, circular cursor, and persisted
//!   furthest-progress marker
//! - [`PlaybackController`]: the repeat-three pronunciation state machine
//!   with cancel-and-replace sessions
//! - [`Trainer`]: the facade a view layer drives
//! - File/HTTP word sources, JSON-file progress storage, and a rodio-backed
//!   audio backend

pub mod audio;
pub mod error;
pub mod loader;
pub mod playback;
pub mod progress;
pub mod storage;
pub mod trainer;
pub mod types;

pub use audio::{pronunciation_url, RodioBackend, PRONUNCIATION_BASE_URL};
pub use error::{LoadError, PersistenceError, PlaybackError};
pub use loader::{parse_words, HttpWordSource, JsonFileSource, WordSource};
pub use playback::{
    drive, ActivePlayback, AudioBackend, AudioSink, Completion, PlaybackController,
    PlaybackOutcome, SessionId, REPEAT_COUNT,
};
pub use progress::ProgressStore;
pub use storage::{JsonFileStorage, MemoryStorage, ProgressStorage};
pub use trainer::Trainer;
pub use types::{ProgressSnapshot, WordRecord};
