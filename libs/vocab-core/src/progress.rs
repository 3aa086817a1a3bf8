//! Word progression and persisted learning progress.

use crate::error::LoadError;
use crate::loader::WordSource;
use crate::storage::ProgressStorage;
use crate::types::{ProgressSnapshot, WordRecord};

/// Owns the word list, the cursor into it, and the furthest-progress marker.
///
/// Navigation is circular in both directions. The marker
/// (`last_learned_index`) only ever moves forward within a loaded list;
/// stepping back through already-learned words never lowers it.
pub struct ProgressStore {
    words: Vec<WordRecord>,
    current_index: usize,
    last_learned_index: usize,
    storage: Box<dyn ProgressStorage>,
}

impl ProgressStore {
    pub fn new(storage: Box<dyn ProgressStorage>) -> Self {
        Self {
            words: Vec::new(),
            current_index: 0,
            last_learned_index: 0,
            storage,
        }
    }

    /// Replace the word list from a source.
    ///
    /// Either the whole new list is taken or, on any failure, the previous
    /// list and cursor stay untouched. A successful load resets the cursor to
    /// the furthest-progress marker, clamped to the new list. Returns the
    /// number of words loaded.
    pub fn load(&mut self, source: &mut dyn WordSource) -> Result<usize, LoadError> {
        let words = source.load()?;
        if words.is_empty() {
            return Err(LoadError::EmptyList);
        }
        self.words = words;
        self.last_learned_index = self.last_learned_index.min(self.words.len() - 1);
        self.current_index = self.last_learned_index;
        tracing::debug!(count = self.words.len(), "word list loaded");
        Ok(self.words.len())
    }

    /// Step forward one word, wrapping past the end, and record the progress.
    /// No-op when no list is loaded.
    pub fn next(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.words.len();
        self.last_learned_index = self.last_learned_index.max(self.current_index);
        self.save_progress();
    }

    /// Step back one word, wrapping before the start. Backward motion is not
    /// learning progress: the marker stays put and nothing is persisted.
    pub fn previous(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.current_index = (self.current_index + self.words.len() - 1) % self.words.len();
    }

    /// The record under the cursor, or `None` when no list is loaded.
    pub fn current_word(&self) -> Option<&WordRecord> {
        self.words.get(self.current_index)
    }

    /// Restore the cursor and marker saved by an earlier session. Missing or
    /// unreadable data leaves both at their defaults.
    pub fn restore_progress(&mut self) {
        let Some(snapshot) = self.storage.read() else {
            return;
        };
        self.current_index = snapshot.current_index;
        self.last_learned_index = snapshot.last_learned_index;
        if !self.words.is_empty() {
            self.current_index = self.current_index.min(self.words.len() - 1);
            self.last_learned_index = self.last_learned_index.min(self.words.len() - 1);
        }
    }

    /// Persist the cursor and marker, best effort. A storage failure is
    /// logged and otherwise ignored.
    pub fn save_progress(&self) {
        let snapshot = ProgressSnapshot {
            current_index: self.current_index,
            last_learned_index: self.last_learned_index,
        };
        if let Err(err) = self.storage.write(&snapshot) {
            tracing::warn!("failed to save progress: {err}");
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn last_learned_index(&self) -> usize {
        self.last_learned_index
    }
}
