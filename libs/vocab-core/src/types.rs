//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// One entry in the word list. Immutable once loaded; duplicates are legal.
///
/// Only the word token itself is required when deserializing; the other
/// fields default to empty strings. The `mean` and `phonetic_symbol` aliases
/// accept the field names used by the upstream word-list files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Pronounceable token, also the key for the pronunciation clip.
    pub word: String,
    #[serde(default, alias = "mean")]
    pub meaning: String,
    #[serde(default, alias = "phonetic_symbol")]
    pub phonetic: String,
    /// Grouping key, typically the first letter of the word.
    #[serde(default)]
    pub initial: String,
}

/// Flat progress record persisted under a single well-known location.
///
/// `current_index` is the cursor at the last save; `last_learned_index` is
/// the furthest point ever reached, independent of backward navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub current_index: usize,
    pub last_learned_index: usize,
}
