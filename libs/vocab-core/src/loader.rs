//! Word-list loading and normalization.
//!
//! A source yields either a JSON array of word records or a single record,
//! which is normalized into a one-element list. Any other shape is a load
//! error, and an empty list is rejected outright so a failed fetch can never
//! masquerade as an empty-but-valid session.

use crate::error::LoadError;
use crate::types::WordRecord;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// External collaborator that produces an ordered word list.
///
/// A load either yields the complete list or fails; implementations must not
/// return partial results.
pub trait WordSource {
    fn load(&mut self) -> Result<Vec<WordRecord>, LoadError>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordPayload {
    Many(Vec<WordRecord>),
    One(WordRecord),
}

/// Parse a JSON payload into a non-empty word list.
pub fn parse_words(json: &str) -> Result<Vec<WordRecord>, LoadError> {
    let words = match serde_json::from_str(json)? {
        WordPayload::Many(words) => words,
        WordPayload::One(word) => vec![word],
    };
    if words.is_empty() {
        return Err(LoadError::EmptyList);
    }
    Ok(words)
}

/// Word list stored as a JSON file on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for JsonFileSource {
    fn load(&mut self) -> Result<Vec<WordRecord>, LoadError> {
        let content = fs::read_to_string(&self.path)?;
        parse_words(&content)
    }
}

/// Word list fetched over HTTP. One best-effort request per load, no retries.
pub struct HttpWordSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpWordSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl WordSource for HttpWordSource {
    fn load(&mut self) -> Result<Vec<WordRecord>, LoadError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        parse_words(&body)
    }
}
