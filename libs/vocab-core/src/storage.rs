//! Durable progress storage.
//!
//! The progress store never touches the filesystem directly; it goes through
//! this collaborator, so progress handling stays testable without a real
//! storage backend.

use crate::error::PersistenceError;
use crate::types::ProgressSnapshot;
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Key/value style persistence for the progress record.
pub trait ProgressStorage {
    /// Read the saved record. Missing or malformed data yields `None`; this
    /// must never fail loudly.
    fn read(&self) -> Option<ProgressSnapshot>;

    /// Write the record.
    fn write(&self, snapshot: &ProgressSnapshot) -> Result<(), PersistenceError>;
}

impl<T: ProgressStorage> ProgressStorage for Rc<T> {
    fn read(&self) -> Option<ProgressSnapshot> {
        (**self).read()
    }

    fn write(&self, snapshot: &ProgressSnapshot) -> Result<(), PersistenceError> {
        (**self).write(snapshot)
    }
}

/// Progress record stored as a small JSON file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStorage for JsonFileStorage {
    fn read(&self) -> Option<ProgressSnapshot> {
        if !self.path.exists() {
            return None;
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read progress file {:?}: {err}", self.path);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!("ignoring malformed progress file {:?}: {err}", self.path);
                None
            }
        }
    }

    fn write(&self, snapshot: &ProgressSnapshot) -> Result<(), PersistenceError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory storage for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cell: RefCell<Option<ProgressSnapshot>>,
}

impl ProgressStorage for MemoryStorage {
    fn read(&self) -> Option<ProgressSnapshot> {
        *self.cell.borrow()
    }

    fn write(&self, snapshot: &ProgressSnapshot) -> Result<(), PersistenceError> {
        *self.cell.borrow_mut() = Some(*snapshot);
        Ok(())
    }
}
