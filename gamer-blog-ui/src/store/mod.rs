//! Entry Store
//!
//! On-device persistence of diary entries. The store is the only durable
//! state of the app; components read and write it through [`EntryStore`].
//!
//! Reads observe every earlier write from the same client. There is no
//! locking: concurrent writers (two tabs) resolve as last write wins.

pub mod backend;
pub mod kv;

pub use backend::{KeyValueBackend, MemoryBackend};
pub use kv::{KvEntryStore, ENTRIES_KEY};

use std::rc::Rc;
use thiserror::Error;

use crate::model::{DiaryEntry, NewEntry};

/// Errors raised by the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing storage cannot be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The stored collection could not be decoded
    #[error("Corrupt entry data: {0}")]
    Corrupt(String),

    /// Writing failed (quota exceeded, serialization)
    #[error("Write failed: {0}")]
    Write(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result of a delete request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Create, list and delete diary entries
pub trait EntryStore {
    /// All entries, newest first
    fn list(&self) -> StoreResult<Vec<DiaryEntry>>;

    /// Store a new entry under a fresh id and return it
    fn save(&self, entry: NewEntry) -> StoreResult<DiaryEntry>;

    /// Remove the entry with `id`
    fn delete(&self, id: &str) -> StoreResult<DeleteOutcome>;
}

impl<S: EntryStore + ?Sized> EntryStore for Rc<S> {
    fn list(&self) -> StoreResult<Vec<DiaryEntry>> {
        (**self).list()
    }

    fn save(&self, entry: NewEntry) -> StoreResult<DiaryEntry> {
        (**self).save(entry)
    }

    fn delete(&self, id: &str) -> StoreResult<DeleteOutcome> {
        (**self).delete(id)
    }
}

/// The store used by the running app: `localStorage` when the browser
/// grants it, otherwise an in-memory store that lasts for the page session.
pub fn browser_store() -> Rc<dyn EntryStore> {
    let storage = web_sys::window()
        .ok_or_else(|| "no window".to_string())
        .and_then(|w| w.local_storage().map_err(|e| format!("{:?}", e)))
        .and_then(|s| s.ok_or_else(|| "localStorage disabled".to_string()));

    match storage {
        Ok(storage) => Rc::new(KvEntryStore::new(storage)),
        Err(e) => {
            log::warn!("localStorage unavailable ({}), posts will not survive a reload", e);
            Rc::new(KvEntryStore::new(MemoryBackend::default()))
        }
    }
}
