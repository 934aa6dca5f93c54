//! Entry store over a key-value backend.
//!
//! The whole collection is one JSON array under [`ENTRIES_KEY`], kept in
//! insertion order.

use uuid::Uuid;

use super::{DeleteOutcome, EntryStore, KeyValueBackend, StoreError, StoreResult};
use crate::model::{DiaryEntry, NewEntry};

/// Storage key of the entry collection
pub const ENTRIES_KEY: &str = "gamer_blog.entries";

pub struct KvEntryStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> KvEntryStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, ENTRIES_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read_all(&self) -> StoreResult<Vec<DiaryEntry>> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string())),
        }
    }

    fn write_all(&self, entries: &[DiaryEntry]) -> StoreResult<()> {
        let raw = serde_json::to_string(entries).map_err(|e| StoreError::Write(e.to_string()))?;
        self.backend.set_item(&self.key, &raw)
    }
}

impl<B: KeyValueBackend> EntryStore for KvEntryStore<B> {
    fn list(&self) -> StoreResult<Vec<DiaryEntry>> {
        let mut entries = self.read_all()?;
        // Newest first; reversing before the stable sort puts later inserts
        // first among equal timestamps.
        entries.reverse();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    fn save(&self, entry: NewEntry) -> StoreResult<DiaryEntry> {
        let mut entries = self.read_all()?;

        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !entries.iter().any(|e| e.id == candidate) {
                break candidate;
            }
        };

        let stored = entry.with_id(id);
        entries.push(stored.clone());
        self.write_all(&entries)?;

        log::debug!("Saved entry {}", stored.id);
        Ok(stored)
    }

    fn delete(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let mut entries = self.read_all()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(DeleteOutcome::NotFound);
        }

        self.write_all(&entries)?;
        log::debug!("Deleted entry {}", id);
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeoPoint;
    use crate::store::MemoryBackend;

    fn new_entry(title: &str, content: &str, date: &str) -> NewEntry {
        NewEntry {
            title: title.to_string(),
            content: content.to_string(),
            date: date.to_string(),
            photo: None,
            quote: None,
            location: None,
        }
    }

    fn store() -> KvEntryStore<MemoryBackend> {
        KvEntryStore::new(MemoryBackend::default())
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(store().list().unwrap().is_empty());
    }

    #[test]
    fn test_save_adds_exactly_one() {
        let store = store();
        store
            .save(new_entry("First", "one", "2024-05-01T10:00:00.000Z"))
            .unwrap();
        let before = store.list().unwrap().len();

        let saved = store
            .save(new_entry("Review", "Great game", "2024-05-01T11:00:00.000Z"))
            .unwrap();

        let after = store.list().unwrap();
        assert_eq!(after.len(), before + 1);
        let found = after.iter().find(|e| e.id == saved.id).unwrap();
        assert_eq!(found.title, "Review");
        assert_eq!(found.content, "Great game");
    }

    #[test]
    fn test_ids_are_unique() {
        let store = store();
        let a = store.save(new_entry("a", "a", "2024-05-01T10:00:00.000Z")).unwrap();
        let b = store.save(new_entry("b", "b", "2024-05-01T10:00:00.000Z")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_delete_removes_only_that_entry() {
        let store = store();
        let keep = store.save(new_entry("keep", "k", "2024-05-01T10:00:00.000Z")).unwrap();
        let gone = store.save(new_entry("gone", "g", "2024-05-01T11:00:00.000Z")).unwrap();

        assert_eq!(store.delete(&gone.id).unwrap(), DeleteOutcome::Deleted);

        let remaining = store.list().unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let store = store();
        store.save(new_entry("a", "a", "2024-05-01T10:00:00.000Z")).unwrap();

        assert_eq!(store.delete("no-such-id").unwrap(), DeleteOutcome::NotFound);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_review_example() {
        let store = store();
        let original = store.list().unwrap().len();

        let saved = store
            .save(new_entry("Review", "Great game", "2024-05-01T10:00:00.000Z"))
            .unwrap();
        assert_eq!(store.list().unwrap().len(), original + 1);
        assert_eq!(saved.content, "Great game");

        store.delete(&saved.id).unwrap();
        assert_eq!(store.list().unwrap().len(), original);
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = store();
        store.save(new_entry("old", "o", "2024-01-01T00:00:00.000Z")).unwrap();
        store.save(new_entry("new", "n", "2024-06-01T00:00:00.000Z")).unwrap();
        store.save(new_entry("mid", "m", "2024-03-01T00:00:00.000Z")).unwrap();

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_equal_dates_list_later_insert_first() {
        let store = store();
        store.save(new_entry("first", "1", "2024-01-01T00:00:00.000Z")).unwrap();
        store.save(new_entry("second", "2", "2024-01-01T00:00:00.000Z")).unwrap();

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_optional_fields_survive_storage() {
        let store = store();
        let mut entry = new_entry("trip", "t", "2024-01-01T00:00:00.000Z");
        entry.quote = Some("It's dangerous to go alone".to_string());
        entry.location = Some(GeoPoint {
            latitude: 1.5,
            longitude: -2.25,
        });
        let saved = store.save(entry).unwrap();

        assert_eq!(store.list().unwrap()[0], saved);
    }

    #[test]
    fn test_missing_location_is_absent_in_storage() {
        let store = store();
        store.save(new_entry("a", "a", "2024-01-01T00:00:00.000Z")).unwrap();

        let raw = store.backend().get_item(ENTRIES_KEY).unwrap().unwrap();
        assert!(!raw.contains("location"));
    }

    #[test]
    fn test_corrupt_data_is_an_error() {
        let backend = MemoryBackend::default();
        backend.set_item(ENTRIES_KEY, "{not json").unwrap();
        let store = KvEntryStore::new(backend);

        assert!(matches!(store.list(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_separate_keys_are_independent() {
        let backend = MemoryBackend::default();
        let a = KvEntryStore::with_key(&backend, "a");
        let b = KvEntryStore::with_key(&backend, "b");

        a.save(new_entry("a", "a", "2024-01-01T00:00:00.000Z")).unwrap();
        assert_eq!(a.list().unwrap().len(), 1);
        assert!(b.list().unwrap().is_empty());
    }
}
