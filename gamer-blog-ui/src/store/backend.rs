//! Key-value backends for [`KvEntryStore`](super::KvEntryStore).

use std::cell::RefCell;
use std::collections::HashMap;

use super::{StoreError, StoreResult};

/// String key-value storage, the shape of the Web Storage API
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

impl KeyValueBackend for web_sys::Storage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        web_sys::Storage::get_item(self, key).map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        web_sys::Storage::set_item(self, key, value).map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Process-local backend, lost on reload
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend() {
        let backend = MemoryBackend::default();
        assert_eq!(backend.get_item("k").unwrap(), None);

        backend.set_item("k", "v1").unwrap();
        backend.set_item("k", "v2").unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("v2"));
    }
}
