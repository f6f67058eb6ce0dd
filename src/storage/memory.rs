use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

/// In-memory backend for tests and for previews that should not persist.
///
/// Clones share the same underlying map, so a clone handed to a second
/// [`KvStore`](crate::storage::client::KvStore) observes the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text under `key`, bypassing deserialization.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .items
            .lock()
            .map(|items| items.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.items
            .lock()
            .map_err(|e| AppError::Storage(format!("Memory backend poisoned: {}", e)))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.set_item("users", "[]").unwrap();
        assert_eq!(other.get_item("users").unwrap().as_deref(), Some("[]"));

        other.remove_item("users").unwrap();
        assert!(backend.get_item("users").unwrap().is_none());
    }

    #[test]
    fn test_keys_are_sorted() {
        let backend = MemoryBackend::new();
        backend.set_item("users", "[]").unwrap();
        backend.set_item("ideas", "[]").unwrap();

        assert_eq!(backend.keys(), vec!["ideas".to_string(), "users".to_string()]);
    }
}
