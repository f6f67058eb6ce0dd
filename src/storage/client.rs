use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// Trait for the raw key-value medium behind the store.
///
/// Values are opaque strings; (de)serialization happens in [`KvStore`].
/// Abstracted as a trait so tests can run against memory or a mock.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueBackend: Send + Sync {
    /// Whether a persistent medium exists in the current environment.
    ///
    /// When this returns `false` the adapter never touches the backend.
    fn is_available(&self) -> bool {
        true
    }

    /// Retrieve the raw value stored under `key`. Returns `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}

/// Backend for contexts with no persistent medium (headless rendering,
/// tests of the environment guard). Reports itself unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedBackend;

impl KeyValueBackend for DetachedBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// JSON adapter over a [`KeyValueBackend`].
///
/// `get` returns the caller's default when the key is missing (or holds an
/// empty string) and never writes that default back. Both `get` and `set`
/// silently degrade to default/no-op when the backend is unavailable.
pub struct KvStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> KvStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Read and deserialize the value under `key`, or return `default`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, AppError> {
        if !self.backend.is_available() {
            tracing::debug!("No storage medium, returning default for '{}'", key);
            return Ok(default);
        }

        match self.backend.get_item(key)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw).map_err(|e| {
                AppError::Serialization(format!("Failed to decode value of '{}': {}", key, e))
            }),
            _ => Ok(default),
        }
    }

    /// Serialize `value` and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), AppError> {
        if !self.backend.is_available() {
            tracing::debug!("No storage medium, dropping write to '{}'", key);
            return Ok(());
        }

        let raw = serde_json::to_string(value).map_err(|e| {
            AppError::Serialization(format!("Failed to encode value of '{}': {}", key, e))
        })?;
        self.backend.set_item(key, &raw)
    }

    pub fn contains(&self, key: &str) -> Result<bool, AppError> {
        if !self.backend.is_available() {
            return Ok(false);
        }
        Ok(self.backend.get_item(key)?.is_some())
    }

    pub fn remove(&self, key: &str) -> Result<(), AppError> {
        if !self.backend.is_available() {
            return Ok(());
        }
        self.backend.remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    #[test]
    fn test_get_missing_key_returns_default_without_write_back() {
        let kv = KvStore::new(MemoryBackend::new());

        let value: Vec<String> = kv.get("ideas", vec!["fallback".to_string()]).unwrap();
        assert_eq!(value, vec!["fallback".to_string()]);
        assert!(!kv.contains("ideas").unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let kv = KvStore::new(MemoryBackend::new());

        kv.set("currentUserId", &Some("u1")).unwrap();
        let value: Option<String> = kv.get("currentUserId", None).unwrap();
        assert_eq!(value.as_deref(), Some("u1"));
        assert_eq!(kv.backend().raw("currentUserId").as_deref(), Some("\"u1\""));
    }

    #[test]
    fn test_null_pointer_is_stored_as_json_null() {
        let kv = KvStore::new(MemoryBackend::new());

        kv.set("currentIdeaId", &None::<String>).unwrap();
        assert_eq!(kv.backend().raw("currentIdeaId").as_deref(), Some("null"));
        let value: Option<String> = kv.get("currentIdeaId", Some("x".to_string())).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_empty_string_reads_as_default() {
        let backend = MemoryBackend::new();
        backend.set_item("users", "").unwrap();
        let kv = KvStore::new(backend);

        let users: Vec<String> = kv.get("users", Vec::new()).unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn test_corrupt_value_is_serialization_error() {
        let backend = MemoryBackend::new();
        backend.set_item("ideas", "[{").unwrap();
        let kv = KvStore::new(backend);

        let result: Result<Vec<String>, _> = kv.get("ideas", Vec::new());
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_detached_backend_degrades_silently() {
        let kv = KvStore::new(DetachedBackend);

        kv.set("ideas", &vec![1, 2, 3]).unwrap();
        let value: Vec<i32> = kv.get("ideas", vec![7]).unwrap();
        assert_eq!(value, vec![7]);
        assert!(!kv.contains("ideas").unwrap());
        kv.remove("ideas").unwrap();
    }

    #[test]
    fn test_unavailable_backend_is_never_touched() {
        let mut backend = MockKeyValueBackend::new();
        backend.expect_is_available().return_const(false);
        backend.expect_get_item().never();
        backend.expect_set_item().never();
        backend.expect_remove_item().never();
        let kv = KvStore::new(backend);

        let value: u32 = kv.get("anything", 42).unwrap();
        assert_eq!(value, 42);
        kv.set("anything", &1u32).unwrap();
        kv.remove("anything").unwrap();
    }

    #[test]
    fn test_backend_failure_propagates() {
        let mut backend = MockKeyValueBackend::new();
        backend.expect_is_available().return_const(true);
        backend
            .expect_set_item()
            .withf(|key, value| key == "ideas" && value == "[]")
            .times(1)
            .returning(|_, _| Err(AppError::Storage("quota exceeded".into())));
        let kv = KvStore::new(backend);

        let result = kv.set("ideas", &Vec::<u32>::new());
        assert!(matches!(result, Err(AppError::Storage(msg)) if msg == "quota exceeded"));
    }
}
