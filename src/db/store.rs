use crate::db::collection::{Collection, Record};
use crate::db::models::{
    APPLICATIONS_KEY, CURRENT_IDEA_ID_KEY, CURRENT_USER_ID_KEY, IDEAS_KEY, USERS_KEY,
};
use crate::error::AppError;
use crate::storage::client::{KeyValueBackend, KvStore};

/// The record store: three collections and two pointers over one backend.
///
/// Construct it once at startup with the backend for the environment and pass
/// it by reference. It implements every repository trait in [`crate::db`].
pub struct RecordStore<B> {
    kv: KvStore<B>,
}

impl<B: KeyValueBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            kv: KvStore::new(backend),
        }
    }

    pub fn kv(&self) -> &KvStore<B> {
        &self.kv
    }

    pub(crate) fn collection<T: Record>(&self) -> Collection<'_, B, T> {
        Collection::new(&self.kv)
    }

    pub(crate) fn pointer(&self, key: &str) -> Result<Option<String>, AppError> {
        self.kv.get(key, None)
    }

    pub(crate) fn set_pointer(&self, key: &str, value: Option<String>) -> Result<(), AppError> {
        self.kv.set(key, &value)
    }

    /// Remove every key owned by the store. Returns how many were present.
    pub fn reset(&self) -> Result<usize, AppError> {
        let mut removed = 0;
        for key in [
            IDEAS_KEY,
            APPLICATIONS_KEY,
            USERS_KEY,
            CURRENT_USER_ID_KEY,
            CURRENT_IDEA_ID_KEY,
        ] {
            if self.kv.contains(key)? {
                self.kv.remove(key)?;
                removed += 1;
            }
        }
        tracing::info!("Record store reset, {} key(s) removed", removed);
        Ok(removed)
    }
}
