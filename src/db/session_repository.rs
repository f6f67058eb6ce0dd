use crate::db::models::{CURRENT_IDEA_ID_KEY, CURRENT_USER_ID_KEY};
use crate::db::store::RecordStore;
use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

/// Repository trait for the two scalar pointers.
///
/// `None` is persisted as JSON `null`, which reads back as `None` too.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository {
    /// Id of the logged-in user, `None` when logged out.
    fn current_user_id(&self) -> Result<Option<String>, AppError>;

    fn set_current_user_id(&self, user_id: Option<String>) -> Result<(), AppError>;

    /// Id of the idea the detail view should display.
    fn current_idea_id(&self) -> Result<Option<String>, AppError>;

    fn set_current_idea_id(&self, idea_id: Option<String>) -> Result<(), AppError>;
}

impl<B: KeyValueBackend> SessionRepository for RecordStore<B> {
    fn current_user_id(&self) -> Result<Option<String>, AppError> {
        self.pointer(CURRENT_USER_ID_KEY)
    }

    fn set_current_user_id(&self, user_id: Option<String>) -> Result<(), AppError> {
        self.set_pointer(CURRENT_USER_ID_KEY, user_id)
    }

    fn current_idea_id(&self) -> Result<Option<String>, AppError> {
        self.pointer(CURRENT_IDEA_ID_KEY)
    }

    fn set_current_idea_id(&self, idea_id: Option<String>) -> Result<(), AppError> {
        self.set_pointer(CURRENT_IDEA_ID_KEY, idea_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    #[test]
    fn test_pointers_default_to_none() {
        let store = RecordStore::new(MemoryBackend::new());
        assert!(store.current_user_id().unwrap().is_none());
        assert!(store.current_idea_id().unwrap().is_none());
    }

    #[test]
    fn test_set_and_clear_user_pointer() {
        let store = RecordStore::new(MemoryBackend::new());

        store.set_current_user_id(Some("u1".to_string())).unwrap();
        assert_eq!(store.current_user_id().unwrap().as_deref(), Some("u1"));

        store.set_current_user_id(None).unwrap();
        assert!(store.current_user_id().unwrap().is_none());
        assert_eq!(
            store.kv().backend().raw("currentUserId").as_deref(),
            Some("null")
        );
    }

    #[test]
    fn test_pointers_are_independent() {
        let store = RecordStore::new(MemoryBackend::new());
        store.set_current_idea_id(Some("2".to_string())).unwrap();

        assert!(store.current_user_id().unwrap().is_none());
        assert_eq!(store.current_idea_id().unwrap().as_deref(), Some("2"));
    }
}
