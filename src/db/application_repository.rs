use crate::db::models::Application;
use crate::db::store::RecordStore;
use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

/// Repository trait for application operations.
#[cfg_attr(test, mockall::automock)]
pub trait ApplicationRepository {
    /// All applications in insertion order.
    fn list_applications(&self) -> Result<Vec<Application>, AppError>;

    /// Find an application by its id.
    fn find_application(&self, id: &str) -> Result<Option<Application>, AppError>;

    /// Applications submitted to the given idea.
    fn applications_by_idea(&self, idea_id: &str) -> Result<Vec<Application>, AppError>;

    /// Applications submitted by the given user.
    fn applications_by_user(&self, user_id: &str) -> Result<Vec<Application>, AppError>;

    /// Create a new application or replace an existing one (matched by id).
    ///
    /// The referenced idea and user are not checked.
    fn save_application(&self, application: Application) -> Result<(), AppError>;
}

impl<B: KeyValueBackend> ApplicationRepository for RecordStore<B> {
    fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        self.collection::<Application>().all()
    }

    fn find_application(&self, id: &str) -> Result<Option<Application>, AppError> {
        self.collection::<Application>().find_by_id(id)
    }

    fn applications_by_idea(&self, idea_id: &str) -> Result<Vec<Application>, AppError> {
        self.collection::<Application>()
            .filter(|application| application.idea_id == idea_id)
    }

    fn applications_by_user(&self, user_id: &str) -> Result<Vec<Application>, AppError> {
        self.collection::<Application>()
            .filter(|application| application.user_id == user_id)
    }

    fn save_application(&self, application: Application) -> Result<(), AppError> {
        self.collection::<Application>().save(application)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    fn application(id: &str, idea_id: &str, user_id: &str) -> Application {
        Application {
            id: id.to_string(),
            idea_id: idea_id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            cover_letter: "I'd like to help".to_string(),
            cv_url: "blob:cv".to_string(),
            user_id: user_id.to_string(),
            created_at: "2025-01-05T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_applications_by_idea() {
        let store = RecordStore::new(MemoryBackend::new());
        assert!(store.applications_by_idea("x").unwrap().is_empty());

        store.save_application(application("a1", "x", "u1")).unwrap();
        store.save_application(application("a2", "y", "u1")).unwrap();
        store.save_application(application("a3", "x", "u2")).unwrap();

        let ids: Vec<String> = store
            .applications_by_idea("x")
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }

    #[test]
    fn test_applications_by_user() {
        let store = RecordStore::new(MemoryBackend::new());
        store.save_application(application("a1", "x", "u1")).unwrap();
        store.save_application(application("a2", "y", "u2")).unwrap();

        let mine = store.applications_by_user("u2").unwrap();
        assert_eq!(mine, vec![application("a2", "y", "u2")]);
    }

    #[test]
    fn test_save_application_replaces_by_id() {
        let store = RecordStore::new(MemoryBackend::new());
        store.save_application(application("a1", "x", "u1")).unwrap();

        let mut updated = application("a1", "x", "u1");
        updated.cover_letter = "Revised".to_string();
        store.save_application(updated.clone()).unwrap();

        assert_eq!(store.list_applications().unwrap(), vec![updated.clone()]);
        assert_eq!(store.find_application("a1").unwrap(), Some(updated));
        assert!(store.find_application("a9").unwrap().is_none());
    }

    #[test]
    fn test_dangling_idea_reference_is_accepted() {
        let store = RecordStore::new(MemoryBackend::new());
        store
            .save_application(application("a1", "no-such-idea", "u1"))
            .unwrap();
        assert_eq!(store.list_applications().unwrap().len(), 1);
    }
}
