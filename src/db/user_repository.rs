use crate::db::models::User;
use crate::db::store::RecordStore;
use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

/// Repository trait for user accounts.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository {
    fn list_users(&self) -> Result<Vec<User>, AppError>;

    fn find_user(&self, id: &str) -> Result<Option<User>, AppError>;

    /// First user whose email matches exactly (case-sensitive, untrimmed).
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Create or replace a user (matched by id).
    ///
    /// Email uniqueness is not checked here; signup does that.
    fn save_user(&self, user: User) -> Result<(), AppError>;
}

impl<B: KeyValueBackend> UserRepository for RecordStore<B> {
    fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.collection::<User>().all()
    }

    fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>().find_by_id(id)
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>().find(|user| user.email == email)
    }

    fn save_user(&self, user: User) -> Result<(), AppError> {
        self.collection::<User>().save(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_find_user_by_email_is_exact() {
        let store = RecordStore::new(MemoryBackend::new());
        store.save_user(user("u1", "ada@example.com")).unwrap();

        assert_eq!(
            store.find_user_by_email("ada@example.com").unwrap().map(|u| u.id),
            Some("u1".to_string())
        );
        assert!(store.find_user_by_email("ADA@example.com").unwrap().is_none());
        assert!(store.find_user_by_email(" ada@example.com").unwrap().is_none());
    }

    #[test]
    fn test_store_does_not_enforce_unique_email() {
        let store = RecordStore::new(MemoryBackend::new());
        store.save_user(user("u1", "dup@example.com")).unwrap();
        store.save_user(user("u2", "dup@example.com")).unwrap();

        assert_eq!(store.list_users().unwrap().len(), 2);
        // First match wins
        assert_eq!(
            store.find_user_by_email("dup@example.com").unwrap().map(|u| u.id),
            Some("u1".to_string())
        );
    }

    #[test]
    fn test_find_user() {
        let store = RecordStore::new(MemoryBackend::new());
        store.save_user(user("u1", "a@example.com")).unwrap();

        assert!(store.find_user("u1").unwrap().is_some());
        assert!(store.find_user("u2").unwrap().is_none());
    }
}
