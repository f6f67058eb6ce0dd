use crate::db::models::Idea;
use crate::db::store::RecordStore;
use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

/// Repository trait for idea operations.
///
/// This trait allows mocking the store in tests.
#[cfg_attr(test, mockall::automock)]
pub trait IdeaRepository {
    /// All ideas in insertion order.
    fn list_ideas(&self) -> Result<Vec<Idea>, AppError>;

    /// Find an idea by its id.
    fn find_idea(&self, id: &str) -> Result<Option<Idea>, AppError>;

    /// Ideas posted by the given user.
    fn ideas_by_user(&self, user_id: &str) -> Result<Vec<Idea>, AppError>;

    /// Create a new idea or replace an existing one (matched by id).
    fn save_idea(&self, idea: Idea) -> Result<(), AppError>;

    /// Delete an idea by id. Deleting an unknown id is a no-op.
    fn delete_idea(&self, id: &str) -> Result<(), AppError>;
}

impl<B: KeyValueBackend> IdeaRepository for RecordStore<B> {
    fn list_ideas(&self) -> Result<Vec<Idea>, AppError> {
        self.collection::<Idea>().all()
    }

    fn find_idea(&self, id: &str) -> Result<Option<Idea>, AppError> {
        self.collection::<Idea>().find_by_id(id)
    }

    fn ideas_by_user(&self, user_id: &str) -> Result<Vec<Idea>, AppError> {
        self.collection::<Idea>()
            .filter(|idea| idea.user_id == user_id)
    }

    fn save_idea(&self, idea: Idea) -> Result<(), AppError> {
        self.collection::<Idea>().save(idea)
    }

    fn delete_idea(&self, id: &str) -> Result<(), AppError> {
        tracing::info!("Deleting idea '{}'", id);
        self.collection::<Idea>().delete_by_id(id)
    }
}
