#![allow(dead_code)]

use ideaboard::db::models::{Application, Idea};
use ideaboard::{AuthService, MemoryBackend, RecordStore};

/// An isolated store over an in-memory backend.
///
/// `backend` shares its map with the store, so tests can inspect the raw
/// persisted text or open a second store over the same data.
pub struct TestEnv {
    pub backend: MemoryBackend,
    pub store: RecordStore<MemoryBackend>,
}

impl TestEnv {
    pub fn start() -> Self {
        let backend = MemoryBackend::new();
        let store = RecordStore::new(backend.clone());
        Self { backend, store }
    }

    pub fn auth(&self) -> AuthService<'_, RecordStore<MemoryBackend>> {
        AuthService::new(&self.store)
    }

    /// A second store over the same data, as after a page reload.
    pub fn reopen(&self) -> RecordStore<MemoryBackend> {
        RecordStore::new(self.backend.clone())
    }

    pub fn raw_json(&self, key: &str) -> serde_json::Value {
        let raw = self.backend.raw(key).expect("key should be persisted");
        serde_json::from_str(&raw).expect("persisted value should be JSON")
    }
}

pub fn idea(id: &str, user_id: &str, professions: &[&str]) -> Idea {
    Idea {
        id: id.to_string(),
        title: format!("Idea {}", id),
        short_description: "Short pitch".to_string(),
        long_description: "Long pitch".to_string(),
        professions: professions.iter().map(|p| p.to_string()).collect(),
        category: "Web App".to_string(),
        time_required: "1-3 months".to_string(),
        is_paid: false,
        members_needed: 1,
        user_id: user_id.to_string(),
        created_at: "2025-01-05T10:00:00.000Z".to_string(),
    }
}

pub fn application(id: &str, idea_id: &str, user_id: &str) -> Application {
    Application {
        id: id.to_string(),
        idea_id: idea_id.to_string(),
        name: "Applicant".to_string(),
        email: "applicant@example.com".to_string(),
        cover_letter: "Let me help".to_string(),
        cv_url: "blob:cv".to_string(),
        user_id: user_id.to_string(),
        created_at: "2025-01-06T10:00:00.000Z".to_string(),
    }
}
