pub mod error;
pub mod utils;
pub mod storage {
    pub mod client;
    pub mod file;
    pub mod memory;
    #[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
    pub mod local;
}
pub mod db {
    pub mod application_repository;
    pub mod collection;
    pub mod models;
    pub mod repository;
    pub mod session_repository;
    pub mod store;
    pub mod user_repository;
}
pub mod auth {
    pub mod models;
    pub mod service;
}
pub mod models {
    pub mod application_draft;
    pub mod idea_draft;
}
pub mod search {
    pub mod filter;
}
pub mod api {
    pub mod applications;
    pub mod dashboard;
    pub mod ideas;
    pub mod search;
}
pub mod demo_seeder;
#[cfg(feature = "cli")]
pub mod config;

pub use auth::models::{AuthState, Session};
pub use auth::service::AuthService;
pub use db::application_repository::ApplicationRepository;
pub use db::models::{Application, Idea, User};
pub use db::repository::IdeaRepository;
pub use db::session_repository::SessionRepository;
pub use db::store::RecordStore;
pub use db::user_repository::UserRepository;
pub use error::AppError;
pub use storage::client::{DetachedBackend, KeyValueBackend, KvStore};
pub use storage::file::FileBackend;
pub use storage::memory::MemoryBackend;

/// Browser entry point: open the origin's `localStorage` and seed demo data.
#[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let store = RecordStore::new(storage::local::LocalStorageBackend::new());
    if !store.kv().is_available() {
        tracing::warn!("localStorage unavailable, running without persistence");
    }
    if let Err(e) = demo_seeder::seed_demo_data(&store) {
        tracing::error!("Failed to seed demo data: {}", e);
    }
}
