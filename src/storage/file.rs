//! # Filesystem-backed key-value medium
//!
//! [`FileBackend`] keeps one file per key under a base directory, which gives
//! the native CLI the same "survives restart" behaviour the browser gets from
//! `localStorage`:
//!
//! ```text
//! <base_dir>/
//! ├── ideas.json
//! ├── applications.json
//! ├── users.json
//! ├── currentUserId.json
//! └── currentIdeaId.json
//! ```
//!
//! Keys are restricted to a flat namespace; anything that could escape the
//! base directory is rejected with [`AppError::Storage`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

const EXTENSION: &str = "json";

#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.base.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.item_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let path = self.item_path(key)?;
        std::fs::create_dir_all(&self.base).map_err(|e| {
            AppError::Storage(format!("Failed to create '{}': {}", self.base.display(), e))
        })?;
        std::fs::write(&path, value)
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {}", path.display(), e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        let path = self.item_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
