//! # Browser `localStorage` backend
//!
//! [`LocalStorageBackend`] is the medium used in the browser build. Data is
//! scoped to the page origin and survives reloads; there is no expiry.
//!
//! The struct is zero-sized and looks up `window.localStorage` on every call,
//! because `web_sys::Storage` is neither `Send` nor `Sync`. When there is no
//! window (workers, headless rendering) or storage access is denied, the
//! backend reports itself unavailable and the adapter falls back to defaults.

use wasm_bindgen::JsValue;

use crate::error::AppError;
use crate::storage::client::KeyValueBackend;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn require_storage() -> Result<web_sys::Storage, AppError> {
        Self::storage().ok_or_else(|| AppError::Storage("localStorage is not available".into()))
    }
}

fn js_error(action: &str, key: &str, err: JsValue) -> AppError {
    AppError::Storage(format!("Failed to {} '{}': {:?}", action, key, err))
}

impl KeyValueBackend for LocalStorageBackend {
    fn is_available(&self) -> bool {
        Self::storage().is_some()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::require_storage()?
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        // Quota errors surface here.
        Self::require_storage()?
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        Self::require_storage()?
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}
