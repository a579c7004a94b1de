//! Browser backend: the snapshot lives in `window.localStorage`.
//!
//! `Storage` handles are not `Send`, so the store only keeps the key and
//! looks the storage object up on every access.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

use crate::cart_store::CartStorage;
use crate::storage_error::StorageError;

pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Check whether a JsValue is the `QuotaExceededError` DOMException.
fn is_quota_exceeded_error(err: &JsValue) -> bool {
    if let Ok(dom_exception) = err.clone().dyn_into::<DomException>() {
        return dom_exception.name() == "QuotaExceededError";
    }
    let s = format!("{:?}", err);
    s.contains("QuotaExceededError") || s.contains("quota")
}

fn local_storage() -> Result<Storage, StorageError> {
    let window =
        web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl CartStorage for LocalStorageStore {
    fn describe(&self) -> String {
        format!("localStorage[{}]", self.key)
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(&self.key, snapshot)
            .map_err(|e| {
                if is_quota_exceeded_error(&e) {
                    StorageError::QuotaExceeded
                } else {
                    StorageError::Unavailable(format!("{:?}", e))
                }
            })
    }
}
