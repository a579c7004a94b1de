//! Storage backend abstraction for the cart snapshot.

use std::sync::{Arc, Mutex, PoisonError};

use bevy::prelude::*;

use crate::storage_error::StorageError;

/// A synchronous key-value slot holding one snapshot string.
pub trait CartStorage: Send + Sync + 'static {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// The stored snapshot, or `None` when nothing was saved yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    fn write(&self, snapshot: &str) -> Result<(), StorageError>;
}

/// The backend in use. Insert one before `SavePlugin` to override the
/// platform default.
#[derive(Resource)]
pub struct CartStore(Box<dyn CartStorage>);

impl CartStore {
    pub fn new(backend: impl CartStorage) -> Self {
        CartStore(Box::new(backend))
    }

    /// `localStorage` in the browser, a JSON file on desktop.
    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        CartStore::new(crate::local_storage::LocalStorageStore::new(
            cart::config::STORAGE_KEY,
        ))
    }

    /// `localStorage` in the browser, a JSON file on desktop.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        CartStore::new(crate::file_store::FileStore::from_env())
    }

    pub fn backend(&self) -> &dyn CartStorage {
        self.0.as_ref()
    }
}

/// In-memory slot shared between clones, for tests and headless embedding.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
    full: bool,
}

impl MemoryStore {
    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(snapshot.into()))),
            full: false,
        }
    }

    /// A store whose writes always fail with `QuotaExceeded`.
    pub fn full() -> Self {
        Self {
            full: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStorage for MemoryStore {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        if self.full {
            return Err(StorageError::QuotaExceeded);
        }
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shared_between_clones() {
        let store = MemoryStore::default();
        let handle = store.clone();
        assert_eq!(store.read().unwrap(), None);
        store.write("{}").unwrap();
        assert_eq!(handle.contents().as_deref(), Some("{}"));
    }

    #[test]
    fn test_full_memory_store_rejects_writes() {
        let store = MemoryStore::full();
        assert!(matches!(store.write("{}"), Err(StorageError::QuotaExceeded)));
        assert_eq!(store.contents(), None);
    }

    #[test]
    fn test_cart_store_wraps_backend() {
        let store = CartStore::new(MemoryStore::with_snapshot("{}"));
        assert_eq!(store.backend().describe(), "memory");
        assert_eq!(store.backend().read().unwrap().as_deref(), Some("{}"));
    }
}
