#[cfg(not(target_arch = "wasm32"))]
mod atomic_write;
mod cart_store;
#[cfg(not(target_arch = "wasm32"))]
mod file_store;
mod save_plugin;
mod storage_error;

#[cfg(target_arch = "wasm32")]
mod local_storage;

pub use cart_store::{CartStorage, CartStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use save_plugin::{load_cart, SavePlugin};
pub use storage_error::StorageError;
