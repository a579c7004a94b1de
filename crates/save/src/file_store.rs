//! Native backend: the snapshot lives in a JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cart::config::{CART_PATH_ENV, DEFAULT_CART_FILE};

use crate::atomic_write::atomic_write;
use crate::cart_store::CartStorage;
use crate::storage_error::StorageError;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$CAFE_CART_PATH`, or `cafe_cart.json` in the working directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(CART_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CART_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for FileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, snapshot: &str) -> Result<(), StorageError> {
        atomic_write(&self.path, snapshot.as_bytes())?;
        Ok(())
    }
}
