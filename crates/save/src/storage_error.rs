// ---------------------------------------------------------------------------
// StorageError: failures of the cart snapshot backends
// ---------------------------------------------------------------------------

use std::fmt;

use cart::SnapshotError;

/// Errors a storage backend can report. None of them are fatal: reads fall
/// back to an empty cart and writes are skipped.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error (native backend).
    Io(std::io::Error),
    /// The browser refused the write because its storage quota is used up.
    QuotaExceeded,
    /// Storage is missing or disabled (no window, private mode, ...).
    Unavailable(String),
    /// The stored text is not a cart snapshot, or a snapshot could not be built.
    Snapshot(SnapshotError),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::QuotaExceeded => write!(f, "Storage quota exceeded"),
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::Snapshot(e) => write!(f, "Snapshot error: {e}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<SnapshotError> for StorageError {
    fn from(e: SnapshotError) -> Self {
        StorageError::Snapshot(e)
    }
}
