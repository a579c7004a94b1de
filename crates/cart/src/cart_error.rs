// ---------------------------------------------------------------------------
// CartError / SnapshotError: typed rejections for cart input and snapshots
// ---------------------------------------------------------------------------

use std::fmt;

/// Reasons an add request is rejected. A rejected request never changes the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The item identifier was empty.
    MissingId,
    /// The item name was empty.
    MissingName,
    /// The price text is not a finite number.
    InvalidPrice(String),
    /// The price parsed but is below zero.
    NegativePrice(String),
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::MissingId => write!(f, "Invalid item data: missing id"),
            CartError::MissingName => write!(f, "Invalid item data: missing name"),
            CartError::InvalidPrice(text) => write!(f, "Invalid price: {text:?}"),
            CartError::NegativePrice(text) => write!(f, "Negative price: {text:?}"),
        }
    }
}

impl std::error::Error for CartError {}

/// Errors produced while encoding or decoding the persisted cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Stored text is not a JSON object of line items.
    Corrupt(String),
    /// The cart could not be serialized.
    Encode(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Corrupt(msg) => write!(f, "Corrupt cart snapshot: {msg}"),
            SnapshotError::Encode(msg) => write!(f, "Cart snapshot encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for SnapshotError {}
