//! Durable local snapshots.
//!
//! Each persisted store serializes selected fields to a key-value slot
//! under a fixed store-name key and rehydrates from it on open. The
//! [`SnapshotStore`] trait is the seam; stores receive an implementation
//! at construction rather than reaching for a global.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fixed snapshot keys, one per persisted store.
pub mod keys {
    /// Cart line items.
    pub const CART: &str = "linden.cart";

    /// Wishlist item list (the wishlist persists only its items).
    pub const WISHLIST: &str = "linden.wishlist";

    /// Recent search queries.
    pub const SEARCH_HISTORY: &str = "linden.search-history";

    /// Newsletter popup seen-flag.
    pub const NEWSLETTER_SEEN: &str = "linden.newsletter-seen";
}

/// Errors that can occur reading or writing snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Underlying storage failed.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be decoded, or a value could not be
    /// encoded for storage.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A key-value slot for durable store snapshots.
///
/// Values are JSON documents keyed by the fixed strings in [`keys`].
pub trait SnapshotStore {
    /// Read the raw value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` if the underlying storage fails.
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Write the raw value under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` if the underlying storage fails.
    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Remove the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` if the underlying storage fails.
    fn delete(&self, key: &str) -> Result<(), SnapshotError>;

    /// Read and decode the JSON document under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Serialization` if the stored document does
    /// not decode as `T`, or `SnapshotError::Io` on storage failure.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SnapshotError> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode `value` as JSON and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Serialization` if encoding fails, or
    /// `SnapshotError::Io` on storage failure.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string(value)?;
        self.put(key, &raw)
    }
}

// Shared references forward, so several stores can persist through one
// snapshot store.
impl<T: SnapshotStore + ?Sized> SnapshotStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SnapshotError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), SnapshotError> {
        (**self).delete(key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_key_is_none() {
        let store = MemoryStore::default();
        let loaded: Option<Vec<String>> = store.load(keys::CART).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryStore::default();
        store
            .save(keys::SEARCH_HISTORY, &vec!["linen".to_string()])
            .unwrap();
        let loaded: Option<Vec<String>> = store.load(keys::SEARCH_HISTORY).unwrap();
        assert_eq!(loaded, Some(vec!["linen".to_string()]));
    }

    #[test]
    fn test_load_rejects_mismatched_document() {
        let store = MemoryStore::default();
        store.put(keys::CART, "{\"not\": \"a list\"}").unwrap();
        let loaded: Result<Option<Vec<String>>, _> = store.load(keys::CART);
        assert!(matches!(loaded, Err(SnapshotError::Serialization(_))));
    }
}
