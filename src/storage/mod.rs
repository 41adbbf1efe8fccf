//! Durable key-value slots holding favorites identifier lists.
//!
//! [`KeyValueStore`] mirrors a browser local-storage area: string keys mapping
//! to string values, every write replacing the whole value. Identifier lists
//! are stored as JSON-encoded arrays through [`KeyValueStore::load_ids`] and
//! [`KeyValueStore::save_ids`].

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::domain::MovieId;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// Reads a slot. A slot that was never written is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces a slot's value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Reads an ordered identifier list. Missing or malformed slots read as
    /// an empty list.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyValueStore::get`] failures.
    fn load_ids(&self, key: &str) -> Result<Vec<MovieId>, StorageError> {
        let Some(raw) = self.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                warn!(key, error = %e, "Ignoring malformed identifier list");
                Ok(Vec::new())
            }
        }
    }

    /// Writes an ordered identifier list, replacing the slot.
    ///
    /// # Errors
    ///
    /// Propagates [`KeyValueStore::set`] failures.
    fn save_ids(&self, key: &str, ids: &[MovieId]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(ids)?;
        self.set(key, &raw)
    }
}

/// Slot names used by the application.
pub struct StorageKey;

impl StorageKey {
    /// Favorites slot: `{prefix}:favs`, or `{prefix}:favs:{email}` for a
    /// signed-in user.
    ///
    /// ```
    /// use movieapp::storage::StorageKey;
    ///
    /// assert_eq!(StorageKey::favorites("movieapp", None), "movieapp:favs");
    /// assert_eq!(
    ///     StorageKey::favorites("movieapp", Some("ana@example.com")),
    ///     "movieapp:favs:ana@example.com"
    /// );
    /// ```
    #[must_use]
    pub fn favorites(prefix: &str, user: Option<&str>) -> String {
        match user {
            Some(email) => format!("{prefix}:favs:{email}"),
            None => format!("{prefix}:favs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<MovieId> {
        raw.iter().map(|id| MovieId::new(id).unwrap()).collect()
    }

    #[test]
    fn missing_slot_reads_empty() {
        let store = MemoryStore::new();
        assert!(store.load_ids("movieapp:favs").unwrap().is_empty());
    }

    #[test]
    fn ids_round_trip_as_json_array() {
        let store = MemoryStore::new();
        store.save_ids("k", &ids(&["m1", "m2"])).unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some(r#"["m1","m2"]"#));
        assert_eq!(store.load_ids("k").unwrap(), ids(&["m1", "m2"]));
    }

    #[test]
    fn malformed_slot_reads_empty() {
        let store = MemoryStore::new();
        store.set("k", "{not json").unwrap();
        assert!(store.load_ids("k").unwrap().is_empty());

        store.set("k", r#"["ok", ""]"#).unwrap();
        assert!(store.load_ids("k").unwrap().is_empty());
    }

    #[test]
    fn favorites_key_is_scoped_per_user() {
        assert_ne!(
            StorageKey::favorites("p", Some("a@x")),
            StorageKey::favorites("p", Some("b@x"))
        );
        assert_eq!(StorageKey::favorites("p", None), "p:favs");
    }
}
