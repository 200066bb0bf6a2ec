//! Key-value persistence
//!
//! The engine only ever needs string get/set. Writes are fire-and-forget: the
//! session queues [`PersistRequest`]s and the host hands them to a store with
//! [`flush`] whenever it likes. Failures are logged and dropped.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use std::collections::HashMap;

/// Failures a store can report. None of these reach the player.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("malformed stored value for {key}: {value:?}")]
    Malformed { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// String blob store
pub trait PersistenceAdapter {
    /// Read a value; `Ok(None)` when nothing is stored
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// A queued write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistRequest {
    pub key: String,
    pub value: String,
}

impl PersistRequest {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Execute queued writes in order. Returns how many succeeded.
pub fn flush<I>(requests: I, store: &mut dyn PersistenceAdapter) -> usize
where
    I: IntoIterator<Item = PersistRequest>,
{
    let mut saved = 0;
    for request in requests {
        match store.save(&request.key, &request.value) {
            Ok(()) => {
                log::info!("Saved {} = {}", request.key, request.value);
                saved += 1;
            }
            Err(e) => log::warn!("Failed to save {}: {}", request.key, e),
        }
    }
    saved
}

/// In-memory store. Can be switched into a failing mode to exercise the
/// unavailable-storage paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: bool,
    /// Number of successful saves
    pub save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects every call
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Peek at a value, bypassing the failure switch
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PersistenceAdapter for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "12").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("12"));
        assert_eq!(store.save_count, 1);
    }

    #[test]
    fn test_failing_store() {
        let mut store = MemoryStore::failing().with_value("k", "3");
        assert!(matches!(store.load("k"), Err(PersistenceError::Unavailable)));
        assert!(store.save("k", "4").is_err());
        assert_eq!(store.get("k"), Some("3"));
    }

    #[test]
    fn test_flush_swallows_failures() {
        let requests = vec![PersistRequest::new("a", "1"), PersistRequest::new("b", "2")];

        let mut broken = MemoryStore::failing();
        assert_eq!(flush(requests.clone(), &mut broken), 0);

        let mut store = MemoryStore::new();
        assert_eq!(flush(requests, &mut store), 2);
        assert_eq!(store.get("a"), Some("1"));
        assert_eq!(store.get("b"), Some("2"));
    }
}
