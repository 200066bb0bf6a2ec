//! JSON file store for native builds
//!
//! All keys live in one JSON object. The whole file is rewritten on every
//! save through a temp file and rename.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::{PersistenceAdapter, PersistenceError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PersistenceAdapter for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        // An unreadable file is replaced rather than blocking the save
        let mut values = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store {}: {}", self.path.display(), e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
