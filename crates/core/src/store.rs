//! Key-value persistence for saved articles.
//!
//! [`KeyValueStore`] is a string-to-string blob store with `get`, `set` and
//! `remove`. [`MemoryStore`] keeps everything in process; [`FileStore`] keeps
//! one JSON object on disk. [`ArticleLibrary`] layers typed article storage
//! over either.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use crate::article::GeneratedArticle;
use crate::{Result, ScriboError};

/// A string key-value blob store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns whether it was present.
    fn remove(&self, key: &str) -> Result<bool>;

    /// All keys, in ascending order.
    fn keys(&self) -> Result<Vec<String>>;
}

fn poisoned<T>(_: T) -> ScriboError {
    ScriboError::StoreError("store lock poisoned".to_string())
}

/// In-process store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.entries.write().map_err(poisoned)?.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().map_err(poisoned)?.keys().cloned().collect())
    }
}

/// Store persisted as a single JSON object file.
///
/// Every write rewrites the whole file; a missing file reads as empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Opens the store in the platform data directory (`<data_dir>/scribo/store.json`).
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .ok_or_else(|| ScriboError::ConfigError("could not determine the user data directory".to_string()))?;
        Ok(Self::new(dir.join("scribo").join("store.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        tracing::debug!(key, path = %self.path.display(), "writing store entry");
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut entries = self.read_all()?;
        let existed = entries.remove(key).is_some();
        if existed {
            self.write_all(&entries)?;
        }
        Ok(existed)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.read_all()?.into_keys().collect())
    }
}

const ARTICLE_PREFIX: &str = "article:";

/// Saved articles, stored as JSON under `article:<name>` keys.
pub struct ArticleLibrary<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ArticleLibrary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, name: &str, article: &GeneratedArticle) -> Result<()> {
        let json = serde_json::to_string(article)?;
        tracing::debug!(name, bytes = json.len(), "saving article");
        self.store.set(&format!("{ARTICLE_PREFIX}{name}"), &json)
    }

    pub fn load(&self, name: &str) -> Result<Option<GeneratedArticle>> {
        match self.store.get(&format!("{ARTICLE_PREFIX}{name}"))? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn delete(&self, name: &str) -> Result<bool> {
        self.store.remove(&format!("{ARTICLE_PREFIX}{name}"))
    }

    /// Names of all saved articles.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter_map(|key| key.strip_prefix(ARTICLE_PREFIX).map(str::to_string))
            .collect())
    }
}
