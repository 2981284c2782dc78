//! Destination configuration stores
//!
//! Parsed documents are written under a target key into a [`ConfigStore`]. The
//! store is injected so the parser and merger stay independent of where results
//! end up.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key/value store receiving parsed documents.
pub trait ConfigStore {
    /// Whether `key` currently holds a value.
    ///
    /// `null`, `false`, `0` and `""` count as empty and may be overwritten.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_populated)
    }

    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value);
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store file {} must contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: Map<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Store backed by a JSON object file.
///
/// The file is read once on [`JsonFileStore::open`]; changes stay in memory until
/// [`JsonFileStore::save`] writes them back.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!("Store file {} does not exist yet", path.display());
            return Ok(Self { path, inner: MemoryStore::new() });
        }

        let content = fs::read_to_string(&path)
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;

        let entries = if content.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&content)
                .map_err(|source| StoreError::Json { path: path.clone(), source })?
            {
                Value::Object(map) => map,
                _ => return Err(StoreError::NotAnObject { path }),
            }
        };

        Ok(Self { path, inner: MemoryStore { entries } })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the store back as pretty-printed JSON, creating parent directories.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { path: parent.to_path_buf(), source })?;
        }

        let mut content = serde_json::to_string_pretty(&self.inner.entries)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;
        content.push('\n');

        fs::write(&self.path, content)
            .map_err(|source| StoreError::Io { path: self.path.clone(), source })
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.inner.set(key, value);
    }
}
