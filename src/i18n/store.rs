//! Persistence of the chosen locale.
//!
//! The stored layout is a single key-value entry, `{"language": "<code>"}`,
//! with no schema versioning.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Where the active locale survives between sessions.
pub trait LocaleStore: Send + Sync {
    /// The stored locale code, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, code: &str) -> Result<()>;
}

impl<T: LocaleStore + ?Sized> LocaleStore for Arc<T> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, code: &str) -> Result<()> {
        (**self).save(code)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredLocale {
    language: String,
}

/// A JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocaleStore for FileLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let stored: StoredLocale = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(Some(stored.language))
    }

    fn save(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string(&StoredLocale {
            language: code.to_string(),
        })?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

/// Process-local storage, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    value: Mutex<Option<String>>,
}

impl MemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn load(&self) -> Result<Option<String>> {
        let value = self
            .value
            .lock()
            .map_err(|_| anyhow!("locale store lock poisoned"))?;
        Ok(value.clone())
    }

    fn save(&self, code: &str) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| anyhow!("locale store lock poisoned"))?;
        *value = Some(code.to_string());
        Ok(())
    }
}
