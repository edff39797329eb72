// src/checklist/store.rs
use anyhow::{Context, Result};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Small string blobs keyed by string.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys in one JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// A missing file opens as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Store {} is not a JSON object of strings", path.display()))?
        } else {
            debug!("Store {} does not exist yet; starting empty", path.display());
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Writes a sibling temp file and renames it over the store, so a crash mid-write
    /// leaves the previous contents intact.
    fn flush(&self) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
                parent.to_path_buf()
            }
            None => PathBuf::from("."),
        };
        let raw = serde_json::to_string_pretty(&self.values).context("Failed to encode store")?;

        let mut staged = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        staged
            .write_all(raw.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .with_context(|| format!("Failed to write store {}", self.path.display()))?;
        staged
            .persist(&self.path)
            .with_context(|| format!("Failed to replace store {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
