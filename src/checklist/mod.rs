// src/checklist/mod.rs
//! Per-category document checklists whose ticked state survives restarts.

pub mod guide;
pub mod store;

use anyhow::{bail, Context, Result};
use log::{debug, warn};

use crate::models::DocumentCategory;
use crate::utils::constants::CHECKLIST_KEY_PREFIX;

pub use guide::{default_items, process_steps};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

pub fn storage_key(category: DocumentCategory) -> String {
    format!("{}{}", CHECKLIST_KEY_PREFIX, category.key())
}

/// Ticked state of one category's checklist.
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    category: DocumentCategory,
    items: Vec<String>,
    checked: Vec<bool>,
}

impl Checklist {
    /// Restore saved progress for `category`. Saved state of a different length is
    /// truncated or padded with unchecked items; unreadable state starts fresh.
    pub fn load(
        store: &dyn KeyValueStore,
        category: DocumentCategory,
        items: Vec<String>,
    ) -> Result<Self> {
        let key = storage_key(category);
        let mut checked = match store.get(&key)? {
            Some(raw) => match serde_json::from_str::<Vec<bool>>(&raw) {
                Ok(saved) => saved,
                Err(e) => {
                    warn!("⚠️ Ignoring unreadable checklist progress under '{}': {}", key, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        if checked.len() != items.len() {
            debug!(
                "Resizing saved progress for '{}' from {} to {} items",
                key,
                checked.len(),
                items.len()
            );
            checked.resize(items.len(), false);
        }
        Ok(Self {
            category,
            items,
            checked,
        })
    }

    pub fn category(&self) -> DocumentCategory {
        self.category
    }

    /// Items paired with their ticked state.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.items
            .iter()
            .map(String::as_str)
            .zip(self.checked.iter().copied())
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Rounded share of ticked items; 0 for an empty checklist.
    pub fn progress_percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        (self.checked_count() as f64 / self.items.len() as f64 * 100.0).round() as u32
    }

    /// Flip one item and persist the whole list. Nothing changes if the save fails.
    pub fn toggle(&mut self, store: &mut dyn KeyValueStore, index: usize) -> Result<bool> {
        if index >= self.checked.len() {
            bail!(
                "Checklist item {} does not exist ({} has {} items)",
                index,
                self.category.title(),
                self.items.len()
            );
        }
        let mut updated = self.checked.clone();
        updated[index] = !updated[index];
        let now_checked = updated[index];

        let raw = serde_json::to_string(&updated).context("Failed to encode checklist")?;
        store
            .set(&storage_key(self.category), raw)
            .context("Failed to save checklist progress")?;
        self.checked = updated;
        Ok(now_checked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Item {}", i)).collect()
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key(DocumentCategory::Aadhar), "checklist_aadhar");
        assert_eq!(storage_key(DocumentCategory::Passport), "checklist_passport");
    }

    #[test]
    fn test_fresh_checklist() {
        let store = MemoryStore::new();
        let checklist = Checklist::load(&store, DocumentCategory::Pan, items(3)).unwrap();
        assert_eq!(checklist.checked_count(), 0);
        assert_eq!(checklist.progress_percent(), 0);
        assert!(checklist.entries().all(|(_, checked)| !checked));
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let mut checklist = Checklist::load(&store, DocumentCategory::Voter, items(3)).unwrap();
        assert!(checklist.toggle(&mut store, 0).unwrap());
        assert!(checklist.toggle(&mut store, 2).unwrap());
        assert_eq!(checklist.progress_percent(), 67);
        assert_eq!(
            store.get("checklist_voter").unwrap(),
            Some("[true,false,true]".to_string())
        );

        assert!(!checklist.toggle(&mut store, 0).unwrap());
        let restored = Checklist::load(&store, DocumentCategory::Voter, items(3)).unwrap();
        assert_eq!(restored.checked_count(), 1);
        assert_eq!(restored, checklist);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut store = MemoryStore::new();
        let mut checklist = Checklist::load(&store, DocumentCategory::Aadhar, items(2)).unwrap();
        assert!(checklist.toggle(&mut store, 2).is_err());
        assert_eq!(store.get("checklist_aadhar").unwrap(), None);
    }

    #[test]
    fn test_saved_length_mismatch_is_resized() {
        let mut store = MemoryStore::new();
        store
            .set("checklist_pan", "[true,true,true,true]".to_string())
            .unwrap();
        let shorter = Checklist::load(&store, DocumentCategory::Pan, items(2)).unwrap();
        assert_eq!(shorter.progress_percent(), 100);

        store.set("checklist_pan", "[true]".to_string()).unwrap();
        let longer = Checklist::load(&store, DocumentCategory::Pan, items(4)).unwrap();
        assert_eq!(longer.checked_count(), 1);
        assert_eq!(longer.progress_percent(), 25);
    }

    #[test]
    fn test_unreadable_progress_starts_fresh() {
        let mut store = MemoryStore::new();
        store.set("checklist_aadhar", "{oops".to_string()).unwrap();
        let checklist = Checklist::load(&store, DocumentCategory::Aadhar, items(2)).unwrap();
        assert_eq!(checklist.checked_count(), 0);
    }

    #[test]
    fn test_empty_checklist_progress() {
        let store = MemoryStore::new();
        let checklist = Checklist::load(&store, DocumentCategory::Aadhar, Vec::new()).unwrap();
        assert_eq!(checklist.progress_percent(), 0);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<()> {
            bail!("disk full")
        }
    }

    #[test]
    fn test_failed_save_leaves_checklist_unchanged() {
        let mut store = FailingStore;
        let mut checklist = Checklist::load(&store, DocumentCategory::Pan, items(3)).unwrap();
        let err = checklist.toggle(&mut store, 0).unwrap_err();
        assert!(format!("{:#}", err).contains("disk full"));
        assert_eq!(checklist.checked_count(), 0);
        assert_eq!(checklist.progress_percent(), 0);
    }
}
