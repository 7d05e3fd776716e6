//! Entry repository backed by entries.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EntryId, ExpenseEntry};

use super::file_io::{read_json, write_json_atomic};
use super::source::{validate_entries, EntrySource};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    entries: Vec<ExpenseEntry>,
}

/// Entries kept in insertion order and persisted as JSON
pub struct JsonEntryStore {
    path: PathBuf,
    data: RwLock<Vec<ExpenseEntry>>,
}

impl JsonEntryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk, rejecting files that break the entry contract
    pub fn load(&self) -> ExpenseResult<()> {
        let file_data: EntryData = read_json(&self.path)?;
        validate_entries(&file_data.entries)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.entries;

        tracing::debug!(path = %self.path.display(), entries = data.len(), "loaded entries");
        Ok(())
    }

    pub fn save(&self) -> ExpenseResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = EntryData {
            entries: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;

        tracing::debug!(path = %self.path.display(), entries = data.len(), "saved entries");
        Ok(())
    }

    /// All entries in insertion order
    pub fn all(&self) -> ExpenseResult<Vec<ExpenseEntry>> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    pub fn get(&self, id: &EntryId) -> ExpenseResult<Option<ExpenseEntry>> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|e| &e.id == id).cloned())
    }

    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.all()?.len())
    }

    /// Add one entry
    pub fn add(&self, entry: ExpenseEntry) -> ExpenseResult<()> {
        self.extend(vec![entry]).map(|_| ())
    }

    /// Add several entries; nothing is added if any of them is rejected
    pub fn extend(&self, entries: Vec<ExpenseEntry>) -> ExpenseResult<usize> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut combined = data.clone();
        combined.extend(entries.iter().cloned());
        validate_entries(&combined)?;

        let added = entries.len();
        *data = combined;
        Ok(added)
    }

    /// Remove an entry by id
    pub fn remove(&self, id: &EntryId) -> ExpenseResult<ExpenseEntry> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let position = data
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| ExpenseError::entry_not_found(id.as_str()))?;
        Ok(data.remove(position))
    }
}

impl EntrySource for JsonEntryStore {
    fn fetch_entries(&self) -> ExpenseResult<Vec<ExpenseEntry>> {
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonEntryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonEntryStore::new(temp_dir.path().join("data").join("entries.json"));
        store.load().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_add_save_and_reload() {
        let (temp_dir, store) = store();
        store
            .add(ExpenseEntry::new("Lunch", "Food", Money::from_cents(1200), "2024-03-01").with_id("e1"))
            .unwrap();
        store
            .add(ExpenseEntry::new("Bus", "Transport", Money::from_cents(300), "2024-03-02").with_id("e2"))
            .unwrap();
        store.save().unwrap();

        let reloaded = JsonEntryStore::new(temp_dir.path().join("data").join("entries.json"));
        reloaded.load().unwrap();
        let entries = reloaded.fetch_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_str(), "e1");
        assert_eq!(entries[1].amount.cents(), 300);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let (_temp_dir, store) = store();
        let entry = ExpenseEntry::new("Lunch", "Food", Money::from_cents(1200), "").with_id("e1");
        store.add(entry.clone()).unwrap();

        let err = store.add(entry).unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_extend_is_all_or_nothing() {
        let (_temp_dir, store) = store();
        let result = store.extend(vec![
            ExpenseEntry::new("Ok", "Food", Money::from_cents(100), ""),
            ExpenseEntry::new("", "Food", Money::from_cents(100), ""),
        ]);
        assert!(result.is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_get_and_remove() {
        let (_temp_dir, store) = store();
        store
            .add(ExpenseEntry::new("Film", "Entertainment", Money::from_cents(900), "").with_id("f"))
            .unwrap();

        let id = EntryId::from("f");
        assert!(store.get(&id).unwrap().is_some());
        assert_eq!(store.remove(&id).unwrap().description, "Film");
        assert!(store.remove(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_load_rejects_duplicate_ids_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"{"entries":[
                {"id":"x","description":"A","amount":1},
                {"id":"x","description":"B","amount":2}
            ]}"#,
        )
        .unwrap();

        let store = JsonEntryStore::new(path);
        assert!(matches!(
            store.load().unwrap_err(),
            ExpenseError::Duplicate { .. }
        ));
    }
}
