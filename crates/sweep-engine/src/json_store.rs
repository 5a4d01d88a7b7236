//! File-system backed entry store.
//!
//! Each form's entries live in one JSON array at `{form_id}.json` under
//! the store directory. Good enough for a single synchronous writer; the
//! engine assumes no concurrent mutation during a scan.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use sweep_model::{Entry, STATUS_ACTIVE};

use crate::store::{EntryStore, PageRequest, StoreError};

#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    base_dir: PathBuf,
}

impl JsonEntryStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn form_path(&self, form_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", normalize_id(form_id)))
    }

    fn load_form(&self, form_id: &str) -> Result<Vec<Entry>, StoreError> {
        let path = self.form_path(form_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|error| {
            StoreError::Backend(format!("parse {}: {error}", path.display()))
        })
    }

    fn save_form(&self, form_id: &str, entries: &[Entry]) -> Result<(), StoreError> {
        let path = self.form_path(form_id);
        let json = serde_json::to_string_pretty(entries)
            .map_err(|error| StoreError::Backend(format!("serialize form {form_id}: {error}")))?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Seed an entry directly, mainly for fixtures and tooling.
    pub fn insert(&self, entry: Entry) -> Result<(), StoreError> {
        let mut entries = self.load_form(&entry.form_id)?;
        let form_id = entry.form_id.clone();
        entries.push(entry);
        self.save_form(&form_id, &entries)
    }
}

impl EntryStore for JsonEntryStore {
    fn list(&self, form_id: &str, page: PageRequest) -> Result<Vec<Entry>, StoreError> {
        let mut entries = self.load_form(form_id)?;
        entries.retain(Entry::is_active);
        entries.sort_by(|a, b| id_sort_key(&a.id).cmp(&id_sort_key(&b.id)));
        Ok(entries
            .into_iter()
            .skip(page.offset)
            .take(page.page_size)
            .collect())
    }

    fn delete(&mut self, form_id: &str, entry_id: &str) -> Result<(), StoreError> {
        let mut entries = self.load_form(form_id)?;
        if let Some(position) = entries.iter().position(|entry| entry.id == entry_id) {
            entries.remove(position);
            return self.save_form(form_id, &entries);
        }
        Err(StoreError::NotFound(entry_id.to_string()))
    }

    fn create(
        &mut self,
        form_id: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<String, StoreError> {
        let mut entries = self.load_form(form_id)?;
        let next_id = entries
            .iter()
            .filter_map(|entry| entry.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let id = next_id.to_string();
        let entry = Entry {
            id: id.clone(),
            form_id: form_id.to_string(),
            status: STATUS_ACTIVE.to_string(),
            date_created: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            fields,
        };
        entries.push(entry);
        self.save_form(form_id, &entries)?;
        Ok(id)
    }
}

/// Numeric ids sort numerically, everything else after them, stably.
fn id_sort_key(id: &str) -> (u64, String) {
    (id.parse::<u64>().unwrap_or(u64::MAX), id.to_string())
}

/// Normalize a form id for use in file names.
fn normalize_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
