//! In-memory entry store, the test double used across the workspace.

use std::collections::{BTreeMap, BTreeSet};

use sweep_model::{Entry, STATUS_ACTIVE};

use crate::store::{EntryStore, PageRequest, StoreError};

#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: Vec<Entry>,
    next_id: u64,
    failing_deletes: BTreeSet<String>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, entry: Entry) {
        if let Ok(numeric) = entry.id.parse::<u64>() {
            self.next_id = self.next_id.max(numeric + 1);
        }
        self.entries.push(entry);
    }

    /// Make deletion of `entry_id` fail with a backend error.
    pub fn fail_deletes_for(&mut self, entry_id: impl Into<String>) {
        self.failing_deletes.insert(entry_id.into());
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryStore for MemoryEntryStore {
    fn list(&self, form_id: &str, page: PageRequest) -> Result<Vec<Entry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.form_id == form_id && entry.is_active())
            .skip(page.offset)
            .take(page.page_size)
            .cloned()
            .collect())
    }

    fn delete(&mut self, form_id: &str, entry_id: &str) -> Result<(), StoreError> {
        if self.failing_deletes.contains(entry_id) {
            return Err(StoreError::Backend(format!(
                "backend refused to delete {entry_id}"
            )));
        }
        let position = self
            .entries
            .iter()
            .position(|entry| entry.form_id == form_id && entry.id == entry_id);
        match position {
            Some(position) => {
                self.entries.remove(position);
                Ok(())
            }
            None => Err(StoreError::NotFound(entry_id.to_string())),
        }
    }

    fn create(
        &mut self,
        form_id: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<String, StoreError> {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.entries.push(Entry {
            id: id.clone(),
            form_id: form_id.to_string(),
            status: STATUS_ACTIVE.to_string(),
            date_created: String::new(),
            fields,
        });
        Ok(id)
    }
}
