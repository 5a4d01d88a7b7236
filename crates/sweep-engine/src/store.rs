//! Entry store contract shared by every pipeline.
//!
//! The external store is the only shared mutable resource in the system;
//! the engine reads pages, deletes by id, and creates mapped entries
//! through this trait and never holds entries beyond a fetched page.

use std::collections::BTreeMap;

use thiserror::Error;

use sweep_model::Entry;

/// Errors from entry store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("entry not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Backend(String),
}

/// One page of a listing: fixed size, absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: usize,
    pub offset: usize,
}

/// External store of form entries.
///
/// `list` must return active entries in a stable order and return fewer
/// than `page_size` items exactly when no more data remains.
pub trait EntryStore {
    fn list(&self, form_id: &str, page: PageRequest) -> Result<Vec<Entry>, StoreError>;

    /// Delete `entry_id` from `form_id`. Ids are only unique within a
    /// form, so deletion is form-scoped like `list` and `create`.
    fn delete(&mut self, form_id: &str, entry_id: &str) -> Result<(), StoreError>;

    /// Create an entry from mapped field values, returning the new id.
    fn create(
        &mut self,
        form_id: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<String, StoreError>;
}
