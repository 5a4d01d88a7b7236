//! Paginated fetching over the entry store.
//!
//! The offset is always `page_index * page_size` so successive pages
//! cover disjoint, contiguous ranges. Passing a raw batch counter as the
//! offset re-scans overlapping windows; `tests/pagination.rs` guards
//! against that regression.

use sweep_model::Entry;

use crate::store::{EntryStore, PageRequest, StoreError};

/// Build the page request for a 0-based page index.
pub fn page_request(page_index: usize, page_size: usize) -> PageRequest {
    PageRequest {
        page_size,
        offset: page_index.saturating_mul(page_size),
    }
}

/// Fetch one page of active entries for a form.
pub fn fetch_page<S: EntryStore + ?Sized>(
    store: &S,
    form_id: &str,
    page_index: usize,
    page_size: usize,
) -> Result<Vec<Entry>, StoreError> {
    store.list(form_id, page_request(page_index, page_size))
}

/// A short page signals end-of-data; total counts are never assumed.
pub fn is_last_page(page: &[Entry], page_size: usize) -> bool {
    page.len() < page_size
}
