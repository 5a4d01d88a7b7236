//! Read-only preview of matching entries.

use anyhow::{Context, Result};
use tracing::debug;

use sweep_model::{CleanerConfig, Entry};

use crate::fetch::{fetch_page, is_last_page};
use crate::matcher::entry_matches;
use crate::store::EntryStore;

/// Matches shown by default.
pub const DEFAULT_PREVIEW_LIMIT: usize = 50;

/// Preview scans in smaller pages than deletion batches.
pub const PREVIEW_PAGE_SIZE: usize = 500;

/// Scan pages in increasing order and collect up to `limit` matching
/// entries in first-found order. Never mutates the store; safe to call
/// repeatedly.
pub fn preview_matches<S: EntryStore + ?Sized>(
    store: &S,
    config: &CleanerConfig,
    limit: usize,
) -> Result<Vec<Entry>> {
    if !config.is_actionable() || limit == 0 {
        return Ok(Vec::new());
    }
    let mut matches = Vec::new();
    let mut page_index = 0usize;
    loop {
        let page = fetch_page(store, &config.form_id, page_index, PREVIEW_PAGE_SIZE)
            .with_context(|| format!("list entries for form {}", config.form_id))?;
        let last = is_last_page(&page, PREVIEW_PAGE_SIZE);
        debug!(page_index, entries = page.len(), "scanning preview page");
        for entry in page {
            if entry_matches(&entry, &config.criteria, config.logic) {
                matches.push(entry);
                if matches.len() >= limit {
                    return Ok(matches);
                }
            }
        }
        if last {
            break;
        }
        page_index += 1;
    }
    Ok(matches)
}
