//! Batched deletion of matching entries.
//!
//! A run is a terminal loop with three independent exits: the run-level
//! deletion cap, the batch cap, and an empty page from the store. Within
//! a batch, at most `max_deletions_per_batch` entries are deleted before
//! moving on; whatever is left gets picked up by a later run. A failed
//! deletion is logged and skipped, never counted, and never aborts the
//! run, so re-running converges toward zero further deletions.

use anyhow::{Context, Result};
use tracing::{debug, info};

use sweep_model::{CleanerConfig, DeletionLimits, DeletionReport, Entry};

use crate::fetch::fetch_page;
use crate::matcher::entry_matches;
use crate::store::EntryStore;

pub fn run_deletion<S: EntryStore + ?Sized>(
    store: &mut S,
    config: &CleanerConfig,
    limits: &DeletionLimits,
) -> Result<DeletionReport> {
    let mut report = DeletionReport::default();
    if !config.is_actionable() {
        report
            .log
            .push("no criteria or form id configured".to_string());
        return Ok(report);
    }

    let mut batches_processed = 0usize;
    while report.deleted_count < limits.max_deletions_per_run
        && batches_processed < limits.max_batches
    {
        let page = fetch_page(store, &config.form_id, batches_processed, limits.batch_size)
            .with_context(|| format!("list entries for form {}", config.form_id))?;
        if page.is_empty() {
            report
                .log
                .push(format!("no more entries after {batches_processed} batches"));
            break;
        }
        report.log.push(format!(
            "batch {batches_processed}: scanning {} entries",
            page.len()
        ));

        let flagged: Vec<&Entry> = page
            .iter()
            .filter(|entry| entry_matches(entry, &config.criteria, config.logic))
            .collect();
        debug!(
            batch = batches_processed,
            entries = page.len(),
            flagged = flagged.len(),
            "processing batch"
        );

        let mut batch_deletions = 0usize;
        for entry in flagged {
            // Both caps bound the inner loop so deleted_count can never
            // overshoot the run limit mid-batch.
            if batch_deletions >= limits.max_deletions_per_batch
                || report.deleted_count >= limits.max_deletions_per_run
            {
                break;
            }
            match store.delete(&config.form_id, &entry.id) {
                Ok(()) => {
                    report.deleted_count += 1;
                    batch_deletions += 1;
                    report.log.push(format!("deleted entry {}", entry.id));
                }
                Err(error) => {
                    report
                        .log
                        .push(format!("failed to delete entry {}: {error}", entry.id));
                }
            }
        }

        report.log.push(format!(
            "batch {batches_processed}: deleted {batch_deletions} entries"
        ));
        batches_processed += 1;
    }

    info!(
        deleted = report.deleted_count,
        batches = batches_processed,
        "deletion run finished"
    );
    Ok(report)
}
