use serde::{Deserialize, Serialize};

/// Outcome of one deletion run.
///
/// `log` carries one line per attempted deletion plus batch boundary
/// markers; `deleted_count` equals the number of logged successes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletionReport {
    pub deleted_count: usize,
    pub log: Vec<String>,
}

/// Run-level and intra-batch bounds for a deletion run.
///
/// The caps exist so a run fits inside one synchronous invocation;
/// anything left over is picked up by the next run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletionLimits {
    /// Entries fetched per batch.
    pub batch_size: usize,
    /// Hard cap on successful deletions across the whole run.
    pub max_deletions_per_run: usize,
    /// Hard cap on batches scanned per run.
    pub max_batches: usize,
    /// Deletions allowed within a single batch before moving on.
    pub max_deletions_per_batch: usize,
}

impl Default for DeletionLimits {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_deletions_per_run: 1000,
            max_batches: 50,
            max_deletions_per_batch: 10,
        }
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<String>,
}
