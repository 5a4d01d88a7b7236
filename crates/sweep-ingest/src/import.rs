//! Mapped import of parsed rows into the entry store.

use std::collections::BTreeMap;

use tracing::debug;

use sweep_engine::EntryStore;
use sweep_model::{ImportMapping, ImportReport};

use crate::table::ParsedTable;

/// Successful imports allowed per run; keeps a run inside one
/// synchronous invocation.
pub const MAX_IMPORTS_PER_RUN: usize = 1000;

/// Import every kept row, building each destination entry from mapped,
/// non-blank destination fields only. A failed create is recorded with
/// its 1-based row number and does not stop the run; hitting the run cap
/// appends a truncation notice and aborts the remaining rows.
pub fn import_table<S: EntryStore + ?Sized>(
    store: &mut S,
    form_id: &str,
    table: &ParsedTable,
    mapping: &ImportMapping,
) -> ImportReport {
    let mut report = ImportReport::default();
    for (index, row) in table.rows.iter().enumerate() {
        if report.imported >= MAX_IMPORTS_PER_RUN {
            report.errors.push(format!(
                "import stopped after {MAX_IMPORTS_PER_RUN} entries; remaining rows skipped"
            ));
            break;
        }
        let mut fields = BTreeMap::new();
        for (column, field_id) in mapping.iter() {
            if let Some(value) = row.get(column) {
                fields.insert(field_id.to_string(), value.clone());
            }
        }
        match store.create(form_id, fields) {
            Ok(id) => {
                report.imported += 1;
                debug!(row = index + 1, entry_id = %id, "imported row");
            }
            Err(error) => {
                report.errors.push(format!("row {}: {error}", index + 1));
            }
        }
    }
    report
}
