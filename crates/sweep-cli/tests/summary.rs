//! Report rendering: caps and visible truncation markers.

use insta::assert_snapshot;

use sweep_cli::summary::{format_deletion_report, format_import_report};
use sweep_model::{DeletionReport, ImportReport};

#[test]
fn deletion_report_renders_count_and_log() {
    let report = DeletionReport {
        deleted_count: 2,
        log: vec![
            "batch 0: scanning 3 entries".to_string(),
            "deleted entry 1".to_string(),
            "deleted entry 3".to_string(),
            "batch 0: deleted 2 entries".to_string(),
            "no more entries after 1 batches".to_string(),
        ],
    };
    assert_snapshot!(format_deletion_report(&report, 20), @r"
    Deleted 2 entries.
      batch 0: scanning 3 entries
      deleted entry 1
      deleted entry 3
      batch 0: deleted 2 entries
      no more entries after 1 batches
    ");
}

#[test]
fn long_deletion_logs_are_visibly_truncated() {
    let report = DeletionReport {
        deleted_count: 5,
        log: (1..=5).map(|id| format!("deleted entry {id}")).collect(),
    };
    let rendered = format_deletion_report(&report, 3);
    assert!(rendered.contains("deleted entry 3"));
    assert!(!rendered.contains("deleted entry 4"));
    assert!(rendered.contains("(+ 2 more log lines)"));
}

#[test]
fn import_report_renders_errors_with_cap() {
    let report = ImportReport {
        imported: 1,
        errors: vec![
            "row 2: backend rejected entry".to_string(),
            "row 3: backend rejected entry".to_string(),
        ],
    };
    assert_snapshot!(format_import_report(&report, 10), @r"
    Imported 1 entries.
    Errors:
      row 2: backend rejected entry
      row 3: backend rejected entry
    ");

    let rendered = format_import_report(&report, 1);
    assert!(rendered.contains("row 2"));
    assert!(!rendered.contains("row 3"));
    assert!(rendered.contains("(+ 1 more errors)"));
}

#[test]
fn clean_import_report_has_no_error_section() {
    let report = ImportReport {
        imported: 3,
        errors: Vec::new(),
    };
    assert_snapshot!(format_import_report(&report, 10), @"Imported 3 entries.");
}
