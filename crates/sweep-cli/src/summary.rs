//! Terminal rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use sweep_model::{CleanerConfig, DeletionReport, Entry, ImportReport};

/// Log lines shown for a deletion run before eliding.
pub const MAX_LOG_LINES: usize = 20;

/// Errors shown for an import run before eliding.
pub const MAX_ERROR_LINES: usize = 10;

const MAX_VALUE_WIDTH: usize = 50;

pub fn print_config(config: &CleanerConfig) {
    let form = if config.form_id.is_empty() {
        "(not set)"
    } else {
        &config.form_id
    };
    println!("Form: {form}");
    println!("Logic: {}", config.logic);
    if config.criteria.is_empty() {
        println!("No rules configured.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Match value")]);
    apply_table_style(&mut table);
    for rule in &config.criteria {
        table.add_row(vec![
            Cell::new(&rule.field_id),
            Cell::new(truncate_value(&rule.value)),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(config: &CleanerConfig, matches: &[Entry]) {
    println!("Found {} matching entries.", matches.len());
    if matches.is_empty() {
        return;
    }
    let mut table = Table::new();
    let mut header = vec![header_cell("Id"), header_cell("Date")];
    for rule in &config.criteria {
        header.push(header_cell(&format!("Field {}", rule.field_id)));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for entry in matches {
        let mut row = vec![
            Cell::new(&entry.id),
            Cell::new(&entry.date_created),
        ];
        for rule in &config.criteria {
            row.push(Cell::new(truncate_value(entry.value(&rule.field_id))));
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_deletion_report(report: &DeletionReport) {
    println!("{}", format_deletion_report(report, MAX_LOG_LINES));
}

pub fn print_import_report(report: &ImportReport) {
    println!("{}", format_import_report(report, MAX_ERROR_LINES));
}

/// Render a deletion report with the log capped at `max_log_lines`;
/// elided lines are visibly marked so a capped view is never mistaken
/// for the full log.
pub fn format_deletion_report(report: &DeletionReport, max_log_lines: usize) -> String {
    let mut out = format!("Deleted {} entries.", report.deleted_count);
    for line in report.log.iter().take(max_log_lines) {
        out.push_str("\n  ");
        out.push_str(line);
    }
    if report.log.len() > max_log_lines {
        out.push_str(&format!(
            "\n  (+ {} more log lines)",
            report.log.len() - max_log_lines
        ));
    }
    out
}

/// Render an import report with errors capped at `max_errors`.
pub fn format_import_report(report: &ImportReport, max_errors: usize) -> String {
    let mut out = format!("Imported {} entries.", report.imported);
    if !report.errors.is_empty() {
        out.push_str("\nErrors:");
        for error in report.errors.iter().take(max_errors) {
            out.push_str("\n  ");
            out.push_str(error);
        }
        if report.errors.len() > max_errors {
            out.push_str(&format!(
                "\n  (+ {} more errors)",
                report.errors.len() - max_errors
            ));
        }
    }
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn truncate_value(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_WIDTH {
        let head: String = value.chars().take(MAX_VALUE_WIDTH).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}
