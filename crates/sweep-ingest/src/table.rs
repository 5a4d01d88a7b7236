//! Delimited-text parsing into a header-indexed table.
//!
//! The first record is the header row. A later record is kept only when
//! its cell count equals the header count; everything else is silently
//! dropped. Duplicate header names are allowed; when a name repeats, the
//! last column of that name wins when indexing a row.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("malformed table: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a CSV file. Only a missing file is a hard error; an unreadable
/// stream reports as malformed.
pub fn parse_table(path: &Path) -> Result<ParsedTable, ParseError> {
    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|error| ParseError::Malformed(error.to_string()))?;
    parse_table_from_reader(file)
}

/// Parse CSV from any reader (uploads arrive as in-memory buffers).
pub fn parse_table_from_reader<R: Read>(reader: R) -> Result<ParsedTable, ParseError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|error| ParseError::Malformed(error.to_string()))?
            .iter()
            .map(str::to_string)
            .collect(),
        None => return Ok(ParsedTable::default()),
    };

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in records {
        let record = record.map_err(|error| ParseError::Malformed(error.to_string()))?;
        if record.len() != headers.len() {
            dropped += 1;
            continue;
        }
        let row: BTreeMap<String, String> = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }
    if dropped > 0 {
        debug!(dropped, "dropped rows with mismatched cell count");
    }
    Ok(ParsedTable { headers, rows })
}
