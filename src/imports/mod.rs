//! Bulk import of teams and players from uploaded spreadsheet files.
//!
//! Parsing turns every supported file into rows of string cells; the first
//! row is the header. Each upload runs in one transaction: row-level
//! business errors (empty name, unresolvable team) are collected and
//! reported, database failures roll the whole batch back.

pub mod players;
pub mod spreadsheet;
pub mod teams;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported file type: .{0}")]
    UnsupportedExtension(String),
    #[error("failed to read spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("the file contains no worksheet")]
    EmptyWorkbook,
    #[error("the '{0}' column is required in the file")]
    MissingColumn(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of a bulk import: how many rows were written and which rows
/// were skipped, in file order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<String>,
}

/// Map header names to column indices, case-insensitively. The first
/// occurrence of a duplicated header wins.
pub(crate) fn header_indices(header_row: &[String]) -> HashMap<String, usize> {
    let mut indices = HashMap::new();
    for (i, header) in header_row.iter().enumerate() {
        let key = header.trim().to_lowercase();
        if !key.is_empty() {
            indices.entry(key).or_insert(i);
        }
    }
    indices
}

/// A trimmed cell value; out-of-range indices read as empty.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or("")
}

pub(crate) fn row_is_empty(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}
