//! CSV row extraction for bulk ticket import
//!
//! This module is responsible for turning CSV text into loose row
//! objects for the shared import pipeline. Cells become strings keyed by
//! the header row; a header with no cell on a short row maps to null,
//! while a present-but-empty cell maps to the empty string. That
//! distinction matters downstream: validation reports the two cases
//! differently.
//!
//! All functions are pure (no I/O) for easy testing.

use csv::ReaderBuilder;
use serde_json::{Map, Value};

/// Extract candidate rows from CSV text
///
/// Rows may have fewer or more cells than the header row: missing
/// trailing cells map to null, surplus cells are dropped. Cell content
/// is kept verbatim, without trimming.
///
/// # Arguments
///
/// * `text` - The decoded CSV document, header row first
///
/// # Returns
///
/// One JSON object per data row, or an error message when the document
/// cannot be parsed at all.
pub fn extract_rows(text: &str) -> Result<Vec<Value>, String> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|error| format!("Failed to parse CSV: {error}"))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| format!("Failed to parse CSV: {error}"))?;

        let mut row = Map::new();
        for (index, header) in headers.iter().enumerate() {
            let cell = record
                .get(index)
                .map_or(Value::Null, |cell| Value::String(cell.to_string()));
            row.insert(header.to_string(), cell);
        }
        rows.push(Value::Object(row));
    }

    Ok(rows)
}
