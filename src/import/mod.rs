//! Bulk ticket import module
//!
//! Handles multi-format bulk import with per-row partial-failure
//! semantics: every row is validated independently, failures are
//! collected with their 1-indexed row number, and valid rows are stored
//! even when their neighbors fail.
//!
//! # Components
//!
//! - `csv_format` - CSV extraction (header row, flat columns)
//! - `json_format` - JSON extraction (array of ticket objects)
//! - `xml_format` - XML extraction (`<tickets><ticket>...` documents)
//!
//! Each format module extracts candidate rows as loose JSON objects; the
//! shared pipeline in this module normalizes flat rows into the
//! canonical nested shape, validates, and stores. A failure that
//! prevents row extraction altogether (undecodable bytes, a parse
//! error, a wrong top-level shape) is reported as a single synthetic
//! row-0 error with an otherwise empty result, never as an `Err`.

pub mod csv_format;
pub mod json_format;
pub mod xml_format;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::core::TicketStore;
use crate::types::{CreateTicketRequest, DeskError, ImportResult};
use crate::validate::validate_ticket_record;

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
    Xml,
}

impl ImportFormat {
    /// File extension (without the dot) for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImportFormat::Csv => "csv",
            ImportFormat::Json => "json",
            ImportFormat::Xml => "xml",
        }
    }

    /// Detect the format from a filename extension
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".csv") {
            Some(ImportFormat::Csv)
        } else if filename.ends_with(".json") {
            Some(ImportFormat::Json)
        } else if filename.ends_with(".xml") {
            Some(ImportFormat::Xml)
        } else {
            None
        }
    }

    /// Reject a filename that does not carry this format's extension
    ///
    /// Runs before any file content is touched.
    pub fn check_filename(&self, filename: &str) -> Result<(), DeskError> {
        if filename.ends_with(&format!(".{}", self.extension())) {
            return Ok(());
        }
        let message = match self {
            ImportFormat::Csv => "File must be a CSV file",
            ImportFormat::Json => "File must be a JSON file",
            ImportFormat::Xml => "File must be an XML file",
        };
        Err(DeskError::unsupported_file(message))
    }
}

/// Import a batch of tickets from raw file content
///
/// Decodes the bytes as UTF-8, extracts candidate rows with the format's
/// parser, and runs each row through normalization, validation, and
/// creation. All failure modes land in the returned [`ImportResult`]:
/// file-level failures as a single row-0 error, row-level failures as
/// per-row entries.
///
/// # Arguments
///
/// * `store` - The ticket store receiving the valid rows
/// * `format` - The format to parse the content as
/// * `bytes` - The raw file content
pub fn import_tickets(
    store: &mut TicketStore,
    format: ImportFormat,
    bytes: &[u8],
) -> ImportResult {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            warn!(format = format.extension(), %error, "import file is not valid UTF-8");
            return ImportResult::failed(format!("Failed to read file: {error}"));
        }
    };

    let rows = match format {
        ImportFormat::Csv => csv_format::extract_rows(text),
        ImportFormat::Json => json_format::extract_rows(text),
        ImportFormat::Xml => xml_format::extract_rows(text),
    };

    let rows = match rows {
        Ok(rows) => rows,
        Err(message) => {
            warn!(format = format.extension(), %message, "import file failed extraction");
            return ImportResult::failed(message);
        }
    };

    let result = process_rows(store, rows);
    info!(
        format = format.extension(),
        total = result.total,
        imported = result.success_count,
        failed = result.error_count,
        "import finished"
    );
    result
}

/// Validate and store candidate rows, accumulating per-row outcomes
fn process_rows(store: &mut TicketStore, rows: Vec<Value>) -> ImportResult {
    let mut result = ImportResult::with_total(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let row_number = index + 1;

        let record = match canonicalize_row(row) {
            Ok(record) => record,
            Err(message) => {
                debug!(row = row_number, %message, "row has no usable shape");
                result.record_failure(row_number, vec![format!("Unexpected error: {message}")]);
                continue;
            }
        };

        let field_errors = validate_ticket_record(&record);
        if !field_errors.is_empty() {
            debug!(
                row = row_number,
                failures = field_errors.len(),
                "row failed validation"
            );
            result.record_failure(
                row_number,
                field_errors.iter().map(ToString::to_string).collect(),
            );
            continue;
        }

        match draft_from_record(record) {
            Ok(request) => {
                let ticket = store.create(request);
                result.record_success(ticket.id);
            }
            Err(message) => {
                warn!(row = row_number, %message, "valid row failed construction");
                result.record_failure(row_number, vec![format!("Unexpected error: {message}")]);
            }
        }
    }

    result
}

/// Bring a candidate row into the canonical nested shape
///
/// Rows that already carry a `metadata` key are taken as canonical;
/// anything else is treated as a flat row and normalized. Non-object
/// rows have no usable shape at all.
fn canonicalize_row(row: Value) -> Result<Map<String, Value>, String> {
    let Value::Object(row) = row else {
        return Err("row is not an object".to_string());
    };
    if row.contains_key("metadata") {
        Ok(row)
    } else {
        normalize_flat_row(&row)
    }
}

/// Convert a flat row (CSV-shaped) into the canonical nested shape
///
/// The `tags` column is split on commas with blank entries dropped, and
/// the source/browser/device_type columns are folded into a nested
/// metadata object. Source defaults to "api" and priority to "medium"
/// only when the column is absent entirely; present-but-empty values are
/// kept so validation can report them.
fn normalize_flat_row(row: &Map<String, Value>) -> Result<Map<String, Value>, String> {
    let tags: Vec<Value> = match row.get("tags") {
        Some(value) if is_non_empty(value) => match value {
            Value::String(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(|tag| Value::String(tag.to_string()))
                .collect(),
            _ => return Err("tags must be a comma-separated string".to_string()),
        },
        _ => Vec::new(),
    };

    let mut metadata = Map::new();
    metadata.insert(
        "source".to_string(),
        row.get("source")
            .cloned()
            .unwrap_or_else(|| Value::String("api".to_string())),
    );
    for key in ["browser", "device_type"] {
        if let Some(value) = row.get(key) {
            if is_non_empty(value) {
                metadata.insert(key.to_string(), value.clone());
            }
        }
    }

    let mut canonical = Map::new();
    for key in [
        "customer_id",
        "customer_email",
        "customer_name",
        "subject",
        "description",
        "category",
    ] {
        canonical.insert(key.to_string(), row.get(key).cloned().unwrap_or(Value::Null));
    }
    canonical.insert(
        "priority".to_string(),
        row.get("priority")
            .cloned()
            .unwrap_or_else(|| Value::String("medium".to_string())),
    );
    canonical.insert("tags".to_string(), Value::Array(tags));
    canonical.insert("metadata".to_string(), Value::Object(metadata));

    Ok(canonical)
}

/// Build the typed create request from a validated canonical row
///
/// Validation checks shape, not types the store needs (a numeric
/// customer_id passes the presence rule, for instance), so this
/// conversion can still fail; the caller reports that as a generic row
/// error. Absent priority and tags fall back to their request defaults.
fn draft_from_record(record: Map<String, Value>) -> Result<CreateTicketRequest, String> {
    serde_json::from_value(Value::Object(record)).map_err(|error| error.to_string())
}

/// Whether a loose value counts as present content
///
/// Null, empty strings, and empty collections count as absent; numbers
/// and booleans count by their zero/false value.
fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
