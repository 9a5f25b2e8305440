//! Result types for the bulk import pipeline
//!
//! An import never fails as a whole: whatever happens is folded into an
//! [`ImportResult`]. Row-level failures are numbered from 1; failures
//! that prevent any rows from being extracted (undecodable bytes, a
//! malformed document) are reported as a single synthetic entry on row 0
//! with all counters left at zero.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation or processing failure for a single candidate row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-indexed row number; 0 marks a whole-file failure
    pub row: usize,

    /// One "{field}: {message}" entry per failed check, or a single
    /// generic message for unexpected failures
    pub errors: Vec<String>,
}

/// Aggregate outcome of one import call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    /// Candidate rows extracted from the file (0 if extraction failed)
    pub total: usize,

    /// Rows that validated and were stored
    pub success_count: usize,

    /// Rows rejected by validation or construction
    pub error_count: usize,

    /// Per-row failure details, in row order
    pub errors: Vec<RowError>,

    /// Identifiers of the created tickets, in creation order
    pub imported_ids: Vec<Uuid>,
}

impl ImportResult {
    /// Start a result for a batch of `total` extracted rows
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            success_count: 0,
            error_count: 0,
            errors: Vec::new(),
            imported_ids: Vec::new(),
        }
    }

    /// Result for a file whose rows could not be extracted at all
    ///
    /// Counters stay at zero; the message lands in a row-0 entry.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            total: 0,
            success_count: 0,
            error_count: 0,
            errors: vec![RowError {
                row: 0,
                errors: vec![message.into()],
            }],
            imported_ids: Vec::new(),
        }
    }

    /// Record a failed row with its collected messages
    pub fn record_failure(&mut self, row: usize, errors: Vec<String>) {
        self.errors.push(RowError { row, errors });
        self.error_count += 1;
    }

    /// Record a successfully created ticket
    pub fn record_success(&mut self, id: Uuid) {
        self.imported_ids.push(id);
        self.success_count += 1;
    }
}
