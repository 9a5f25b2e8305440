//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Ledger records, create payload, and derived reports
//! - `ticket`: Ticket records, payloads, classification and stats shapes
//! - `import`: Bulk-import result accumulators
//! - `error`: Error taxonomy shared by both cores

pub mod error;
pub mod import;
pub mod ticket;
pub mod transaction;

pub use error::{DeskError, FieldError};
pub use import::{ImportResult, RowError};
pub use ticket::{
    ClassificationResult, CreateTicketRequest, SourceMetadata, Ticket, TicketCategory,
    TicketPriority, TicketSource, TicketStats, TicketStatus, UpdateTicketRequest,
};
pub use transaction::{
    AccountSummary, BalanceReport, CreateTransactionRequest, Transaction, TransactionStatus,
    TransactionType,
};
