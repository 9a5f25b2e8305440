//! LedgerDesk Library
//! # Overview
//!
//! This library provides the in-memory core of a small banking back office:
//! a transaction ledger with derived balances and a customer-support ticket
//! desk with keyword classification and multi-format bulk import
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Ticket, ImportResult, etc.)
//! - [`validate`] - Field-level validation rules shared by every entry path
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Transaction storage, filtering, and derived balances
//!   - [`core::ticket_store`] - Ticket lifecycle and statistics
//!   - [`core::classifier`] - Keyword-based category and priority suggestions
//! - [`import`] - Bulk import pipeline for CSV, JSON, and XML batches
//! - [`cli`] - CLI argument parsing and the batch pipeline
//!
//! # Transaction Types
//!
//! The ledger supports three transaction types:
//!
//! - **Deposit**: Credit funds to a destination account
//! - **Withdrawal**: Debit funds from a source account
//! - **Transfer**: Move funds between a source and a destination account
//!
//! Balances are derived on demand from completed transactions only; nothing
//! is stored per account.
//!
//! # Ticket Lifecycle
//!
//! Each ticket carries:
//! - `category` / `priority`: classification fields, settable or suggested
//!   by the keyword classifier
//! - `status`: new, in_progress, waiting_customer, resolved, or closed
//! - `resolved_at`: set the first time a ticket reaches resolved, then kept
//!
//! # Stores
//!
//! Both stores are plain owned values with no interior locking; embedders
//! that share one across threads wrap it in their own synchronization.

// Module declarations
pub mod cli;
pub mod core;
pub mod import;
pub mod types;
pub mod validate;

pub use core::{Ledger, TicketQuery, TicketStore, TransactionQuery};
pub use import::{import_tickets, ImportFormat};
pub use types::{
    ClassificationResult, CreateTicketRequest, CreateTransactionRequest, DeskError, FieldError,
    ImportResult, Ticket, TicketCategory, TicketPriority, TicketSource, TicketStats, TicketStatus,
    Transaction, TransactionStatus, TransactionType,
};
