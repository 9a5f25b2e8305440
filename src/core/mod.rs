//! Core business logic module
//!
//! This module contains the in-memory record stores and the analysis
//! built on top of them:
//! - `ledger` - Transaction storage, balances, and account summaries
//! - `ticket_store` - Support ticket storage and lifecycle operations
//! - `classifier` - Keyword-based category and priority suggestions

pub mod classifier;
pub mod ledger;
pub mod ticket_store;

pub use classifier::{apply_classification, classify, classify_all};
pub use ledger::{Ledger, TransactionQuery};
pub use ticket_store::{TicketQuery, TicketStore};
