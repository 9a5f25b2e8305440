//! Transaction-related types for the ledger service
//!
//! This module defines the stored transaction record, the create-request
//! payload, and the derived report shapes (balance and account summary)
//! returned by the ledger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction kinds supported by the ledger
///
/// Each variant carries its own account requirements: deposits credit a
/// destination account, withdrawals debit a source account, and transfers
/// do both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Credit funds to a destination account
    ///
    /// Requires `toAccount`; `fromAccount` stays empty.
    Deposit,

    /// Debit funds from a source account
    ///
    /// Requires `fromAccount`; `toAccount` stays empty.
    Withdrawal,

    /// Move funds between two accounts
    ///
    /// Requires both `fromAccount` and `toAccount`.
    Transfer,
}

impl TransactionType {
    /// Parse a transaction type from its wire name, case-insensitively
    ///
    /// Used by the list filter, where an unparsable value must not be an
    /// error (the caller maps `None` to an empty match).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

/// Settlement state of a transaction
///
/// Only completed transactions contribute to balances and summary totals;
/// pending and failed rows still count toward account involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Recorded but not yet settled (the default on creation)
    Pending,

    /// Settled; included in balance and summary totals
    Completed,

    /// Rejected or reversed; never affects totals
    Failed,
}

/// A stored ledger transaction
///
/// Created once via [`Ledger::create`](crate::core::Ledger::create), then
/// immutable; the ledger exposes no update or delete for transactions.
/// Wire names are camelCase to match the public API shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned on creation
    pub id: Uuid,

    /// Source account (absent for deposits)
    pub from_account: Option<String>,

    /// Destination account (absent for withdrawals)
    pub to_account: Option<String>,

    /// Amount moved; positive with at most two fractional digits
    pub amount: Decimal,

    /// ISO 4217 currency code, stored uppercase
    pub currency: String,

    /// Transaction kind
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Creation time (caller-supplied or assigned on creation)
    pub timestamp: DateTime<Utc>,

    /// Settlement state
    pub status: TransactionStatus,
}

/// Create-request payload for a transaction
///
/// The ledger validates it (account format, amount precision, currency
/// allow-list, counterpart-account rules) before storing, so a request
/// is not guaranteed to be storable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Source account, required for withdrawals and transfers
    pub from_account: Option<String>,

    /// Destination account, required for deposits and transfers
    pub to_account: Option<String>,

    /// Amount to move
    pub amount: Decimal,

    /// Currency code; any case accepted, normalized to uppercase
    pub currency: String,

    /// Transaction kind
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Optional explicit timestamp; defaults to now
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Optional explicit status; defaults to pending
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}

/// Per-account activity report derived from the transaction list
///
/// `transaction_count` and `most_recent_transaction` consider every
/// transaction touching the account regardless of status, while the two
/// totals only accumulate completed rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Account the summary was computed for
    pub account_id: String,

    /// Sum of completed credits into the account, rounded to two decimals
    pub total_deposits: Decimal,

    /// Sum of completed debits out of the account, rounded to two decimals
    pub total_withdrawals: Decimal,

    /// Number of transactions referencing the account in either role
    pub transaction_count: usize,

    /// Latest timestamp among the involved transactions, if any
    pub most_recent_transaction: Option<DateTime<Utc>>,
}

/// Result shape of a balance query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Account the balance was computed for
    pub account_id: String,

    /// Net balance over completed transactions; may be negative
    pub balance: Decimal,

    /// Uppercased currency filter, or "ALL" when none was given
    pub currency: String,
}
