//! Transaction ledger module
//!
//! This module provides the `Ledger` struct which stores banking
//! transactions in-memory and derives balances and per-account summaries
//! from them.
//!
//! The Ledger is responsible for:
//! - Validating and storing new transactions in creation order
//! - Looking up transactions by identifier
//! - Filtering the transaction list by account, type, and date range
//! - Calculating account balances from completed transactions
//! - Generating per-account activity summaries

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::types::{
    AccountSummary, BalanceReport, CreateTransactionRequest, DeskError, Transaction,
    TransactionStatus, TransactionType,
};
use crate::validate::validate_transaction_request;

/// Optional filters for listing transactions
///
/// Values arrive as raw strings from the query layer and are parsed here.
/// A value that cannot be parsed into its domain type yields an empty
/// result rather than an error.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Match transactions where this account is source or destination
    pub account_id: Option<String>,
    /// Match transactions of this type (deposit, withdrawal, transfer)
    pub tx_type: Option<String>,
    /// Inclusive lower timestamp bound, ISO format
    pub from: Option<String>,
    /// Inclusive upper timestamp bound, ISO format
    pub to: Option<String>,
}

/// Stores transactions and derives balances and summaries
///
/// The Ledger keeps every accepted transaction in an in-memory list in
/// creation order. Balances and summaries are recomputed from the full
/// list on each call; nothing is cached or indexed.
pub struct Ledger {
    /// Accepted transactions in creation order
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create a new Ledger with no transactions
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Validate and store a new transaction
    ///
    /// Runs the full request validation and rejects the request with all
    /// collected failures if any rule is broken. On success the stored
    /// transaction carries a fresh ID, the currency normalized to
    /// uppercase, the provided timestamp or the current time, and the
    /// provided status or `Pending`.
    ///
    /// # Arguments
    ///
    /// * `request` - The transaction to validate and store
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The stored transaction
    /// * `Err(DeskError::Validation)` - If any validation rule failed
    pub fn create(&mut self, request: CreateTransactionRequest) -> Result<Transaction, DeskError> {
        let errors = validate_transaction_request(&request);
        if !errors.is_empty() {
            return Err(DeskError::validation(errors));
        }

        let transaction = Transaction {
            id: Uuid::new_v4(),
            from_account: request.from_account,
            to_account: request.to_account,
            amount: request.amount,
            currency: request.currency.to_uppercase(),
            tx_type: request.tx_type,
            timestamp: request.timestamp.unwrap_or_else(Utc::now),
            status: request.status.unwrap_or(TransactionStatus::Pending),
        };

        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Look up a transaction by its identifier
    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// List transactions matching the given filters
    ///
    /// Filters compose with logical AND and are applied in sequence:
    /// account (matching source or destination), type, then date range
    /// with inclusive bounds. A type or date value that cannot be parsed
    /// yields an empty result. Empty filter strings are ignored.
    ///
    /// # Arguments
    ///
    /// * `query` - The filters to apply; all fields optional
    ///
    /// # Returns
    ///
    /// Matching transactions in creation order
    pub fn list(&self, query: &TransactionQuery) -> Vec<Transaction> {
        let mut result: Vec<&Transaction> = self.transactions.iter().collect();

        if let Some(account) = query.account_id.as_deref().filter(|a| !a.is_empty()) {
            result.retain(|t| {
                t.from_account.as_deref() == Some(account)
                    || t.to_account.as_deref() == Some(account)
            });
        }

        if let Some(raw) = query.tx_type.as_deref().filter(|t| !t.is_empty()) {
            match TransactionType::parse(raw) {
                Some(tx_type) => result.retain(|t| t.tx_type == tx_type),
                None => return Vec::new(),
            }
        }

        if let Some(raw) = query.from.as_deref().filter(|d| !d.is_empty()) {
            match parse_filter_timestamp(raw) {
                Some(bound) => result.retain(|t| t.timestamp >= bound),
                None => return Vec::new(),
            }
        }

        if let Some(raw) = query.to.as_deref().filter(|d| !d.is_empty()) {
            match parse_filter_timestamp(raw) {
                Some(bound) => result.retain(|t| t.timestamp <= bound),
                None => return Vec::new(),
            }
        }

        result.into_iter().cloned().collect()
    }

    /// Calculate the current balance for an account
    ///
    /// Only completed transactions count. Deposits add to the
    /// destination account, withdrawals subtract from the source
    /// account, transfers do both. An optional currency filter restricts
    /// the calculation to matching transactions (case-insensitive).
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to calculate for
    /// * `currency` - Optional currency filter (e.g. "USD")
    ///
    /// # Returns
    ///
    /// The balance rounded to 2 decimal places (can be negative)
    pub fn balance(&self, account_id: &str, currency: Option<&str>) -> Decimal {
        let currency_filter = currency.filter(|c| !c.is_empty()).map(str::to_uppercase);
        let mut balance = Decimal::ZERO;

        for transaction in &self.transactions {
            if let Some(code) = &currency_filter {
                if &transaction.currency != code {
                    continue;
                }
            }

            // Pending and failed transactions do not move funds
            if transaction.status != TransactionStatus::Completed {
                continue;
            }

            match transaction.tx_type {
                TransactionType::Deposit => {
                    if transaction.to_account.as_deref() == Some(account_id) {
                        balance += transaction.amount;
                    }
                }
                TransactionType::Withdrawal => {
                    if transaction.from_account.as_deref() == Some(account_id) {
                        balance -= transaction.amount;
                    }
                }
                TransactionType::Transfer => {
                    if transaction.from_account.as_deref() == Some(account_id) {
                        balance -= transaction.amount;
                    }
                    if transaction.to_account.as_deref() == Some(account_id) {
                        balance += transaction.amount;
                    }
                }
            }
        }

        balance.round_dp(2)
    }

    /// Build a balance report for an account
    ///
    /// The reported currency is the uppercased filter when one was
    /// given, or "ALL" when the balance spans every currency.
    pub fn balance_report(&self, account_id: &str, currency: Option<&str>) -> BalanceReport {
        let balance = self.balance(account_id, currency);
        let currency = currency
            .filter(|c| !c.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| "ALL".to_string());

        BalanceReport {
            account_id: account_id.to_string(),
            balance,
            currency,
        }
    }

    /// Generate an activity summary for an account
    ///
    /// The transaction count and most recent timestamp cover every
    /// transaction involving the account regardless of status; the
    /// deposit and withdrawal totals only cover completed transactions.
    /// Transfers count as a deposit for the destination and a withdrawal
    /// for the source, so a transfer from an account to itself raises
    /// both totals.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to summarize
    ///
    /// # Returns
    ///
    /// Summary with totals rounded to 2 decimal places
    pub fn summary(&self, account_id: &str) -> AccountSummary {
        let mut total_deposits = Decimal::ZERO;
        let mut total_withdrawals = Decimal::ZERO;
        let mut transaction_count = 0;
        let mut most_recent: Option<DateTime<Utc>> = None;

        for transaction in &self.transactions {
            let is_source = transaction.from_account.as_deref() == Some(account_id);
            let is_destination = transaction.to_account.as_deref() == Some(account_id);
            if !is_source && !is_destination {
                continue;
            }

            transaction_count += 1;

            if most_recent.map_or(true, |seen| transaction.timestamp > seen) {
                most_recent = Some(transaction.timestamp);
            }

            // Only completed transactions contribute to the totals
            if transaction.status != TransactionStatus::Completed {
                continue;
            }

            if is_destination
                && matches!(
                    transaction.tx_type,
                    TransactionType::Deposit | TransactionType::Transfer
                )
            {
                total_deposits += transaction.amount;
            }

            if is_source
                && matches!(
                    transaction.tx_type,
                    TransactionType::Withdrawal | TransactionType::Transfer
                )
            {
                total_withdrawals += transaction.amount;
            }
        }

        AccountSummary {
            account_id: account_id.to_string(),
            total_deposits: total_deposits.round_dp(2),
            total_withdrawals: total_withdrawals.round_dp(2),
            transaction_count,
            most_recent_transaction: most_recent,
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a filter timestamp from its accepted ISO forms
///
/// Accepts RFC 3339 (offset or Z suffix), a naive datetime with `T` or
/// space separator and optional fractional seconds, or a bare date
/// which is taken as midnight. Naive values are interpreted as UTC.
fn parse_filter_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
