//! Validation layer for both service cores
//!
//! Field validators take a raw value and return acceptance or a specific
//! message; record validators run every applicable field validator and
//! collect all failures into a `Vec<FieldError>` rather than stopping at
//! the first. All functions are pure (no I/O, no logging) for easy
//! testing.
//!
//! Two record shapes are validated here:
//! - [`validate_transaction_request`] checks a typed
//!   [`CreateTransactionRequest`] before the ledger stores it.
//! - [`validate_ticket_record`] checks the canonical loose row shape
//!   (a JSON object) the import pipeline produces for every format.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::types::{
    CreateTransactionRequest, FieldError, TicketCategory, TicketPriority, TicketSource,
    TransactionType,
};

/// Currency codes accepted by the ledger (common ISO 4217 subset)
pub const VALID_CURRENCIES: [&str; 48] = [
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "NZD", "CNY", "INR", "BRL", "RUB", "ZAR",
    "KRW", "SGD", "HKD", "SEK", "NOK", "DKK", "PLN", "THB", "MYR", "IDR", "PHP", "MXN", "ARS",
    "CLP", "COP", "PEN", "TRY", "SAR", "AED", "ILS", "EGP", "NGN", "KES", "GHS", "MAD", "PKR",
    "BDT", "VND", "CZK", "HUF", "RON", "ISK", "HRK", "BGN", "UAH",
];

/// Fields a ticket row must carry with a non-null value
const REQUIRED_TICKET_FIELDS: [&str; 7] = [
    "subject",
    "description",
    "customer_id",
    "customer_email",
    "customer_name",
    "category",
    "metadata",
];

lazy_static! {
    /// Account identifier pattern: literal prefix, hyphen, five
    /// uppercase-alphanumeric characters
    static ref ACCOUNT_REGEX: Regex = Regex::new(r"^ACC-[A-Z0-9]{5}$").unwrap();

    /// RFC 5322 compliant email regex (simplified)
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// Validate a transaction amount
///
/// Rules: strictly positive, at most two fractional digits.
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount <= Decimal::ZERO {
        return Err("Amount must be a positive number".to_string());
    }
    if amount.round_dp(2) != amount {
        return Err("Amount must have maximum 2 decimal places".to_string());
    }
    Ok(())
}

/// Validate an account identifier against the ACC-XXXXX pattern
pub fn validate_account_code(account: &str) -> Result<(), String> {
    if ACCOUNT_REGEX.is_match(account) {
        Ok(())
    } else {
        Err("Account must match pattern ACC-XXXXX (5 alphanumeric characters)".to_string())
    }
}

/// Validate a currency code and normalize it to uppercase
///
/// Matching is case-insensitive; the error echoes the input as received.
pub fn normalize_currency(code: &str) -> Result<String, String> {
    let upper = code.to_uppercase();
    if VALID_CURRENCIES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(format!(
            "Currency must be a valid ISO 4217 code. Received: {code}"
        ))
    }
}

/// Validate an email address
///
/// Rules: non-empty, at most 254 characters (RFC 5321), and matching the
/// simplified RFC 5322 grammar.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if email.chars().count() > 254 {
        return Err("Email address too long (max 254 characters)".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a ticket subject (1 to 200 characters)
pub fn validate_subject(subject: &str) -> Result<(), String> {
    if subject.is_empty() {
        return Err("Subject is required".to_string());
    }
    if subject.chars().count() > 200 {
        return Err("Subject must not exceed 200 characters".to_string());
    }
    Ok(())
}

/// Validate a ticket description (10 to 2000 characters)
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.is_empty() {
        return Err("Description is required".to_string());
    }
    let length = description.chars().count();
    if length < 10 {
        return Err("Description must be at least 10 characters".to_string());
    }
    if length > 2000 {
        return Err("Description must not exceed 2000 characters".to_string());
    }
    Ok(())
}

/// Validate a device type against its closed three-value set
pub fn validate_device_type(device_type: &str) -> Result<(), String> {
    match device_type {
        "desktop" | "mobile" | "tablet" => Ok(()),
        _ => Err("device_type must be 'desktop', 'mobile', or 'tablet'".to_string()),
    }
}

/// Validate a create-transaction request, collecting every failure
///
/// Field rules (account formats, amount, currency) all run and report
/// together. The per-type counterpart rules only run once the field
/// rules are clean, so a request with a malformed account never also
/// complains about a missing counterpart.
pub fn validate_transaction_request(request: &CreateTransactionRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(account) = &request.from_account {
        if let Err(message) = validate_account_code(account) {
            errors.push(FieldError::new("fromAccount", message));
        }
    }
    if let Some(account) = &request.to_account {
        if let Err(message) = validate_account_code(account) {
            errors.push(FieldError::new("toAccount", message));
        }
    }
    if let Err(message) = validate_amount(request.amount) {
        errors.push(FieldError::new("amount", message));
    }
    if let Err(message) = normalize_currency(&request.currency) {
        errors.push(FieldError::new("currency", message));
    }

    if errors.is_empty() {
        match request.tx_type {
            TransactionType::Deposit => {
                if missing(&request.to_account) {
                    errors.push(FieldError::new("type", "Deposit transactions require toAccount"));
                }
            }
            TransactionType::Withdrawal => {
                if missing(&request.from_account) {
                    errors.push(FieldError::new(
                        "type",
                        "Withdrawal transactions require fromAccount",
                    ));
                }
            }
            TransactionType::Transfer => {
                if missing(&request.from_account) || missing(&request.to_account) {
                    errors.push(FieldError::new(
                        "type",
                        "Transfer transactions require both fromAccount and toAccount",
                    ));
                }
            }
        }
    }

    errors
}

/// Validate a canonical ticket row, collecting every failure
///
/// Check order matches the service this backs: one presence pass over
/// the required fields, then per-field rules gated on key presence.
/// Subject, description, email, category, and metadata run their field
/// rule even when the value is null and then report twice (once from the
/// presence pass, once from the rule); priority and tags are skipped
/// when null. customer_id and customer_name have no rule beyond
/// presence, so empty strings pass.
pub fn validate_ticket_record(record: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for field in REQUIRED_TICKET_FIELDS {
        if record.get(field).map_or(true, Value::is_null) {
            errors.push(FieldError::new(field, format!("{field} is required")));
        }
    }

    if let Some(value) = record.get("subject") {
        if let Err(message) = check_subject(value) {
            errors.push(FieldError::new("subject", message));
        }
    }
    if let Some(value) = record.get("description") {
        if let Err(message) = check_description(value) {
            errors.push(FieldError::new("description", message));
        }
    }
    if let Some(value) = record.get("customer_email") {
        if let Err(message) = check_email(value) {
            errors.push(FieldError::new("customer_email", message));
        }
    }
    if let Some(value) = record.get("category") {
        if let Err(message) = check_category(value) {
            errors.push(FieldError::new("category", message));
        }
    }
    if let Some(value) = record.get("priority") {
        if !value.is_null() {
            if let Err(message) = check_priority(value) {
                errors.push(FieldError::new("priority", message));
            }
        }
    }
    if let Some(value) = record.get("tags") {
        if !value.is_null() {
            if let Err(message) = check_tags(value) {
                errors.push(FieldError::new("tags", message));
            }
        }
    }
    if let Some(value) = record.get("metadata") {
        if let Err(message) = check_metadata(value) {
            errors.push(FieldError::new("metadata", message));
        }
    }

    errors
}

fn missing(account: &Option<String>) -> bool {
    account.as_deref().map_or(true, str::is_empty)
}

fn check_subject(value: &Value) -> Result<(), String> {
    match value {
        Value::Null => Err("Subject is required".to_string()),
        Value::String(subject) => validate_subject(subject),
        _ => Err("Subject must be a string".to_string()),
    }
}

fn check_description(value: &Value) -> Result<(), String> {
    match value {
        Value::Null => Err("Description is required".to_string()),
        Value::String(description) => validate_description(description),
        _ => Err("Description must be a string".to_string()),
    }
}

fn check_email(value: &Value) -> Result<(), String> {
    match value {
        Value::Null => Err("Email is required".to_string()),
        Value::String(email) => validate_email(email),
        _ => Err("Email must be a string".to_string()),
    }
}

fn check_category(value: &Value) -> Result<(), String> {
    let known = value
        .as_str()
        .map_or(false, |s| TicketCategory::parse(s).is_some());
    if known {
        Ok(())
    } else {
        Err(format!(
            "Invalid category. Must be one of: {}",
            TicketCategory::valid_values()
        ))
    }
}

fn check_priority(value: &Value) -> Result<(), String> {
    let known = value
        .as_str()
        .map_or(false, |s| TicketPriority::parse(s).is_some());
    if known {
        Ok(())
    } else {
        Err(format!(
            "Invalid priority. Must be one of: {}",
            TicketPriority::valid_values()
        ))
    }
}

fn check_tags(value: &Value) -> Result<(), String> {
    let Value::Array(tags) = value else {
        return Err("Tags must be an array".to_string());
    };
    for (index, tag) in tags.iter().enumerate() {
        let Value::String(tag) = tag else {
            return Err(format!("Tag at index {index} must be a string"));
        };
        if tag.trim().is_empty() {
            return Err(format!("Tag at index {index} cannot be empty"));
        }
    }
    Ok(())
}

fn check_metadata(value: &Value) -> Result<(), String> {
    let Value::Object(metadata) = value else {
        return Err("Metadata must be an object".to_string());
    };
    let Some(source) = metadata.get("source") else {
        return Err("Metadata must include 'source' field".to_string());
    };
    let known_source = source
        .as_str()
        .map_or(false, |s| TicketSource::parse(s).is_some());
    if !known_source {
        return Err(format!(
            "Invalid source. Must be one of: {}",
            TicketSource::valid_values()
        ));
    }
    if let Some(device_type) = metadata.get("device_type") {
        if !device_type.is_null() {
            let valid = device_type
                .as_str()
                .map_or(false, |d| validate_device_type(d).is_ok());
            if !valid {
                return Err("device_type must be 'desktop', 'mobile', or 'tablet'".to_string());
            }
        }
    }
    Ok(())
}
