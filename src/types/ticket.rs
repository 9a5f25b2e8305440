//! Ticket-related types for the support-desk service
//!
//! Defines the stored ticket record, its create/update payloads, the
//! classification result produced by the keyword engine, and the
//! aggregate statistics shape.
//!
//! Enum variant order matters in two places: the "Must be one of: ..."
//! validation messages list values in declaration order, and the
//! statistics maps iterate buckets in the same order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Support categories a ticket can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    /// Login, credentials, and account-lockout problems
    AccountAccess,
    /// Errors, crashes, and performance problems
    TechnicalIssue,
    /// Invoices, charges, refunds, and subscriptions
    BillingQuestion,
    /// Requests for new or improved functionality
    FeatureRequest,
    /// Defects with reproduction details
    BugReport,
    /// Anything that fits nowhere else (also the no-match fallback)
    Other,
}

impl TicketCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 6] = [
        Self::AccountAccess,
        Self::TechnicalIssue,
        Self::BillingQuestion,
        Self::FeatureRequest,
        Self::BugReport,
        Self::Other,
    ];

    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountAccess => "account_access",
            Self::TechnicalIssue => "technical_issue",
            Self::BillingQuestion => "billing_question",
            Self::FeatureRequest => "feature_request",
            Self::BugReport => "bug_report",
            Self::Other => "other",
        }
    }

    /// Parse a wire name; `None` when the value is not a category
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Comma-joined wire names, used in validation messages
    pub fn valid_values() -> String {
        Self::ALL.map(|c| c.as_str()).join(", ")
    }
}

/// Ticket urgency levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl TicketPriority {
    /// Every priority, in declaration order
    pub const ALL: [Self; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    /// Wire name of the priority
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parse a wire name; `None` when the value is not a priority
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    /// Comma-joined wire names, used in validation messages
    pub fn valid_values() -> String {
        Self::ALL.map(|p| p.as_str()).join(", ")
    }
}

impl Default for TicketPriority {
    /// Tickets without an explicit priority are filed as medium
    fn default() -> Self {
        Self::Medium
    }
}

/// Workflow states of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Every status, in declaration order
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::InProgress,
        Self::WaitingCustomer,
        Self::Resolved,
        Self::Closed,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::WaitingCustomer => "waiting_customer",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Parse a wire name; `None` when the value is not a status
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Channels a ticket can arrive through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketSource {
    WebForm,
    Email,
    Api,
    Chat,
    Phone,
}

impl TicketSource {
    /// Every source, in declaration order
    pub const ALL: [Self; 5] = [
        Self::WebForm,
        Self::Email,
        Self::Api,
        Self::Chat,
        Self::Phone,
    ];

    /// Wire name of the source
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebForm => "web_form",
            Self::Email => "email",
            Self::Api => "api",
            Self::Chat => "chat",
            Self::Phone => "phone",
        }
    }

    /// Parse a wire name; `None` when the value is not a source
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Comma-joined wire names, used in validation messages
    pub fn valid_values() -> String {
        Self::ALL.map(|s| s.as_str()).join(", ")
    }
}

/// Submission-channel details attached to every ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Channel the ticket arrived through
    pub source: TicketSource,

    /// Browser reported by the submitter, when known
    #[serde(default)]
    pub browser: Option<String>,

    /// One of "desktop", "mobile", or "tablet", when known
    #[serde(default)]
    pub device_type: Option<String>,
}

/// A stored support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, assigned on creation
    pub id: Uuid,

    /// Short summary, 1 to 200 characters
    pub subject: String,

    /// Full problem description, 10 to 2000 characters
    pub description: String,

    /// Identifier of the customer who filed the ticket
    pub customer_id: String,

    /// Contact email, validated against the email grammar
    pub customer_email: String,

    /// Display name of the customer
    pub customer_name: String,

    /// Current category (may be overwritten by classification)
    pub category: TicketCategory,

    /// Current priority (may be overwritten by classification)
    pub priority: TicketPriority,

    /// Free-text labels; every entry is non-blank
    pub tags: Vec<String>,

    /// Submission-channel details
    pub metadata: SourceMetadata,

    /// Workflow state; starts at `new`
    pub status: TicketStatus,

    /// Creation time, assigned on creation
    pub created_at: DateTime<Utc>,

    /// Last mutation time; refreshed by every update
    pub updated_at: DateTime<Utc>,

    /// Set once, the first time status transitions to resolved
    pub resolved_at: Option<DateTime<Utc>>,

    /// Agent the ticket is assigned to, if any
    pub assigned_to: Option<String>,
}

/// Create-request payload for a ticket
///
/// The store trusts this shape; callers run record validation beforehand,
/// as the import pipeline does via
/// [`validate_ticket_record`](crate::validate::validate_ticket_record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub description: String,
    pub customer_id: String,
    pub customer_email: String,
    pub customer_name: String,
    pub category: TicketCategory,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub tags: Vec<String>,
    pub metadata: SourceMetadata,
}

/// Partial-update payload for a ticket
///
/// Absent fields leave the stored value untouched. Only the mutable
/// subset of the ticket is patchable; customer identity is fixed at
/// creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    pub tags: Option<Vec<String>>,
    pub assigned_to: Option<String>,
}

/// Outcome of classifying one ticket
///
/// Ephemeral: computed per call and never stored unless explicitly
/// applied back onto the ticket.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Ticket the suggestion is for
    pub ticket_id: Uuid,

    /// Category the keyword scan settled on
    pub suggested_category: TicketCategory,

    /// Priority the keyword scan settled on
    pub suggested_priority: TicketPriority,

    /// Score in [0, 1]; 0.3 is the no-match floor
    pub confidence: f64,

    /// Two-sentence explanation naming the matched keywords
    pub reasoning: String,

    /// Category matches followed by priority matches
    pub keywords_found: Vec<String>,
}

/// Aggregate counts over the ticket store
///
/// Every enum variant gets a bucket, zero-valued buckets included, so
/// consumers can rely on a fixed shape.
#[derive(Debug, Clone, Serialize)]
pub struct TicketStats {
    /// Number of stored tickets
    pub total: usize,

    /// Ticket count per category
    pub by_category: BTreeMap<TicketCategory, usize>,

    /// Ticket count per priority
    pub by_priority: BTreeMap<TicketPriority, usize>,

    /// Ticket count per status
    pub by_status: BTreeMap<TicketStatus, usize>,
}
