//! Keyword classification engine
//!
//! This module suggests a category and priority for a ticket by scanning
//! its subject and description for known keywords. Classification is
//! deterministic and pure: the same ticket text always produces the same
//! suggestion, and nothing is stored unless a caller explicitly applies
//! a result back onto the ticket.
//!
//! Disambiguation when several categories match:
//! 1. Bug reports win outright when a reproduction marker is present
//! 2. Otherwise the category with the most keyword matches wins
//! 3. Ties go to the category declared first in the keyword table
//! 4. Confidence drops by 0.1 per additional matching category

use uuid::Uuid;

use crate::core::TicketStore;
use crate::types::{
    ClassificationResult, Ticket, TicketCategory, TicketPriority, UpdateTicketRequest,
};

/// Category keyword table, in disambiguation tie-break order
const CATEGORY_KEYWORDS: [(TicketCategory, &[&str]); 5] = [
    (
        TicketCategory::AccountAccess,
        &[
            "login",
            "password",
            "access denied",
            "locked out",
            "sign in",
            "authentication",
            "2fa",
            "two-factor",
            "can't log in",
            "reset password",
            "forgot password",
            "account locked",
            "credentials",
        ],
    ),
    (
        TicketCategory::BillingQuestion,
        &[
            "invoice",
            "payment",
            "charge",
            "refund",
            "subscription",
            "price",
            "billing",
            "cost",
            "fee",
            "paid",
            "credit card",
            "receipt",
            "transaction",
        ],
    ),
    (
        TicketCategory::FeatureRequest,
        &[
            "feature",
            "suggestion",
            "would be nice",
            "improve",
            "enhancement",
            "wish list",
            "add",
            "could you",
            "please add",
            "request",
            "new feature",
        ],
    ),
    (
        TicketCategory::BugReport,
        &[
            "bug",
            "defect",
            "reproduce",
            "steps to reproduce",
            "unexpected behavior",
            "incorrect result",
            "regression",
            "broken",
            "not working as expected",
            "should work",
            "supposed to",
        ],
    ),
    (
        TicketCategory::TechnicalIssue,
        &[
            "error",
            "crash",
            "not working",
            "broken",
            "failed",
            "timeout",
            "slow",
            "unresponsive",
            "loading",
            "performance",
            "doesn't work",
            "won't start",
            "stopped working",
        ],
    ),
];

/// Priority keyword table, checked top to bottom, first hit wins
const PRIORITY_KEYWORDS: [(TicketPriority, &[&str]); 3] = [
    (
        TicketPriority::Urgent,
        &[
            "can't access",
            "critical",
            "production down",
            "security",
            "emergency",
            "data loss",
            "urgent",
            "immediately",
            "asap",
            "right now",
            "down",
            "outage",
            "breach",
        ],
    ),
    (
        TicketPriority::High,
        &[
            "important",
            "blocking",
            "asap",
            "urgent need",
            "high priority",
            "can't work",
            "blocker",
            "soon",
            "quickly",
        ],
    ),
    (
        TicketPriority::Low,
        &[
            "minor",
            "cosmetic",
            "suggestion",
            "nice to have",
            "when you get a chance",
            "low priority",
            "whenever",
            "not urgent",
            "eventually",
        ],
    ),
];

/// Markers that make an ambiguous match a bug report
const REPRODUCTION_MARKERS: [&str; 4] = [
    "reproduce",
    "steps to reproduce",
    "regression",
    "unexpected behavior",
];

/// Analyze a ticket and suggest a category and priority
///
/// The suggestion covers the subject and description text only; stored
/// category, priority, and tags play no part. The returned result
/// carries a confidence score in [0.3, 1.0], a two-sentence reasoning
/// string naming up to three matched keywords per suggestion, and the
/// full list of matched keywords (category matches first).
pub fn classify(ticket: &Ticket) -> ClassificationResult {
    let combined = format!("{} {}", ticket.subject, ticket.description).to_lowercase();

    let (category, confidence, category_keywords) = classify_category(&combined);
    let (priority, priority_keywords) = classify_priority(&combined);

    let category_reason = if category_keywords.is_empty() {
        format!(
            "No specific keywords found, defaulting to '{}'",
            category.as_str()
        )
    } else {
        format!(
            "Category '{}' suggested based on keywords: {}",
            category.as_str(),
            join_first(&category_keywords, 3)
        )
    };
    let priority_reason = if priority_keywords.is_empty() {
        format!(
            "No priority keywords found, defaulting to '{}'",
            priority.as_str()
        )
    } else {
        format!(
            "Priority '{}' suggested based on keywords: {}",
            priority.as_str(),
            join_first(&priority_keywords, 3)
        )
    };

    let mut keywords_found = category_keywords;
    keywords_found.extend(priority_keywords);

    ClassificationResult {
        ticket_id: ticket.id,
        suggested_category: category,
        suggested_priority: priority,
        confidence,
        reasoning: format!("{category_reason}. {priority_reason}"),
        keywords_found,
    }
}

/// Classify every ticket in the store, in creation order
pub fn classify_all(store: &TicketStore) -> Vec<ClassificationResult> {
    store.iter().map(classify).collect()
}

/// Write a classification result back onto its ticket
///
/// Updates the ticket's category and priority through the store's
/// normal update path (so the update timestamp is refreshed).
///
/// # Returns
///
/// `true` if the ticket was updated, `false` if the ID is unknown
pub fn apply_classification(
    store: &mut TicketStore,
    ticket_id: Uuid,
    result: &ClassificationResult,
) -> bool {
    let update = UpdateTicketRequest {
        category: Some(result.suggested_category),
        priority: Some(result.suggested_priority),
        ..UpdateTicketRequest::default()
    };
    store.update(ticket_id, update).is_some()
}

/// Pick the category suggestion for lowercased ticket text
fn classify_category(text: &str) -> (TicketCategory, f64, Vec<String>) {
    let mut matches: Vec<(TicketCategory, Vec<String>)> = Vec::new();
    for (category, keywords) in CATEGORY_KEYWORDS {
        let found = find_keywords(text, keywords);
        if !found.is_empty() {
            matches.push((category, found));
        }
    }

    if matches.is_empty() {
        return (TicketCategory::Other, 0.3, Vec::new());
    }

    if matches.len() == 1 {
        let (category, found) = matches.swap_remove(0);
        let confidence = (0.6 + found.len() as f64 * 0.1).min(1.0);
        return (category, confidence, found);
    }

    // Reproduction language trumps keyword counts
    if REPRODUCTION_MARKERS.iter().any(|marker| text.contains(marker)) {
        if let Some((_, found)) = matches
            .iter()
            .find(|(category, _)| *category == TicketCategory::BugReport)
        {
            return (TicketCategory::BugReport, 0.8, found.clone());
        }
    }

    // Most matches wins; the stable sort keeps table order on ties
    let competing = matches.len();
    matches.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    let (category, found) = matches.swap_remove(0);

    let mut confidence = (0.6 + found.len() as f64 * 0.1).min(1.0);
    confidence -= (competing - 1) as f64 * 0.1;
    confidence = confidence.max(0.3);

    (category, confidence, found)
}

/// Pick the priority suggestion for lowercased ticket text
fn classify_priority(text: &str) -> (TicketPriority, Vec<String>) {
    for (priority, keywords) in PRIORITY_KEYWORDS {
        let found = find_keywords(text, keywords);
        if !found.is_empty() {
            return (priority, found);
        }
    }
    (TicketPriority::Medium, Vec::new())
}

/// Collect the keywords appearing in the text, in table order
fn find_keywords(text: &str, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Join up to `limit` keywords with ", "
fn join_first(keywords: &[String], limit: usize) -> String {
    keywords
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
