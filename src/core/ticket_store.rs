//! Ticket store module
//!
//! This module provides the `TicketStore` struct which holds support
//! tickets in-memory and offers the full record lifecycle: create, look
//! up, filter, partially update, delete, and aggregate statistics.
//!
//! Storage is a plain vector scanned linearly; tickets keep their
//! creation order. The store trusts the payloads it receives, record
//! validation happens in the validation layer before anything reaches
//! this module.

use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::types::{
    CreateTicketRequest, Ticket, TicketCategory, TicketPriority, TicketStats, TicketStatus,
    UpdateTicketRequest,
};

/// Optional filters for listing tickets
///
/// Values arrive as raw strings from the query layer. A value that does
/// not name a known enum variant yields an empty result rather than an
/// error. Filters compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    /// Match tickets with this category
    pub category: Option<String>,
    /// Match tickets with this priority
    pub priority: Option<String>,
    /// Match tickets with this status
    pub status: Option<String>,
}

/// Holds support tickets and their lifecycle operations
pub struct TicketStore {
    /// Stored tickets in creation order
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Create a new TicketStore with no tickets
    pub fn new() -> Self {
        TicketStore {
            tickets: Vec::new(),
        }
    }

    /// Store a new ticket
    ///
    /// Assigns a fresh ID, stamps creation and update times with the
    /// current time, and starts the ticket in the `new` status with no
    /// assignee.
    ///
    /// # Arguments
    ///
    /// * `request` - The already-validated ticket payload
    ///
    /// # Returns
    ///
    /// The stored ticket
    pub fn create(&mut self, request: CreateTicketRequest) -> Ticket {
        let now = Utc::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            subject: request.subject,
            description: request.description,
            customer_id: request.customer_id,
            customer_email: request.customer_email,
            customer_name: request.customer_name,
            category: request.category,
            priority: request.priority,
            tags: request.tags,
            metadata: request.metadata,
            status: TicketStatus::New,
            created_at: now,
            updated_at: now,
            resolved_at: None,
            assigned_to: None,
        };

        self.tickets.push(ticket.clone());
        ticket
    }

    /// Look up a ticket by its identifier
    pub fn get(&self, id: Uuid) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// List tickets matching the given filters
    ///
    /// Filters are applied in sequence: category, priority, status. A
    /// filter value naming no known variant yields an empty result;
    /// empty filter strings are ignored.
    ///
    /// # Arguments
    ///
    /// * `query` - The filters to apply; all fields optional
    ///
    /// # Returns
    ///
    /// Matching tickets in creation order
    pub fn list(&self, query: &TicketQuery) -> Vec<Ticket> {
        let mut result: Vec<&Ticket> = self.tickets.iter().collect();

        if let Some(raw) = query.category.as_deref().filter(|c| !c.is_empty()) {
            match TicketCategory::parse(raw) {
                Some(category) => result.retain(|t| t.category == category),
                None => return Vec::new(),
            }
        }

        if let Some(raw) = query.priority.as_deref().filter(|p| !p.is_empty()) {
            match TicketPriority::parse(raw) {
                Some(priority) => result.retain(|t| t.priority == priority),
                None => return Vec::new(),
            }
        }

        if let Some(raw) = query.status.as_deref().filter(|s| !s.is_empty()) {
            match TicketStatus::parse(raw) {
                Some(status) => result.retain(|t| t.status == status),
                None => return Vec::new(),
            }
        }

        result.into_iter().cloned().collect()
    }

    /// Apply a partial update to a ticket
    ///
    /// Only the fields present in the request are written; everything
    /// else keeps its stored value. The update timestamp is always
    /// refreshed, even by an empty patch. When the patch moves the
    /// status to `resolved` and no resolution time is recorded yet, the
    /// resolution time is set; it is never cleared afterwards.
    ///
    /// # Arguments
    ///
    /// * `id` - The ticket to update
    /// * `request` - The fields to change
    ///
    /// # Returns
    ///
    /// The updated ticket, or `None` if the ID is unknown
    pub fn update(&mut self, id: Uuid, request: UpdateTicketRequest) -> Option<Ticket> {
        let ticket = self.tickets.iter_mut().find(|t| t.id == id)?;
        let now = Utc::now();

        if let Some(subject) = request.subject {
            ticket.subject = subject;
        }
        if let Some(description) = request.description {
            ticket.description = description;
        }
        if let Some(category) = request.category {
            ticket.category = category;
        }
        if let Some(priority) = request.priority {
            ticket.priority = priority;
        }
        if let Some(status) = request.status {
            ticket.status = status;
        }
        if let Some(tags) = request.tags {
            ticket.tags = tags;
        }
        if let Some(assigned_to) = request.assigned_to {
            ticket.assigned_to = Some(assigned_to);
        }

        ticket.updated_at = now;

        if request.status == Some(TicketStatus::Resolved) && ticket.resolved_at.is_none() {
            ticket.resolved_at = Some(now);
        }

        Some(ticket.clone())
    }

    /// Delete a ticket by its identifier
    ///
    /// # Returns
    ///
    /// `true` if a ticket was removed, `false` if the ID is unknown
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        self.tickets.len() < before
    }

    /// Aggregate ticket counts by category, priority, and status
    ///
    /// Every enum variant gets a bucket in declaration order, including
    /// zero-valued ones.
    pub fn stats(&self) -> TicketStats {
        let mut by_category: BTreeMap<TicketCategory, usize> =
            TicketCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut by_priority: BTreeMap<TicketPriority, usize> =
            TicketPriority::ALL.into_iter().map(|p| (p, 0)).collect();
        let mut by_status: BTreeMap<TicketStatus, usize> =
            TicketStatus::ALL.into_iter().map(|s| (s, 0)).collect();

        for ticket in &self.tickets {
            *by_category.entry(ticket.category).or_insert(0) += 1;
            *by_priority.entry(ticket.priority).or_insert(0) += 1;
            *by_status.entry(ticket.status).or_insert(0) += 1;
        }

        TicketStats {
            total: self.tickets.len(),
            by_category,
            by_priority,
            by_status,
        }
    }

    /// Iterate over all stored tickets in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    /// Number of stored tickets
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the store holds no tickets
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SourceMetadata, TicketSource};
    use rstest::rstest;

    fn request(subject: &str) -> CreateTicketRequest {
        CreateTicketRequest {
            subject: subject.to_string(),
            description: "A description long enough to pass validation.".to_string(),
            customer_id: "CUST-001".to_string(),
            customer_email: "user@example.com".to_string(),
            customer_name: "User One".to_string(),
            category: TicketCategory::Other,
            priority: TicketPriority::default(),
            tags: vec![],
            metadata: SourceMetadata {
                source: TicketSource::Api,
                browser: None,
                device_type: None,
            },
        }
    }

    #[test]
    fn test_create_assigns_id_status_and_timestamps() {
        let mut store = TicketStore::new();

        let ticket = store.create(request("Login problem"));

        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.created_at, ticket.updated_at);
        assert!(ticket.resolved_at.is_none());
        assert!(ticket.assigned_to.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_round_trips_created_ticket() {
        let mut store = TicketStore::new();
        let created = store.create(request("Login problem"));

        let fetched = store.get(created.id).unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.subject, "Login problem");
    }

    #[test]
    fn test_get_returns_none_for_unknown_id() {
        let store = TicketStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_list_without_filters_keeps_creation_order() {
        let mut store = TicketStore::new();
        store.create(request("first"));
        store.create(request("second"));
        store.create(request("third"));

        let listed = store.list(&TicketQuery::default());

        let subjects: Vec<&str> = listed.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_list_filters_compose_with_and() {
        let mut store = TicketStore::new();
        let mut billing = request("billing");
        billing.category = TicketCategory::BillingQuestion;
        billing.priority = TicketPriority::High;
        store.create(billing);

        let mut other_billing = request("other billing");
        other_billing.category = TicketCategory::BillingQuestion;
        store.create(other_billing);

        let query = TicketQuery {
            category: Some("billing_question".to_string()),
            priority: Some("high".to_string()),
            status: None,
        };

        let listed = store.list(&query);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].subject, "billing");
    }

    #[rstest]
    #[case(TicketQuery { category: Some("nonsense".to_string()), ..TicketQuery::default() })]
    #[case(TicketQuery { priority: Some("asap".to_string()), ..TicketQuery::default() })]
    #[case(TicketQuery { status: Some("done".to_string()), ..TicketQuery::default() })]
    fn test_list_unknown_filter_value_yields_empty_result(#[case] query: TicketQuery) {
        let mut store = TicketStore::new();
        store.create(request("present"));

        assert!(store.list(&query).is_empty());
    }

    #[test]
    fn test_update_changes_only_provided_fields() {
        let mut store = TicketStore::new();
        let created = store.create(request("original subject"));

        let patch = UpdateTicketRequest {
            subject: Some("new subject".to_string()),
            priority: Some(TicketPriority::Urgent),
            ..UpdateTicketRequest::default()
        };
        let updated = store.update(created.id, patch).unwrap();

        assert_eq!(updated.subject, "new subject");
        assert_eq!(updated.priority, TicketPriority::Urgent);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.status, TicketStatus::New);
    }

    #[test]
    fn test_update_always_refreshes_updated_at() {
        let mut store = TicketStore::new();
        let created = store.create(request("subject"));

        let updated = store
            .update(created.id, UpdateTicketRequest::default())
            .unwrap();

        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let mut store = TicketStore::new();
        assert!(store
            .update(Uuid::new_v4(), UpdateTicketRequest::default())
            .is_none());
    }

    #[test]
    fn test_resolved_at_is_set_once_and_kept() {
        let mut store = TicketStore::new();
        let created = store.create(request("subject"));

        let resolve = UpdateTicketRequest {
            status: Some(TicketStatus::Resolved),
            ..UpdateTicketRequest::default()
        };
        let first = store.update(created.id, resolve.clone()).unwrap();
        let resolved_at = first.resolved_at.unwrap();

        // Resolving again keeps the original resolution time
        let second = store.update(created.id, resolve).unwrap();
        assert_eq!(second.resolved_at, Some(resolved_at));

        // Reopening does not clear it either
        let reopen = UpdateTicketRequest {
            status: Some(TicketStatus::InProgress),
            ..UpdateTicketRequest::default()
        };
        let third = store.update(created.id, reopen).unwrap();
        assert_eq!(third.resolved_at, Some(resolved_at));
        assert_eq!(third.status, TicketStatus::InProgress);
    }

    #[test]
    fn test_delete_removes_ticket_and_reports_outcome() {
        let mut store = TicketStore::new();
        let created = store.create(request("subject"));

        assert!(store.delete(created.id));
        assert!(store.is_empty());
        // Second delete finds nothing
        assert!(!store.delete(created.id));
    }

    #[test]
    fn test_stats_includes_zero_buckets() {
        let store = TicketStore::new();

        let stats = store.stats();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_category.len(), 6);
        assert_eq!(stats.by_priority.len(), 4);
        assert_eq!(stats.by_status.len(), 5);
        assert!(stats.by_category.values().all(|&count| count == 0));
    }

    #[test]
    fn test_stats_counts_by_category_priority_and_status() {
        let mut store = TicketStore::new();
        let mut bug = request("bug");
        bug.category = TicketCategory::BugReport;
        bug.priority = TicketPriority::High;
        store.create(bug);
        let created = store.create(request("other"));
        store.update(
            created.id,
            UpdateTicketRequest {
                status: Some(TicketStatus::Resolved),
                ..UpdateTicketRequest::default()
            },
        );

        let stats = store.stats();

        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_category[&TicketCategory::BugReport], 1);
        assert_eq!(stats.by_category[&TicketCategory::Other], 1);
        assert_eq!(stats.by_category[&TicketCategory::AccountAccess], 0);
        assert_eq!(stats.by_priority[&TicketPriority::High], 1);
        assert_eq!(stats.by_priority[&TicketPriority::Medium], 1);
        assert_eq!(stats.by_status[&TicketStatus::New], 1);
        assert_eq!(stats.by_status[&TicketStatus::Resolved], 1);
    }
}
