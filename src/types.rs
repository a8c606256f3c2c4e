//! Core audit event types
//!
//! All types use camelCase JSON serialization for wire compatibility
//! with the collector API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operator-assigned importance tier of an audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Routine activity (e.g., a successful login)
    Low,
    /// Notable activity (e.g., a deal approval)
    Medium,
    /// Security-relevant activity (e.g., suspicious behavior)
    High,
    /// Incident-grade activity (e.g., confirmed unauthorized access)
    Critical,
}

impl Severity {
    /// All severity tiers, lowest first
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
}

/// Result classification of the action an audit event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The action completed
    Success,
    /// The action was rejected or errored
    Failure,
    /// The action is awaiting completion (e.g., payment in flight)
    Pending,
}

impl Outcome {
    /// All outcome classifications
    pub const ALL: [Outcome; 3] = [Outcome::Success, Outcome::Failure, Outcome::Pending];
}

/// An immutable record of a security- or business-relevant action
///
/// Events are created through [`AuditLedger::record`](crate::AuditLedger::record),
/// which assigns `id` and `timestamp` exactly once. No update or delete
/// operation exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Unique event identifier (audit-<uuid>)
    pub id: String,

    /// Actor reference — opaque string, no referential integrity enforced
    pub user_id: String,

    /// Dot-separated action identifier (e.g., "deal.approve")
    ///
    /// Drawn from the [`actions`](crate::actions) taxonomy by convention,
    /// though unknown values are accepted.
    pub action: String,

    /// Object type the action targets (e.g., "deal", "document")
    pub resource: String,

    /// Optional identifier of the targeted object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Event-specific metadata — arbitrary JSON object
    #[serde(default = "empty_details")]
    pub details: serde_json::Value,

    /// Client address, "unknown" when unavailable
    pub ip_address: String,

    /// Client user agent, "unknown" when unavailable
    pub user_agent: String,

    /// Creation time, set exactly once at record time
    pub timestamp: DateTime<Utc>,

    /// Operator-assigned importance tier
    pub severity: Severity,

    /// Result classification
    pub outcome: Outcome,
}

fn empty_details() -> serde_json::Value {
    serde_json::json!({})
}

/// Input for recording an audit event — every field of [`AuditEvent`]
/// except `id` and `timestamp`, which the ledger assigns
///
/// Defaults: `details` = `{}`, `ip_address`/`user_agent` = `"unknown"`,
/// `severity` = `Low`, `outcome` = `Success`.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub user_id: String,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<String>,
    pub details: serde_json::Value,
    pub ip_address: String,
    pub user_agent: String,
    pub severity: Severity,
    pub outcome: Outcome,
}

impl EventDraft {
    /// Create a draft with default context fields
    pub fn new(
        user_id: impl Into<String>,
        action: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            action: action.into(),
            resource: resource.into(),
            resource_id: None,
            details: empty_details(),
            ip_address: "unknown".to_string(),
            user_agent: "unknown".to_string(),
            severity: Severity::Low,
            outcome: Outcome::Success,
        }
    }

    /// Set the targeted object identifier
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Replace the details object wholesale
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a single entry to the details object
    ///
    /// If the current details value is not an object it is replaced
    /// with one first.
    pub fn with_detail(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        if !self.details.is_object() {
            self.details = empty_details();
        }
        if let serde_json::Value::Object(ref mut map) = self.details {
            map.insert(key.into(), value.into());
        }
        self
    }

    /// Set the client address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = ip_address.into();
        self
    }

    /// Set the client user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the severity tier
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the outcome classification
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Seal the draft into an event, assigning a fresh id and timestamp
    ///
    /// The id is a v4 UUID — uniqueness does not depend on the timestamp,
    /// so two events sealed within the same millisecond still get
    /// distinct ids.
    pub(crate) fn into_event(self) -> AuditEvent {
        AuditEvent {
            id: format!("audit-{}", uuid::Uuid::new_v4()),
            user_id: self.user_id,
            action: self.action,
            resource: self.resource,
            resource_id: self.resource_id,
            details: self.details,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            timestamp: Utc::now(),
            severity: self.severity,
            outcome: self.outcome,
        }
    }
}

/// Aggregate counts over the retained event window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatistics {
    /// Number of retained events
    pub total_events: u64,

    /// Counts per severity tier
    pub events_by_severity: HashMap<Severity, u64>,

    /// Counts per action identifier
    pub events_by_action: HashMap<String, u64>,

    /// Counts per outcome classification
    pub events_by_outcome: HashMap<Outcome, u64>,

    /// Events recorded within the trailing 24 hours
    pub recent_activity: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = EventDraft::new("user-1", "user.login", "user");
        assert_eq!(draft.user_id, "user-1");
        assert_eq!(draft.action, "user.login");
        assert_eq!(draft.resource, "user");
        assert!(draft.resource_id.is_none());
        assert_eq!(draft.details, serde_json::json!({}));
        assert_eq!(draft.ip_address, "unknown");
        assert_eq!(draft.user_agent, "unknown");
        assert_eq!(draft.severity, Severity::Low);
        assert_eq!(draft.outcome, Outcome::Success);
    }

    #[test]
    fn test_draft_builders() {
        let draft = EventDraft::new("user-2", "deal.approve", "deal")
            .with_resource_id("deal-77")
            .with_detail("amount", 250_000)
            .with_detail("reviewer", "admin-1")
            .with_ip_address("10.0.0.5")
            .with_user_agent("Mozilla/5.0")
            .with_severity(Severity::Medium)
            .with_outcome(Outcome::Pending);

        assert_eq!(draft.resource_id.as_deref(), Some("deal-77"));
        assert_eq!(draft.details["amount"], 250_000);
        assert_eq!(draft.details["reviewer"], "admin-1");
        assert_eq!(draft.ip_address, "10.0.0.5");
        assert_eq!(draft.severity, Severity::Medium);
        assert_eq!(draft.outcome, Outcome::Pending);
    }

    #[test]
    fn test_with_detail_replaces_non_object() {
        let draft = EventDraft::new("u", "a", "r")
            .with_details(serde_json::json!("free text"))
            .with_detail("key", "value");
        assert_eq!(draft.details["key"], "value");
    }

    #[test]
    fn test_into_event_assigns_id_and_timestamp() {
        let before = Utc::now();
        let event = EventDraft::new("user-1", "user.login", "user").into_event();
        let after = Utc::now();

        assert!(event.id.starts_with("audit-"));
        assert!(event.timestamp >= before && event.timestamp <= after);
        assert_eq!(event.user_id, "user-1");
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let a = EventDraft::new("u", "a", "r").into_event();
        let b = EventDraft::new("u", "a", "r").into_event();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_event_serialization_camel_case() {
        let event = EventDraft::new("user-1", "deal.create", "deal")
            .with_resource_id("deal-1")
            .into_event();

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"userId\":\"user-1\""));
        assert!(json.contains("\"resourceId\":\"deal-1\""));
        assert!(json.contains("\"ipAddress\":\"unknown\""));
        assert!(json.contains("\"severity\":\"low\""));
        assert!(json.contains("\"outcome\":\"success\""));

        let parsed: AuditEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, event.id);
        assert_eq!(parsed.timestamp, event.timestamp);
    }

    #[test]
    fn test_missing_resource_id_skipped() {
        let event = EventDraft::new("user-1", "user.login", "user").into_event();
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("resourceId"));
    }

    #[test]
    fn test_severity_outcome_roundtrip() {
        for severity in Severity::ALL {
            let json = serde_json::to_string(&severity).unwrap();
            let parsed: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, severity);
        }
        for outcome in Outcome::ALL {
            let json = serde_json::to_string(&outcome).unwrap();
            let parsed: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, outcome);
        }
    }

    #[test]
    fn test_unknown_severity_rejected() {
        let result: std::result::Result<Severity, _> = serde_json::from_str("\"urgent\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_statistics_serialization() {
        let mut stats = LedgerStatistics::default();
        stats.total_events = 3;
        stats.events_by_severity.insert(Severity::Low, 2);
        stats.events_by_outcome.insert(Outcome::Failure, 1);
        stats.events_by_action.insert("user.login".to_string(), 2);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"totalEvents\":3"));
        assert!(json.contains("\"low\":2"));
        assert!(json.contains("\"failure\":1"));

        let parsed: LedgerStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.events_by_action["user.login"], 2);
    }
}
