//! The audit ledger — bounded in-memory record of audit events
//!
//! `AuditLedger` owns a ring buffer of recent events and answers
//! filtered queries over it. Recording appends locally, emits the event
//! to the tracing sink, and hands it to the delivery dispatcher without
//! awaiting the outcome. Construct one ledger at application start and
//! share it via `Arc`.

use crate::config::LedgerConfig;
use crate::dispatch::Dispatcher;
use crate::metrics::DeliveryMetrics;
use crate::sink::DeliverySink;
use crate::types::{AuditEvent, EventDraft, LedgerStatistics, Severity};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Default truncation limit for query results
pub const DEFAULT_QUERY_LIMIT: usize = 100;

struct LedgerState {
    events: VecDeque<AuditEvent>,
    total_recorded: u64,
}

/// Bounded, queryable audit event ledger
///
/// Events are immutable once appended; insertion order is preserved in
/// the backing buffer and queries re-sort by timestamp descending.
/// Oldest events are evicted once `capacity` is reached.
pub struct AuditLedger {
    inner: RwLock<LedgerState>,
    dispatcher: Option<Dispatcher>,
    capacity: usize,
}

impl AuditLedger {
    /// Create a ledger with no delivery sinks
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            inner: RwLock::new(LedgerState {
                events: VecDeque::with_capacity(config.capacity.min(1_024)),
                total_recorded: 0,
            }),
            dispatcher: None,
            capacity: config.capacity.max(1),
        }
    }

    /// Create a ledger that forwards each event to the given sinks
    ///
    /// Spawns the delivery worker, so this must be called within a
    /// tokio runtime.
    pub fn with_sinks(config: LedgerConfig, sinks: Vec<Arc<dyn DeliverySink>>) -> Self {
        let dispatcher = Dispatcher::new(config.queue_capacity, sinks);
        Self {
            dispatcher: Some(dispatcher),
            ..Self::new(config)
        }
    }

    /// Maximum number of retained events
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Delivery counters, when sinks are configured
    pub fn delivery_metrics(&self) -> Option<&DeliveryMetrics> {
        self.dispatcher.as_ref().map(|d| d.metrics())
    }

    /// Record an audit event
    ///
    /// Assigns a fresh id and timestamp, appends to the buffer (evicting
    /// the oldest event when full), emits the record to the tracing sink,
    /// and queues it for external delivery without awaiting the result.
    /// Cannot fail from the caller's perspective; returns the stored event.
    pub async fn record(&self, draft: EventDraft) -> AuditEvent {
        let event = draft.into_event();

        tracing::info!(
            event_id = %event.id,
            user_id = %event.user_id,
            action = %event.action,
            resource = %event.resource,
            severity = ?event.severity,
            outcome = ?event.outcome,
            "Audit event recorded"
        );

        {
            let mut state = self.inner.write().await;
            if state.events.len() >= self.capacity {
                state.events.pop_front();
            }
            state.events.push_back(event.clone());
            state.total_recorded += 1;
        }

        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(event.clone());
        }

        event
    }

    /// Events for an exact `user_id` match, newest first
    pub async fn events_for_user(&self, user_id: &str, limit: usize) -> Vec<AuditEvent> {
        self.query(limit, |e| e.user_id == user_id).await
    }

    /// Events for an exact `resource` match, optionally narrowed to one
    /// `resource_id`, newest first
    pub async fn events_for_resource(
        &self,
        resource: &str,
        resource_id: Option<&str>,
        limit: usize,
    ) -> Vec<AuditEvent> {
        self.query(limit, |e| {
            e.resource == resource
                && resource_id.is_none_or(|id| e.resource_id.as_deref() == Some(id))
        })
        .await
    }

    /// Events at an exact severity tier, newest first
    pub async fn events_by_severity(&self, severity: Severity, limit: usize) -> Vec<AuditEvent> {
        self.query(limit, |e| e.severity == severity).await
    }

    /// Events with `start <= timestamp <= end`, newest first
    pub async fn events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: usize,
    ) -> Vec<AuditEvent> {
        self.query(limit, |e| e.timestamp >= start && e.timestamp <= end)
            .await
    }

    /// Case-insensitive substring search over `action`, `resource`, and
    /// the serialized `details`, newest first
    pub async fn search(&self, query: &str, limit: usize) -> Vec<AuditEvent> {
        let needle = query.to_lowercase();
        self.query(limit, |e| {
            e.action.to_lowercase().contains(&needle)
                || e.resource.to_lowercase().contains(&needle)
                || e.details.to_string().to_lowercase().contains(&needle)
        })
        .await
    }

    /// Most recent events regardless of filter
    pub async fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        self.query(limit, |_| true).await
    }

    /// Aggregate counts over the retained window
    pub async fn statistics(&self) -> LedgerStatistics {
        let state = self.inner.read().await;
        let day_ago = Utc::now() - Duration::hours(24);
        let mut stats = LedgerStatistics::default();

        for event in &state.events {
            stats.total_events += 1;
            *stats.events_by_severity.entry(event.severity).or_insert(0) += 1;
            *stats
                .events_by_action
                .entry(event.action.clone())
                .or_insert(0) += 1;
            *stats.events_by_outcome.entry(event.outcome).or_insert(0) += 1;
            if event.timestamp >= day_ago {
                stats.recent_activity += 1;
            }
        }

        stats
    }

    /// Number of events currently retained
    pub async fn len(&self) -> usize {
        self.inner.read().await.events.len()
    }

    /// Whether the buffer is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.events.is_empty()
    }

    /// Lifetime count of recorded events, including evicted ones
    pub async fn total_recorded(&self) -> u64 {
        self.inner.read().await.total_recorded
    }

    /// Drop all retained events (the lifetime count is kept)
    pub async fn clear(&self) {
        self.inner.write().await.events.clear();
    }

    /// Scan newest-inserted-first, keep matches, re-sort by timestamp
    /// descending, truncate. The stable sort over the reversed scan makes
    /// same-timestamp ordering deterministic (newest inserted first).
    async fn query<F>(&self, limit: usize, predicate: F) -> Vec<AuditEvent>
    where
        F: Fn(&AuditEvent) -> bool,
    {
        let state = self.inner.read().await;
        let mut matches: Vec<AuditEvent> = state
            .events
            .iter()
            .rev()
            .filter(|e| predicate(e))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matches.truncate(limit);
        matches
    }
}
