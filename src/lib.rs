//! # brickfund-audit
//!
//! In-process audit event ledger for the Brickfund lending marketplace.
//!
//! ## Overview
//!
//! `brickfund-audit` records immutable, security- and business-relevant
//! events (logins, deal approvals, payments, …), retains a bounded recent
//! window in memory, answers filtered queries over it, and forwards each
//! event to pluggable delivery sinks through a bounded background queue.
//!
//! ## Quick Start
//!
//! ```rust
//! use brickfund_audit::{actions, AuditLedger, EventDraft, LedgerConfig, Severity};
//!
//! # async fn example() {
//! // Construct one ledger at application start and share it via Arc
//! let ledger = AuditLedger::new(LedgerConfig::default());
//!
//! let event = ledger
//!     .record(
//!         EventDraft::new("user-17", actions::DEAL_APPROVE, "deal")
//!             .with_resource_id("deal-204")
//!             .with_detail("amount", 350_000)
//!             .with_severity(Severity::Medium),
//!     )
//!     .await;
//!
//! println!("Recorded: {}", event.id);
//!
//! let recent = ledger.events_for_user("user-17", 100).await;
//! assert_eq!(recent[0].id, event.id);
//! # }
//! ```
//!
//! ## Sinks
//!
//! - **http** — one JSON POST per event to a collector endpoint
//! - **memory** — in-memory sink for development and testing
//!
//! ## Architecture
//!
//! - **AuditLedger** — bounded ring buffer with query and statistics API
//! - **DeliverySink** trait — outbound delivery abstraction
//! - **Dispatcher** — bounded queue + worker; failures are logged and
//!   counted, never surfaced to recording callers
//! - **AuditEvent** — immutable event record, camelCase on the wire

pub mod actions;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod sink;
pub mod types;

// Re-export core types
pub use config::{HttpSinkConfig, LedgerConfig};
pub use dispatch::Dispatcher;
pub use error::{AuditError, Result};
pub use ledger::{AuditLedger, DEFAULT_QUERY_LIMIT};
pub use metrics::{DeliveryMetrics, MetricsSnapshot};
pub use sink::{DeliverySink, HttpSink, MemorySink};
pub use types::{AuditEvent, EventDraft, LedgerStatistics, Outcome, Severity};
