//! Delivery sink trait — the abstraction for external event delivery
//!
//! Each recorded event is forwarded to every configured sink by the
//! background [`Dispatcher`](crate::Dispatcher). Sink failures are
//! logged and counted, never surfaced to `record` callers.

use crate::error::Result;
use crate::types::AuditEvent;
use async_trait::async_trait;

pub mod http;
pub mod memory;

pub use http::HttpSink;
pub use memory::MemorySink;

/// Trait for outbound audit event delivery
///
/// At-most-once, best-effort semantics: a sink gets one `deliver` call
/// per event with no retry on failure.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Sink name for logs and metrics (e.g., "http", "memory")
    fn name(&self) -> &str;

    /// Deliver one event to the external system
    async fn deliver(&self, event: &AuditEvent) -> Result<()>;
}
