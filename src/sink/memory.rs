//! In-memory sink for development and testing
//!
//! Collects delivered events in a `Vec` so tests can assert on what
//! reached the delivery path.

use crate::error::Result;
use crate::sink::DeliverySink;
use crate::types::AuditEvent;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Sink that stores delivered events in memory
#[derive(Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<AuditEvent>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events delivered so far, in delivery order
    pub async fn delivered(&self) -> Vec<AuditEvent> {
        self.delivered.lock().await.clone()
    }

    /// Number of events delivered so far
    pub async fn count(&self) -> usize {
        self.delivered.lock().await.len()
    }

    /// Drop all collected events
    pub async fn clear(&self) {
        self.delivered.lock().await.clear();
    }
}

#[async_trait]
impl DeliverySink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, event: &AuditEvent) -> Result<()> {
        self.delivered.lock().await.push(event.clone());
        Ok(())
    }
}
